//! Trash bots main entry point.
//!
//! A small 3D simulation of cleaning robots written in Rust using:
//! - **raylib** for windowing, textures and immediate-mode 3D drawing
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! Five bots sweep the board for trash, eat what they find, walk it back to
//! the disposal station in the middle and throw it in. The station flushes
//! itself once it fills up.
//!
//! # Main Loop
//!
//! 1. Parse the command line and load `config.ini` (defaults if missing)
//! 2. Open the raylib window and load the bot face textures
//! 3. Populate the world, register observers and build the schedule
//! 4. Run the main loop:
//!    - Poll keys and trigger their events
//!    - Tick the station, then every bot
//!    - Draw the scene and the debug overlay
//!
//! # Controls
//!
//! - `Esc` quit, `F` flush the station, `T` drop more trash, `F11` debug overlay
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42 --approach docking
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::{Parser, ValueEnum};
use raylib::prelude::*;
use std::path::PathBuf;

use trashbots::components::cleaningbot::DumpApproach;
use trashbots::game::{
    BOT_COUNT, TRASH_COUNT, register_observers, setup_world, simulation_schedule,
};
use trashbots::resources::appconfig::{AppConfig, DEFAULT_CONFIG_PATH};
use trashbots::resources::camera3d::Camera3DRes;
use trashbots::resources::input::InputState;
use trashbots::resources::quit::QuitRequested;
use trashbots::resources::texturestore::TextureStore;
use trashbots::systems::input::update_input_state;
use trashbots::systems::render::{render_debug_ui, render_pass};
use trashbots::systems::time::update_world_time;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Approach {
    /// Dump as soon as the bot is near the station.
    Direct,
    /// Back onto the docking ring and face the station before dumping.
    Docking,
}

impl From<Approach> for DumpApproach {
    fn from(approach: Approach) -> Self {
        match approach {
            Approach::Direct => DumpApproach::Direct,
            Approach::Docking => DumpApproach::Docking,
        }
    }
}

/// Cleaning robots sweeping a board for trash
#[derive(Parser)]
#[command(version, about = "Cleaning robots that collect trash and feed it to a disposal station.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seed for trash placement. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// How returning bots line up before dumping.
    #[arg(long, value_enum, default_value_t = Approach::Direct)]
    approach: Approach,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using default settings", e);
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("Trash Bots");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Esc is handled as a key binding, not by raylib
    rl.set_exit_key(None);

    let textures = match TextureStore::load_faces(&mut rl, &thread, &config.textures_dir) {
        Ok(textures) => textures,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));
    let mut world = World::new();
    setup_world(&mut world, seed, BOT_COUNT, TRASH_COUNT, cli.approach.into());
    world.insert_resource(InputState::default());
    world.insert_resource(Camera3DRes::default());
    world.insert_resource(config);
    world.insert_non_send_resource(textures);
    register_observers(&mut world);

    let mut update = simulation_schedule();
    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        update_input_state(&mut world, |key| rl.is_key_pressed(key));
        if world.contains_resource::<QuitRequested>() {
            break;
        }

        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        let cam = world.resource::<Camera3DRes>().0;
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        {
            let mut d3 = d.begin_mode3D(cam);
            render_pass(&mut world, &mut d3);
        }
        render_debug_ui(&mut world, &mut d);
    }
    log::info!("Bye");
}
