//! Cleaning bot model and the waste it throws.
//!
//! Bot-local units are scaled by [`BOT_SCALE`]; local +Z is the bot's front,
//! so a `rotate_y(heading)` turns it to face its direction of travel.

use raylib::prelude::*;

use crate::components::cleaningbot::{BotState, CleaningBot};
use crate::immediate::{cuboid, rotate_x, rotate_y, scale, textured_quad, translate, with_transform};
use crate::resources::texturestore::{FACE_CLOSED, FACE_OPEN, TextureStore};

pub const BOT_SCALE: f32 = 4.0;
/// Half size of a trash cube.
pub const TRASH_HALF_EXTENT: f32 = 2.5;
/// Half size of the thrown waste block.
const WASTE_HALF_EXTENT: f32 = 1.5;

const HIP_HEIGHT: f32 = 1.0;
const HIP_SPREAD: f32 = 0.45;
const BODY_HEIGHT: f32 = 1.6;
const BODY_HALF_WIDTH: f32 = 0.9;
const BODY_HALF_DEPTH: f32 = 0.7;

const BODY_COLOR: Color = Color::new(0, 178, 0, 255);
const LEG_COLOR: Color = Color::new(0, 120, 0, 255);
const TRASH_COLOR: Color = Color::new(255, 102, 178, 255);
const WASTE_COLOR: Color = Color::new(102, 51, 0, 255);

pub fn draw_bot<D: RaylibDraw3D>(
    d: &mut D,
    bot: &CleaningBot,
    pos: Vector3,
    heading: f32,
    textures: Option<&TextureStore>,
) {
    with_transform(d, |d| {
        translate(d, pos);
        rotate_y(d, heading);
        scale(d, Vector3::new(BOT_SCALE, BOT_SCALE, BOT_SCALE));

        let swing = bot.leg_swing_degrees();
        draw_leg(d, -HIP_SPREAD, swing);
        draw_leg(d, HIP_SPREAD, -swing);

        let half_width = BODY_HALF_WIDTH * bot.fatness;
        let top = HIP_HEIGHT + BODY_HEIGHT;
        cuboid(
            d,
            BODY_COLOR,
            Vector3::new(-half_width, HIP_HEIGHT, -BODY_HALF_DEPTH),
            Vector3::new(half_width, top, BODY_HALF_DEPTH),
        );

        let face_key = if bot.mouth_open() { FACE_OPEN } else { FACE_CLOSED };
        if let Some(face) = textures.and_then(|t| t.get(face_key)) {
            let z = BODY_HALF_DEPTH + 0.01;
            let x = half_width * 0.8;
            let (y0, y1) = (HIP_HEIGHT + 0.1, top - 0.1);
            textured_quad(
                d,
                face,
                Color::WHITE,
                [
                    Vector3::new(-x, y0, z),
                    Vector3::new(x, y0, z),
                    Vector3::new(x, y1, z),
                    Vector3::new(-x, y1, z),
                ],
            );
        }

        if holds_trash_in_mouth(bot) {
            let half = TRASH_HALF_EXTENT / BOT_SCALE * 0.5;
            let center = Vector3::new(0.0, HIP_HEIGHT + 0.5, BODY_HALF_DEPTH + half);
            cuboid(
                d,
                TRASH_COLOR,
                Vector3::new(center.x - half, center.y - half, center.z - half),
                Vector3::new(center.x + half, center.y + half, center.z + half),
            );
        }
    });

    if let Some(waste) = bot.waste_position() {
        draw_block(d, WASTE_COLOR, waste, WASTE_HALF_EXTENT);
    }
}

fn draw_leg<D: RaylibDraw3D>(d: &mut D, x: f32, swing_degrees: f32) {
    with_transform(d, |d| {
        translate(d, Vector3::new(x, HIP_HEIGHT, 0.0));
        rotate_x(d, swing_degrees);
        cuboid(
            d,
            LEG_COLOR,
            Vector3::new(-0.2, -HIP_HEIGHT, -0.2),
            Vector3::new(0.2, 0.0, 0.2),
        );
    });
}

/// An uncollected trash cube resting on the ground at `pos`.
pub fn draw_trash<D: RaylibDraw3D>(d: &mut D, pos: Vector3) {
    let h = TRASH_HALF_EXTENT;
    with_transform(d, |d| {
        translate(d, pos);
        cuboid(d, TRASH_COLOR, Vector3::new(-h, 0.0, -h), Vector3::new(h, 2.0 * h, h));
    });
}

fn draw_block<D: RaylibDraw3D>(d: &mut D, tint: Color, center: Vector3, half: f32) {
    with_transform(d, |d| {
        translate(d, center);
        cuboid(d, tint, Vector3::new(-half, -half, -half), Vector3::new(half, half, half));
    });
}

/// The swallowed trash shows in the mouth until the bot throws it.
fn holds_trash_in_mouth(bot: &CleaningBot) -> bool {
    bot.carrying.is_some() && !matches!(bot.state, BotState::DumpingAnimation(_))
}
