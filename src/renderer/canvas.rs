//! Canvas 2D drawing of the current frame
//!
//! Reads the session's observable state only. Nothing here feeds back into
//! the simulation.

use std::f64::consts::{FRAC_PI_2, TAU};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::palette::{self, shade_color};
use crate::Field;
use crate::session::Session;
use crate::sim::{Avatar, Obstacle};

/// Draw background, avatar and obstacles
pub fn draw_frame(ctx: &CanvasRenderingContext2d, session: &Session) -> Result<(), JsValue> {
    let field = session.field();
    draw_background(ctx, field)?;
    draw_avatar(ctx, session.avatar())?;
    for obstacle in session.obstacles() {
        draw_obstacle(ctx, obstacle, field)?;
    }
    Ok(())
}

fn draw_background(ctx: &CanvasRenderingContext2d, field: Field) -> Result<(), JsValue> {
    let (w, h) = (field.width as f64, field.height as f64);
    ctx.clear_rect(0.0, 0.0, w, h);

    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    gradient.add_color_stop(0.0, palette::SKY_TOP)?;
    gradient.add_color_stop(1.0, palette::SKY_BOTTOM)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, w, h);
    Ok(())
}

fn draw_avatar(ctx: &CanvasRenderingContext2d, avatar: &Avatar) -> Result<(), JsValue> {
    let x = avatar.pos.x as f64;
    let y = avatar.pos.y as f64;
    let size = avatar.size as f64;
    let (cx, cy, r) = (x + size / 2.0, y + size / 2.0, size / 2.0);

    // Body
    let gradient = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, r)?;
    gradient.add_color_stop(0.0, palette::AVATAR_CORE)?;
    gradient.add_color_stop(1.0, palette::AVATAR_RIM)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(cx, cy, r, 0.0, TAU)?;
    ctx.fill();

    // Eye
    ctx.set_fill_style_str("white");
    ctx.begin_path();
    ctx.arc(x + size * 0.6, y + size * 0.4, size * 0.15, 0.0, TAU)?;
    ctx.fill();

    ctx.set_fill_style_str("black");
    ctx.begin_path();
    ctx.arc(x + size * 0.65, y + size * 0.4, size * 0.08, 0.0, TAU)?;
    ctx.fill();

    // Beak
    ctx.set_fill_style_str(palette::BEAK);
    ctx.begin_path();
    ctx.move_to(x + size, cy);
    ctx.line_to(x + size + 10.0, cy - 5.0);
    ctx.line_to(x + size + 10.0, cy + 5.0);
    ctx.close_path();
    ctx.fill();
    Ok(())
}

fn draw_obstacle(
    ctx: &CanvasRenderingContext2d,
    obstacle: &Obstacle,
    field: Field,
) -> Result<(), JsValue> {
    let color = obstacle.obstacle_type.color;
    let shade = shade_color(color, -20.0).unwrap_or_else(|| color.to_string());

    let x = obstacle.x as f64;
    let width = obstacle.width as f64;
    let gap_y = obstacle.gap_y as f64;
    let bottom_y = obstacle.gap_bottom() as f64;
    let bottom_h = field.height as f64 - bottom_y;

    ctx.set_stroke_style_str(palette::OUTLINE);
    ctx.set_line_width(2.0);

    for (top, height) in [(0.0, gap_y), (bottom_y, bottom_h)] {
        let gradient = ctx.create_linear_gradient(x, top, x + width, top);
        gradient.add_color_stop(0.0, color)?;
        gradient.add_color_stop(1.0, &shade)?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(x, top, width, height);
        ctx.stroke_rect(x, top, width, height);
    }

    // Label runs up the top bar
    ctx.set_fill_style_str("white");
    ctx.set_font("bold 12px Arial");
    ctx.set_text_align("center");
    ctx.save();
    ctx.translate(x + width / 2.0, gap_y / 2.0)?;
    ctx.rotate(-FRAC_PI_2)?;
    ctx.fill_text(obstacle.obstacle_type.name, 0.0, 0.0)?;
    ctx.restore();
    Ok(())
}
