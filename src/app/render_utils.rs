use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::util::stable_bucket;

const KIND_PALETTE: [Color32; 6] = [
    Color32::from_rgb(112, 170, 255),
    Color32::from_rgb(120, 205, 160),
    Color32::from_rgb(235, 170, 95),
    Color32::from_rgb(205, 130, 215),
    Color32::from_rgb(95, 205, 215),
    Color32::from_rgb(230, 140, 135),
];

pub(super) fn kind_color(kind: Option<&str>) -> Color32 {
    match kind {
        None => Color32::from_gray(150),
        Some(kind) => KIND_PALETTE[stable_bucket(kind, KIND_PALETTE.len())],
    }
}

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        (color.a() as f32 * (0.45 + (factor * 0.55))) as u8,
    )
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, pan: Vec2, scale: f32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(20, 24, 30));

    let step = (64.0 * scale.clamp(0.5, 2.0)).max(24.0);
    let origin = rect.left_top() + pan;
    let grid_stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(58, 68, 80, 60));

    let mut x = rect.left() + (origin.x - rect.left()).rem_euclid(step);
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            grid_stroke,
        );
        x += step;
    }

    let mut y = rect.top() + (origin.y - rect.top()).rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            grid_stroke,
        );
        y += step;
    }
}

pub(super) const SELECTED_COLOR: Color32 = Color32::from_rgb(245, 206, 93);
pub(super) const HOVERED_COLOR: Color32 = Color32::from_rgb(255, 164, 101);
pub(super) const SEARCH_MATCH_COLOR: Color32 = Color32::from_rgb(103, 196, 255);
pub(super) const CONNECTOR_COLOR: Color32 = Color32::from_rgb(86, 94, 104);
pub(super) const LABEL_COLOR: Color32 = Color32::from_gray(238);
