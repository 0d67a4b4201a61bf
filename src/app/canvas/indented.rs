use eframe::egui::epaint::CubicBezierShape;
use eframe::egui::{self, Align2, Color32, FontId, Rect, Response, Sense, Stroke, Ui, Vec2, vec2};

use crate::hit::click_outcome;
use crate::layout::{
    BOUNDS_PADDING, IndentedLayout, IndentedNode, ROW_HEIGHT, estimate_label_width,
};
use crate::util::display_name;
use crate::viewport::FitMode;

use super::super::ViewModel;
use super::super::render_utils::{
    CONNECTOR_COLOR, HOVERED_COLOR, LABEL_COLOR, SEARCH_MATCH_COLOR, SELECTED_COLOR, blend_color,
    dim_color, draw_background, kind_color,
};
use super::pan_delta;

fn hovered_row<'a>(layout: &'a IndentedLayout, local: Vec2) -> Option<&'a IndentedNode> {
    if local.y < 0.0 {
        return None;
    }
    let row = (local.y / ROW_HEIGHT).floor() as usize;
    layout.nodes.iter().find(|node| {
        node.row == row
            && local.x >= node.x - 0.5 * ROW_HEIGHT
            && local.x <= node.x + estimate_label_width(&node.facts.label)
    })
}

impl ViewModel {
    fn handle_indented_zoom(&mut self, ui: &Ui, rect: Rect, response: &Response) {
        if self.viewport.fit_mode() != FitMode::Manual || !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let local_before = (pointer - rect.left_top() - self.indented_pan) / self.viewport.scale();

        self.viewport.zoom_by((1.0 + (scroll * 0.0018)).clamp(0.85, 1.15));
        self.indented_pan = pointer - rect.left_top() - local_before * self.viewport.scale();
    }

    pub(in crate::app) fn draw_indented(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        let layout_width = self
            .indented_cache
            .as_ref()
            .map(|layout| layout.width)
            .unwrap_or(0.0);
        self.viewport.observe(rect.size(), layout_width);
        self.handle_indented_zoom(ui, rect, &response);
        self.indented_pan += pan_delta(&response);

        let scale = self.viewport.scale();
        draw_background(&painter, rect, self.indented_pan, scale);

        let search_matches = self.cached_search_matches();
        let selected = self.selected.clone();
        let modifier_held = ui.input(|input| input.modifiers.command);
        let pointer = response.hover_pos();
        let origin = rect.left_top() + self.indented_pan + vec2(BOUNDS_PADDING, BOUNDS_PADDING) * scale;

        let Some(layout) = self.indented_cache.as_ref() else {
            ui.label("No taxonomy layout available.");
            return;
        };

        let to_screen = |x: f32, y: f32| origin + vec2(x, y) * scale;
        let row_center = ROW_HEIGHT * 0.5;

        let hovered = pointer.and_then(|pointer| hovered_row(layout, (pointer - origin) / scale));
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        let connector_stroke = Stroke::new((1.2 * scale).clamp(0.4, 2.2), CONNECTOR_COLOR);
        for connector in &layout.connectors {
            let parent = &layout.nodes[connector.from];
            let child = &layout.nodes[connector.to];

            let start = to_screen(parent.x + 4.0, parent.y + row_center + 6.0);
            let end = to_screen(child.x - 6.0, child.y + row_center);
            let elbow = to_screen(parent.x + 4.0, child.y + row_center);
            painter.add(CubicBezierShape::from_points_stroke(
                [start, elbow, elbow, end],
                false,
                Color32::TRANSPARENT,
                connector_stroke,
            ));
        }

        let search_active = search_matches
            .as_ref()
            .is_some_and(|matches| !matches.is_empty());
        let glyph_radius = (4.2 * scale).clamp(1.6, 6.5);

        for node in &layout.nodes {
            let position = to_screen(node.x, node.y + row_center);
            let is_selected = selected.as_ref() == Some(&node.facts.id);
            let is_hovered = hovered.is_some_and(|h| h.facts.id == node.facts.id);
            let is_match = search_matches
                .as_ref()
                .is_some_and(|matches| matches.contains(&node.facts.id));

            let base_color = kind_color(node.facts.kind.as_deref());
            let color = if is_hovered {
                HOVERED_COLOR
            } else if is_selected {
                blend_color(base_color, SELECTED_COLOR, 0.75)
            } else if is_match {
                blend_color(base_color, SEARCH_MATCH_COLOR, 0.68)
            } else if search_active {
                dim_color(base_color, 0.42)
            } else {
                base_color
            };

            let radius = if node.facts.has_children {
                glyph_radius * 1.25
            } else {
                glyph_radius
            };
            painter.circle_filled(position, radius, color);
            if node.facts.collapsed {
                painter.circle_stroke(
                    position,
                    radius + 2.5,
                    Stroke::new(1.2, blend_color(color, Color32::WHITE, 0.35)),
                );
            }

            let show_label = is_hovered || is_selected || (is_match && scale > 0.35) || scale > 0.55;
            if show_label {
                let label_color = if is_selected {
                    SELECTED_COLOR
                } else if node.facts.navigable() {
                    blend_color(LABEL_COLOR, SEARCH_MATCH_COLOR, 0.35)
                } else {
                    LABEL_COLOR
                };
                painter.text(
                    position + vec2(radius + 6.0, 0.0),
                    Align2::LEFT_CENTER,
                    display_name(&node.facts.label),
                    FontId::proportional((12.0 * scale).clamp(9.0, 15.0)),
                    label_color,
                );
            }
        }

        let pending = if response.clicked_by(egui::PointerButton::Primary) {
            hovered.map(|node| click_outcome(&node.facts, modifier_held))
        } else {
            None
        };

        if let Some(outcome) = pending {
            self.apply_click_outcome(ui.ctx(), outcome);
        }
    }
}
