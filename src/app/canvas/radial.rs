use eframe::egui::{self, Align2, Color32, FontId, Rect, Response, Sense, Stroke, Ui, vec2};

use crate::hit::{click_outcome, hit_node};
use crate::util::display_name;
use crate::viewport::{MAX_SCALE, MIN_SCALE};

use super::super::ViewModel;
use super::super::render_utils::{
    CONNECTOR_COLOR, HOVERED_COLOR, LABEL_COLOR, SEARCH_MATCH_COLOR, SELECTED_COLOR, blend_color,
    dim_color, draw_background, kind_color,
};
use super::pan_delta;

impl ViewModel {
    fn handle_radial_zoom(&mut self, ui: &Ui, rect: Rect, response: &Response) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let local_before = (pointer - rect.center() - self.radial_pan) / self.radial_zoom;

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.radial_zoom = (self.radial_zoom * zoom_factor).clamp(MIN_SCALE, MAX_SCALE);
        self.radial_pan = pointer - rect.center() - local_before * self.radial_zoom;
    }

    pub(in crate::app) fn draw_radial(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        self.handle_radial_zoom(ui, rect, &response);
        self.radial_pan += pan_delta(&response);

        draw_background(&painter, rect, self.radial_pan, self.radial_zoom);

        let search_matches = self.cached_search_matches();
        let selected = self.selected.clone();
        let zoom = self.radial_zoom;
        let center = rect.center() + self.radial_pan;
        let ring_spacing = self.ring_spacing;
        let modifier_held = ui.input(|input| input.modifiers.command);
        let pointer = response.hover_pos();

        let Some(layout) = self.radial_cache.as_ref() else {
            ui.label("No taxonomy layout available.");
            return;
        };

        let to_screen =
            |x: f64, y: f64| center + vec2(x as f32, y as f32) * zoom;

        // Faint depth rings behind everything else.
        let ring_count = (layout.extent / ring_spacing).round() as usize;
        let ring_stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(70, 80, 92, 50));
        for ring in 1..=ring_count {
            painter.circle_stroke(
                center,
                (ring as f64 * ring_spacing) as f32 * zoom,
                ring_stroke,
            );
        }

        let hovered = pointer.and_then(|pointer| {
            let local = (pointer - center) / zoom;
            hit_node(layout, (local.x as f64, local.y as f64), zoom as f64)
        });
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        let zoom_sqrt = zoom.sqrt();
        let connector_stroke = Stroke::new((1.1 * zoom_sqrt).clamp(0.5, 3.0), CONNECTOR_COLOR);
        for connector in &layout.connectors {
            let parent = &layout.nodes[connector.from];
            let child = &layout.nodes[connector.to];
            painter.line_segment(
                [
                    to_screen(parent.x, parent.y),
                    to_screen(child.x, child.y),
                ],
                connector_stroke,
            );
        }

        let search_active = search_matches
            .as_ref()
            .is_some_and(|matches| !matches.is_empty());

        for node in &layout.nodes {
            let position = to_screen(node.x, node.y);
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

            let base_radius = if node.facts.has_children { 7.0 } else { 4.5 };
            let radius = (base_radius * zoom_sqrt).clamp(2.0, 18.0);
            painter.circle_filled(position, radius, color);
            painter.circle_stroke(
                position,
                radius,
                Stroke::new(1.0, Color32::from_rgba_unmultiplied(15, 15, 15, 190)),
            );
            if node.facts.collapsed {
                painter.circle_stroke(
                    position,
                    radius + 3.0,
                    Stroke::new(1.3, blend_color(color, Color32::WHITE, 0.35)),
                );
            }

            let show_label = is_hovered
                || is_selected
                || (is_match && zoom > 0.5)
                || node.facts.depth <= 1
                || zoom > 1.35;
            if show_label {
                let label_color = if is_selected {
                    SELECTED_COLOR
                } else if node.facts.navigable() {
                    blend_color(LABEL_COLOR, SEARCH_MATCH_COLOR, 0.35)
                } else {
                    LABEL_COLOR
                };
                // Labels grow outward from the disc on whichever side the
                // node sits.
                let (anchor, label_offset) = if node.facts.depth == 0 || node.angle.cos() >= 0.0 {
                    (Align2::LEFT_CENTER, vec2(radius + 5.0, 0.0))
                } else {
                    (Align2::RIGHT_CENTER, vec2(-(radius + 5.0), 0.0))
                };
                painter.text(
                    position + label_offset,
                    anchor,
                    display_name(&node.facts.label),
                    FontId::proportional(12.0),
                    label_color,
                );
            }
        }

        if let Some(node) = hovered {
            let arc_degrees = (node.span.1 - node.span.0).to_degrees();
            let summary = format!(
                "{}  |  {}  |  weight {}  |  arc {:.1}\u{b0}",
                display_name(&node.facts.label),
                node.facts.kind.as_deref().unwrap_or("untyped"),
                node.weight,
                arc_degrees
            );
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                summary,
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
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
