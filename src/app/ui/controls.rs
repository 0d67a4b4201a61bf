use eframe::egui::{self, RichText, Ui, Vec2};

use crate::viewport::FitMode;

use super::super::{ViewMode, ViewModel};

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("View Controls");
        ui.separator();
        ui.add_space(4.0);

        ui.label("Search (node name)");
        ui.text_edit_singleline(&mut self.search)
            .on_hover_text("Fuzzy-highlight matching visible nodes without changing the layout.");

        ui.separator();
        ui.horizontal_wrapped(|ui| {
            ui.selectable_value(&mut self.mode, ViewMode::Indented, "Indented tree")
                .on_hover_text("Collapsible outline with one row per visible node.");
            ui.selectable_value(&mut self.mode, ViewMode::Radial, "Radial")
                .on_hover_text("Sunburst-style disc; arc size follows visible subtree weight.");
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Expand all").clicked() {
                self.visibility.expand_all();
                self.layout_dirty = true;
            }
            if ui.button("Collapse all").clicked() {
                self.visibility.collapse_all(&self.tree.root);
                self.layout_dirty = true;
            }
        });
        ui.label(format!(
            "collapsed branches: {}",
            self.visibility.collapsed_count()
        ));

        ui.separator();
        ui.label(RichText::new("Indented view").strong());
        let mut fit_mode = self.viewport.fit_mode();
        ui.horizontal(|ui| {
            ui.selectable_value(&mut fit_mode, FitMode::Auto, "Auto-fit")
                .on_hover_text("Derive the scale from the container width.");
            ui.selectable_value(&mut fit_mode, FitMode::Manual, "Manual zoom");
        });
        self.viewport.set_fit_mode(fit_mode);

        let manual = self.viewport.fit_mode() == FitMode::Manual;
        ui.horizontal(|ui| {
            if ui.add_enabled(manual, egui::Button::new("-")).clicked() {
                self.viewport.zoom_out();
            }
            if ui.add_enabled(manual, egui::Button::new("+")).clicked() {
                self.viewport.zoom_in();
            }
            if ui.add_enabled(manual, egui::Button::new("Reset")).clicked() {
                self.viewport.zoom_reset();
                self.indented_pan = Vec2::ZERO;
            }
            ui.label(format!("scale {:.0}%", self.viewport.scale() * 100.0));
        });
        if let Some(layout) = &self.indented_cache {
            ui.label(format!("layout {:.0} x {:.0}", layout.width, layout.height));
        }

        ui.separator();
        ui.label(RichText::new("Radial view").strong());
        if ui
            .add(egui::Slider::new(&mut self.ring_spacing, 48.0..=200.0).text("ring spacing"))
            .changed()
        {
            self.layout_dirty = true;
        }
        ui.horizontal(|ui| {
            if ui.button("Reset view").clicked() {
                self.radial_zoom = 1.0;
                self.radial_pan = Vec2::ZERO;
            }
            ui.label(format!("zoom {:.0}%", self.radial_zoom * 100.0));
        });
        if let Some(layout) = &self.radial_cache {
            ui.label(format!("disc {:.0} across", layout.diameter()));
        }

        ui.separator();
        ui.label(RichText::new("Dataset").strong());
        ui.label(format!("visible rows: {}", self.visible_rows));
        ui.label(format!(
            "hidden nodes: {}",
            self.tree.node_count.saturating_sub(self.visible_rows)
        ));
    }
}
