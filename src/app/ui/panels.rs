use eframe::egui::{self, Align, Context, Layout, Vec2};

use crate::layout::DEFAULT_RING_SPACING;
use crate::taxonomy::{NodeId, TaxonomyTree};
use crate::viewport::{FitMode, Viewport};
use crate::visibility::VisibilityState;

use super::super::{ViewMode, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(tree: TaxonomyTree) -> Self {
        Self {
            tree,
            mode: ViewMode::Indented,
            visibility: VisibilityState::new(),
            viewport: Viewport::new(FitMode::Auto),
            radial_zoom: 1.0,
            radial_pan: Vec2::ZERO,
            indented_pan: Vec2::ZERO,
            ring_spacing: DEFAULT_RING_SPACING,
            selected: None,
            search: String::new(),
            layout_dirty: true,
            layout_revision: 0,
            indented_cache: None,
            radial_cache: None,
            search_match_cache: None,
            visible_rows: 0,
            visible_connectors: 0,
        }
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        taxonomy_path: &str,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        if self.layout_dirty {
            self.rebuild_layouts();
        }

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("taxoscope");
                    ui.separator();
                    ui.label(format!("source: {}", self.tree.source_path));
                    ui.label(format!("nodes: {}", self.tree.node_count));
                    ui.label(format!("leaves: {}", self.tree.leaf_count));
                    ui.label(format!("max depth: {}", self.tree.max_depth));
                    let reload_button = ui
                        .add_enabled(!is_loading, egui::Button::new("Reload taxonomy"))
                        .on_hover_text(format!("Reload from {taxonomy_path}"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(self.visible_layout_text());
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            if is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Reloading taxonomy document...");
                    ui.add_space(8.0);
                    ui.spinner();
                });
            } else {
                match self.mode {
                    ViewMode::Indented => self.draw_indented(ui),
                    ViewMode::Radial => self.draw_radial(ui),
                }
            }
        });
    }

    pub(in crate::app) fn set_selected(&mut self, selected: Option<NodeId>) {
        self.selected = selected;
    }

    fn visible_layout_text(&self) -> String {
        match self.mode {
            ViewMode::Indented => format!(
                "visible: {} rows / {} connectors",
                self.visible_rows, self.visible_connectors
            ),
            ViewMode::Radial => format!("visible: {} slices", self.visible_rows),
        }
    }
}
