use eframe::egui::{self, RichText, Ui};

use crate::layout::visible_weight;
use crate::taxonomy::NodeId;
use crate::util::display_name;

use super::super::ViewModel;

struct ChildEntry {
    id: NodeId,
    name: String,
    is_branch: bool,
}

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Node Details");
        ui.add_space(6.0);

        let Some(selected_id) = self.selected.clone() else {
            ui.label("Click a node in either view to inspect it.");
            return;
        };

        let Some(node) = self.tree.root.find(&selected_id) else {
            ui.label("Selected node no longer exists in the loaded taxonomy.");
            return;
        };

        let name = display_name(&node.name).to_owned();
        let kind = node.kind.clone();
        let url = node.url.clone();
        let depth = node.depth;
        let child_count = node.children.len();
        let subtree_size = node.subtree_size();
        let weight = visible_weight(node, &self.visibility);
        let collapsed = child_count > 0 && self.visibility.is_collapsed(&selected_id);
        let children: Vec<ChildEntry> = node
            .children
            .iter()
            .map(|child| ChildEntry {
                id: child.id.clone(),
                name: display_name(&child.name).to_owned(),
                is_branch: child.has_children(),
            })
            .collect();

        ui.label(RichText::new(name).strong());
        ui.small(selected_id.as_str());
        ui.add_space(6.0);

        if let Some(kind) = &kind {
            ui.label(format!("Type: {kind}"));
        }
        ui.label(format!("Depth: {depth}"));
        ui.label(format!("Direct children: {child_count}"));
        ui.label(format!("Subtree nodes: {subtree_size}"));
        ui.label(format!("Visible weight: {weight}"));
        if collapsed {
            ui.label(format!(
                "Collapsed ({} nodes hidden)",
                subtree_size.saturating_sub(1)
            ));
        }

        if let Some(url) = &url {
            ui.hyperlink_to("Open resource", url.clone()).on_hover_text(url);
        }

        if child_count > 0 {
            ui.add_space(6.0);
            let toggle_label = if collapsed {
                "Expand branch"
            } else {
                "Collapse branch"
            };
            if ui.button(toggle_label).clicked()
                && let Some(node) = self.tree.root.find(&selected_id)
            {
                self.visibility.toggle(node);
                self.layout_dirty = true;
            }
        }

        ui.separator();
        ui.label(RichText::new("Children").strong());
        if children.is_empty() {
            ui.label("Leaf node.");
        } else {
            egui::ScrollArea::vertical()
                .id_salt("node_children_scroll")
                .max_height(360.0)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for child in &children {
                        let label = if child.is_branch {
                            format!("{}  [branch]", child.name)
                        } else {
                            child.name.clone()
                        };
                        if ui.link(label).on_hover_text(child.id.as_str()).clicked() {
                            self.set_selected(Some(child.id.clone()));
                        }
                    }
                });
        }
    }
}
