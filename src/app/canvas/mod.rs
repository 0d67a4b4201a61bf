use std::collections::HashSet;
use std::sync::Arc;

use eframe::egui::{self, Context, OpenUrl, Response};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::hit::ClickOutcome;
use crate::layout::{layout_indented, layout_radial};
use crate::taxonomy::NodeId;

use super::{SearchMatchCache, ViewModel};

mod indented;
mod radial;

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

fn pan_delta(response: &Response) -> egui::Vec2 {
    if response.dragged_by(egui::PointerButton::Secondary)
        || response.dragged_by(egui::PointerButton::Middle)
    {
        response.drag_delta()
    } else {
        egui::Vec2::ZERO
    }
}

impl ViewModel {
    /// Both layouts are derived together from the same visibility snapshot,
    /// so a toggle and a resize landing in the same frame still produce one
    /// consistent result.
    pub(in crate::app) fn rebuild_layouts(&mut self) {
        self.layout_revision = self.layout_revision.wrapping_add(1);
        self.search_match_cache = None;

        let indented = layout_indented(&self.tree.root, &self.visibility);
        let radial = layout_radial(&self.tree.root, &self.visibility, self.ring_spacing);

        self.visible_rows = indented.nodes.len();
        self.visible_connectors = indented.connectors.len();
        self.indented_cache = Some(indented);
        self.radial_cache = Some(radial);
        self.layout_dirty = false;
    }

    pub(in crate::app) fn cached_search_matches(&mut self) -> Option<Arc<HashSet<NodeId>>> {
        let query = self.search.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(cached) = &self.search_match_cache
            && cached.layout_revision == self.layout_revision
            && cached.query == query
        {
            return Some(Arc::clone(&cached.matches));
        }

        let layout = self.indented_cache.as_ref()?;
        let matcher = SkimMatcherV2::default();
        let matches = layout
            .nodes
            .iter()
            .filter(|node| fuzzy_match_score(&matcher, &node.facts.label, query).is_some())
            .map(|node| node.facts.id.clone())
            .collect::<HashSet<_>>();
        let matches = Arc::new(matches);

        self.search_match_cache = Some(SearchMatchCache {
            query: query.to_owned(),
            layout_revision: self.layout_revision,
            matches: Arc::clone(&matches),
        });

        Some(matches)
    }

    pub(in crate::app) fn apply_click_outcome(&mut self, ctx: &Context, outcome: ClickOutcome) {
        match outcome {
            ClickOutcome::Toggle(id) => {
                if let Some(node) = self.tree.root.find(&id) {
                    self.visibility.toggle(node);
                    self.layout_dirty = true;
                }
                self.set_selected(Some(id));
            }
            ClickOutcome::Navigate(url) => {
                ctx.open_url(OpenUrl::new_tab(url));
            }
            ClickOutcome::Select(id) => {
                self.set_selected(Some(id));
            }
        }
    }
}
