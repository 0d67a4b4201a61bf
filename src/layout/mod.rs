mod indented;
mod radial;

pub use indented::{IndentedLayout, IndentedNode, layout_indented};
pub use radial::{RadialLayout, RadialNode, layout_radial, visible_weight};

use crate::taxonomy::{AddressedNode, NodeId};
use crate::visibility::VisibilityState;

pub const ROW_HEIGHT: f32 = 22.0;
pub const COLUMN_WIDTH: f32 = 26.0;
pub const BOUNDS_PADDING: f32 = 16.0;
pub const DEFAULT_RING_SPACING: f64 = 96.0;

const LABEL_CHAR_WIDTH: f32 = 7.2;
const LABEL_PADDING: f32 = 14.0;

/// Character-count heuristic, not real text metrics; long labels may still
/// clip at the right edge.
pub fn estimate_label_width(label: &str) -> f32 {
    LABEL_PADDING + label.chars().count() as f32 * LABEL_CHAR_WIDTH
}

/// Everything the render adapter needs to style a placed node without
/// consulting the tree again.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeFacts {
    pub id: NodeId,
    pub label: String,
    pub kind: Option<String>,
    pub depth: usize,
    pub has_children: bool,
    pub collapsed: bool,
    pub url: Option<String>,
}

impl NodeFacts {
    pub fn navigable(&self) -> bool {
        self.url.is_some()
    }
}

/// Parent -> child edge between two visible nodes, as indices into the
/// layout's node list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connector {
    pub from: usize,
    pub to: usize,
}

fn node_facts(node: &AddressedNode, visibility: &VisibilityState) -> NodeFacts {
    NodeFacts {
        id: node.id.clone(),
        label: node.name.clone(),
        kind: node.kind.clone(),
        depth: node.depth,
        has_children: node.has_children(),
        collapsed: node.has_children() && visibility.is_collapsed(&node.id),
        url: node.url.clone(),
    }
}
