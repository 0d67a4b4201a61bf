use crate::taxonomy::AddressedNode;
use crate::visibility::VisibilityState;

use super::{
    BOUNDS_PADDING, COLUMN_WIDTH, Connector, NodeFacts, ROW_HEIGHT, estimate_label_width,
    node_facts,
};

#[derive(Clone, Debug, PartialEq)]
pub struct IndentedNode {
    pub facts: NodeFacts,
    pub x: f32,
    pub y: f32,
    pub row: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IndentedLayout {
    pub nodes: Vec<IndentedNode>,
    pub connectors: Vec<Connector>,
    pub width: f32,
    pub height: f32,
}

/// Pre-order placement: one row per visible node, x from depth alone. A
/// collapsed branch is emitted itself but its subtree is skipped entirely,
/// for both rows and connectors.
pub fn layout_indented(root: &AddressedNode, visibility: &VisibilityState) -> IndentedLayout {
    let mut nodes = Vec::new();
    let mut connectors = Vec::new();
    let mut row = 0usize;
    place(root, visibility, &mut nodes, &mut connectors, &mut row);

    let width = nodes
        .iter()
        .map(|node| node.x + estimate_label_width(&node.facts.label))
        .fold(0.0f32, f32::max)
        + BOUNDS_PADDING;
    let height = row as f32 * ROW_HEIGHT + BOUNDS_PADDING;

    IndentedLayout {
        nodes,
        connectors,
        width,
        height,
    }
}

fn place(
    node: &AddressedNode,
    visibility: &VisibilityState,
    nodes: &mut Vec<IndentedNode>,
    connectors: &mut Vec<Connector>,
    row: &mut usize,
) -> usize {
    let index = nodes.len();
    nodes.push(IndentedNode {
        facts: node_facts(node, visibility),
        x: node.depth as f32 * COLUMN_WIDTH,
        y: *row as f32 * ROW_HEIGHT,
        row: *row,
    });
    *row += 1;

    if !visibility.is_collapsed(&node.id) {
        for child in &node.children {
            let child_index = place(child, visibility, nodes, connectors, row);
            connectors.push(Connector {
                from: index,
                to: child_index,
            });
        }
    }

    index
}
