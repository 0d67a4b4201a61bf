use std::f64::consts::{FRAC_PI_2, TAU};

use crate::taxonomy::AddressedNode;
use crate::visibility::VisibilityState;

use super::{Connector, NodeFacts, node_facts};

const START_ANGLE: f64 = -FRAC_PI_2;

#[derive(Clone, Debug, PartialEq)]
pub struct RadialNode {
    pub facts: NodeFacts,
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub radius: f64,
    /// Angular span `[start, end)` this node's visible subtree occupies.
    pub span: (f64, f64),
    pub weight: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadialLayout {
    pub nodes: Vec<RadialNode>,
    pub connectors: Vec<Connector>,
    /// Largest occupied ring radius.
    pub extent: f64,
}

impl RadialLayout {
    /// Bounding side of the occupied disc, labels excluded.
    pub fn diameter(&self) -> f64 {
        self.extent * 2.0
    }
}

/// Count of a node plus its currently visible descendants. A collapsed
/// branch weighs 1, same as a leaf: it keeps its own slice but its hidden
/// subtree contributes nothing.
pub fn visible_weight(node: &AddressedNode, visibility: &VisibilityState) -> usize {
    if node.children.is_empty() || visibility.is_collapsed(&node.id) {
        return 1;
    }
    1 + node
        .children
        .iter()
        .map(|child| visible_weight(child, visibility))
        .sum::<usize>()
}

/// Proportional angular partition: the root spans the full circle starting
/// at twelve o'clock, each visible child gets a contiguous sub-span sized by
/// its visible weight, in source order. Positions sit at the span midpoint,
/// one ring per depth.
pub fn layout_radial(
    root: &AddressedNode,
    visibility: &VisibilityState,
    ring_spacing: f64,
) -> RadialLayout {
    let mut nodes = Vec::new();
    let mut connectors = Vec::new();
    place(
        root,
        visibility,
        START_ANGLE,
        START_ANGLE + TAU,
        ring_spacing,
        &mut nodes,
        &mut connectors,
    );

    let extent = nodes.iter().map(|node| node.radius).fold(0.0, f64::max);
    RadialLayout {
        nodes,
        connectors,
        extent,
    }
}

fn place(
    node: &AddressedNode,
    visibility: &VisibilityState,
    span_start: f64,
    span_end: f64,
    ring_spacing: f64,
    nodes: &mut Vec<RadialNode>,
    connectors: &mut Vec<Connector>,
) -> usize {
    let child_weights: Vec<usize> = node
        .children
        .iter()
        .map(|child| visible_weight(child, visibility))
        .collect();
    let hidden = node.children.is_empty() || visibility.is_collapsed(&node.id);
    let weight = if hidden {
        1
    } else {
        1 + child_weights.iter().sum::<usize>()
    };

    let mid = (span_start + span_end) * 0.5;
    let radius = node.depth as f64 * ring_spacing;
    let index = nodes.len();
    nodes.push(RadialNode {
        facts: node_facts(node, visibility),
        x: radius * mid.cos(),
        y: radius * mid.sin(),
        angle: mid,
        radius,
        span: (span_start, span_end),
        weight,
    });

    if hidden {
        return index;
    }

    let total: usize = child_weights.iter().sum();
    if total == 0 {
        // Unreachable: every child weighs at least 1. Guarded so a broken
        // tree cannot divide by zero.
        return index;
    }

    let full_span = span_end - span_start;
    let mut cursor = span_start;
    for (child, child_weight) in node.children.iter().zip(&child_weights) {
        let child_end = cursor + full_span * (*child_weight as f64 / total as f64);
        let child_index = place(
            child,
            visibility,
            cursor,
            child_end,
            ring_spacing,
            nodes,
            connectors,
        );
        connectors.push(Connector {
            from: index,
            to: child_index,
        });
        cursor = child_end;
    }

    index
}
