use crate::layout::{NodeFacts, RadialLayout, RadialNode};
use crate::taxonomy::NodeId;

pub const LEAF_HIT_RADIUS: f64 = 9.0;
pub const BRANCH_HIT_RADIUS: f64 = 14.0;

pub fn hit_radius(facts: &NodeFacts) -> f64 {
    if facts.has_children {
        BRANCH_HIT_RADIUS
    } else {
        LEAF_HIT_RADIUS
    }
}

/// Linear scan over the placed nodes; the first node in traversal order
/// whose hit circle covers the pointer wins. Overlapping circles are never
/// re-ranked by distance.
///
/// `pointer` is in layout space relative to the radial center; `scale` is
/// the current screen scale, so the hit radius stays constant in screen
/// pixels.
pub fn hit_node<'a>(
    layout: &'a RadialLayout,
    pointer: (f64, f64),
    scale: f64,
) -> Option<&'a RadialNode> {
    let scale = scale.max(f64::EPSILON);
    layout.nodes.iter().find(|node| {
        let dx = node.x - pointer.0;
        let dy = node.y - pointer.1;
        let reach = hit_radius(&node.facts) / scale;
        (dx * dx + dy * dy).sqrt() <= reach
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Toggle(NodeId),
    Navigate(String),
    Select(NodeId),
}

/// Click semantics shared by both views: a branch click toggles its
/// collapse state unless the modifier asks for its reference; a leaf with a
/// reference always surfaces it. The caller performs the actual navigation.
pub fn click_outcome(facts: &NodeFacts, modifier_held: bool) -> ClickOutcome {
    if facts.has_children {
        if modifier_held && let Some(url) = &facts.url {
            return ClickOutcome::Navigate(url.clone());
        }
        if modifier_held {
            return ClickOutcome::Select(facts.id.clone());
        }
        ClickOutcome::Toggle(facts.id.clone())
    } else if let Some(url) = &facts.url {
        ClickOutcome::Navigate(url.clone())
    } else {
        ClickOutcome::Select(facts.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testutil::{branch, id_of, leaf, leaf_with_url, sample_tree};
    use crate::layout::{DEFAULT_RING_SPACING, layout_radial};
    use crate::taxonomy::{TaxonomyNode, address_tree};
    use crate::visibility::VisibilityState;

    #[test]
    fn pointer_on_a_node_position_hits_that_node() {
        let root = sample_tree();
        let layout = layout_radial(&root, &VisibilityState::new(), DEFAULT_RING_SPACING);

        for expected in &layout.nodes {
            let hit = hit_node(&layout, (expected.x, expected.y), 1.0).unwrap();
            // An earlier node in traversal order may legitimately cover the
            // same point; otherwise the node itself must come back.
            if hit.facts.id != expected.facts.id {
                let earlier = layout
                    .nodes
                    .iter()
                    .position(|node| node.facts.id == hit.facts.id)
                    .unwrap();
                let own = layout
                    .nodes
                    .iter()
                    .position(|node| node.facts.id == expected.facts.id)
                    .unwrap();
                assert!(earlier < own);
            }
        }
    }

    #[test]
    fn far_away_pointer_hits_nothing() {
        let root = sample_tree();
        let layout = layout_radial(&root, &VisibilityState::new(), DEFAULT_RING_SPACING);
        assert!(hit_node(&layout, (1.0e6, 1.0e6), 1.0).is_none());
    }

    #[test]
    fn first_match_in_traversal_order_wins_over_a_nearer_node() {
        let root = sample_tree();
        // Rings this tight make every hit circle overlap the origin region.
        let layout = layout_radial(&root, &VisibilityState::new(), 1.0);

        let second = &layout.nodes[1];
        let hit = hit_node(&layout, (second.x, second.y), 1.0).unwrap();
        assert_eq!(hit.facts.id, layout.nodes[0].facts.id);
    }

    #[test]
    fn branches_have_the_larger_hit_radius() {
        let root = sample_tree();
        let layout = layout_radial(&root, &VisibilityState::new(), DEFAULT_RING_SPACING);

        let a = layout.nodes.iter().find(|n| n.facts.label == "A").unwrap();
        let d = layout.nodes.iter().find(|n| n.facts.label == "D").unwrap();
        assert_eq!(hit_radius(&a.facts), BRANCH_HIT_RADIUS);
        assert_eq!(hit_radius(&d.facts), LEAF_HIT_RADIUS);

        // Just outside the leaf radius but inside the branch radius.
        let offset = (LEAF_HIT_RADIUS + BRANCH_HIT_RADIUS) * 0.5;
        assert!(hit_node(&layout, (a.x + offset, a.y), 1.0).is_some_and(|hit| {
            hit.facts.id == a.facts.id
        }));
        assert!(
            hit_node(&layout, (d.x, d.y + offset), 1.0)
                .is_none_or(|hit| hit.facts.id != d.facts.id)
        );
    }

    #[test]
    fn hit_radius_shrinks_in_layout_space_as_zoom_grows() {
        let root = sample_tree();
        let layout = layout_radial(&root, &VisibilityState::new(), DEFAULT_RING_SPACING);
        let d = layout.nodes.iter().find(|n| n.facts.label == "D").unwrap();

        let near = (d.x + LEAF_HIT_RADIUS * 0.5, d.y);
        assert!(hit_node(&layout, near, 1.0).is_some());
        assert!(
            hit_node(&layout, near, 4.0).is_none_or(|hit| hit.facts.id != d.facts.id)
        );
    }

    #[test]
    fn click_semantics_cover_all_four_cases() {
        let root = address_tree(&branch(
            "root",
            vec![
                TaxonomyNode {
                    name: "linked-branch".to_owned(),
                    url: Some("https://example.org/branch".to_owned()),
                    children: vec![leaf("inner")],
                    ..TaxonomyNode::default()
                },
                leaf_with_url("linked-leaf", "https://example.org/leaf"),
                leaf("plain-leaf"),
            ],
        ));
        let visibility = VisibilityState::new();
        let layout = layout_radial(&root, &visibility, DEFAULT_RING_SPACING);
        let facts_of = |name: &str| {
            layout
                .nodes
                .iter()
                .find(|node| node.facts.label == name)
                .map(|node| node.facts.clone())
                .unwrap()
        };

        let branch_facts = facts_of("linked-branch");
        assert_eq!(
            click_outcome(&branch_facts, false),
            ClickOutcome::Toggle(id_of(&root, "linked-branch"))
        );
        assert_eq!(
            click_outcome(&branch_facts, true),
            ClickOutcome::Navigate("https://example.org/branch".to_owned())
        );

        let leaf_facts = facts_of("linked-leaf");
        assert!(leaf_facts.navigable());
        assert_eq!(
            click_outcome(&leaf_facts, false),
            ClickOutcome::Navigate("https://example.org/leaf".to_owned())
        );
        assert_eq!(
            click_outcome(&leaf_facts, true),
            ClickOutcome::Navigate("https://example.org/leaf".to_owned())
        );

        let plain_facts = facts_of("plain-leaf");
        assert_eq!(
            click_outcome(&plain_facts, false),
            ClickOutcome::Select(id_of(&root, "plain-leaf"))
        );
    }
}
