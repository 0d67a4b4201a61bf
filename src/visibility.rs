use std::collections::HashSet;

use crate::taxonomy::{AddressedNode, NodeId};

/// Set of collapsed branch ids. Empty at mount; only ever mutated by user
/// interaction, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    collapsed: HashSet<NodeId>,
}

impl VisibilityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self, id: &NodeId) -> bool {
        self.collapsed.contains(id)
    }

    /// No-op for leaves: a childless node has nothing to hide.
    pub fn toggle(&mut self, node: &AddressedNode) {
        if node.children.is_empty() {
            return;
        }
        if !self.collapsed.remove(&node.id) {
            self.collapsed.insert(node.id.clone());
        }
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    pub fn collapse_all(&mut self, root: &AddressedNode) {
        self.collapsed.clear();
        collect_branch_ids(root, &mut self.collapsed);
    }

    pub fn collapsed_count(&self) -> usize {
        self.collapsed.len()
    }
}

fn collect_branch_ids(node: &AddressedNode, out: &mut HashSet<NodeId>) {
    if node.children.is_empty() {
        return;
    }
    out.insert(node.id.clone());
    for child in &node.children {
        collect_branch_ids(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testutil::sample_tree;

    #[test]
    fn double_toggle_restores_the_original_state() {
        let root = sample_tree();
        let mut state = VisibilityState::new();
        state.toggle(&root.children[0]);
        let snapshot = state.clone();

        state.toggle(&root);
        state.toggle(&root);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn toggling_a_leaf_is_a_no_op() {
        let root = sample_tree();
        let mut state = VisibilityState::new();

        state.toggle(&root.children[1]);
        assert_eq!(state, VisibilityState::new());
        assert!(!state.is_collapsed(&root.children[1].id));
    }

    #[test]
    fn collapse_all_is_a_pure_function_of_tree_shape() {
        let root = sample_tree();

        let mut from_empty = VisibilityState::new();
        from_empty.collapse_all(&root);

        let mut from_dirty = VisibilityState::new();
        from_dirty.toggle(&root);
        from_dirty.expand_all();
        from_dirty.collapse_all(&root);

        assert_eq!(from_empty, from_dirty);
        assert_eq!(from_empty.collapsed_count(), 2);
        assert!(from_empty.is_collapsed(&root.id));
        assert!(from_empty.is_collapsed(&root.children[0].id));
        assert!(!from_empty.is_collapsed(&root.children[1].id));
    }

    #[test]
    fn expand_all_clears_everything() {
        let root = sample_tree();
        let mut state = VisibilityState::new();
        state.collapse_all(&root);

        state.expand_all();
        assert_eq!(state.collapsed_count(), 0);
    }
}
