/// Opaque node identifier, minted once during addressing and treated as a
/// plain key everywhere else.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    fn root() -> Self {
        Self("0".to_owned())
    }

    fn child(&self, ordinal: usize) -> Self {
        Self(format!("{}.{ordinal}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaxonomyNode {
    pub name: String,
    pub url: Option<String>,
    pub kind: Option<String>,
    pub children: Vec<TaxonomyNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AddressedNode {
    pub id: NodeId,
    pub depth: usize,
    pub name: String,
    pub url: Option<String>,
    pub kind: Option<String>,
    pub children: Vec<AddressedNode>,
}

/// Single pre-order pass assigning ids from traversal order, so the same
/// taxonomy always re-derives the same ids.
pub fn address_tree(root: &TaxonomyNode) -> AddressedNode {
    address_node(root, NodeId::root(), 0)
}

fn address_node(node: &TaxonomyNode, id: NodeId, depth: usize) -> AddressedNode {
    let children = node
        .children
        .iter()
        .enumerate()
        .map(|(ordinal, child)| address_node(child, id.child(ordinal), depth + 1))
        .collect();

    AddressedNode {
        id,
        depth,
        name: node.name.clone(),
        url: node.url.clone(),
        kind: node.kind.clone(),
        children,
    }
}

impl AddressedNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(AddressedNode::subtree_size)
            .sum::<usize>()
    }

    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(AddressedNode::leaf_count).sum()
        }
    }

    pub fn max_depth(&self) -> usize {
        self.children
            .iter()
            .map(AddressedNode::max_depth)
            .max()
            .unwrap_or(self.depth)
    }

    pub fn find(&self, id: &NodeId) -> Option<&AddressedNode> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Load product owned by the application root; the engine only ever reads it.
#[derive(Clone, Debug)]
pub struct TaxonomyTree {
    pub source_path: String,
    pub root: AddressedNode,
    pub node_count: usize,
    pub leaf_count: usize,
    pub max_depth: usize,
}
