mod load;
mod parse;
mod tree;

pub use load::load_taxonomy;
pub use tree::{AddressedNode, NodeId, TaxonomyNode, TaxonomyTree, address_tree};
