use std::fs;

use anyhow::{Context, Result};

use super::parse::parse_taxonomy;
use super::tree::{TaxonomyTree, address_tree};

pub fn load_taxonomy(path: &str) -> Result<TaxonomyTree> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read taxonomy file {path}"))?;
    let source = parse_taxonomy(&raw)
        .with_context(|| format!("failed to parse taxonomy file {path}"))?;

    let root = address_tree(&source);
    Ok(TaxonomyTree {
        source_path: path.to_owned(),
        node_count: root.subtree_size(),
        leaf_count: root.leaf_count(),
        max_depth: root.max_depth(),
        root,
    })
}
