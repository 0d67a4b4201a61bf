use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "(unnamed)"
    } else {
        name
    }
}

pub fn stable_bucket(key: &str, buckets: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() % buckets.max(1) as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_substitutes_placeholder() {
        assert_eq!(display_name("Recon"), "Recon");
        assert_eq!(display_name(""), "(unnamed)");
        assert_eq!(display_name("   "), "(unnamed)");
    }

    #[test]
    fn stable_bucket_is_deterministic_and_bounded() {
        let first = stable_bucket("wordlists", 6);
        let second = stable_bucket("wordlists", 6);
        assert_eq!(first, second);
        assert!(first < 6);
        assert_eq!(stable_bucket("anything", 0), 0);
    }
}
