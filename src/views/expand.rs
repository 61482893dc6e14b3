//! Relational expansion of paired compound fields
//!
//! A record's brand list and category list are associated by position: the
//! n-th brand was a collaboration in the n-th category. When the lists differ
//! in length the longer one is truncated to the shorter, and the number of
//! dropped tokens is reported so callers can flag the record as degraded.

use super::parser::parse_field;
use crate::dataset::InfluencerRecord;
use serde::{Deserialize, Serialize};

/// One (brand, category) pairing of a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Collaboration {
    pub brand: String,
    pub category: String,
}

impl Collaboration {
    pub fn new(brand: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            category: category.into(),
        }
    }
}

/// Result of pairing two token lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Pairings in source order, `min(items, groups)` long
    pub collaborations: Vec<Collaboration>,
    /// Items left without a group
    pub unpaired_items: usize,
    /// Groups left without an item
    pub unpaired_groups: usize,
}

impl Expansion {
    /// True when the two lists had different lengths
    pub fn is_degraded(&self) -> bool {
        self.unpaired_items > 0 || self.unpaired_groups > 0
    }

    pub fn len(&self) -> usize {
        self.collaborations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collaborations.is_empty()
    }
}

/// Pair `items` with `groups` position by position
pub fn expand(items: Vec<String>, groups: Vec<String>) -> Expansion {
    let paired = items.len().min(groups.len());
    let unpaired_items = items.len() - paired;
    let unpaired_groups = groups.len() - paired;

    let collaborations = items
        .into_iter()
        .zip(groups)
        .map(|(brand, category)| Collaboration { brand, category })
        .collect();

    Expansion {
        collaborations,
        unpaired_items,
        unpaired_groups,
    }
}

/// Parse and pair a record's `brands` and `categories` fields
pub fn expand_record(record: &InfluencerRecord) -> Expansion {
    expand(
        parse_field(record.brands.as_deref()),
        parse_field(record.categories.as_deref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_expand_equal_lengths() {
        let expansion = expand(tokens(&["Nike", "Adidas"]), tokens(&["Sports", "Sports"]));
        assert_eq!(
            expansion.collaborations,
            vec![
                Collaboration::new("Nike", "Sports"),
                Collaboration::new("Adidas", "Sports"),
            ]
        );
        assert!(!expansion.is_degraded());
    }

    #[test]
    fn test_expand_truncates_to_shorter() {
        let expansion = expand(tokens(&["x", "y", "z"]), tokens(&["g1", "g2"]));
        assert_eq!(
            expansion.collaborations,
            vec![Collaboration::new("x", "g1"), Collaboration::new("y", "g2")]
        );
        assert_eq!(expansion.unpaired_items, 1);
        assert_eq!(expansion.unpaired_groups, 0);
        assert!(expansion.is_degraded());
    }

    #[test]
    fn test_expand_more_groups_than_items() {
        let expansion = expand(tokens(&["x"]), tokens(&["g1", "g2", "g3"]));
        assert_eq!(expansion.len(), 1);
        assert_eq!(expansion.unpaired_groups, 2);
    }

    #[test]
    fn test_expand_empty_side() {
        let expansion = expand(Vec::new(), tokens(&["g1"]));
        assert!(expansion.is_empty());
        assert!(expansion.is_degraded());

        let expansion = expand(Vec::new(), Vec::new());
        assert!(expansion.is_empty());
        assert!(!expansion.is_degraded());
    }

    #[test]
    fn test_expand_record() {
        let record = InfluencerRecord::new("alice", 1, 1, 2)
            .with_brands("Nike, Adidas")
            .with_categories("Sports,Fashion");
        let expansion = expand_record(&record);
        assert_eq!(
            expansion.collaborations,
            vec![
                Collaboration::new("Nike", "Sports"),
                Collaboration::new("Adidas", "Fashion"),
            ]
        );
    }

    #[test]
    fn test_expand_record_missing_fields() {
        let record = InfluencerRecord::new("bob", 1, 1, 0);
        assert!(expand_record(&record).is_empty());
    }
}
