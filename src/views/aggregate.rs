//! Aggregate views over a record's collaborations
//!
//! Both views group the (brand, category) pairings by category and keep the
//! categories in order of first occurrence:
//! - `CategoryCounts`: category -> number of pairings (pie chart)
//! - `Hierarchy`: category -> brands in pairing order, duplicates kept, every
//!   leaf weighted 1 (treemap)

use super::expand::Collaboration;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Weight of each brand leaf in the hierarchy
pub const LEAF_WEIGHT: u64 = 1;

/// Category -> number of collaborations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCounts(IndexMap<String, usize>);

impl CategoryCounts {
    pub fn from_collaborations(collaborations: &[Collaboration]) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for collab in collaborations {
            *counts.entry(collab.category.clone()).or_insert(0) += 1;
        }
        CategoryCounts(counts)
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.0.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(category, count)| (category.as_str(), *count))
    }

    /// Sum of all counts, equal to the number of collaborations
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Category -> brands, one entry per collaboration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hierarchy(IndexMap<String, Vec<String>>);

/// A weighted treemap leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HierarchyLeaf<'a> {
    pub category: &'a str,
    pub brand: &'a str,
    pub weight: u64,
}

impl Hierarchy {
    pub fn from_collaborations(collaborations: &[Collaboration]) -> Self {
        let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
        for collab in collaborations {
            groups
                .entry(collab.category.clone())
                .or_default()
                .push(collab.brand.clone());
        }
        Hierarchy(groups)
    }

    pub fn brands(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(category, brands)| (category.as_str(), brands.as_slice()))
    }

    /// Flattened (category, brand, weight) rows in grouping order
    pub fn leaves(&self) -> impl Iterator<Item = HierarchyLeaf<'_>> {
        self.0.iter().flat_map(|(category, brands)| {
            brands.iter().map(move |brand| HierarchyLeaf {
                category,
                brand,
                weight: LEAF_WEIGHT,
            })
        })
    }

    /// Total number of brand leaves
    pub fn leaf_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Collaboration> {
        vec![
            Collaboration::new("Nike", "Sports"),
            Collaboration::new("Sephora", "Beauty"),
            Collaboration::new("Adidas", "Sports"),
            Collaboration::new("Nike", "Sports"),
        ]
    }

    #[test]
    fn test_category_counts() {
        let counts = CategoryCounts::from_collaborations(&sample());
        assert_eq!(counts.get("Sports"), Some(3));
        assert_eq!(counts.get("Beauty"), Some(1));
        assert_eq!(counts.get("Food"), None);
        assert_eq!(counts.total(), 4);

        // First-occurrence order
        let order: Vec<&str> = counts.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["Sports", "Beauty"]);
    }

    #[test]
    fn test_hierarchy_keeps_duplicates() {
        let hierarchy = Hierarchy::from_collaborations(&sample());
        assert_eq!(
            hierarchy.brands("Sports").unwrap(),
            &["Nike".to_string(), "Adidas".to_string(), "Nike".to_string()]
        );
        assert_eq!(hierarchy.brands("Beauty").unwrap(), &["Sephora".to_string()]);
        assert_eq!(hierarchy.leaf_count(), 4);
    }

    #[test]
    fn test_hierarchy_leaves_have_unit_weight() {
        let hierarchy = Hierarchy::from_collaborations(&sample());
        let leaves: Vec<HierarchyLeaf<'_>> = hierarchy.leaves().collect();
        assert_eq!(leaves.len(), 4);
        assert!(leaves.iter().all(|leaf| leaf.weight == 1));
        assert_eq!(leaves[0].category, "Sports");
        assert_eq!(leaves[3].category, "Beauty");
    }

    #[test]
    fn test_counts_match_hierarchy() {
        let collaborations = sample();
        let counts = CategoryCounts::from_collaborations(&collaborations);
        let hierarchy = Hierarchy::from_collaborations(&collaborations);
        assert_eq!(counts.total(), collaborations.len());
        assert_eq!(hierarchy.leaf_count(), collaborations.len());
        for (category, brands) in hierarchy.iter() {
            assert_eq!(counts.get(category), Some(brands.len()));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(CategoryCounts::from_collaborations(&[]).is_empty());
        assert!(Hierarchy::from_collaborations(&[]).is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let collaborations = vec![
            Collaboration::new("Nike", "Sports"),
            Collaboration::new("Adidas", "Sports"),
        ];
        let counts = serde_json::to_value(CategoryCounts::from_collaborations(&collaborations)).unwrap();
        let hierarchy = serde_json::to_value(Hierarchy::from_collaborations(&collaborations)).unwrap();
        assert_eq!(counts, serde_json::json!({ "Sports": 2 }));
        assert_eq!(hierarchy, serde_json::json!({ "Sports": ["Nike", "Adidas"] }));
    }
}
