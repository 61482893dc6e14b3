//! View assembly: one atomic bundle per selection event

use super::aggregate::{CategoryCounts, Hierarchy};
use super::expand::{expand_record, Collaboration};
use super::kpi::{extract_kpis, Kpis};
use super::projection::{build_global_projection, GlobalProjection};
use super::ViewResult;
use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Every derived view for one selected influencer
///
/// All views are always present; an influencer without brands gets empty
/// `category_counts`, `hierarchy` and `collaborations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewBundle {
    pub kpis: Kpis,
    pub category_counts: CategoryCounts,
    pub hierarchy: Hierarchy,
    pub global_projection: GlobalProjection,
    /// (brand, category) pairings in source order, backing the brand bar chart
    pub collaborations: Vec<Collaboration>,
}

/// Compute the full bundle for `key` against `dataset`
///
/// A selection that matches zero or several records fails as a whole; no
/// partial bundle is produced.
pub fn compute_views(dataset: &Dataset, key: &str) -> ViewResult<ViewBundle> {
    let record = dataset.select(key)?;

    let expansion = expand_record(record);
    if expansion.is_degraded() {
        warn!(
            handle = %record.handle,
            paired = expansion.len(),
            unpaired_brands = expansion.unpaired_items,
            unpaired_categories = expansion.unpaired_groups,
            "brand/category token counts differ; truncating to the shorter list"
        );
    }

    let collaborations = expansion.collaborations;
    let bundle = ViewBundle {
        kpis: extract_kpis(record),
        category_counts: CategoryCounts::from_collaborations(&collaborations),
        hierarchy: Hierarchy::from_collaborations(&collaborations),
        global_projection: build_global_projection(dataset, record),
        collaborations,
    };

    debug!(
        handle = %record.handle,
        collaborations = bundle.collaborations.len(),
        categories = bundle.category_counts.len(),
        "computed view bundle"
    );

    Ok(bundle)
}

/// Derived-view engine over an injected, read-only dataset
///
/// Cloning is cheap and every clone shares the same dataset, so one engine
/// can serve concurrent selection requests.
#[derive(Debug, Clone)]
pub struct ViewEngine {
    dataset: Arc<Dataset>,
}

impl ViewEngine {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn compute_views(&self, key: &str) -> ViewResult<ViewBundle> {
        compute_views(&self.dataset, key)
    }
}
