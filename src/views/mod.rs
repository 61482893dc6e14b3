//! Selection-driven derived views
//!
//! Given the loaded roster and a selected handle this module:
//! - parses the compound `brands`/`categories` fields (`parser`)
//! - pairs them into (brand, category) collaborations (`expand`)
//! - reads the KPI triple (`kpi`)
//! - groups collaborations per category (`aggregate`)
//! - projects every influencer on two numeric axes (`projection`)
//! - assembles everything into one `ViewBundle` (`bundle`)
//!
//! Each selection is a pure function of (dataset, handle).

pub mod aggregate;
pub mod bundle;
pub mod expand;
pub mod kpi;
pub mod parser;
pub mod projection;

pub use aggregate::{CategoryCounts, Hierarchy, HierarchyLeaf, LEAF_WEIGHT};
pub use bundle::{compute_views, ViewBundle, ViewEngine};
pub use expand::{expand, expand_record, Collaboration, Expansion};
pub use kpi::{extract_kpis, Kpis};
pub use parser::parse_field;
pub use projection::{
    build_base_projection, build_global_projection, GlobalProjection, Highlight, ProjectionPoint,
};

use thiserror::Error;

/// Errors that abort a selection event
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("No influencer with handle '{0}'")]
    SelectionNotFound(String),

    #[error("Handle '{handle}' matches {matches} influencers")]
    SelectionAmbiguous { handle: String, matches: usize },
}

impl ViewError {
    /// Stable machine-readable name of the error
    pub fn kind(&self) -> &'static str {
        match self {
            ViewError::SelectionNotFound(_) => "selection_not_found",
            ViewError::SelectionAmbiguous { .. } => "selection_ambiguous",
        }
    }
}

pub type ViewResult<T> = Result<T, ViewError>;
