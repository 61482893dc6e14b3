//! Influencer Dashboard
//!
//! Selection-driven derived views over a roster of social-media influencers.
//! For a selected handle the engine reads the KPI triple, pairs the record's
//! brand and category lists, aggregates them per category and places the
//! influencer on a dataset-wide scatter projection. Every selection returns
//! one `ViewBundle` holding all of these.
//!
//! # Modules
//!
//! - `dataset`: records, the immutable indexed table and CSV loading
//! - `views`: the derived-view engine (`compute_views`)
//! - `http`: axum backend serving the dashboard page and its JSON API
//! - `config`: server configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use influencer_dashboard::{compute_views, Dataset, InfluencerRecord};
//!
//! let dataset = Dataset::new(vec![
//!     InfluencerRecord::new("alice", 100, 50, 2)
//!         .with_brands("Nike, Adidas")
//!         .with_categories("Sports, Sports"),
//! ]);
//!
//! let bundle = compute_views(&dataset, "alice").unwrap();
//! assert_eq!(bundle.kpis.as_tuple(), (100, 50, 2));
//! assert_eq!(bundle.category_counts.get("Sports"), Some(2));
//! assert_eq!(bundle.global_projection.points.len(), 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dataset;
pub mod http;
pub mod views;

// Re-export main types for convenience
pub use config::ServerConfig;

pub use dataset::{
    load_csv, load_from_reader, DataQualityReport, Dataset, FieldDegradation, Handle,
    InfluencerRecord, LoadError, LoadResult,
};

pub use views::{
    compute_views, CategoryCounts, Collaboration, GlobalProjection, Hierarchy, Highlight, Kpis,
    ProjectionPoint, ViewBundle, ViewEngine, ViewError, ViewResult,
};

pub use http::DashboardServer;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, env!("CARGO_PKG_VERSION"));
    }
}
