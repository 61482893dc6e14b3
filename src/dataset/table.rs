//! Immutable in-memory influencer table
//!
//! Loaded once at startup and only read afterwards:
//! - records: load order, used for dropdown options and the projection
//! - handle_index: Handle -> row indices (more than one means a duplicate)
//! - projection: base scatter points, built once and shared by every bundle

use super::record::InfluencerRecord;
use super::types::Handle;
use crate::views::{build_base_projection, parse_field, ProjectionPoint, ViewError, ViewResult};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// A record whose brand and category lists differ in length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDegradation {
    pub handle: Handle,
    pub brand_tokens: usize,
    pub category_tokens: usize,
}

/// Data-quality summary of the loaded table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQualityReport {
    pub records: usize,
    pub duplicate_handles: Vec<Handle>,
    pub degraded: Vec<FieldDegradation>,
}

impl DataQualityReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_handles.is_empty() && self.degraded.is_empty()
    }
}

#[derive(Debug)]
pub struct Dataset {
    records: Vec<InfluencerRecord>,
    handle_index: FxHashMap<Handle, Vec<usize>>,
    projection: Arc<[ProjectionPoint]>,
}

impl Dataset {
    pub fn new(records: Vec<InfluencerRecord>) -> Self {
        let mut handle_index: FxHashMap<Handle, Vec<usize>> = FxHashMap::default();
        for (row, record) in records.iter().enumerate() {
            handle_index.entry(record.handle.clone()).or_default().push(row);
        }

        for (handle, rows) in &handle_index {
            if rows.len() > 1 {
                warn!(handle = %handle, rows = ?rows, "duplicate handle in dataset");
            }
        }

        let projection = build_base_projection(&records);
        let dataset = Self {
            records,
            handle_index,
            projection,
        };

        let report = dataset.data_quality();
        for degraded in &report.degraded {
            warn!(
                handle = %degraded.handle,
                brands = degraded.brand_tokens,
                categories = degraded.category_tokens,
                "brand/category token counts differ"
            );
        }
        info!(
            records = report.records,
            duplicates = report.duplicate_handles.len(),
            degraded = report.degraded.len(),
            "dataset loaded"
        );

        dataset
    }

    /// Resolve a selection key to exactly one record
    pub fn select(&self, key: &str) -> ViewResult<&InfluencerRecord> {
        match self.handle_index.get(key).map(Vec::as_slice) {
            Some([row]) => Ok(&self.records[*row]),
            Some(rows) if rows.len() > 1 => Err(ViewError::SelectionAmbiguous {
                handle: key.to_string(),
                matches: rows.len(),
            }),
            _ => Err(ViewError::SelectionNotFound(key.to_string())),
        }
    }

    pub fn records(&self) -> &[InfluencerRecord] {
        &self.records
    }

    /// Handles in load order, as offered to the selector
    pub fn handles(&self) -> impl Iterator<Item = &Handle> {
        self.records.iter().map(|record| &record.handle)
    }

    /// Handle selected before any user interaction: the first row
    pub fn default_selection(&self) -> Option<&Handle> {
        self.records.first().map(|record| &record.handle)
    }

    /// Shared base projection, one point per record
    pub fn projection(&self) -> Arc<[ProjectionPoint]> {
        Arc::clone(&self.projection)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Scan the table for duplicate handles and mismatched compound fields
    pub fn data_quality(&self) -> DataQualityReport {
        let mut duplicate_handles: Vec<Handle> = self
            .handle_index
            .iter()
            .filter(|(_, rows)| rows.len() > 1)
            .map(|(handle, _)| handle.clone())
            .collect();
        duplicate_handles.sort();

        let degraded = self
            .records
            .iter()
            .filter_map(|record| {
                let brand_tokens = parse_field(record.brands.as_deref()).len();
                let category_tokens = parse_field(record.categories.as_deref()).len();
                (brand_tokens != category_tokens).then(|| FieldDegradation {
                    handle: record.handle.clone(),
                    brand_tokens,
                    category_tokens,
                })
            })
            .collect();

        DataQualityReport {
            records: self.records.len(),
            duplicate_handles,
            degraded,
        }
    }
}
