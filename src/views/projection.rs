//! Dataset-wide projection on (event_count, unique_user_count)
//!
//! The base points depend only on the loaded dataset and are built once by
//! `Dataset::new`. Each selection only adds the highlight marker.

use crate::dataset::{Dataset, Handle, InfluencerRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One scatter point per influencer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub event_count: u64,
    pub unique_user_count: u64,
    pub handle: Handle,
}

impl ProjectionPoint {
    pub fn from_record(record: &InfluencerRecord) -> Self {
        Self {
            event_count: record.event_count,
            unique_user_count: record.unique_user_count,
            handle: record.handle.clone(),
        }
    }
}

/// Coordinates of the selected influencer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub handle: Handle,
    pub event_count: u64,
    pub unique_user_count: u64,
}

impl Highlight {
    pub fn from_record(record: &InfluencerRecord) -> Self {
        Self {
            handle: record.handle.clone(),
            event_count: record.event_count,
            unique_user_count: record.unique_user_count,
        }
    }
}

/// Base projection plus the highlighted selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalProjection {
    pub points: Arc<[ProjectionPoint]>,
    pub highlight: Highlight,
}

impl GlobalProjection {
    /// True when `point` is the highlighted selection
    pub fn is_highlighted(&self, point: &ProjectionPoint) -> bool {
        point.handle == self.highlight.handle
    }
}

/// Build the base projection for every record, in dataset order
pub fn build_base_projection(records: &[InfluencerRecord]) -> Arc<[ProjectionPoint]> {
    records.iter().map(ProjectionPoint::from_record).collect()
}

/// Pair the dataset's base projection with the marker for a selected record
pub fn build_global_projection(dataset: &Dataset, record: &InfluencerRecord) -> GlobalProjection {
    GlobalProjection {
        points: dataset.projection(),
        highlight: Highlight::from_record(record),
    }
}
