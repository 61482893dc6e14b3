//! Entity record: one influencer row of the roster

use super::types::Handle;
use serde::{Deserialize, Serialize};

/// One influencer's row of attributes
///
/// `brands` and `categories` hold the raw comma-delimited strings exactly as
/// loaded; `None` marks a missing cell. They are positionally paired by the
/// view engine, so the n-th brand belongs to the n-th category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluencerRecord {
    /// Unique key of the record
    pub handle: Handle,

    /// Display name, informational only
    pub influencer_name: Option<String>,

    /// Platform the influencer publishes on, informational only
    pub platform: Option<String>,

    pub event_count: u64,
    pub unique_user_count: u64,
    pub total_brand_collabs: u64,

    /// Compound brand list, e.g. "Nike, Adidas"
    pub brands: Option<String>,

    /// Compound category list, e.g. "Sports, Sports"
    pub categories: Option<String>,
}

impl InfluencerRecord {
    /// Create a record with KPI fields and no compound attributes
    pub fn new(
        handle: impl Into<Handle>,
        event_count: u64,
        unique_user_count: u64,
        total_brand_collabs: u64,
    ) -> Self {
        Self {
            handle: handle.into(),
            influencer_name: None,
            platform: None,
            event_count,
            unique_user_count,
            total_brand_collabs,
            brands: None,
            categories: None,
        }
    }

    pub fn with_brands(mut self, brands: impl Into<String>) -> Self {
        self.brands = Some(brands.into());
        self
    }

    pub fn with_categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = Some(categories.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.influencer_name = Some(name.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }
}
