//! KPI extraction for the selected influencer

use crate::dataset::InfluencerRecord;
use serde::{Deserialize, Serialize};

/// Scalar KPI triple shown on the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    pub event_count: u64,
    pub unique_user_count: u64,
    pub total_brand_collabs: u64,
}

impl Kpis {
    pub fn new(event_count: u64, unique_user_count: u64, total_brand_collabs: u64) -> Self {
        Self {
            event_count,
            unique_user_count,
            total_brand_collabs,
        }
    }

    pub fn as_tuple(&self) -> (u64, u64, u64) {
        (self.event_count, self.unique_user_count, self.total_brand_collabs)
    }
}

/// Read the KPI triple of a selected record, without rounding or scaling
///
/// The record comes from `Dataset::select`, which rejects unknown and
/// ambiguous handles.
pub fn extract_kpis(record: &InfluencerRecord) -> Kpis {
    Kpis::new(
        record.event_count,
        record.unique_user_count,
        record.total_brand_collabs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_kpis_are_exact() {
        let dataset = Dataset::new(vec![InfluencerRecord::new("carol", 1500, 900, 4)]);
        let kpis = extract_kpis(dataset.select("carol").unwrap());
        assert_eq!(kpis.as_tuple(), (1500, 900, 4));
        assert_eq!(kpis, Kpis::new(1500, 900, 4));
    }

    #[test]
    fn test_kpis_ignore_compound_fields() {
        let record = InfluencerRecord::new("dave", 0, 0, 7)
            .with_brands("Nike")
            .with_categories("Sports");
        assert_eq!(extract_kpis(&record).as_tuple(), (0, 0, 7));
    }
}
