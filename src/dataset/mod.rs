//! Influencer roster data model
//!
//! - `InfluencerRecord`: one row of the source table
//! - `Dataset`: the immutable, indexed table shared by every selection
//! - `loader`: CSV ingestion with column-name normalization

pub mod loader;
pub mod record;
pub mod table;
pub mod types;

pub use loader::{load_csv, load_from_reader, normalize_column_name, LoadError, LoadResult};
pub use record::InfluencerRecord;
pub use table::{DataQualityReport, Dataset, FieldDegradation};
pub use types::Handle;
