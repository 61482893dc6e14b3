//! CSV ingestion for the influencer roster
//!
//! Header names are normalized (trimmed, lowercased, whitespace runs replaced
//! by `_`) before the required columns are resolved, so "Handle Name" and
//! "handle_name" are the same column.

use super::record::InfluencerRecord;
use super::table::Dataset;
use csv::StringRecord;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

pub const HANDLE_COLUMN: &str = "handle_name";
pub const EVENT_COUNT_COLUMN: &str = "event_count";
pub const UNIQUE_USER_COUNT_COLUMN: &str = "unique_user_count";
pub const TOTAL_BRAND_COLLABS_COLUMN: &str = "total_brand_collabs";
pub const BRANDS_COLUMN: &str = "brands";
pub const CATEGORIES_COLUMN: &str = "categories";
pub const INFLUENCER_NAME_COLUMN: &str = "influencer_name";
pub const PLATFORM_COLUMN: &str = "platform";

/// Dataset loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Line {line}: column '{column}' has non-integer value '{value}'")]
    InvalidInteger {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("Line {line}: blank handle_name")]
    BlankHandle { line: u64 },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Normalize a raw header cell, e.g. " Unique  User Count" -> "unique_user_count"
pub fn normalize_column_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Resolved positions of the known columns
struct ColumnLayout {
    handle: usize,
    event_count: usize,
    unique_user_count: usize,
    total_brand_collabs: usize,
    brands: usize,
    categories: usize,
    influencer_name: Option<usize>,
    platform: Option<usize>,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord) -> LoadResult<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_column_name).collect();
        let find = |name: &str| normalized.iter().position(|column| column == name);
        let require = |name: &'static str| find(name).ok_or(LoadError::MissingColumn(name));

        Ok(Self {
            handle: require(HANDLE_COLUMN)?,
            event_count: require(EVENT_COUNT_COLUMN)?,
            unique_user_count: require(UNIQUE_USER_COUNT_COLUMN)?,
            total_brand_collabs: require(TOTAL_BRAND_COLLABS_COLUMN)?,
            brands: require(BRANDS_COLUMN)?,
            categories: require(CATEGORIES_COLUMN)?,
            influencer_name: find(INFLUENCER_NAME_COLUMN),
            platform: find(PLATFORM_COLUMN),
        })
    }
}

/// Load the roster from a CSV file
pub fn load_csv(path: impl AsRef<Path>) -> LoadResult<Dataset> {
    let path = path.as_ref();
    info!("Loading influencer data from {:?}", path);
    let file = std::fs::File::open(path)?;
    load_from_reader(file)
}

/// Load the roster from any CSV byte source
pub fn load_from_reader<R: Read>(reader: R) -> LoadResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let layout = ColumnLayout::resolve(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();
        records.push(parse_row(&row, &layout, line)?);
    }

    debug!("Parsed {} influencer rows", records.len());
    Ok(Dataset::new(records))
}

fn parse_row(row: &StringRecord, layout: &ColumnLayout, line: u64) -> LoadResult<InfluencerRecord> {
    let integer = |index: usize, column: &'static str| {
        let value = row.get(index).unwrap_or_default();
        parse_count(value).ok_or_else(|| LoadError::InvalidInteger {
            line,
            column,
            value: value.to_string(),
        })
    };

    let handle = row.get(layout.handle).unwrap_or_default().trim();
    if handle.is_empty() {
        return Err(LoadError::BlankHandle { line });
    }

    Ok(InfluencerRecord {
        handle: handle.into(),
        influencer_name: optional_cell(row, layout.influencer_name),
        platform: optional_cell(row, layout.platform),
        event_count: integer(layout.event_count, EVENT_COUNT_COLUMN)?,
        unique_user_count: integer(layout.unique_user_count, UNIQUE_USER_COUNT_COLUMN)?,
        total_brand_collabs: integer(layout.total_brand_collabs, TOTAL_BRAND_COLLABS_COLUMN)?,
        brands: optional_cell(row, Some(layout.brands)),
        categories: optional_cell(row, Some(layout.categories)),
    })
}

/// Blank cells are missing values
fn optional_cell(row: &StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|index| row.get(index))
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
}

/// Parse a non-negative count, accepting integral decimals such as "1500.0"
fn parse_count(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let digits = match raw.split_once('.') {
        Some((whole, fraction)) if fraction.bytes().all(|b| b == b'0') => whole,
        Some(_) => return None,
        None => raw,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Influencer Name,Handle Name,Event Count,Unique User Count,Brands,Platform,Total Brand Collabs,Categories\n";

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name(" Handle  Name "), "handle_name");
        assert_eq!(normalize_column_name("EVENT_COUNT"), "event_count");
        assert_eq!(normalize_column_name("Unique\tUser Count"), "unique_user_count");
        assert_eq!(normalize_column_name("brands"), "brands");
    }

    #[test]
    fn test_load_quoted_compound_fields() {
        let csv = format!(
            "{}Alice A.,alice,100,50,\"Nike, Adidas\",Instagram,2,\"Sports, Sports\"\n",
            HEADER
        );
        let dataset = load_from_reader(csv.as_bytes()).unwrap();
        let record = dataset.select("alice").unwrap();
        assert_eq!(record.influencer_name.as_deref(), Some("Alice A."));
        assert_eq!(record.platform.as_deref(), Some("Instagram"));
        assert_eq!(record.event_count, 100);
        assert_eq!(record.unique_user_count, 50);
        assert_eq!(record.total_brand_collabs, 2);
        assert_eq!(record.brands.as_deref(), Some("Nike, Adidas"));
        assert_eq!(record.categories.as_deref(), Some("Sports, Sports"));
    }

    #[test]
    fn test_load_blank_compound_fields() {
        let csv = format!("{}Bob,bob,10,5,,TikTok,0,\n", HEADER);
        let dataset = load_from_reader(csv.as_bytes()).unwrap();
        let record = dataset.select("bob").unwrap();
        assert!(record.brands.is_none());
        assert!(record.categories.is_none());
    }

    #[test]
    fn test_load_integral_decimals() {
        let csv = format!("{}Carol,carol,1500.0,900,Nike,YouTube,4.0,Sports\n", HEADER);
        let dataset = load_from_reader(csv.as_bytes()).unwrap();
        let record = dataset.select("carol").unwrap();
        assert_eq!(record.event_count, 1500);
        assert_eq!(record.total_brand_collabs, 4);
    }

    #[test]
    fn test_load_rejects_non_integer() {
        let csv = format!("{}Dan,dan,12.5,9,Nike,YouTube,1,Sports\n", HEADER);
        match load_from_reader(csv.as_bytes()) {
            Err(LoadError::InvalidInteger { line, column, value }) => {
                assert_eq!(line, 2);
                assert_eq!(column, EVENT_COUNT_COLUMN);
                assert_eq!(value, "12.5");
            }
            other => panic!("expected InvalidInteger, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_negative_and_blank_counts() {
        let negative = format!("{}Dan,dan,-1,9,Nike,YouTube,1,Sports\n", HEADER);
        assert!(matches!(
            load_from_reader(negative.as_bytes()),
            Err(LoadError::InvalidInteger { .. })
        ));

        let blank = format!("{}Dan,dan,3,,Nike,YouTube,1,Sports\n", HEADER);
        assert!(matches!(
            load_from_reader(blank.as_bytes()),
            Err(LoadError::InvalidInteger { column: UNIQUE_USER_COUNT_COLUMN, .. })
        ));
    }

    #[test]
    fn test_load_missing_column() {
        let csv = "handle_name,event_count,unique_user_count,brands,categories\nalice,1,1,Nike,Sports\n";
        assert!(matches!(
            load_from_reader(csv.as_bytes()),
            Err(LoadError::MissingColumn(TOTAL_BRAND_COLLABS_COLUMN))
        ));
    }

    #[test]
    fn test_load_without_optional_columns() {
        let csv = "handle_name,event_count,unique_user_count,total_brand_collabs,brands,categories\nalice,1,2,3,Nike,Sports\n";
        let dataset = load_from_reader(csv.as_bytes()).unwrap();
        let record = dataset.select("alice").unwrap();
        assert!(record.influencer_name.is_none());
        assert!(record.platform.is_none());
        assert_eq!(record.total_brand_collabs, 3);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("42"), Some(42));
        assert_eq!(parse_count(" 7 "), Some(7));
        assert_eq!(parse_count("3.0"), Some(3));
        assert_eq!(parse_count("3.5"), None);
        assert_eq!(parse_count("nan"), None);
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("-2"), None);
        assert_eq!(parse_count("+2"), None);
        assert_eq!(parse_count("1500.000"), Some(1500));
        assert_eq!(parse_count(".0"), None);
        assert_eq!(parse_count("1e3"), None);
        assert_eq!(parse_count("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_count("18446744073709551616"), None);
        assert_eq!(parse_count("9007199254740993.0"), Some(9_007_199_254_740_993));
    }

    #[test]
    fn test_load_rejects_blank_handle() {
        let csv = format!(
            "{}Alice A.,alice,1,1,Nike,Instagram,1,Sports\nNobody,  ,1,1,Nike,Instagram,1,Sports\n",
            HEADER
        );
        match load_from_reader(csv.as_bytes()) {
            Err(LoadError::BlankHandle { line }) => assert_eq!(line, 3),
            other => panic!("expected BlankHandle, got {:?}", other),
        }
    }
}
