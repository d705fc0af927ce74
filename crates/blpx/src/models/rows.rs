//! Typed rows produced by the list operations.
//!
//! Each operation returns a table with a fixed column schema; the types
//! here are the per-row shapes, with the declared column headers as
//! associated constants.

use serde::{Deserialize, Serialize};

use super::table::Cell;

/// One instrument search hit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Security identifier (e.g., "AAPL US Equity")
    pub security: String,

    /// Display description
    pub description: String,
}

impl Instrument {
    /// Column header of the instrument search table.
    pub const COLUMNS: [&'static str; 2] = ["Security", "Description"];

    pub fn into_cells(self) -> Vec<Cell> {
        vec![Some(self.security), Some(self.description)]
    }
}

/// One curve list entry.
///
/// `curve_type` and `sub_type` may be multi-valued on the wire; they are
/// carried here already flattened to comma-joined strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveEntry {
    /// Curve identifier (e.g., "YCSW0023 Index")
    pub curve: String,

    /// Display description
    pub description: String,

    /// Country code
    pub country: String,

    /// Currency code
    pub currency: String,

    /// Vendor curve id
    pub curveid: String,

    /// Curve type tags, comma-joined
    pub curve_type: String,

    /// Curve subtype tags, comma-joined
    pub sub_type: String,
}

impl CurveEntry {
    /// Column header of the curve list table.
    pub const COLUMNS: [&'static str; 7] = [
        "curve",
        "description",
        "country",
        "currency",
        "curveid",
        "type",
        "subType",
    ];

    pub fn into_cells(self) -> Vec<Cell> {
        vec![
            Some(self.curve),
            Some(self.description),
            Some(self.country),
            Some(self.currency),
            Some(self.curveid),
            Some(self.curve_type),
            Some(self.sub_type),
        ]
    }
}

/// One government bond list entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GovtEntry {
    /// Parse key for ticker construction
    pub parse_key: String,

    /// Issuer name
    pub name: String,

    /// Ticker stem
    pub ticker: String,
}

impl GovtEntry {
    /// Column header of the government list table.
    pub const COLUMNS: [&'static str; 3] = ["ParseKey", "Name", "Ticker"];

    pub fn into_cells(self) -> Vec<Cell> {
        vec![Some(self.parse_key), Some(self.name), Some(self.ticker)]
    }
}
