//! Parsers for the instrument lookup operations.

use crate::models::{CurveEntry, ElementValue, GovtEntry, Instrument, Message};

const RESULTS: &str = "results";

fn results(message: &Message) -> &[ElementValue] {
    message
        .root()
        .get(RESULTS)
        .and_then(ElementValue::as_array)
        .unwrap_or(&[])
}

/// Extract instrument search hits from one response message.
pub fn parse_instruments(message: &Message) -> Vec<Instrument> {
    let mut out = Vec::new();
    for value in results(message) {
        let element = match value.as_element() {
            Some(element) => element,
            None => continue,
        };
        out.push(Instrument {
            security: element.get_as_string("security"),
            description: element.get_as_string("description"),
        });
    }
    out
}

/// Extract curve entries from one response message.
///
/// `type` and `subtype` can carry several values per curve; they collapse
/// to one comma-joined cell so each curve stays a single row. Keys the
/// schema does not recognize are skipped.
pub fn parse_curve_list(message: &Message) -> Vec<CurveEntry> {
    let mut out = Vec::new();
    for value in results(message) {
        let element = match value.as_element() {
            Some(element) => element,
            None => continue,
        };
        let mut entry = CurveEntry::default();
        for (name, field) in element.fields() {
            match name {
                "curve" => entry.curve = field.as_joined_string(),
                "description" => entry.description = field.as_joined_string(),
                "country" => entry.country = field.as_joined_string(),
                "currency" => entry.currency = field.as_joined_string(),
                "curveid" => entry.curveid = field.as_joined_string(),
                "type" => entry.curve_type = field.as_joined_string(),
                "subtype" => entry.sub_type = field.as_joined_string(),
                _ => {}
            }
        }
        out.push(entry);
    }
    out
}

/// Extract government bond entries from one response message.
///
/// The vendor schema spells the parse key field `parseky`.
pub fn parse_govt_list(message: &Message) -> Vec<GovtEntry> {
    let mut out = Vec::new();
    for value in results(message) {
        let element = match value.as_element() {
            Some(element) => element,
            None => continue,
        };
        out.push(GovtEntry {
            parse_key: element.get_as_string("parseky"),
            name: element.get_as_string("name"),
            ticker: element.get_as_string("ticker"),
        });
    }
    out
}
