//! Parser for reference and block data responses.

use crate::models::{ElementValue, Message};

const SECURITY_DATA: &str = "securityData";
const FIELD_DATA: &str = "fieldData";
const SECURITY: &str = "security";

pub const TICKER_COLUMN: &str = "ticker";
pub const FIELD_COLUMN: &str = "field";
pub const VALUE_COLUMN: &str = "value";

/// One named-value record extracted from a response. Records from the same
/// response can differ in shape; the table assembler unions them.
pub type Record = Vec<(String, String)>;

/// Extract per-security field records from one response message.
///
/// Scalar fields yield one `{ticker, field, value}` record. Bulk fields
/// yield one record per array entry, with a column per sub-field. A
/// message without `securityData` yields nothing, which is how partial
/// responses degrade.
pub fn parse_ref_data(message: &Message) -> Vec<Record> {
    let mut out = Vec::new();
    let securities = match message
        .root()
        .get(SECURITY_DATA)
        .and_then(ElementValue::as_array)
    {
        Some(securities) => securities,
        None => return out,
    };
    for value in securities {
        let security = match value.as_element() {
            Some(element) => element,
            None => continue,
        };
        let ticker = security.get_as_string(SECURITY);
        let field_data = match security.get(FIELD_DATA).and_then(ElementValue::as_element) {
            Some(element) => element,
            None => continue,
        };
        for (field, field_value) in field_data.fields() {
            match field_value {
                ElementValue::Array(entries) => {
                    for entry in entries {
                        out.push(bulk_record(&ticker, field, entry));
                    }
                }
                scalar => out.push(scalar_record(&ticker, field, scalar)),
            }
        }
    }
    out
}

fn scalar_record(ticker: &str, field: &str, value: &ElementValue) -> Record {
    vec![
        (TICKER_COLUMN.to_string(), ticker.to_string()),
        (FIELD_COLUMN.to_string(), field.to_string()),
        (VALUE_COLUMN.to_string(), value.as_joined_string()),
    ]
}

fn bulk_record(ticker: &str, field: &str, entry: &ElementValue) -> Record {
    let mut record = vec![
        (TICKER_COLUMN.to_string(), ticker.to_string()),
        (FIELD_COLUMN.to_string(), field.to_string()),
    ];
    match entry.as_element() {
        Some(item) => {
            for (name, value) in item.fields() {
                record.push((name.to_string(), value.as_joined_string()));
            }
        }
        // Bulk arrays of plain scalars collapse to the value column.
        None => record.push((VALUE_COLUMN.to_string(), entry.as_joined_string())),
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Element;

    fn response(securities: Vec<ElementValue>) -> Message {
        Message::new(
            "ReferenceDataResponse",
            Element::new().with(SECURITY_DATA, ElementValue::Array(securities)),
        )
    }

    #[test]
    fn test_scalar_field_yields_value_record() {
        let message = response(vec![Element::new()
            .with(SECURITY, "AAPL US Equity")
            .with(FIELD_DATA, Element::new().with("PX_LAST", "178.72"))
            .into()]);
        let records = parse_ref_data(&message);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            vec![
                ("ticker".to_string(), "AAPL US Equity".to_string()),
                ("field".to_string(), "PX_LAST".to_string()),
                ("value".to_string(), "178.72".to_string()),
            ]
        );
    }

    #[test]
    fn test_bulk_field_yields_record_per_entry() {
        let dividends = ElementValue::Array(vec![
            Element::new()
                .with("Ex-Date", "2024-02-09")
                .with("Dividend Amount", "0.24")
                .into(),
            Element::new()
                .with("Ex-Date", "2024-05-10")
                .with("Dividend Amount", "0.25")
                .into(),
        ]);
        let message = response(vec![Element::new()
            .with(SECURITY, "AAPL US Equity")
            .with(FIELD_DATA, Element::new().with("Dvd_Hist_All", dividends))
            .into()]);
        let records = parse_ref_data(&message);
        assert_eq!(records.len(), 2);
        assert!(records[0].contains(&("Ex-Date".to_string(), "2024-02-09".to_string())));
        assert!(records[1].contains(&("Dividend Amount".to_string(), "0.25".to_string())));
        assert!(records[1].contains(&("field".to_string(), "Dvd_Hist_All".to_string())));
    }

    #[test]
    fn test_message_without_security_data_yields_nothing() {
        let message = Message::new("ReferenceDataResponse", Element::new());
        assert!(parse_ref_data(&message).is_empty());
    }

    #[test]
    fn test_security_without_field_data_is_skipped() {
        let message = response(vec![Element::new().with(SECURITY, "AAPL US Equity").into()]);
        assert!(parse_ref_data(&message).is_empty());
    }
}
