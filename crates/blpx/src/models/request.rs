//! Request descriptors submitted to the vendor session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Instrument lookup service (search, curve and government lists).
pub const INSTRUMENTS_SERVICE: &str = "//blp/instruments";

/// Reference and block data service.
pub const REFDATA_SERVICE: &str = "//blp/refdata";

pub const INSTRUMENT_LIST_REQUEST: &str = "instrumentListRequest";
pub const CURVE_LIST_REQUEST: &str = "curveListRequest";
pub const GOVT_LIST_REQUEST: &str = "govtListRequest";
pub const REFERENCE_DATA_REQUEST: &str = "ReferenceDataRequest";
pub const PORTFOLIO_DATA_REQUEST: &str = "PortfolioDataRequest";

/// Vendor request overrides, keyed by override field name.
///
/// Overrides change how the vendor computes a field (currency, date,
/// etc.). Keys are held sorted so anything derived from an override set,
/// the cache key in particular, is independent of insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Overrides {
    overrides: BTreeMap<String, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an override, builder style.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set an override.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.overrides.insert(field.into(), value.into());
    }

    /// Get the override for a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.overrides.get(field).map(String::as_str)
    }

    /// Check if an override exists for a field.
    pub fn contains(&self, field: &str) -> bool {
        self.overrides.contains_key(field)
    }

    /// Check if there are any overrides.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Get the number of overrides.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Iterate overrides in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.overrides
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }
}

/// A request against one service/operation pair.
///
/// Built fresh per call and immutable once handed to the transport. The
/// scalar parameters keep their set order; securities and fields are the
/// list parameters of reference-data operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Request {
    service: String,
    operation: String,
    params: Vec<(String, String)>,
    securities: Vec<String>,
    fields: Vec<String>,
    overrides: Overrides,
}

impl Request {
    pub fn new(service: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            operation: operation.into(),
            params: Vec::new(),
            securities: Vec::new(),
            fields: Vec::new(),
            overrides: Overrides::new(),
        }
    }

    /// Set a scalar parameter such as `query` or `maxResults`.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push((name.into(), value.into()));
    }

    /// Read back a scalar parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn append_security(&mut self, ticker: impl Into<String>) {
        self.securities.push(ticker.into());
    }

    pub fn append_field(&mut self, field: impl Into<String>) {
        self.fields.push(field.into());
    }

    pub fn set_overrides(&mut self, overrides: Overrides) {
        self.overrides = overrides;
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn securities(&self) -> &[String] {
        &self.securities
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }
}
