//! The public adapter surface.
//!
//! A [`Client`] wraps an open vendor [`Session`] together with a cache
//! handle and exposes one method per vendor operation. Every call is a
//! single, synchronous request/response round trip; transport failures
//! propagate to the caller untouched.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::cache::RefCache;
use crate::errors::BlpError;
use crate::models::request::{
    CURVE_LIST_REQUEST, GOVT_LIST_REQUEST, INSTRUMENTS_SERVICE, INSTRUMENT_LIST_REQUEST,
    PORTFOLIO_DATA_REQUEST, REFDATA_SERVICE, REFERENCE_DATA_REQUEST,
};
use crate::models::{CurveEntry, GovtEntry, Instrument, Overrides, Request, Table};
use crate::parse;
use crate::pipeline;
use crate::session::{drain, Session};

const DEFAULT_INSTRUMENT_QUERY: &str = "Dhaka";
const DEFAULT_CURVE_QUERY: &str = "SOFR";
const DEFAULT_GOVT_QUERY: &str = "Bangladesh";
const DEFAULT_MAX_RESULTS: u32 = 10;

const CACHE_EXT: &str = "json";

/// Options for a block data fetch.
///
/// The override map is passed through to the vendor request and also
/// feeds the cache key, so two calls differing only in overrides never
/// share a cache entry.
#[derive(Clone, Debug, Default)]
pub struct BdsOptions {
    /// Use the portfolio operation instead of reference data.
    pub use_port: bool,

    /// Return the unshaped response table; raw output is never cached.
    pub raw: bool,

    /// Whether the cache key carries an as-of date. Defaults to true.
    pub has_date: Option<bool>,

    /// Explicit column renames applied after shaping.
    pub col_maps: Option<HashMap<String, String>>,

    /// Vendor request overrides.
    pub overrides: Overrides,
}

impl BdsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `PortfolioDataRequest` instead of `ReferenceDataRequest`.
    pub fn use_port(mut self, use_port: bool) -> Self {
        self.use_port = use_port;
        self
    }

    /// Return the unshaped response table.
    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Control the as-of date segment of the cache key.
    pub fn has_date(mut self, has_date: bool) -> Self {
        self.has_date = Some(has_date);
        self
    }

    /// Add an explicit column rename.
    pub fn col_map(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.col_maps
            .get_or_insert_with(HashMap::new)
            .insert(from.into(), to.into());
        self
    }

    /// Add a vendor request override.
    pub fn with_override(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.set(field, value);
        self
    }
}

/// Adapter over an open vendor session.
pub struct Client<S> {
    session: S,
    cache: RefCache,
}

impl<S: Session> Client<S> {
    /// Wrap a session, caching under `BLPX_ROOT` when it is set.
    pub fn new(session: S) -> Self {
        Self {
            session,
            cache: RefCache::from_env(),
        }
    }

    /// Wrap a session with an explicit cache.
    pub fn with_cache(session: S, cache: RefCache) -> Self {
        Self { session, cache }
    }

    /// Search instruments matching a free-text query.
    ///
    /// Returns a table with columns `Security` and `Description`, one row
    /// per vendor result, in vendor response order. Missing parameters
    /// fall back to defaults rather than failing.
    pub fn instruments(
        &mut self,
        query: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<Table, BlpError> {
        let request = list_request(
            INSTRUMENT_LIST_REQUEST,
            query,
            DEFAULT_INSTRUMENT_QUERY,
            max_results,
        );
        let stream = self.session.send_request(&request)?;
        let rows = drain(stream, parse::parse_instruments)?;

        let mut table = Table::new(Instrument::COLUMNS);
        for row in rows {
            table.push_row(row.into_cells());
        }
        Ok(table)
    }

    /// List curves matching a free-text query.
    ///
    /// Returns a table with columns `curve`, `description`, `country`,
    /// `currency`, `curveid`, `type` and `subType`. Multi-valued type
    /// tags arrive comma-joined in a single cell.
    pub fn curve_list(
        &mut self,
        query: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<Table, BlpError> {
        let request = list_request(CURVE_LIST_REQUEST, query, DEFAULT_CURVE_QUERY, max_results);
        let stream = self.session.send_request(&request)?;
        let rows = drain(stream, parse::parse_curve_list)?;

        let mut table = Table::new(CurveEntry::COLUMNS);
        for row in rows {
            table.push_row(row.into_cells());
        }
        Ok(table)
    }

    /// List government bonds matching a free-text query.
    ///
    /// Returns a table with columns `ParseKey`, `Name` and `Ticker`.
    /// Fields the vendor leaves out read as empty cells.
    pub fn govt_list(
        &mut self,
        query: Option<&str>,
        max_results: Option<u32>,
    ) -> Result<Table, BlpError> {
        let request = list_request(GOVT_LIST_REQUEST, query, DEFAULT_GOVT_QUERY, max_results);
        let stream = self.session.send_request(&request)?;
        let rows = drain(stream, parse::parse_govt_list)?;

        let mut table = Table::new(GovtEntry::COLUMNS);
        for row in rows {
            table.push_row(row.into_cells());
        }
        Ok(table)
    }

    /// Fetch block data for one field across tickers.
    ///
    /// Tickers are fetched independently and concatenated without
    /// deduplication; columns missing from one ticker's result are
    /// null-filled. Per-ticker results are memoized on disk when a cache
    /// root is configured.
    pub fn bds(
        &mut self,
        tickers: &[&str],
        field: &str,
        options: &BdsOptions,
    ) -> Result<Table, BlpError> {
        let mut parts = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            parts.push(self.bds_one(ticker, field, options)?);
        }
        Ok(Table::concat(parts))
    }

    /// Block data for a single ticker: cache check, fetch, shape, persist.
    fn bds_one(
        &mut self,
        ticker: &str,
        field: &str,
        options: &BdsOptions,
    ) -> Result<Table, BlpError> {
        let has_date = options.has_date.unwrap_or(true);
        let cache_path =
            self.cache
                .ref_path(ticker, field, CACHE_EXT, has_date, &options.overrides);
        if let Some(path) = cache_path.as_deref() {
            if path.exists() {
                debug!("loading block data from {}", path.display());
                return self.cache.load(path);
            }
        }

        let operation = if options.use_port {
            PORTFOLIO_DATA_REQUEST
        } else {
            REFERENCE_DATA_REQUEST
        };
        let mut request = Request::new(REFDATA_SERVICE, operation);
        request.append_security(ticker);
        request.append_field(field);
        request.set_overrides(options.overrides.clone());

        debug!("sending {} for {} / {}", operation, ticker, field);
        let stream = self.session.send_request(&request)?;
        let records = drain(stream, parse::parse_ref_data)?;
        let mut table = Table::from_records(records);

        if options.raw {
            return Ok(table);
        }
        if table.is_empty()
            || !table.has_column(parse::TICKER_COLUMN)
            || !table.has_column(parse::FIELD_COLUMN)
        {
            // The vendor can return partial data across events; degrade to
            // an empty table instead of shaping a malformed one.
            return Ok(Table::default());
        }

        table.index_by(parse::TICKER_COLUMN);
        table.drop_column(parse::FIELD_COLUMN);
        pipeline::standard_cols(&mut table, options.col_maps.as_ref());

        if let Some(path) = cache_path.as_deref() {
            debug!("saving block data to {}", path.display());
            self.cache.store(path, &table)?;
        }
        Ok(table)
    }
}

/// Build a lookup request, substituting defaults for missing parameters.
fn list_request(
    operation: &str,
    query: Option<&str>,
    default_query: &str,
    max_results: Option<u32>,
) -> Request {
    let query = match query {
        Some(query) => query,
        None => {
            warn!("no query given, defaulting to '{}'", default_query);
            default_query
        }
    };
    let max_results = match max_results {
        Some(max_results) => max_results,
        None => {
            warn!("no max results given, defaulting to {}", DEFAULT_MAX_RESULTS);
            DEFAULT_MAX_RESULTS
        }
    };

    let mut request = Request::new(INSTRUMENTS_SERVICE, operation);
    request.set_param("query", query);
    request.set_param("maxResults", max_results.to_string());
    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_request_defaults() {
        let request = list_request(INSTRUMENT_LIST_REQUEST, None, DEFAULT_INSTRUMENT_QUERY, None);
        assert_eq!(request.param("query"), Some("Dhaka"));
        assert_eq!(request.param("maxResults"), Some("10"));
    }

    #[test]
    fn test_list_request_keeps_explicit_parameters() {
        let request = list_request(CURVE_LIST_REQUEST, Some("EONIA"), DEFAULT_CURVE_QUERY, Some(25));
        assert_eq!(request.param("query"), Some("EONIA"));
        assert_eq!(request.param("maxResults"), Some("25"));
        assert_eq!(request.operation(), CURVE_LIST_REQUEST);
        assert_eq!(request.service(), INSTRUMENTS_SERVICE);
    }

    #[test]
    fn test_bds_options_builder() {
        let options = BdsOptions::new()
            .use_port(true)
            .has_date(false)
            .col_map("Ex-Date", "ex_date")
            .with_override("DVD_Currency", "USD");
        assert!(options.use_port);
        assert_eq!(options.has_date, Some(false));
        assert_eq!(options.overrides.get("DVD_Currency"), Some("USD"));
        assert_eq!(
            options.col_maps.as_ref().unwrap().get("Ex-Date"),
            Some(&"ex_date".to_string())
        );
    }
}
