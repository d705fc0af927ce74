//! blpx
//!
//! A thin, synchronous client adapter over a proprietary terminal
//! market-data session.
//!
//! # Overview
//!
//! The adapter supports:
//! - Instrument search, curve lists and government bond lists
//! - Reference/block data per ticker and field, with vendor overrides
//! - Disk-backed memoization of block data keyed by request parameters
//!
//! The vendor session itself (connection state, event loop, wire
//! protocol) is owned by the vendor SDK and reached through the
//! [`Session`] trait; this crate builds requests, parses the
//! self-describing response elements, and shapes results into tables.
//!
//! # Architecture
//!
//! ```text
//! +-----------+     +-----------+     +------------------+
//! |  Client   | --> |  Request  | --> |     Session      |  (vendor SDK seam)
//! +-----------+     +-----------+     +------------------+
//!                                              |
//!                                              v
//!                                     +------------------+
//!                                     |     Message      |  (element tree)
//!                                     +------------------+
//!                                              |
//!                                              v
//!                                     +------------------+
//!                                     |  parse -> Table  |  (rows in vendor order)
//!                                     +------------------+
//!                                              |
//!                                              v
//!                                     +------------------+
//!                                     |     RefCache     |  (block data only)
//!                                     +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Client`] - one method per vendor operation
//! - [`Session`] - the injected transport capability
//! - [`Table`] - ordered rows under a declared column header
//! - [`Element`] / [`Message`] - the vendor's self-describing responses
//! - [`Overrides`] / [`BdsOptions`] - request parameterization
//! - [`RefCache`] - the block data memoization store

pub mod cache;
pub mod client;
pub mod errors;
pub mod models;
pub mod parse;
pub mod pipeline;
pub mod session;

pub use cache::RefCache;
pub use client::{BdsOptions, Client};
pub use errors::BlpError;
pub use models::{
    Cell, CurveEntry, Element, ElementValue, GovtEntry, Instrument, Message, Overrides, Request,
    Table,
};
pub use session::{drain, MessageStream, Session};
