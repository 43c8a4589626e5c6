//! Readers and writers for near-Earth object data files.
//!
//! This library turns the two NASA flat files (the NEO CSV catalogue and the
//! close-approach JSON document) into typed records, and writes query results
//! back out as CSV or JSON. It knows nothing about how records are linked or
//! queried; that lives in the `neodb` crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod atomic;
pub mod error;
pub mod reader;
pub mod record;
pub mod warning;
pub mod writer;

pub use atomic::{save_csv, save_json};
pub use error::{Error, Result};
pub use reader::{load_approaches, load_neos, read_approaches, read_neos};
pub use record::{ApproachDocument, ApproachRecord, ApproachRow, NeoDocument, NeoRecord};
pub use warning::Warning;
pub use writer::{write_csv, write_json};
