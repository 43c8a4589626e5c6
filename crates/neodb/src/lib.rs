//! neodb - Explore near-Earth objects and their close approaches.
//!
//! This crate provides both a CLI application and a library. The library
//! links the NASA NEO catalogue to its close-approach records and answers
//! filtered queries over them:
//!
//! ```
//! use neodb::database::Database;
//! use neodb::domain::{NearEarthObject, NewCloseApproach};
//! use neodb::filters::Criteria;
//! use neodb::query::Query;
//!
//! let db = Database::new(
//!     [NearEarthObject::new("2020 XY", None, Some(3.0), true)],
//!     [NewCloseApproach {
//!         designation: "2020 XY".to_string(),
//!         time: "2020-06-15 04:30".parse()?,
//!         distance: 0.08,
//!         velocity: 40.0,
//!     }],
//! );
//!
//! let query = Query::new(Criteria {
//!     min_diameter: Some(2.5),
//!     hazardous: Some(true),
//!     ..Criteria::default()
//! });
//! assert_eq!(query.run(&db).count(), 1);
//! # Ok::<(), neodb::error::Error>(())
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod database;
pub mod domain;
pub mod error;
pub mod export;
pub mod filters;
pub mod query;

// Public CLI module (needed by binary)
pub mod app;
pub mod cli;
pub mod config;
pub mod output;
