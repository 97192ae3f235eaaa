//! # Data Set Fixtures Core
//!
//! Core abstraction for comparing tabular test fixtures.
//!
//! A data set is a collection of named tables. Database test suites load an
//! expected data set from a fixture, read the actual data set from the store
//! after the test, and assert the two match regardless of table order.
//!
//! ## Key Concepts
//!
//! - **DataSet**: a collection of tables; implementors supply one traversal
//!   factory and get name listing, lookup and matching for free
//! - **Table**: rows plus metadata, with a content equality
//! - **TableMetaData**: table name and columns; the name is the join key
//!   when data sets are matched
//! - **Matching**: the sorted table names must be equal, then every table must
//!   match its namesake
//!
//! ## Example
//!
//! ```rust
//! use fixtures_core::{DataSet, DataSetBuilder, TableBuilder};
//!
//! let expected = DataSetBuilder::new()
//!     .table(TableBuilder::new("users").row([("id", 1)]))
//!     .build();
//!
//! let actual = DataSetBuilder::new()
//!     .table(TableBuilder::new("users").row([("id", 2)]))
//!     .build();
//!
//! assert!(expected.matches(&expected));
//! assert!(!expected.matches(&actual));
//! ```

pub mod builder;
pub mod composite;
pub mod dataset;
pub mod default_set;
pub mod error;
pub mod filter;
pub mod iterator;
pub mod metadata;
pub mod replacement;
pub mod table;
pub mod value;

pub use builder::*;
pub use composite::*;
pub use dataset::*;
pub use default_set::*;
pub use error::*;
pub use filter::*;
pub use iterator::*;
pub use metadata::*;
pub use replacement::*;
pub use table::*;
pub use value::*;
