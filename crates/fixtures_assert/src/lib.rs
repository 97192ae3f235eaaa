//! # Data Set Fixtures Assertions
//!
//! Comparison reports and test assertions on top of [`fixtures_core`].
//!
//! [`fixtures_core::DataSet::matches`] answers yes or no. The comparator in
//! this crate reaches the same verdict and also explains each difference,
//! which is what a failing test needs to print.
//!
//! ## Example
//!
//! ```rust
//! use fixtures_assert::assert_data_sets_equal;
//! use fixtures_core::{DataSetBuilder, TableBuilder};
//!
//! let expected = DataSetBuilder::new()
//!     .table(TableBuilder::new("users").row([("id", 1), ("age", 30)]))
//!     .build();
//! let actual = DataSetBuilder::new()
//!     .table(TableBuilder::new("users").row([("id", 1), ("age", 31)]))
//!     .build();
//!
//! let err = assert_data_sets_equal(&expected, &actual).unwrap_err();
//! assert!(err.to_string().starts_with(
//!     "Table 'users' does not match: row 0, column 'age': expected 30, found 31"
//! ));
//! ```

pub mod assertions;
pub mod comparator;
pub mod error;
pub mod report;

pub use assertions::*;
pub use comparator::*;
pub use error::*;
pub use report::*;
