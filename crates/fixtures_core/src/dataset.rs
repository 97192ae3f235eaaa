//! The data set abstraction and its matching algorithm.
//!
//! A data set is a collection of named tables. Concrete data sets decide how
//! tables are stored and supply a single factory, [`DataSet::create_iterator`];
//! every other operation is derived from fresh traversals of that factory.

use crate::{Table, TableIterator, TableMetaData};
use tracing::debug;

/// A collection of named tables that can be compared as a unit.
///
/// Table names are expected to be unique. When they are not, lookups return
/// the first table with the name in forward order.
///
/// # Example
///
/// ```rust
/// use fixtures_core::{DataSet, DefaultDataSet, TableBuilder};
///
/// let expected = DefaultDataSet::new()
///     .with_table(TableBuilder::new("users").columns(["id", "name"]).values(vec![1.into(), "x".into()]).build())
///     .with_table(TableBuilder::new("orders").columns(["id"]).build());
///
/// // Same tables declared in the other order.
/// let actual = DefaultDataSet::new()
///     .with_table(TableBuilder::new("orders").columns(["id"]).build())
///     .with_table(TableBuilder::new("users").columns(["id", "name"]).values(vec![1.into(), "x".into()]).build());
///
/// assert_eq!(expected.table_names(), vec!["users", "orders"]);
/// assert!(expected.matches(&actual));
/// assert!(expected.table("payments").is_none());
/// ```
pub trait DataSet {
    /// Creates a fresh traversal over the tables, in reverse order if
    /// `reverse` is true.
    ///
    /// Each call must return an independent traversal over the same tables.
    fn create_iterator(&self, reverse: bool) -> TableIterator<'_>;

    /// Returns the table names in forward traversal order.
    fn table_names(&self) -> Vec<String> {
        self.iter()
            .map(|table| table.meta_data().table_name().to_string())
            .collect()
    }

    /// Returns the metadata of the named table, if present.
    fn table_meta_data(&self, table_name: &str) -> Option<&dyn TableMetaData> {
        self.table(table_name).map(|table| table.meta_data())
    }

    /// Returns the first table with this exact (case-sensitive) name.
    fn table(&self, table_name: &str) -> Option<&dyn Table> {
        self.iter()
            .find(|table| table.meta_data().table_name() == table_name)
    }

    /// Returns a forward traversal over the tables.
    fn iter(&self) -> TableIterator<'_> {
        self.create_iterator(false)
    }

    /// Returns a reverse traversal over the tables.
    fn reverse_iter(&self) -> TableIterator<'_> {
        self.create_iterator(true)
    }

    /// Checks whether `other` holds the same tables with the same content.
    ///
    /// Table order does not matter. The sorted table names of both sets must
    /// be equal, including repeated names; only then is each table compared
    /// with its namesake through [`Table::matches`], stopping at the first
    /// difference.
    ///
    /// Every name is resolved with [`DataSet::table`], which rescans the
    /// data set, so the cost is O(table count × average table size). With
    /// repeated names, each occurrence resolves to the first table of that
    /// name on both sides.
    fn matches(&self, other: &dyn DataSet) -> bool {
        let mut this_names = self.table_names();
        let mut other_names = other.table_names();

        this_names.sort();
        other_names.sort();

        if this_names != other_names {
            debug!("Table names differ: {:?} vs {:?}", this_names, other_names);
            return false;
        }

        for table_name in &this_names {
            let (Some(this_table), Some(other_table)) =
                (self.table(table_name), other.table(table_name))
            else {
                return false;
            };

            if !this_table.matches(other_table) {
                debug!("Table '{}' content differs", table_name);
                return false;
            }
        }

        true
    }

    /// Concatenates the rendering of every table in forward order.
    fn to_display_string(&self) -> String {
        self.iter().map(|table| table.render()).collect()
    }
}

macro_rules! forward_data_set {
    ($($ty:ty),*) => {$(
        impl<T: DataSet + ?Sized> DataSet for $ty {
            fn create_iterator(&self, reverse: bool) -> TableIterator<'_> {
                (**self).create_iterator(reverse)
            }

            fn table_names(&self) -> Vec<String> {
                (**self).table_names()
            }

            fn table_meta_data(&self, table_name: &str) -> Option<&dyn TableMetaData> {
                (**self).table_meta_data(table_name)
            }

            fn table(&self, table_name: &str) -> Option<&dyn Table> {
                (**self).table(table_name)
            }

            fn matches(&self, other: &dyn DataSet) -> bool {
                (**self).matches(other)
            }

            fn to_display_string(&self) -> String {
                (**self).to_display_string()
            }
        }
    )*};
}

forward_data_set!(&T, Box<T>);
