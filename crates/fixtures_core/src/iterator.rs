//! Traversals over the tables of a data set.

use crate::Table;
use std::fmt;

/// A lazy, finite traversal over the tables of a data set.
///
/// Every call to `DataSet::iter` or `DataSet::reverse_iter` yields a new
/// `TableIterator`. A traversal is never rewound; asking the data set again
/// is how it restarts.
pub struct TableIterator<'a> {
    tables: Box<dyn Iterator<Item = &'a dyn Table> + 'a>,
}

impl<'a> TableIterator<'a> {
    /// Wraps any iterator over tables.
    pub fn new<I>(tables: I) -> Self
    where
        I: Iterator<Item = &'a dyn Table> + 'a,
    {
        Self {
            tables: Box::new(tables),
        }
    }

    /// Wraps a double-ended iterator, reversing it when `reverse` is true.
    ///
    /// This is the usual body of `DataSet::create_iterator` for data sets
    /// backed by a `Vec`.
    pub fn ordered<I>(tables: I, reverse: bool) -> Self
    where
        I: DoubleEndedIterator<Item = &'a dyn Table> + 'a,
    {
        if reverse {
            Self::new(tables.rev())
        } else {
            Self::new(tables)
        }
    }

    /// A traversal over no tables.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<'a> Iterator for TableIterator<'a> {
    type Item = &'a dyn Table;

    fn next(&mut self) -> Option<Self::Item> {
        self.tables.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tables.size_hint()
    }
}

impl fmt::Debug for TableIterator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableIterator").finish_non_exhaustive()
    }
}
