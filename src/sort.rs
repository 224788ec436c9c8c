//! Sort the rows of a table by one column
//!
//! Columns are compared as raw bytes, so "10" sorts before "9".
//!
//!```
//! use colsort::prelude::*;
//! let lines = ["b,2", "a,1", "c,3"].iter().map(|x| Ok(x.as_bytes().to_vec()));
//! let mut table = Table::read(lines, false)?;
//! SortSpec::new(0, true).sort(&mut table)?;
//! assert_eq!(format_table(&table), b"c,3\nb,2\na,1\n");
//! # Ok::<(), colsort::Error>(())
//!```

use crate::table::{Row, Table};
use crate::util::{Error, Result};
use std::cmp::Ordering;
use tracing::debug;

/// Which column to sort by, and in which direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    /// zero-based column
    pub column: usize,
    /// largest first
    pub reverse: bool,
}

impl SortSpec {
    /// new
    pub const fn new(column: usize, reverse: bool) -> Self {
        Self { column, reverse }
    }
    /// Fail if the column is not present in rows of this table.
    /// A table that has seen no lines has no width, and anything goes.
    pub fn check(&self, table: &Table) -> Result<()> {
        match table.width() {
            Some(width) if self.column >= width => Err(Error::InvalidColumn {
                column: self.column,
                width,
            }),
            _ => Ok(()),
        }
    }
    /// Compare two rows. Missing columns compare as empty, which `check` rules out.
    pub fn comp(&self, left: &Row, right: &Row) -> Ordering {
        let l = left.get(self.column).unwrap_or_default();
        let r = right.get(self.column).unwrap_or_default();
        if self.reverse {
            r.cmp(l)
        } else {
            l.cmp(r)
        }
    }
    /// sort the rows of the table in place. The header is never moved.
    pub fn sort(&self, table: &mut Table) -> Result<()> {
        self.check(table)?;
        debug!(column = self.column, reverse = self.reverse, rows = table.len(), "sorting");
        table.rows_mut().sort_by(|a, b| self.comp(a, b));
        Ok(())
    }
}
