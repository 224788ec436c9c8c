//! Turn a table back into delimited text

use crate::table::Table;
use std::io::{self, Write};

#[must_use]
/// Header, if any, then each row, each followed by a newline.
/// Empty if the table has no header and no rows.
pub fn format_table(table: &Table) -> Vec<u8> {
    let mut ret = Vec::new();
    if let Some(header) = table.header() {
        ret.extend_from_slice(header);
        ret.push(b'\n');
    }
    for row in table.rows() {
        for (i, col) in row.iter().enumerate() {
            if i > 0 {
                ret.push(table.delim());
            }
            ret.extend_from_slice(col);
        }
        ret.push(b'\n');
    }
    ret
}

/// as `format_table`, but written straight to `w`
pub fn write_table(table: &Table, w: &mut impl Write) -> io::Result<()> {
    w.write_all(&format_table(table))
}
