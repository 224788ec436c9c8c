//! Rows split into columns, and the in-memory table built from them.
//!
//! Splitting is naive: every delimiter starts a new column, there is no quoting or escaping.
//!```
//! use colsort::table::Row;
//! let row = Row::new(b"one,two,,four".to_vec(), b',');
//! assert_eq!(row.len(), 4);
//! assert_eq!(row.get(1), Some(&b"two"[..]));
//! assert_eq!(row.get(2), Some(&b""[..]));
//! assert_eq!(row.get(4), None);
//!```

use crate::util::{Error, Result};
use tracing::debug;

/// The column delimiter
pub const DELIM: u8 = b',';

/// Location of one column within a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FieldSpan {
    begin: usize,
    end: usize,
}

/// One line of input, broken into columns. The line does not include the newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    line: Vec<u8>,
    parts: Vec<FieldSpan>,
}

impl Row {
    /// split a line into columns
    pub fn new(line: Vec<u8>, delim: u8) -> Self {
        let mut parts = Vec::new();
        let mut begin = 0;
        for end in memchr::memchr_iter(delim, &line) {
            parts.push(FieldSpan { begin, end });
            begin = end + 1;
        }
        parts.push(FieldSpan {
            begin,
            end: line.len(),
        });
        Self { line, parts }
    }
    /// How many columns in the row
    pub fn len(&self) -> usize {
        self.parts.len()
    }
    /// no columns at all. Rows made by [`Row::new`] have at least one, possibly empty.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
    /// Get one column
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.parts.get(index).map(|x| &self.line[x.begin..x.end])
    }
    /// the whole line
    pub fn line(&self) -> &[u8] {
        &self.line
    }
    /// Iterator over columns
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.parts.iter().map(|x| &self.line[x.begin..x.end])
    }
}

/// The header line and data rows of one input
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Option<Vec<u8>>,
    rows: Vec<Row>,
    width: Option<usize>,
    delim: u8,
}

impl Table {
    /// new empty table
    pub const fn new(delim: u8) -> Self {
        Self {
            header: None,
            rows: Vec::new(),
            width: None,
            delim,
        }
    }
    /// Build a table from a sequence of lines.
    ///
    /// The first line sets the number of columns. With `has_header` it is kept verbatim
    /// as the header rather than as a row, even when it is empty.
    /// Otherwise an empty line ends the table, and no further lines are read.
    pub fn read<I>(lines: I, has_header: bool) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Vec<u8>>>,
    {
        let mut table = Self::new(DELIM);
        for (num, line) in lines.into_iter().enumerate() {
            let line = line?;
            if num == 0 && has_header {
                table.set_header(line);
                continue;
            }
            if line.is_empty() {
                break;
            }
            table.push(Row::new(line, DELIM), num + 1)?;
        }
        debug!(
            rows = table.len(),
            width = table.width,
            header = table.header.is_some(),
            "table read"
        );
        Ok(table)
    }
    /// Store the header line, which also fixes the width of the table.
    /// An empty header is one column wide, and is not written out.
    pub fn set_header(&mut self, line: Vec<u8>) {
        let row = Row::new(line, self.delim);
        self.width = Some(row.len());
        self.header = if row.line.is_empty() {
            None
        } else {
            Some(row.line)
        };
    }
    /// Append a row, which must match the width of the table.
    /// `line_num` is only used for reporting.
    pub fn push(&mut self, row: Row, line_num: usize) -> Result<()> {
        match self.width {
            None => self.width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(Error::MalformedRow {
                    line: line_num,
                    found: row.len(),
                    expected,
                });
            }
            Some(_) => {}
        }
        self.rows.push(row);
        Ok(())
    }
    /// header line, if any
    pub fn header(&self) -> Option<&[u8]> {
        self.header.as_deref()
    }
    /// data rows, in current order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }
    /// number of columns, once the first line has been seen
    pub const fn width(&self) -> Option<usize> {
        self.width
    }
    /// column delimiter
    pub const fn delim(&self) -> u8 {
        self.delim
    }
    /// number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    /// no data rows?
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(data: &[&str]) -> Vec<Result<Vec<u8>>> {
        data.iter().map(|x| Ok(x.as_bytes().to_vec())).collect()
    }

    #[test]
    fn split() {
        let row = Row::new(b"a,b,c".to_vec(), DELIM);
        assert_eq!(row.iter().collect::<Vec<_>>(), vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
        let row = Row::new(b"a,".to_vec(), DELIM);
        assert_eq!(row.len(), 2);
        assert_eq!(row.get(1), Some(&b""[..]));
        let row = Row::new(Vec::new(), DELIM);
        assert_eq!(row.len(), 1);
        assert!(!row.is_empty());
        let row = Row::new(b"\"x,y\",z".to_vec(), DELIM);
        assert_eq!(row.len(), 3);
        assert_eq!(row.line(), b"\"x,y\",z");
    }

    #[test]
    fn read_rows() {
        let t = Table::read(lines(&["b,2", "a,1", "c,3"]), false).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.width(), Some(2));
        assert!(t.header().is_none());
        assert_eq!(t.rows()[0].get(0), Some(&b"b"[..]));
    }

    #[test]
    fn read_header() {
        let t = Table::read(lines(&["name,val", "b,2", "a,1"]), true).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.header(), Some(&b"name,val"[..]));
        assert_eq!(t.width(), Some(2));
    }

    #[test]
    fn header_sets_width() {
        let e = Table::read(lines(&["name,val,x", "b,2"]), true).unwrap_err();
        assert!(matches!(
            e,
            Error::MalformedRow {
                line: 2,
                found: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn mismatch() {
        let e = Table::read(lines(&["a,1,2", "b,3"]), false).unwrap_err();
        assert!(matches!(
            e,
            Error::MalformedRow {
                line: 2,
                found: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn empty_line_ends_table() {
        let t = Table::read(lines(&["a,1", "", "b,2,3"]), false).unwrap();
        assert_eq!(t.len(), 1);
        let t = Table::read(lines(&["", "a,1"]), false).unwrap();
        assert!(t.is_empty());
        assert!(t.header().is_none());
        assert_eq!(t.width(), None);
        let t = Table::read(lines(&["name,val", "b,2", "", "a,1"]), true).unwrap();
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn empty_first_line_is_header() {
        let t = Table::read(lines(&["", "b", "a"]), true).unwrap();
        assert_eq!(t.len(), 2);
        assert!(t.header().is_none());
        assert_eq!(t.width(), Some(1));

        let e = Table::read(lines(&["", "b,2", "a,1"]), true).unwrap_err();
        assert!(matches!(
            e,
            Error::MalformedRow {
                line: 2,
                found: 2,
                expected: 1
            }
        ));
    }

    #[test]
    fn empty_input() {
        let t = Table::read(Vec::<Result<Vec<u8>>>::new(), true).unwrap();
        assert!(t.is_empty());
        assert!(t.header().is_none());
    }

    #[test]
    fn read_error_passes_through() {
        let input: Vec<Result<Vec<u8>>> = vec![
            Ok(b"a,1".to_vec()),
            Err(std::io::Error::from(std::io::ErrorKind::InvalidData).into()),
        ];
        assert!(matches!(
            Table::read(input, false),
            Err(Error::IoError(_))
        ));
    }
}
