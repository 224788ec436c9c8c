//! A single pass over the lines of an input, from standard input or a file.
//!
//! Lines come back without their line ending, empty lines included.
//! [`Table::read`](crate::table::Table::read) stops pulling lines at the first empty one.
//!
//!```
//! use colsort::source::Lines;
//! let lines = Lines::open("<<b,2\\na,1\\n\\nc,3")?;
//! let v = lines.collect::<colsort::Result<Vec<_>>>()?;
//! assert_eq!(v, vec![b"b,2".to_vec(), b"a,1".to_vec(), b"".to_vec(), b"c,3".to_vec()]);
//! # Ok::<(), colsort::Error>(())
//!```

use crate::util::{get_reader, Infile, Result};
use std::io::BufRead;

/// Lines of text, finite and not restartable
#[derive(Debug)]
pub struct Lines<R: BufRead> {
    file: R,
    line_num: usize,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    /// read lines from any buffered reader
    pub const fn new(file: R) -> Self {
        Self {
            file,
            line_num: 0,
            done: false,
        }
    }
    /// number of lines returned so far
    pub const fn line_num(&self) -> usize {
        self.line_num
    }
    /// has the end of input, or a read error, been reached
    pub const fn is_done(&self) -> bool {
        self.done
    }
}

impl Lines<Infile> {
    /// Interactive source, reading standard input
    pub fn stdin() -> Result<Self> {
        Self::open("-")
    }
    /// Source named as for [`get_reader`]. The file is closed when the `Lines` is dropped.
    pub fn open(name: &str) -> Result<Self> {
        Ok(Self::new(get_reader(name)?))
    }
}

/// remove trailing newline, if present, then trailing carriage return, if present
fn chomp(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<Vec<u8>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line = Vec::new();
        match self.file.read_until(b'\n', &mut line) {
            Err(e) => {
                self.done = true;
                Some(Err(e.into()))
            }
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                chomp(&mut line);
                self.line_num += 1;
                Some(Ok(line))
            }
        }
    }
}
