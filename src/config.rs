//! Settings for one run, and the run itself
//!
//!```
//! use colsort::prelude::*;
//! let mut config = SortConfig::new();
//! config.input = Some("<<name,val\\nb,2\\na,1".to_string());
//! config.header = true;
//! config.quiet = true;
//! let mut out = Vec::new();
//! config.run(&mut out)?;
//! assert_eq!(out, b"name,val\na,1\nb,2\n");
//! # Ok::<(), colsort::Error>(())
//!```

use crate::format::format_table;
use crate::sink::write_file;
use crate::sort::SortSpec;
use crate::source::Lines;
use crate::table::Table;
use crate::util::Result;
use std::io::Write;
use tracing::debug;

/// Everything the command line can ask for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortConfig {
    /// input name as for `get_reader`, standard input if None
    pub input: Option<String>,
    /// copy of the sorted text goes here, if Some
    pub output: Option<String>,
    /// zero-based sort column
    pub column: usize,
    /// first line is a header
    pub header: bool,
    /// sort largest first
    pub reverse: bool,
    /// no banner on standard output
    pub quiet: bool,
}

impl SortConfig {
    /// new
    pub fn new() -> Self {
        Self::default()
    }
    /// column and direction
    pub const fn spec(&self) -> SortSpec {
        SortSpec::new(self.column, self.reverse)
    }
    /// Read the whole input. The input file is closed before this returns.
    pub fn read_table(&self) -> Result<Table> {
        let lines = match &self.input {
            Some(name) => Lines::open(name)?,
            None => Lines::stdin()?,
        };
        Table::read(lines, self.header)
    }
    /// Read, sort and format. The result is empty for empty input.
    pub fn sorted_text(&self) -> Result<Vec<u8>> {
        let mut table = self.read_table()?;
        self.spec().sort(&mut table)?;
        Ok(format_table(&table))
    }
    /// Do the whole job, writing to `w` and maybe to the output file.
    pub fn run(&self, w: &mut impl Write) -> Result<()> {
        if !self.quiet {
            w.write_all(b"== Started ==\n")?;
        }
        let text = self.sorted_text()?;
        if text.is_empty() {
            debug!("nothing to write");
        } else {
            if !self.quiet {
                w.write_all(b"sorted result:\n")?;
            }
            w.write_all(&text)?;
            if let Some(name) = &self.output {
                write_file(name, &text)?;
            }
        }
        if !self.quiet {
            w.write_all(b"== Finished ==\n")?;
        }
        w.flush()?;
        Ok(())
    }
}
