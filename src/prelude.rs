//! The prelude

#[doc(inline)]
pub use crate::config::SortConfig;
#[doc(inline)]
pub use crate::format::{format_table, write_table};
#[doc(inline)]
pub use crate::sort::SortSpec;
#[doc(inline)]
pub use crate::source::Lines;
#[doc(inline)]
pub use crate::table::{Row, Table, DELIM};
#[doc(inline)]
pub use crate::util::{get_reader, get_writer, Error, Result};
#[doc(inline)]
pub use crate::err;
