//! The command line tool `colsort` sorts comma separated lines by one column.
//! The library holds the whole pipeline, so it can be driven without the tool:
//! read lines, build a [`table::Table`], sort it with a [`sort::SortSpec`],
//! format it and write it out.

#![warn(
    absolute_paths_not_starting_with_crate,
    explicit_outlives_requirements,
    keyword_idents,
    noop_method_call,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_numeric_casts,
    trivial_casts,
    unreachable_pub,
    unused_lifetimes,
    unused_extern_crates,
    unused_qualifications,
    clippy::nursery,
    clippy::cargo,
)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod format;
pub mod prelude;
pub mod sink;
pub mod sort;
pub mod source;
pub mod table;
pub mod util;

pub use util::{Error, Result};
