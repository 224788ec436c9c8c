//! Where sorted text goes

use crate::util::{get_writer, Result};
use std::io::Write;
use tracing::info;

/// Create or truncate the named file and write `text` to it.
/// The file is flushed and closed before returning, whether or not the write succeeded.
pub fn write_file(name: &str, text: &[u8]) -> Result<()> {
    let mut w = get_writer(name)?;
    w.write_all(text)?;
    w.flush()?;
    info!(file = name, bytes = text.len(), "output written");
    Ok(())
}
