//! Guarded file-opening helpers.

use std::fs::File;
use std::path::Path;
use tracing::trace;

use crate::error::Result;
use crate::guard;

/// Open a file for reading.
pub fn open<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();

    let file = File::open(path)?;
    trace!(path = %path.display(), "opened file for reading");

    Ok(file)
}

/// Open a file for reading by name, rejecting a blank name up front.
pub fn open_named(name: &str) -> Result<File> {
    open(guard::ensure_string(name, "Must provide a file name!")?)
}
