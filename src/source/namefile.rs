use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use crate::{
    source::{read_lines, NameIter, NameSource},
    Result,
};

/// Class names read from a file, one per line.
///
/// The file is read on the first call to [`NameSource::names`] and the contents are reused
/// for every later pass. A failed read is not cached, the next call tries again.
///
/// The cache is a [`OnceCell`], so a `NameFile` can not be shared between threads.
#[derive(Debug)]
pub struct NameFile {
    path: PathBuf,
    names: OnceCell<Vec<String>>,
}

impl NameFile {
    /// Create a source over the file at `path`; nothing is read yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        NameFile {
            path: path.into(),
            names: OnceCell::new(),
        }
    }

    /// The backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn cached(&self) -> Result<&Vec<String>> {
        if let Some(names) = self.names.get() {
            return Ok(names);
        }

        let names = read_lines(&self.path)?;
        log::debug!("Read {} class names from {}", names.len(), self.path.display());
        Ok(self.names.get_or_init(|| names))
    }
}

impl NameSource for NameFile {
    fn names(&self) -> Result<NameIter<'_>> {
        Ok(Box::new(self.cached()?.iter().cloned()))
    }

    fn name(&self) -> String {
        "FILE_C".to_string()
    }
}
