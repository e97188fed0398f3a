//! Access to class archives (`.jar` / `.zip`) on a class path.
//!
//! An [`Archive`] is a thin wrapper around a zip reader on top of a byte [`Backend`]: either
//! a memory-mapped file on disk or a buffer already held in memory. The only thing the
//! pipeline needs from an archive is the list of class names it contains, see
//! [`Archive::class_names`].

mod memory;
mod physical;

use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use zip::ZipArchive;

use crate::{filter::Filter, Error, Result};
use memory::Memory;
use physical::Physical;

/// File name suffix of class file entries
pub const CLASS_FILE_SUFFIX: &str = ".class";

/// Source of the raw archive bytes.
pub trait Backend {
    /// The complete archive contents
    fn data(&self) -> &[u8];

    /// Size of the archive in bytes
    fn len(&self) -> usize;
}

/// A class archive
pub struct Archive {
    path: PathBuf,
    data: Box<dyn Backend>,
}

impl Archive {
    /// Map the archive at `path` into memory.
    ///
    /// # Errors
    /// Returns [`Error::Archive`] if the file cannot be opened, mapped, or is empty.
    pub fn from_file(path: &Path) -> Result<Archive> {
        let input = Physical::new(path).map_err(|error| Error::Archive {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

        Self::load(path.to_path_buf(), input)
    }

    /// Use an archive already held in memory. `label` is only used for diagnostics.
    ///
    /// # Errors
    /// Returns [`Error::Archive`] if `data` is empty.
    pub fn from_mem(label: impl Into<PathBuf>, data: Vec<u8>) -> Result<Archive> {
        Self::load(label.into(), Memory::new(data))
    }

    fn load<T: Backend + 'static>(path: PathBuf, data: T) -> Result<Archive> {
        if data.len() == 0 {
            return Err(Error::Archive {
                path,
                message: "archive is empty".to_string(),
            });
        }

        Ok(Archive {
            path,
            data: Box::new(data),
        })
    }

    /// Path (or label) of this archive
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all classes in this archive that are accepted by `filter`, in entry order.
    ///
    /// Entries ending in `.class` are converted to dotted class names (`java/lang/Object.class`
    /// becomes `java.lang.Object`). Directory entries and other resources are ignored. An
    /// entry whose header cannot be read is logged and skipped.
    ///
    /// # Errors
    /// Returns [`Error::Archive`] if the data is not a readable zip archive.
    pub fn class_names(&self, filter: &dyn Filter<str>) -> Result<Vec<String>> {
        let mut archive =
            ZipArchive::new(Cursor::new(self.data.data())).map_err(|error| Error::Archive {
                path: self.path.clone(),
                message: error.to_string(),
            })?;

        let mut names = Vec::new();
        for index in 0..archive.len() {
            let entry = match archive.by_index_raw(index) {
                Ok(entry) => entry,
                Err(error) => {
                    log::warn!(
                        "Skipping entry {} of {}: {}",
                        index,
                        self.path.display(),
                        error
                    );
                    continue;
                }
            };

            if entry.is_dir() {
                continue;
            }

            if let Some(class_name) = class_name_of(entry.name()) {
                if filter.accept(&class_name) {
                    names.push(class_name);
                }
            }
        }

        Ok(names)
    }
}

/// Convert an archive entry path into a dotted class name, or `None` if the entry is not a
/// class file.
#[must_use]
pub fn class_name_of(entry: &str) -> Option<String> {
    entry
        .strip_suffix(CLASS_FILE_SUFFIX)
        .map(|path| path.replace('/', "."))
}
