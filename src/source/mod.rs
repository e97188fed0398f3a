//! Where class names come from.
//!
//! A [`NameSource`] produces an ordered, repeatable sequence of fully qualified class names
//! and carries a short tag ([`NameSource::name`]) that becomes the stem of the output file
//! name.
//!
//! # Sources
//! - [`ClassNames`]: a literal list (`LIST`)
//! - [`NameFile`]: a file with one class name per line (`FILE_C`)
//! - [`ClassPath`]: all classes in the archives of a class path (`CP-<filter>`)
//!
//! # Examples
//!
//! ```rust
//! use jlscope::source::{ClassNames, NameSource};
//!
//! let source = ClassNames::new(["java.lang.Object", "java.lang.String"]);
//! let names: Vec<String> = source.names()?.collect();
//! assert_eq!(names, ["java.lang.Object", "java.lang.String"]);
//! assert_eq!(source.name(), "LIST");
//! # Ok::<(), jlscope::Error>(())
//! ```

mod classpath;
mod namefile;

use std::{fs, path::Path};

use crate::{Error, Result};

pub use classpath::{ClassPath, BOOT_CLASSPATH_VAR};
pub use namefile::NameFile;

/// Iterator over the class names of a [`NameSource`]
pub type NameIter<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// An ordered, repeatable sequence of class names.
pub trait NameSource {
    /// Start a new pass over the names of this source.
    ///
    /// # Errors
    /// Returns [`Error::SourceIo`] if a backing file cannot be read.
    fn names(&self) -> Result<NameIter<'_>>;

    /// A short, deterministic tag used to build output file names.
    fn name(&self) -> String;
}

/// A literal list of class names
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassNames {
    names: Vec<String>,
}

impl ClassNames {
    /// Create a source over the given names, kept in order
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ClassNames {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl NameSource for ClassNames {
    fn names(&self) -> Result<NameIter<'_>> {
        Ok(Box::new(self.names.iter().cloned()))
    }

    fn name(&self) -> String {
        "LIST".to_string()
    }
}

/// Read `path` as UTF-8 and split it into lines. Line content is not trimmed.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::SourceIo {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn literal_list_is_repeatable() {
        let source = ClassNames::new(vec!["b.B".to_string(), "a.A".to_string()]);
        let first: Vec<String> = source.names().unwrap().collect();
        let second: Vec<String> = source.names().unwrap().collect();
        assert_eq!(first, vec!["b.B", "a.A"]);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_list() {
        let source = ClassNames::default();
        assert_eq!(source.names().unwrap().count(), 0);
    }

    #[test]
    fn lines_are_literal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"a.A\n b.B \n\nc.C").unwrap();
        file.flush().unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["a.A", " b.B ", "", "c.C"]);
    }
}
