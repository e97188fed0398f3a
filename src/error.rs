use std::path::PathBuf;

use thiserror::Error;

use crate::metadata::MemberKind;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The variants fall into two groups. Most are fatal to the current run and are propagated to
/// the caller as-is. [`Error::Archive`], [`Error::ClassNotFound`], [`Error::Resolution`] and
/// [`Error::Malformed`] are recoverable: the class path scanner and the
/// [`crate::Analyzer`] log them and continue with the next archive or class.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::SourceIo`] - A name-list or path-list file could not be read
/// - [`Error::Archive`] - A single archive on a class path could not be opened or parsed
/// - [`Error::Catalog`] - A class catalog could not be decoded
///
/// ## Resolution Errors
/// - [`Error::ClassNotFound`] - The resolver does not know the class
/// - [`Error::Resolution`] - The resolver failed for any other reason
/// - [`Error::Malformed`] - Class metadata handed to the library is inconsistent
///
/// ## Contract Errors
/// - [`Error::UnsupportedMember`] - A renderer received a member kind it cannot render
/// - [`Error::SinkState`] - A printer was used outside of its open state
/// - [`Error::NotSupported`] / [`Error::IllegalState`] - Cursor misuse
///
/// # Examples
///
/// ```rust
/// use jlscope::{Error, source::{NameFile, NameSource}};
///
/// let source = NameFile::new("does/not/exist.txt");
/// let result = source.names();
/// match result {
///     Err(Error::SourceIo { path, .. }) => println!("cannot read {}", path.display()),
///     Err(e) => println!("other error: {e}"),
///     Ok(_) => {}
/// };
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A name-list or path-list file could not be read.
    ///
    /// Raised before any output is produced; aborts the run.
    #[error("Failed to read {}: {source}", path.display())]
    SourceIo {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A single archive on a class path could not be opened or parsed.
    ///
    /// The class path scanner logs this and continues with the next entry.
    #[error("Archive {}: {message}", path.display())]
    Archive {
        /// The archive that failed
        path: PathBuf,
        /// Description of the failure
        message: String,
    },

    /// The resolver does not know the requested class.
    #[error("Class not found - {0}")]
    ClassNotFound(String),

    /// The resolver failed for the requested class.
    #[error("Failed to resolve {name}: {message}")]
    Resolution {
        /// The class name that failed to resolve
        name: String,
        /// Description of the failure
        message: String,
    },

    /// Class metadata is damaged or inconsistent.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A class catalog could not be decoded.
    #[error("{0}")]
    Catalog(#[from] serde_json::Error),

    /// A renderer was handed a member kind it does not handle.
    ///
    /// This is a contract violation between the member filter and the renderer and is
    /// never swallowed.
    #[error("{formatter} does not support {kind} members")]
    UnsupportedMember {
        /// The renderer that rejected the member
        formatter: &'static str,
        /// The kind of member that was rejected
        kind: MemberKind,
    },

    /// A printer was used while it was not open.
    #[error("Printer state error - {0}")]
    SinkState(&'static str),

    /// The requested operation is not supported by this cursor.
    #[error("This operation is not supported")]
    NotSupported,

    /// The operation is not valid in the current cursor state.
    #[error("Illegal state - {0}")]
    IllegalState(&'static str),

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while writing output or reading archives.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for errors confined to a single class or archive.
    ///
    /// [`crate::Analyzer`] logs and skips classes whose resolution fails with such an error;
    /// any other error aborts the run.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Archive { .. }
                | Error::ClassNotFound(_)
                | Error::Resolution { .. }
                | Error::Malformed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_variants() {
        assert!(Error::ClassNotFound("a.B".into()).is_recoverable());
        assert!(malformed_error!("bad {}", 1).is_recoverable());
        assert!(!Error::SinkState("closed").is_recoverable());
        assert!(!Error::UnsupportedMember {
            formatter: "PscoutFormatter",
            kind: MemberKind::Field
        }
        .is_recoverable());
    }

    #[test]
    fn malformed_carries_location() {
        let err = malformed_error!("missing name");
        match err {
            Error::Malformed { message, file, .. } => {
                assert_eq!(message, "missing name");
                assert!(file.ends_with("error.rs"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
