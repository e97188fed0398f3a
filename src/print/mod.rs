//! Output sinks.
//!
//! A [`Printer`] is either CLOSED or OPEN. [`Printer::print`] is only valid while it is open,
//! [`Printer::open`] and [`Printer::close`] may be called any number of times. The
//! [`PrinterGuard`] ties one OPEN phase to a scope, so a run closes its sink on every exit
//! path.
//!
//! - [`FilePrinter`]: buffered output to a file, created on open
//! - [`StdOutPrinter`]: standard output

mod file;
mod stdout;

use crate::Result;

pub use file::FilePrinter;
pub use stdout::StdOutPrinter;

/// A sink for rendered text.
pub trait Printer {
    /// Acquire the underlying resource. Does nothing if already open.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the resource cannot be acquired.
    fn open(&mut self) -> Result<()>;

    /// Write `text` as is.
    ///
    /// # Errors
    /// Returns [`crate::Error::SinkState`] if the printer is not open, or
    /// [`crate::Error::FileError`] if writing fails.
    fn print(&mut self, text: &str) -> Result<()>;

    /// Flush and release the underlying resource. Does nothing if already closed.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if pending output cannot be flushed.
    fn close(&mut self) -> Result<()>;

    /// `true` while the printer is open
    fn is_open(&self) -> bool;
}

/// Keeps a [`Printer`] open for the lifetime of the guard.
///
/// The printer is opened by [`PrinterGuard::new`] and closed by [`PrinterGuard::finish`], or
/// when the guard is dropped. A close failure on drop can only be logged, so the regular
/// path should always end with `finish`.
pub struct PrinterGuard<'a> {
    printer: &'a mut dyn Printer,
    finished: bool,
}

impl<'a> PrinterGuard<'a> {
    /// Open `printer`
    ///
    /// # Errors
    /// See [`Printer::open`].
    pub fn new(printer: &'a mut dyn Printer) -> Result<Self> {
        printer.open()?;
        Ok(PrinterGuard {
            printer,
            finished: false,
        })
    }

    /// Write `text` to the guarded printer
    ///
    /// # Errors
    /// See [`Printer::print`].
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.printer.print(text)
    }

    /// Close the printer and report the outcome
    ///
    /// # Errors
    /// See [`Printer::close`].
    pub fn finish(mut self) -> Result<()> {
        self.finished = true;
        self.printer.close()
    }
}

impl Drop for PrinterGuard<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        if let Err(error) = self.printer.close() {
            log::warn!("Failed to close printer: {}", error);
        }
    }
}
