//! The pipeline driver: names in, rendered classes out.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    filter::MemberFilterRc,
    format::{ClassFormatter, OutputType},
    print::{FilePrinter, Printer, PrinterGuard},
    resolver::Session,
    source::NameSource,
    Result,
};

/// Counters of a single [`Analyzer::print`] run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Classes that were resolved
    pub resolved: usize,
    /// Classes skipped because they could not be resolved
    pub skipped: usize,
    /// Resolved classes without a qualifying member
    pub empty: usize,
    /// Classes written to the printer
    pub written: usize,
}

/// Drives the pipeline: for every name of a [`NameSource`], resolve the class through the
/// [`Session`], render it with a [`ClassFormatter`] and write the result to a [`Printer`].
///
/// # Examples
///
/// ```rust
/// use jlscope::{
///     filter::MemberFilter,
///     format::PscoutFormatter,
///     print::StdOutPrinter,
///     resolver::{CatalogResolver, Session},
///     source::ClassNames,
///     Analyzer,
/// };
///
/// let mut analyzer = Analyzer::new(Session::new(CatalogResolver::new()));
/// let source = ClassNames::new(["pkg.Unknown"]);
/// let formatter = PscoutFormatter::new(Some(MemberFilter::Visible.rc()));
///
/// let summary = analyzer.print(&source, &formatter, &mut StdOutPrinter::new())?;
/// assert_eq!(summary.skipped, 1);
/// # Ok::<(), jlscope::Error>(())
/// ```
pub struct Analyzer {
    session: Session,
}

impl Analyzer {
    /// Create an analyzer on an open resolver session
    pub fn new(session: Session) -> Self {
        Analyzer { session }
    }

    /// The resolver session
    pub fn session(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Render every class of `source` to `printer`.
    ///
    /// The printer is opened after the names have been obtained and closed exactly once,
    /// whatever the outcome. Classes that fail to resolve with a recoverable error (see
    /// [`crate::Error::is_recoverable`]) are logged and skipped.
    ///
    /// # Errors
    /// Returns [`crate::Error::SourceIo`] before anything is written if the source cannot be
    /// read. Any other resolver error, as well as rendering and printer errors, abort the run.
    pub fn print(
        &mut self,
        source: &dyn NameSource,
        formatter: &dyn ClassFormatter,
        printer: &mut dyn Printer,
    ) -> Result<Summary> {
        let names = source.names()?;
        let mut summary = Summary::default();

        let mut out = PrinterGuard::new(printer)?;
        let header = formatter.header();
        if !header.is_empty() {
            out.print(&header)?;
        }

        for name in names {
            let class = match self.session.resolve(&name) {
                Ok(class) => class,
                Err(error) if error.is_recoverable() => {
                    log::warn!("Skipping {}: {}", name, error);
                    summary.skipped += 1;
                    continue;
                }
                Err(error) => return Err(error),
            };
            summary.resolved += 1;

            match formatter.format(&class)? {
                Some(text) => {
                    out.print(&text)?;
                    summary.written += 1;
                }
                None => {
                    log::debug!("No qualifying members in {}", name);
                    summary.empty += 1;
                }
            }
        }

        out.finish()?;

        log::info!(
            "{}: {} classes written, {} without members, {} skipped",
            source.name(),
            summary.written,
            summary.empty,
            summary.skipped
        );
        Ok(summary)
    }

    /// Render `source` into a file in `dir` named after the source and the formatter, see
    /// [`file_name`]. Returns the path of the file.
    ///
    /// # Errors
    /// See [`Analyzer::print`].
    pub fn print_to_file(
        &mut self,
        source: &dyn NameSource,
        formatter: &dyn ClassFormatter,
        dir: &Path,
    ) -> Result<(PathBuf, Summary)> {
        let mut printer = FilePrinter::in_dir(dir, &file_name(source, formatter));
        let summary = self.print(source, formatter, &mut printer)?;
        Ok((printer.path().to_path_buf(), summary))
    }

    /// Render `source` with the renderer for `output` and the member filter `filter`.
    ///
    /// # Errors
    /// See [`Analyzer::print`].
    pub fn print_output(
        &mut self,
        source: &dyn NameSource,
        output: OutputType,
        filter: Option<MemberFilterRc>,
        printer: &mut dyn Printer,
    ) -> Result<Summary> {
        let formatter = output.formatter(filter);
        self.print(source, formatter.as_ref(), printer)
    }

    /// End the run and close the resolver session
    pub fn close(self) {
        self.session.close();
    }
}

/// Output file name for `source` rendered by `formatter`:
/// `<source tag>[_<suffix>]<extension>`, e.g. `LIST_VISIBLE.pscout`.
pub fn file_name(source: &dyn NameSource, formatter: &dyn ClassFormatter) -> String {
    let suffix = formatter.filename_suffix();
    if suffix.is_empty() {
        format!("{}{}", source.name(), formatter.file_extension())
    } else {
        format!(
            "{}_{}{}",
            source.name(),
            suffix,
            formatter.file_extension()
        )
    }
}
