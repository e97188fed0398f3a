use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{print::Printer, Error, Result};

/// Writes to a file through a [`BufWriter`].
///
/// The file is created (or truncated) on [`Printer::open`], not on construction.
#[derive(Debug)]
pub struct FilePrinter {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FilePrinter {
    /// A printer for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FilePrinter {
            path: path.into(),
            writer: None,
        }
    }

    /// A printer for the file `name` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>, name: &str) -> Self {
        FilePrinter::new(dir.as_ref().join(name))
    }

    /// The output file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Printer for FilePrinter {
    fn open(&mut self) -> Result<()> {
        if self.writer.is_none() {
            let file = File::create(&self.path)?;
            log::debug!("Writing to {}", self.path.display());
            self.writer = Some(BufWriter::new(file));
        }
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        match self.writer.as_mut() {
            Some(writer) => Ok(writer.write_all(text.as_bytes())?),
            None => Err(Error::SinkState("print on a closed file printer")),
        }
    }

    fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(mut writer) => Ok(writer.flush()?),
            None => Ok(()),
        }
    }

    fn is_open(&self) -> bool {
        self.writer.is_some()
    }
}
