use std::io::{self, BufWriter, Stdout, Write};

use crate::{print::Printer, Error, Result};

/// Writes to the standard output of the process.
#[derive(Debug, Default)]
pub struct StdOutPrinter {
    out: Option<BufWriter<Stdout>>,
}

impl StdOutPrinter {
    /// A closed printer
    #[must_use]
    pub fn new() -> Self {
        StdOutPrinter::default()
    }
}

impl Printer for StdOutPrinter {
    fn open(&mut self) -> Result<()> {
        if self.out.is_none() {
            self.out = Some(BufWriter::new(io::stdout()));
        }
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        match self.out.as_mut() {
            Some(out) => Ok(out.write_all(text.as_bytes())?),
            None => Err(Error::SinkState("print on a closed stdout printer")),
        }
    }

    fn close(&mut self) -> Result<()> {
        match self.out.take() {
            Some(mut out) => Ok(out.flush()?),
            None => Ok(()),
        }
    }

    fn is_open(&self) -> bool {
        self.out.is_some()
    }
}
