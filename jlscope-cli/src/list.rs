use std::path::{Path, PathBuf};

use anyhow::Context;
use jlscope::{
    filter::{BasicFilter, MemberFilter, NameFilter},
    format::OutputType,
    print::StdOutPrinter,
    resolver::{CatalogResolver, Session},
    source::{ClassNames, ClassPath, NameFile, NameSource},
    Analyzer,
};

use crate::app::Cli;

/// Select the name source requested on the command line, along with its class path.
fn source(cli: &Cli) -> anyhow::Result<(Box<dyn NameSource>, Vec<PathBuf>)> {
    if cli.boot {
        let classpath = ClassPath::boot(BasicFilter::all::<str>());
        let paths = classpath.paths().to_vec();
        return Ok((Box::new(classpath), paths));
    }

    if let Some(file) = &cli.file {
        return Ok((Box::new(NameFile::new(file)), Vec::new()));
    }

    if let Some(file) = &cli.classpath_file {
        let filter = if cli.jdk_only {
            NameFilter::Jdk.rc()
        } else {
            BasicFilter::all::<str>()
        };
        let classpath = ClassPath::from_path_file(file, filter)
            .with_context(|| format!("failed to read class path file: {}", file.display()))?;
        let paths = classpath.paths().to_vec();
        return Ok((Box::new(classpath), paths));
    }

    Ok((
        Box::new(ClassNames::new(cli.classes.iter().cloned())),
        Vec::new(),
    ))
}

/// Open the resolver session on the given catalogs.
fn session(cli: &Cli, classpath: &[PathBuf]) -> anyhow::Result<Session> {
    if cli.catalogs.is_empty() {
        log::warn!("No class catalog given, no class can be resolved");
    }

    let resolver = CatalogResolver::from_files(&cli.catalogs)
        .context("failed to load class catalogs")?;
    log::debug!("{} classes in catalogs", resolver.len());

    let mut session = Session::new(resolver);
    if !classpath.is_empty() {
        session.set_classpath(classpath);
    }
    Ok(session)
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let (source, classpath) = source(cli)?;
    log::debug!("Listing {}", source.name());

    // the boot listing always uses the detailed CSV of visible members
    let (output, filter) = if cli.boot {
        (OutputType::CsvDetail, MemberFilter::Visible)
    } else {
        (cli.format, cli.filter)
    };
    let formatter = output.formatter(Some(filter.rc()));

    let mut analyzer = Analyzer::new(session(cli, &classpath)?);

    let summary = if cli.stdout {
        analyzer
            .print(source.as_ref(), formatter.as_ref(), &mut StdOutPrinter::new())
            .context("failed to list classes")?
    } else {
        let dir = cli.output_dir.as_deref().unwrap_or(Path::new("."));
        let (path, summary) = analyzer
            .print_to_file(source.as_ref(), formatter.as_ref(), dir)
            .with_context(|| format!("failed to write listing to {}", dir.display()))?;
        log::info!("Wrote {}", path.display());
        summary
    };

    analyzer.close();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
