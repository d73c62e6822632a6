use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use extract_snippet::{extract_with, SnippetConfig, SnippetRequest};
use revision_context::GitBackend;
use snippet_address::parse_address;
use snippet_extractor::DefaultSectionReader;

fn cli() -> Command {
    Command::new("extract_snippet")
        .version("0.1.0")
        .about("Prints a marked section of a source file, indented for embedding in documentation")
        .arg(
            Arg::new("address")
                .help("Shorthand address: file:marker[:root[:revision]] or file:marker[:root=..][:revision=..][:hide=..]")
                .conflicts_with_all(["file", "marker"]),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .num_args(1)
                .requires("marker")
                .help("Source file, relative to the root"),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .num_args(1)
                .requires("file")
                .help("Section marker, as in `#:marker` ... `#:marker end`"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .num_args(1)
                .help("Directory the file is relative to (defaults to $SNIPPET_ROOT or test/docs)"),
        )
        .arg(
            Arg::new("hide")
                .long("hide")
                .num_args(1)
                .help("Collapse `#~token` ... `#~token end` ranges to a placeholder"),
        )
        .arg(
            Arg::new("revision")
                .long("revision")
                .num_args(1)
                .help("Read the file at this git revision, then switch back"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .num_args(1)
                .help("Indentation unit prepended to every line (defaults to $SNIPPET_INDENT or two spaces)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the request from either the positional address or --file/--marker,
/// then applies the remaining flags on top.
fn build_request(matches: &ArgMatches, config: &SnippetConfig) -> Result<SnippetRequest> {
    let mut request = if let Some(address) = matches.get_one::<String>("address") {
        let address = parse_address(address).context("Failed to parse snippet address")?;
        SnippetRequest::from_address(address, config)
    } else if let (Some(file), Some(marker)) = (
        matches.get_one::<String>("file"),
        matches.get_one::<String>("marker"),
    ) {
        SnippetRequest::new(config.default_root.clone(), file, marker.as_str())
    } else {
        bail!("Either an ADDRESS or both --file and --marker are required.");
    };

    if let Some(root) = matches.get_one::<String>("root") {
        request.root = PathBuf::from(root);
    }
    if let Some(hide) = matches.get_one::<String>("hide") {
        request.hide = Some(hide.clone());
    }
    if let Some(revision) = matches.get_one::<String>("revision") {
        request.revision = Some(revision.clone());
    }
    Ok(request)
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let mut config = SnippetConfig::from_env();
    if let Some(indent) = matches.get_one::<String>("indent") {
        config.indent = indent.clone();
    }

    let request = build_request(&matches, &config)?;
    log::debug!("request: {:?}", request);

    let snippet = extract_with(&GitBackend::new(), &DefaultSectionReader, &request, &config.indent)
        .with_context(|| {
            format!(
                "Failed to extract '{}' from {}",
                request.marker,
                request.root.join(&request.file).display()
            )
        })?;

    print!("{}", snippet);
    Ok(())
}
