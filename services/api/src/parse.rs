use clap::Args;
use rea_transmorgrifier::config::AppConfig;
use rea_transmorgrifier::error::AppError;
use rea_transmorgrifier::{Listing, ParsedResult, ReaXmlTransmorgrifier};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ParseArgs {
    /// REA XML document to parse
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// JSON listing from an earlier run to merge the matching segment onto
    #[arg(long)]
    pub(crate) existing: Option<PathBuf>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
    /// Print one line per segment instead of JSON
    #[arg(long)]
    pub(crate) summary: bool,
}

pub(crate) fn run_parse(args: ParseArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let xml = fs::read_to_string(&args.file)?;
    let existing = args.existing.as_deref().map(load_existing).transpose()?;

    let transmorgrifier = ReaXmlTransmorgrifier::with_options(config.parsing);
    let result = transmorgrifier.parse(&xml, existing.as_ref());

    if args.summary {
        print!("{}", render_summary(&result));
    } else if args.pretty {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}

fn load_existing(path: &Path) -> Result<Listing, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn render_summary(result: &ParsedResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} listing(s), {} error(s), {} unhandled",
        result.source_name,
        result.listings.len(),
        result.errors.len(),
        result.unhandled_data.len()
    );

    for entry in &result.listings {
        let listing = &entry.listing;
        let _ = writeln!(
            out,
            "  ok    {} {} {} ({})",
            listing.category(),
            listing.agency_id(),
            listing.id(),
            listing.status_type()
        );
        for warning in &entry.warnings {
            let _ = writeln!(out, "        warning: {warning}");
        }
    }
    for error in &result.errors {
        let _ = writeln!(
            out,
            "  error {}: {}",
            error.listing_id.as_deref().unwrap_or("(unknown)"),
            error.exception_message
        );
    }
    out
}
