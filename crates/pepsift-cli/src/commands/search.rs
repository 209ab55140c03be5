use crate::cli::SearchArgs;
use crate::config::{self, FilterFileConfig};
use crate::data;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use pepsift::core::io::delimited::to_delimited_text;
use pepsift::core::io::fasta::FastaFile;
use pepsift::core::io::traits::SequenceFile;
use pepsift::core::pattern::SequencePattern;
use pepsift::engine::config::{
    DEFAULT_WARMUP_BATCH, FilterConfig, FilterConfigBuilder, RenderConfig,
};
use pepsift::engine::context::SessionContext;
use pepsift::engine::progress::ProgressReporter;
use pepsift::engine::supersede::Ticket;
use pepsift::engine::tasks;
use pepsift::workflows::search;
use tracing::info;

const HIGHLIGHT_OPEN: &str = "\x1b[1;33m";
const HIGHLIGHT_CLOSE: &str = "\x1b[0m";

pub fn run(args: SearchArgs) -> Result<()> {
    let records = data::load_collection(&args.input)?;
    let mut context = SessionContext::from_records(records);

    let handler = CliProgressHandler::new();
    let ticket = Ticket::standalone();

    // The bar must come down on every exit path, failure included.
    let outcome = run_pipeline(&args, &mut context, &handler, &ticket);
    handler.clear();
    let outcome = outcome?;

    if !args.summary_only {
        for row in &outcome.rows {
            println!("{}\t{}", row.header, row.sequence);
        }
    }

    let summary = &outcome.summary;
    println!(
        "Matched {} of {} sequences ({:.2}%).",
        summary.matched, summary.total, summary.percentage
    );
    println!("Most used residues: {}", summary.residue_usage);

    if let Some(path) = &args.csv {
        std::fs::write(path, to_delimited_text(&outcome.records)?)?;
        info!(path = %path.display(), "Delimited export written.");
    }
    if let Some(path) = &args.fasta {
        FastaFile::write_to_path(&outcome.records, path)?;
        info!(path = %path.display(), "FASTA export written.");
    }

    Ok(())
}

fn run_pipeline(
    args: &SearchArgs,
    context: &mut SessionContext,
    handler: &CliProgressHandler,
    ticket: &Ticket,
) -> Result<search::SearchOutcome> {
    let reporter = ProgressReporter::with_callback(handler.callback());
    tasks::warmup::run(context, DEFAULT_WARMUP_BATCH, &reporter, ticket)?;
    let (filter, render) = build_configs(args)?;
    Ok(search::run(context, &filter, &render, &reporter, ticket)?)
}

/// Assembles the filter and render configurations by layering explicit CLI
/// flags over the optional TOML specification.
fn build_configs(args: &SearchArgs) -> Result<(FilterConfig, RenderConfig)> {
    let file = match &args.config {
        Some(path) => config::load(path)?,
        None => FilterFileConfig::default(),
    };

    let mut ranges = file.ranges;
    if args.min_charge.is_some() {
        ranges.charge.min = args.min_charge;
    }
    if args.max_charge.is_some() {
        ranges.charge.max = args.max_charge;
    }
    if args.min_isoelectric.is_some() {
        ranges.isoelectric_point.min = args.min_isoelectric;
    }
    if args.max_isoelectric.is_some() {
        ranges.isoelectric_point.max = args.max_isoelectric;
    }
    if args.min_hydrophobicity.is_some() {
        ranges.hydrophobicity.min = args.min_hydrophobicity;
    }
    if args.max_hydrophobicity.is_some() {
        ranges.hydrophobicity.max = args.max_hydrophobicity;
    }
    if args.min_boman.is_some() {
        ranges.boman_index.min = args.min_boman;
    }
    if args.max_boman.is_some() {
        ranges.boman_index.max = args.max_boman;
    }
    if args.min_moment.is_some() {
        ranges.hydrophobic_moment_ratio.min = args.min_moment;
    }
    if args.max_moment.is_some() {
        ranges.hydrophobic_moment_ratio.max = args.max_moment;
    }

    let mut builder = FilterConfigBuilder::new()
        .ranges(ranges)
        .batch_size(file.batch.filter);
    if let Some(pattern) = args.pattern.as_deref().or(file.pattern.as_deref()) {
        builder = builder.pattern(pattern);
    }
    if let Some(ignore) = args.ignore.as_deref().or(file.ignore.as_deref()) {
        builder = builder.ignore(ignore);
    }
    let filter = builder.build()?;

    let highlight = if args.no_highlight {
        SequencePattern::MatchAll
    } else {
        filter.pattern.clone()
    };
    let mut render = RenderConfig::new(highlight, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE);
    render.batch_size = file.batch.render;

    Ok((filter, render))
}
