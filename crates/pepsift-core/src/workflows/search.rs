use crate::core::chem::composition::most_used_residues;
use crate::core::chem::descriptors::round2;
use crate::core::chem::residues::CANONICAL_ALPHABET;
use crate::core::seq::record::SequenceRecord;
use crate::engine::config::{FilterConfig, RenderConfig};
use crate::engine::context::SessionContext;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::supersede::Ticket;
use crate::engine::tasks;
use crate::engine::tasks::render::DisplayRow;
use tracing::{info, instrument};

/// Aggregate statistics over one search pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSummary {
    pub matched: usize,
    pub total: usize,
    /// Share of the collection that matched, as a percentage (2 decimals).
    pub percentage: f64,
    /// Usage line over the pooled matched sequences, or the empty sentinel.
    pub residue_usage: String,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub records: Vec<SequenceRecord>,
    pub rows: Vec<DisplayRow>,
    pub summary: SearchSummary,
}

/// Runs a complete search over the session's working collection.
///
/// Phases: filter the collection by the given specification, build
/// highlighted display rows for the matching subset, then summarize the
/// result. Every phase honors the ticket — a run superseded by a newer
/// request aborts with [`EngineError::Superseded`] and reports no result.
#[instrument(skip_all, name = "search_workflow")]
pub fn run(
    context: &mut SessionContext,
    filter: &FilterConfig,
    render: &RenderConfig,
    reporter: &ProgressReporter,
    ticket: &Ticket,
) -> Result<SearchOutcome, EngineError> {
    info!(total = context.len(), "Starting search.");

    reporter.report(Progress::PhaseStart { name: "Filtering" });
    let records = tasks::filter::run(context, filter, reporter, ticket)?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Rendering" });
    let rows = tasks::render::run(&records, render, reporter, ticket)?;
    reporter.report(Progress::PhaseFinish);

    let summary = summarize(&records, context.len());
    info!(
        matched = summary.matched,
        percentage = summary.percentage,
        "Search complete."
    );
    Ok(SearchOutcome {
        records,
        rows,
        summary,
    })
}

fn summarize(records: &[SequenceRecord], total: usize) -> SearchSummary {
    let matched = records.len();
    let percentage = if total == 0 {
        0.0
    } else {
        round2(matched as f64 * 100.0 / total as f64)
    };
    let pooled: String = records.iter().map(|r| r.sequence.as_str()).collect();
    SearchSummary {
        matched,
        total,
        percentage,
        residue_usage: most_used_residues(&pooled, &CANONICAL_ALPHABET),
    }
}
