use crate::core::seq::record::SequenceRecord;
use crate::engine::config::FilterConfig;
use crate::engine::context::SessionContext;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::supersede::Ticket;
use tracing::{info, instrument};

/// Applies a filter specification to the working collection.
///
/// Per record, short-circuiting in order: the search pattern must match
/// (the match-everything sentinel always does), no ignore pattern may match,
/// and every constrained descriptor range must contain the cached score.
/// The output preserves the collection's relative order.
///
/// The pass runs in fixed-size chunks; between chunks it reports fractional
/// progress and polls the ticket so a superseded run aborts promptly.
#[instrument(skip_all, name = "filter_task")]
pub fn run(
    context: &mut SessionContext,
    config: &FilterConfig,
    reporter: &ProgressReporter,
    ticket: &Ticket,
) -> Result<Vec<SequenceRecord>, EngineError> {
    let (records, cache) = context.parts();
    let total = records.len() as u64;
    let batch = config.batch_size.max(1);

    reporter.report(Progress::TaskStart { total });

    let mut matched = Vec::new();
    for (index, record) in records.iter().enumerate() {
        if index % batch == 0 {
            ticket.ensure_current()?;
            reporter.report(Progress::TaskProgress {
                processed: index as u64,
                total,
            });
        }

        if !config.pattern.is_match(&record.sequence) {
            continue;
        }
        if config
            .ignore
            .iter()
            .any(|pattern| pattern.is_match(&record.sequence))
        {
            continue;
        }
        let set = cache.get_or_compute(&record.sequence);
        if config.ranges.matches(&set) {
            matched.push(record.clone());
        }
    }

    reporter.report(Progress::TaskProgress {
        processed: total,
        total,
    });
    reporter.report(Progress::TaskFinish);
    info!(
        matched = matched.len(),
        total = records.len(),
        "Filter pass complete."
    );
    Ok(matched)
}
