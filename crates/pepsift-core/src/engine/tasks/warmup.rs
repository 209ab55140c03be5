use crate::engine::context::SessionContext;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::supersede::Ticket;
use tracing::{info, instrument};

/// Pre-scores the whole working collection so the first search pays no
/// descriptor cost. Runs right after a collection load, chunked like every
/// other batch task. Returns the number of distinct sequences cached.
#[instrument(skip_all, name = "warmup_task")]
pub fn run(
    context: &mut SessionContext,
    batch_size: usize,
    reporter: &ProgressReporter,
    ticket: &Ticket,
) -> Result<usize, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Scoring collection",
    });

    let (records, cache) = context.parts();
    let total = records.len() as u64;
    let batch = batch_size.max(1);

    reporter.report(Progress::TaskStart { total });
    for (index, record) in records.iter().enumerate() {
        if index % batch == 0 {
            ticket.ensure_current()?;
            reporter.report(Progress::TaskProgress {
                processed: index as u64,
                total,
            });
        }
        cache.get_or_compute(&record.sequence);
    }
    reporter.report(Progress::TaskProgress {
        processed: total,
        total,
    });
    reporter.report(Progress::TaskFinish);

    let distinct = cache.len();
    info!(
        records = total,
        distinct, "Descriptor cache warmed for the loaded collection."
    );
    reporter.report(Progress::PhaseFinish);
    Ok(distinct)
}
