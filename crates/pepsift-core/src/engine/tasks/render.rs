use crate::core::seq::record::SequenceRecord;
use crate::engine::config::RenderConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::supersede::Ticket;
use tracing::{debug, instrument};

/// One display row: the record's header and its sequence with every
/// highlight match wrapped in the configured marker pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub header: String,
    pub sequence: String,
}

/// Builds display rows for a filtered subset, in chunks, under the same
/// progress and supersession contract as the filter task.
#[instrument(skip_all, name = "render_task")]
pub fn run(
    records: &[SequenceRecord],
    config: &RenderConfig,
    reporter: &ProgressReporter,
    ticket: &Ticket,
) -> Result<Vec<DisplayRow>, EngineError> {
    let total = records.len() as u64;
    let batch = config.batch_size.max(1);

    reporter.report(Progress::TaskStart { total });

    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if index % batch == 0 {
            ticket.ensure_current()?;
            reporter.report(Progress::TaskProgress {
                processed: index as u64,
                total,
            });
        }
        rows.push(DisplayRow {
            header: record.header.clone(),
            sequence: config
                .highlight
                .highlight(&record.sequence, &config.mark_open, &config.mark_close),
        });
    }

    reporter.report(Progress::TaskProgress {
        processed: total,
        total,
    });
    reporter.report(Progress::TaskFinish);
    debug!(rows = rows.len(), "Render pass complete.");
    Ok(rows)
}
