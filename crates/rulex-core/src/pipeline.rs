//! End-to-end conversion run

use crate::error::Result;
use crate::expander::expand_records;
use crate::job::JobFile;
use crate::loader::load_records;
use crate::merger::merge_etc;
use crate::report::RunReport;
use crate::writer::write_rules_file;
use tracing::info;

/// Run a conversion job.
///
/// Stages run in order (load, expand, merge, write) and the first I/O
/// failure aborts the run. The report is saved when the job names a path.
pub fn run_job(job: &JobFile) -> Result<RunReport> {
    let records = load_records(&job.input_rules)?;
    let expansion = expand_records(&records);
    let mut rules = expansion.rules;

    let etc_records = load_records(&job.etc_rules)?;
    let etc = merge_etc(&mut rules, &etc_records);

    let write = write_rules_file(&job.output, &rules)?;

    let report = RunReport::new(job, expansion.stats, etc, rules.len(), write);
    if let Some(report_path) = &job.report {
        report.save(report_path)?;
    }

    info!(
        output = %job.output.display(),
        written = write.written,
        excluded = write.excluded,
        "wrote rule table"
    );

    Ok(report)
}
