//! rulex CLI
//!
//! Command-line tool for expanding romaji input rules into a flat rule table.
//! Running without a subcommand converts the default files in the current
//! directory.

use clap::{Args, Parser, Subcommand};
use rulex_core::{
    dump_rules, expand_records, load_records, run_job, DumpFormat, JobFile, RunReport,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rulex")]
#[command(about = "Romaji input rule expander", long_about = None)]
#[command(version)]
struct Cli {
    /// Log each stage at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand the rule files and write the rule table
    Convert(ConvertArgs),

    /// Print the expanded simple/develop rules without writing anything
    Expand {
        /// Simple/develop rule file
        #[arg(short, long, default_value = rulex_core::job::DEFAULT_INPUT_RULES)]
        input: PathBuf,

        /// Output format (rules, json or tsv)
        #[arg(long, default_value = "rules")]
        format: String,

        /// Maximum number of rules to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Create a job file with the default paths
    CreateJob {
        /// Output path for the job file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args, Default)]
struct ConvertArgs {
    /// Job file (JSON) to start from
    #[arg(short, long)]
    job: Option<PathBuf>,

    /// Simple/develop rule file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Verbatim rule file
    #[arg(short, long)]
    etc: Option<PathBuf>,

    /// Generated rule table
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save a run report (JSON) here
    #[arg(short, long)]
    report: Option<PathBuf>,
}

impl ConvertArgs {
    /// Flags override the job file, which overrides the defaults
    fn resolve(self) -> rulex_core::Result<JobFile> {
        let mut job = match &self.job {
            Some(path) => JobFile::load(path)?,
            None => JobFile::default(),
        };

        if let Some(input) = self.input {
            job.input_rules = input;
        }
        if let Some(etc) = self.etc {
            job.etc_rules = etc;
        }
        if let Some(output) = self.output {
            job.output = output;
        }
        if self.report.is_some() {
            job.report = self.report;
        }

        Ok(job)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    // "rulex" also matches the rulex_core target
    let default_filter = if verbose { "rulex=debug" } else { "rulex=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> rulex_core::Result<()> {
    match cli.command.unwrap_or_else(|| Commands::Convert(ConvertArgs::default())) {
        Commands::Convert(args) => cmd_convert(args),
        Commands::Expand {
            input,
            format,
            limit,
        } => cmd_expand(&input, &format, limit),
        Commands::CreateJob { output } => cmd_create_job(&output),
    }
}

fn cmd_convert(args: ConvertArgs) -> rulex_core::Result<()> {
    let job = args.resolve()?;
    debug!(?job, "resolved job");
    let report = run_job(&job)?;

    print_report(&report);

    Ok(())
}

fn print_report(report: &RunReport) {
    println!("Input:  {}", report.job.input_rules.display());
    println!("Etc:    {}", report.job.etc_rules.display());
    println!("Output: {}", report.job.output.display());
    println!();
    println!(
        "{} simple, {} develop, {} composed ({} skipped)",
        report.expand.simple, report.expand.develop, report.expand.composed, report.expand.skipped
    );
    println!("{} etc rules appended", report.etc);
    println!(
        "Wrote {} of {} rules ({} excluded)",
        report.write.written, report.total, report.write.excluded
    );

    if let Some(path) = &report.job.report {
        println!("Report saved to {}", path.display());
    }
}

fn cmd_expand(input: &Path, format: &str, limit: Option<usize>) -> rulex_core::Result<()> {
    let format: DumpFormat = format.parse()?;

    let records = load_records(input)?;
    let expansion = expand_records(&records);
    let rules = expansion.rules.as_slice();

    let shown = limit.unwrap_or(rules.len()).min(rules.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dump_rules(&mut out, &rules[..shown], format)?;
    out.flush()?;

    if rules.len() > shown {
        eprintln!("... ({} more rules)", rules.len() - shown);
    }

    Ok(())
}

fn cmd_create_job(output: &Path) -> rulex_core::Result<()> {
    let job = JobFile::default();

    job.save(output)?;
    println!("Created job file: {}", output.display());
    println!();
    println!("Edit the file to point at your rule files, then run:");
    println!("  rulex convert --job {}", output.display());

    Ok(())
}
