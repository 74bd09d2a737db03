// Main entry point for the application

use clap::Parser;
use hashcheck::common::config::{AmbiguityPolicy, ParseOptions, SearchMode, ValidatorConfig};
use hashcheck::common::types::{HashAlgorithm, DEFAULT_MANIFEST_NAME};
use hashcheck::{Result, Validator};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "validate")]
#[command(version, about = "Check data files against the hashes recorded in their manifest", long_about = None)]
struct Cli {
    /// Directory holding the data files and the manifest
    data_directory: PathBuf,

    /// Manifest file name
    #[arg(short, long, default_value = DEFAULT_MANIFEST_NAME)]
    manifest_name: String,

    /// Where to look for the manifest
    #[arg(short, long, value_enum, default_value_t = SearchMode::Any)]
    search: SearchMode,

    /// What to do when several subdirectories hold a manifest
    #[arg(long, value_enum, default_value_t = AmbiguityPolicy::Reject)]
    on_ambiguous: AmbiguityPolicy,

    /// Digest algorithm the manifest was written with
    #[arg(short, long, value_enum, default_value_t = HashAlgorithm::Sha1)]
    algorithm: HashAlgorithm,

    /// Skip lines starting with '#'
    #[arg(long)]
    allow_comments: bool,

    /// Treat blank lines as malformed
    #[arg(long)]
    reject_blank_lines: bool,

    /// Require digests to be lowercase hex of the algorithm's length
    #[arg(long)]
    strict_digests: bool,

    /// Hash entries on a thread pool
    #[arg(short = 'j', long)]
    parallel: bool,

    /// Check every entry and print a per-file report
    #[arg(long)]
    report: bool,

    /// Print the report as JSON (implies --report)
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Result<ValidatorConfig> {
        let mut config = ValidatorConfig::new()
            .with_manifest_name(self.manifest_name.as_str())?
            .with_search(self.search)
            .with_ambiguity_policy(self.on_ambiguous)
            .with_algorithm(self.algorithm)
            .with_parse_options(ParseOptions {
                allow_blank_lines: !self.reject_blank_lines,
                allow_comments: self.allow_comments,
                strict_digests: self.strict_digests,
            });
        if self.parallel {
            config = config.parallel();
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let validator = Validator::new(cli.config()?);

    if cli.report || cli.json {
        let report = validator.report(&cli.data_directory)?;
        if cli.json {
            println!("{}", report.to_json()?);
        } else {
            println!("{}", report);
        }
        report.into_result()?;
    } else {
        validator.validate(&cli.data_directory)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
