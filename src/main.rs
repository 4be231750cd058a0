use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use spotlight_excluder::cli::{Cli, Parsed};
use spotlight_excluder::config::Config;
use spotlight_excluder::marker::{FixedPathApplier, Reporter, Scanner};
use spotlight_excluder::system::{self, RebuildStatus};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::parse_args(std::env::args_os()) {
        Parsed::Run(cli) => cli,
        Parsed::Exit { message, code } => {
            if code == 0 {
                print!("{}", message);
            } else {
                eprint!("{}", message);
            }
            return ExitCode::from(code as u8);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env()?;
    log::debug!("roots: {:?}", config.roots);
    log::debug!("exclusion names: {:?}", config.names.names());

    if cli.dry_run {
        println!("{}", "Dry run: no files will be written".cyan().bold());
    }

    let mut reporter = Reporter::new();

    if config.roots.is_empty() {
        reporter.section("Dev roots");
        println!("  {}", "no dev roots found (set DEV_ROOTS)".yellow());
    }

    let scanner = Scanner::new(config.names.clone()).with_dry_run(cli.dry_run);
    for root in &config.roots {
        reporter.section(&format!("Scanning {}", root.display()));
        reporter.report_all(&scanner.scan_root(root));
    }

    let fixed = FixedPathApplier::new(cli.dry_run);
    for group in config.fixed_groups() {
        reporter.section(&format!("Fixed paths: {}", group.name));
        reporter.report_all(&fixed.apply_group(&group));
    }

    reporter.summary(cli.dry_run);

    if cli.rebuild {
        reporter.section("Index rebuild");
        match system::rebuild(cli.dry_run) {
            Ok(RebuildStatus::DryRun) => println!("  {} sudo mdutil -E /", "would run".cyan()),
            Ok(RebuildStatus::Requested) => {
                println!("  {}", "rebuild requested; indexing continues in the background".green())
            }
            Err(err) => eprintln!("  {} {:#}", "warning".red().bold(), err),
        }
    }

    if let Err(err) = system::report_top_processes() {
        log::warn!("could not list indexer processes: {:#}", err);
    }

    Ok(())
}
