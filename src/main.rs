use clap::Parser;
use comment_rate::args::Args;
use comment_rate::config::Config;
use comment_rate::presentation;
use std::process::ExitCode;

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let report = match comment_rate_engine::run(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Application Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = presentation::print_report(&report, &config) {
        eprintln!("Output Error: {e}");
        return ExitCode::FAILURE;
    }

    if report.below_threshold(config.fail_under) {
        eprintln!(
            "Comment rate {} is below the required {}",
            presentation::format_rate(report.result.comment_rate()),
            presentation::format_rate(config.fail_under.unwrap_or_default())
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
