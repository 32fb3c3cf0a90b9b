use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use railway_checker::batch::{
    CASES_VAR, Summary, cases_path, echo_case, load_cases, result_line, run_case, summary_line,
};
use railway_checker::planner::CheckConfig;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match CheckConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let path = cases_path(std::env::args().nth(1), std::env::var(CASES_VAR).ok());
    let cases = match load_cases(&path) {
        Ok(cases) => cases,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Checking {} test cases from {} ({} strategy)",
        cases.len(),
        path.display(),
        config.strategy
    );
    println!();

    let mut summary = Summary::default();
    for (idx, case) in cases.iter().enumerate() {
        println!("{}", echo_case(case, config.echo_station_limit));
        let report = run_case(idx, case, &config);
        println!("{}", result_line(&report));
        println!();
        summary.reports.push(report);
    }

    println!("{}", summary_line(&summary));

    if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
