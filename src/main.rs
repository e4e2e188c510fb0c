use clap::Parser;
use rating_report::core::render::write_report;
use rating_report::utils::logger;
use rating_report::{run_report, CliConfig, ReportOutcome};
use std::io::Write;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    std::panic::set_hook(Box::new(|info| {
        let _ = writeln!(std::io::stderr(), "Unexpected error: {}", info);
        std::process::exit(1);
    }));

    tracing::info!("Starting rating-report");
    tracing::debug!("CLI config: {:?}", config);

    // Settings and the pipeline are synchronous; both run on a blocking
    // thread so an interrupt is observed from here on.
    let job = tokio::task::spawn_blocking(move || config.resolve().and_then(run_report));

    tokio::select! {
        joined = job => match joined {
            Ok(Ok(ReportOutcome::Rendered(output))) => {
                match write_report(&mut std::io::stdout().lock(), &output) {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(e) => {
                        eprintln!("Error: failed to write report: {}", e);
                        ExitCode::FAILURE
                    }
                }
            }
            Ok(Ok(ReportOutcome::Empty)) => {
                eprintln!("Report is empty: no data to display");
                ExitCode::SUCCESS
            }
            Ok(Err(e)) => {
                tracing::debug!("Report failed: {:?}", e);
                eprintln!("Error: {}", e);
                ExitCode::from(e.exit_code() as u8)
            }
            Err(e) => {
                eprintln!("Unexpected error: {}", e);
                ExitCode::FAILURE
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted by user");
            // The blocking task cannot be cancelled; leave without waiting for it.
            std::process::exit(1);
        }
    }
}
