use std::process::ExitCode;
use unity_runner::cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse the command line and drive the pipeline
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
