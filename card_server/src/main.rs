use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Startup failures are logged by the framework layer before returning.
    match card_server::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
