use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = roi_quiz_api::run().await {
        eprintln!("fatal: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
