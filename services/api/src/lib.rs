mod cli;
mod demo;
mod infra;
mod routes;
mod server;

pub use roi_quiz::error::AppError;

/// Parses the command line and dispatches to the selected subcommand.
pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
