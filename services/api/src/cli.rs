use crate::demo::{run_demo, run_estimate, DemoArgs, EstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use roi_quiz::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ROI Calculator Service",
    about = "Run and demonstrate the ROI calculator questionnaire from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the questionnaire API over HTTP (the default)
    Serve(ServeArgs),
    /// Compute a savings estimate for a single set of answers
    Estimate(EstimateArgs),
    /// Run an end-to-end CLI demo covering the full questionnaire flow
    Demo(DemoArgs),
}

impl Command {
    async fn dispatch(self) -> Result<(), AppError> {
        match self {
            Command::Serve(args) => server::run(args).await,
            Command::Estimate(args) => run_estimate(args),
            Command::Demo(args) => run_demo(args),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Bind host, overriding APP_HOST
    #[arg(long, value_name = "ADDR")]
    pub(crate) host: Option<String>,
    /// Bind port, overriding APP_PORT
    #[arg(long, value_name = "PORT")]
    pub(crate) port: Option<u16>,
}

/// A bare invocation serves; subcommands are for demos and one-off runs.
pub(crate) async fn run() -> Result<(), AppError> {
    Cli::parse()
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
        .dispatch()
        .await
}
