use clap::Parser;
use diabetes_predictor::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Predict(args) => cli::predict::run(args),
        Command::CheckModel(args) => cli::check_model::run(args),
    }
}
