use clap::Parser;
use env_logger::Env;
use experiment::cli::Cli;
use experiment::runner;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level.as_str()))
        .format_timestamp_millis()
        .init();

    runner::run(&cli)
}
