use clap::Parser;
use pdfsec::cli::{Cli, Commands};
use pdfsec::commands;
use pdfsec::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Scan { file } => commands::scan::run(cli.json, file.as_deref(), &config),
        Commands::Sanitize {
            input,
            image_format,
        } => commands::sanitize::run(cli.json, &input, image_format, &config),
    }
}
