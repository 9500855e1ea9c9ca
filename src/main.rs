use clap::Parser;
use send_discord_message::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    cli::run(&cli, std::io::stdin().lock())
}
