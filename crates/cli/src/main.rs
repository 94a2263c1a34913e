use std::io;

use clap::Parser;
use menagerie_cli::{Config, Console, app};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    menagerie_observability::init(&config.log_settings());
    tracing::debug!(?config, "starting menagerie");

    let zoo = app::build_zoo(&config);

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), zoo, config.report_format);
    console.run()?;

    tracing::info!(
        animals = console.zoo().animal_count(),
        inventory = console.zoo().inventory().len(),
        "console closed"
    );
    Ok(())
}
