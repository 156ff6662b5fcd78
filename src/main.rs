use anyhow::Context;
use clap::Parser;
use std::io::Read;
use std::sync::Arc;

use postcraft::cli::Cli;
use postcraft::composer::{Composer, ComposerState};
use postcraft::gateway::HttpGateway;
use postcraft::{headless, logging, ui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config = cli.load_config()?;
    let gateway = HttpGateway::new(&config.gateway).context("Failed to build gateway client")?;
    tracing::info!(base_url = gateway.base_url(), "Starting postcraft");

    let (tone, action) = cli.selection(&config.defaults);
    let composer = Arc::new(Composer::with_state(
        Arc::new(gateway),
        ComposerState::with_selection(tone, action),
    ));

    if !cli.print {
        if let Some(draft) = cli.draft {
            composer.set_draft(draft);
        }
        ui::run(composer, &config.ui).await?;
        return Ok(());
    }

    let draft = match cli.draft {
        Some(draft) => draft,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read draft from stdin")?;
            input.trim_end_matches(['\r', '\n']).to_string()
        }
    };
    composer.set_draft(draft);

    match headless::run_once(&composer, cli.improve.as_deref()).await {
        Ok(result) => {
            println!("{}", result);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
