//! Depot terminal entry point.
//! Uses bpaf for CLI parsing and hands off to the shell or the tab lister.

use anyhow::{Context, Result};
use bpaf::Parser;
use depot_app::{Collaborators, UiAppCore};
use depot_core::effects::{HostShellEffects, NoopHostShell};
use depot_terminal::cli::{cli_parser, Commands, RunArgs, TabsArgs};
use depot_terminal::logging::init_logging;
use depot_terminal::render::render_tab_set;
use depot_terminal::{load_app_config, run_shell, FileBootstrap, JsonStoreFactory, TracingHostShell};
use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    let command = cli_parser()
        .to_options()
        .descr("Depot logistics shell")
        .run();

    match command {
        Commands::Run(args) => handle_run(args).await,
        Commands::Tabs(args) => handle_tabs(&args),
    }
}

async fn handle_run(args: RunArgs) -> Result<()> {
    init_logging(args.verbose);

    let config = load_app_config(args.config.as_deref())?;
    let locale = config.locale;
    let stores = JsonStoreFactory::from_file(args.profiles.as_deref())
        .context("failed to load profiles")?;
    let host: Arc<dyn HostShellEffects> = if config.haptics_enabled {
        Arc::new(TracingHostShell)
    } else {
        Arc::new(NoopHostShell)
    };
    let collaborators = Collaborators {
        bootstrap: Arc::new(FileBootstrap::new(&args.bootstrap)),
        stores: Arc::new(stores),
        host,
    };

    let app = UiAppCore::from_parts(config, collaborators);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_shell(&app, locale, stdin, &mut stdout).await
}

#[allow(clippy::print_stdout)]
fn handle_tabs(args: &TabsArgs) -> Result<()> {
    println!("{}", render_tab_set(args.role, args.locale));
    Ok(())
}
