use bpaf::{construct, long, positional, short, Parser};
use depot_app::Locale;
use depot_core::Role;
use std::path::PathBuf;

/// Top-level commands
#[derive(Debug, Clone)]
pub enum Commands {
    /// Run the interactive shell
    Run(RunArgs),
    /// Print the tab set of a role
    Tabs(TabsArgs),
}

/// Arguments of `depot run`
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Bootstrap JSON file (`{config, user}`)
    pub bootstrap: PathBuf,
    /// Profiles JSON file (`user id -> profile`)
    pub profiles: Option<PathBuf>,
    /// Application config TOML file
    pub config: Option<PathBuf>,
    /// Debug logging
    pub verbose: bool,
}

/// Arguments of `depot tabs`
#[derive(Debug, Clone)]
pub struct TabsArgs {
    /// Role to list
    pub role: Role,
    /// Label locale
    pub locale: Locale,
}

fn parse_locale(value: String) -> Result<Locale, String> {
    match value.as_str() {
        "he" | "hebrew" => Ok(Locale::Hebrew),
        "en" | "english" => Ok(Locale::English),
        other => Err(format!("unknown locale '{other}' (expected he or en)")),
    }
}

fn run_parser() -> impl Parser<RunArgs> {
    let bootstrap = long("bootstrap")
        .short('b')
        .help("Bootstrap JSON file")
        .argument::<PathBuf>("FILE");
    let profiles = long("profiles")
        .short('p')
        .help("Profiles JSON file")
        .argument::<PathBuf>("FILE")
        .optional();
    let config = long("config")
        .short('c')
        .help("Application config TOML file")
        .argument::<PathBuf>("FILE")
        .optional();
    let verbose = short('v')
        .long("verbose")
        .help("Enable verbose logging")
        .switch();
    construct!(RunArgs {
        bootstrap,
        profiles,
        config,
        verbose,
    })
}

fn tabs_parser() -> impl Parser<TabsArgs> {
    let locale = long("locale")
        .short('l')
        .help("Label locale: he or en")
        .argument::<String>("LOCALE")
        .parse(parse_locale)
        .fallback(Locale::Hebrew);
    let role = positional::<Role>("ROLE").help("Role to list");
    construct!(TabsArgs { locale, role })
}

fn run_command() -> impl Parser<Commands> {
    run_parser()
        .map(Commands::Run)
        .to_options()
        .descr("Run the interactive shell")
        .command("run")
}

fn tabs_command() -> impl Parser<Commands> {
    tabs_parser()
        .map(Commands::Tabs)
        .to_options()
        .descr("Print the tab set of a role")
        .command("tabs")
}

/// Parser for the `depot` binary
pub fn cli_parser() -> impl Parser<Commands> {
    construct!([run_command(), tabs_command()])
}
