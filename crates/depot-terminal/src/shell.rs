//! Line-driven command loop over [`UiAppCore`].

use crate::render::{render_root, render_tab_set};
use anyhow::{bail, Result};
use depot_app::{Locale, LoginOutcome, UiAppCore};
use depot_core::{Identity, Page, UserId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// One shell input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `go <page>` or `go <tab index>`
    Go(GoTarget),
    /// `back`
    Back,
    /// `login <id> [name]`
    Login {
        /// User id
        id: String,
        /// Display name (defaults to the id)
        name: Option<String>,
    },
    /// `logout`
    Logout,
    /// `retry`
    Retry,
    /// `tabs`
    Tabs,
    /// `quit`
    Quit,
}

/// Target of `go`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoTarget {
    /// A page by id
    Page(Page),
    /// A tab of the current bar by index
    Tab(usize),
}

impl ShellCommand {
    /// Parse one line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match (head, rest.as_slice()) {
            ("go", [target]) => match target.parse::<usize>() {
                Ok(index) => ShellCommand::Go(GoTarget::Tab(index)),
                Err(_) => ShellCommand::Go(GoTarget::Page(target.parse()?)),
            },
            ("back", []) => ShellCommand::Back,
            ("login", [id, name @ ..]) => ShellCommand::Login {
                id: (*id).to_string(),
                name: (!name.is_empty()).then(|| name.join(" ")),
            },
            ("logout", []) => ShellCommand::Logout,
            ("retry", []) => ShellCommand::Retry,
            ("tabs", []) => ShellCommand::Tabs,
            ("quit" | "exit", []) => ShellCommand::Quit,
            _ => bail!("unrecognized command: {}", line.trim()),
        };
        Ok(Some(command))
    }
}

const HELP: &str = "commands: go <page|index>, back, login <id> [name], logout, retry, tabs, quit";

/// Run the shell until `quit` or end of input.
///
/// The app is initialized first. After every command the current screen is
/// written to `output`; command failures are reported there and do not end
/// the loop.
pub async fn run_shell<R, W>(app: &UiAppCore, locale: Locale, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let phase = app.initialize().await;
    tracing::info!(%phase, "shell started");
    write_screen(app, locale, output).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                output.write_all(format!("{err}\n{HELP}\n").as_bytes()).await?;
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        if let Some(note) = execute(app, locale, command).await {
            output.write_all(format!("{note}\n").as_bytes()).await?;
        }
        write_screen(app, locale, output).await?;
    }
    output.flush().await?;
    Ok(())
}

/// Apply a command. Returns a note to show above the screen, if any.
async fn execute(app: &UiAppCore, locale: Locale, command: ShellCommand) -> Option<String> {
    let navigation = match command {
        ShellCommand::Go(GoTarget::Page(page)) => app.navigate(page).await,
        ShellCommand::Go(GoTarget::Tab(index)) => app.tap_tab(index).await,
        ShellCommand::Back => app.navigate_back().await,
        ShellCommand::Login { id, name } => {
            let name = name.unwrap_or_else(|| id.clone());
            return match app.login(Identity::new(UserId::new(id), name)).await {
                LoginOutcome::Ready(_) => None,
                LoginOutcome::Superseded => Some("login superseded".to_string()),
                LoginOutcome::Failed(err) | LoginOutcome::Rejected(err) => {
                    Some(format!("{} ({})", err, err.code()))
                }
            };
        }
        ShellCommand::Logout => {
            app.logout().await;
            return None;
        }
        ShellCommand::Retry => {
            app.retry().await;
            return None;
        }
        ShellCommand::Tabs => {
            let role = app.snapshot().await.role?;
            return Some(render_tab_set(role, locale));
        }
        ShellCommand::Quit => return None,
    };
    navigation.err().map(|err| err.to_string())
}

async fn write_screen<W: AsyncWrite + Unpin>(
    app: &UiAppCore,
    locale: Locale,
    output: &mut W,
) -> Result<()> {
    let screen = render_root(&app.render().await, locale);
    output.write_all(format!("{screen}\n\n").as_bytes()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use depot_app::{AppConfig, Collaborators};
    use depot_core::{DepotError, Profile, Role};
    use depot_testkit::TestHarness;

    fn app(harness: &TestHarness) -> UiAppCore {
        let config = AppConfig {
            locale: Locale::English,
            ..AppConfig::default()
        };
        UiAppCore::from_parts(
            config,
            Collaborators {
                bootstrap: harness.bootstrap.clone(),
                stores: harness.stores.clone(),
                host: harness.host.clone(),
            },
        )
    }

    async fn transcript(harness: &TestHarness, script: &str) -> String {
        let app = app(harness);
        let mut output = Vec::new();
        run_shell(&app, Locale::English, script.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            ShellCommand::parse("go route").unwrap(),
            Some(ShellCommand::Go(GoTarget::Page(Page::Route)))
        );
        assert_eq!(
            ShellCommand::parse("go 2").unwrap(),
            Some(ShellCommand::Go(GoTarget::Tab(2)))
        );
        assert_eq!(
            ShellCommand::parse("login 42 Dana Levi").unwrap(),
            Some(ShellCommand::Login {
                id: "42".into(),
                name: Some("Dana Levi".into()),
            })
        );
        assert_eq!(
            ShellCommand::parse("login 42").unwrap(),
            Some(ShellCommand::Login {
                id: "42".into(),
                name: None,
            })
        );
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
        assert_eq!(ShellCommand::parse("exit").unwrap(), Some(ShellCommand::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(ShellCommand::parse("go").is_err());
        assert!(ShellCommand::parse("go moon").is_err());
        assert!(ShellCommand::parse("back now").is_err());
        assert!(ShellCommand::parse("dance").is_err());
    }

    #[tokio::test]
    async fn login_and_navigate_session() {
        let harness = TestHarness::new()
            .with_bootstrap_user(None)
            .with_profile("42", Ok(Profile::for_role(Role::Driver)));
        let out = transcript(&harness, "login 42 Dana\ngo route\ntabs\nquit\ngo orders\n").await;

        assert!(out.starts_with("🔐 login"));
        assert!(out.contains("🚚 Driver · Dashboard"));
        assert!(out.contains("[2:"));
        assert!(out.contains("route\t"));
        assert!(!out.contains("Orders"));
    }

    #[tokio::test]
    async fn navigation_errors_are_reported() {
        let harness = TestHarness::new().with_bootstrap_user(None);
        let out = transcript(&harness, "go orders\ndance\n").await;

        assert!(out.contains("navigation unavailable while unauthenticated"));
        assert!(out.contains("unrecognized command: dance"));
        assert!(out.contains(HELP));
    }

    #[tokio::test]
    async fn retry_after_bootstrap_failure() {
        let harness = TestHarness::new().with_bootstrap_user(None);
        harness
            .bootstrap
            .push(Err(DepotError::network("network down")));
        let out = transcript(&harness, "retry\n").await;

        assert!(out.starts_with("⚠️ Error\nnetwork down"));
        assert!(out.trim_end().ends_with("🔐 login <id> [name]"));
        assert_eq!(harness.bootstrap.calls(), 2);
    }

    #[tokio::test]
    async fn login_failure_shows_code() {
        let harness = TestHarness::new().with_bootstrap_user(None);
        harness.stores.fail_next(DepotError::internal("no backend"));
        let out = transcript(&harness, "login 42\n").await;

        assert!(out.contains("AUTH_STORE"));
        assert_matches!(harness.host.events().as_slice(), []);
    }
}
