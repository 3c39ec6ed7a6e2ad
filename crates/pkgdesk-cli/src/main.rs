use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pkgdesk_core::PackageId;
use pkgdesk_planner::{BulkAction, Stability};
use pkgdesk_session::UserAction;
use tracing_subscriber::EnvFilter;

mod catalog;
mod commands;
mod completion;
mod render;

use catalog::load_catalog;
use commands::{
    apply_repository_changes, format_repository_lines, format_request_lines, format_row_lines,
    format_search_results, open_session, select_packages, RepositoryChanges,
};
use completion::{resolve_completion_shell, write_completions_script, CliCompletionShell};
use render::{current_output_style, render_section_header, render_status_line};

const LOG_ENV: &str = "PKGDESK_LOG";

#[derive(Parser, Debug)]
#[command(name = "pkgdesk")]
#[command(about = "Plan package changes for a project", long_about = None)]
struct Cli {
    #[arg(long, env = "PKGDESK_CATALOG", global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    List,
    Search {
        query: String,
    },
    Plan {
        #[arg(long, value_enum)]
        action: PlanAction,
        #[arg(required = true)]
        packages: Vec<String>,
    },
    Install {
        package: String,
        #[arg(long)]
        version: Option<String>,
    },
    Remove {
        package: String,
    },
    UpgradeAll {
        #[arg(long)]
        stable: bool,
    },
    ReinstallAll,
    Repositories {
        #[arg(long)]
        show: Vec<String>,
        #[arg(long)]
        hide: Vec<String>,
        #[arg(long)]
        prerelease: Option<bool>,
        #[arg(long)]
        hide_local: Option<bool>,
    },
    Completions {
        #[arg(value_enum)]
        shell: Option<CliCompletionShell>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PlanAction {
    Install,
    InstallStable,
    Reinstall,
    Remove,
}

impl PlanAction {
    fn bulk_action(self) -> BulkAction {
        match self {
            Self::Install => BulkAction::InstallOrUpgrade(Stability::Latest),
            Self::InstallStable => BulkAction::InstallOrUpgrade(Stability::Stable),
            Self::Reinstall => BulkAction::Reinstall,
            Self::Remove => BulkAction::Remove,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    run_cli(cli).await
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run_cli(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let shell_env = std::env::var("SHELL").ok();
        let shell = resolve_completion_shell(*shell, shell_env.as_deref(), cfg!(windows));
        return write_completions_script(shell, &mut std::io::stdout());
    }

    let style = current_output_style();
    let catalog_path = cli
        .catalog
        .ok_or_else(|| anyhow!("no catalog given; pass --catalog or set PKGDESK_CATALOG"))?;
    let snapshot = load_catalog(&catalog_path)?;
    let session = open_session(snapshot).await?;

    let action = match cli.command {
        Commands::List => {
            if let Some(header) = render_section_header(style, session.project_path()) {
                println!("{header}");
            }
            for line in format_row_lines(&session.rows(), style) {
                println!("{line}");
            }
            return Ok(());
        }
        Commands::Search { query } => {
            session.set_search(&query);
            let rows = session.rows();
            for line in format_search_results(&session.visible_ids(), &rows, &query, style) {
                println!("{line}");
            }
            return Ok(());
        }
        Commands::Repositories {
            show,
            hide,
            prerelease,
            hide_local,
        } => {
            let changes = RepositoryChanges {
                show,
                hide,
                prerelease,
                hide_local,
            };
            apply_repository_changes(&session, &changes).await?;
            if let Some(info) = session.repositories_info() {
                for line in format_repository_lines(&info) {
                    println!("{line}");
                }
            }
            return Ok(());
        }
        Commands::Completions { .. } => return Ok(()),
        Commands::Plan { action, packages } => {
            for skipped in select_packages(&session, &packages)? {
                println!(
                    "{}",
                    render_status_line(
                        style,
                        "warn",
                        &format!("skipped '{skipped}': not eligible for the current selection"),
                    )
                );
            }
            UserAction::Bulk(action.bulk_action())
        }
        Commands::Install { package, version } => match version {
            Some(version) => UserAction::InstallVersion {
                package_id: PackageId::from(package),
                version,
            },
            None => UserAction::InstallLatest {
                package_id: PackageId::from(package),
            },
        },
        Commands::Remove { package } => UserAction::Remove {
            package_id: PackageId::from(package),
        },
        Commands::UpgradeAll { stable } => {
            UserAction::UpgradeAll(Stability::from_stable_flag(stable))
        }
        Commands::ReinstallAll => UserAction::ReinstallAll,
    };

    let request = session.dispatch(action).await?;
    for line in format_request_lines(request.as_ref(), style)? {
        println!("{line}");
    }

    Ok(())
}
