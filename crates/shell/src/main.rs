mod picker;
mod report;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use tars_app::bootstrap::{
    bootstrap_locale, bootstrap_workspace, persist_locale, system_locale_tag,
};
use tars_app::flow::{open_project, open_project_from_dialog, refresh_recent_projects};
use tars_app::ports::{Clipboard, NativeDirectoryProbe, SystemClipboard};
use tars_app::AppState;
use tars_core::locale::Locale;
use tars_core::meta;
use tars_core::threads::build_mock_workspace_data;
use tars_local_db::ProjectDb;

#[derive(Parser)]
#[command(name = "tars", about = "TARS launcher shell - recent projects and workspace state")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recently opened projects
    Recent,

    /// Open a project directory (prompts for one when PATH is omitted)
    Open {
        /// Absolute path of the project directory
        path: Option<String>,
    },

    /// Remove a path from the recent list
    Remove {
        path: String,
    },

    /// Show or set the interface locale
    Locale {
        /// Locale code ("en" or "zh-CN"); omit to show the current value
        value: Option<String>,
    },

    /// Show the last opened project path
    Last {
        /// Also copy the path to the system clipboard (best-effort)
        #[arg(long)]
        copy: bool,
    },

    /// Show the placeholder thread overview for the selected project
    Threads,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    let db = ProjectDb::open()?;
    let mut state = AppState::default();

    bootstrap_workspace(&db, &mut state).await;
    if !state.ui.startup_error.is_empty() {
        bail!("{}", state.ui.startup_error);
    }
    bootstrap_locale(&db, &mut state, system_locale_tag().as_deref()).await;

    match command {
        Commands::Recent => {
            report::print_recent(&state.workspace.recent_projects);
        }

        Commands::Open { path } => {
            let probe = NativeDirectoryProbe;
            match path {
                Some(path) => {
                    open_project(&db, &probe, &mut state, &path).await;
                }
                None => {
                    open_project_from_dialog(&db, &probe, &picker::PromptPicker, &mut state).await;
                }
            }

            if !state.ui.startup_error.is_empty() {
                bail!("{}", state.ui.startup_error);
            }
            match &state.workspace.current_project_path {
                Some(path) => println!("Opened {path}"),
                None => println!("No project opened."),
            }
        }

        Commands::Remove { path } => {
            db.remove_recent(&path)?;
            refresh_recent_projects(&db, &mut state).await?;
            println!("Removed {path}");
            report::print_recent(&state.workspace.recent_projects);
        }

        Commands::Locale { value } => match value {
            None => println!("{}", state.locale.locale),
            Some(value) => {
                let Some(locale) = Locale::parse(&value) else {
                    bail!("unsupported locale: {value} (expected \"en\" or \"zh-CN\")");
                };
                state.locale.set_locale(locale);
                persist_locale(&db, &mut state).await;
                if !state.ui.startup_error.is_empty() {
                    bail!("{}", state.ui.startup_error);
                }
                println!("Locale set to {locale}");
            }
        },

        Commands::Last { copy } => match db.get_meta(meta::LAST_PROJECT_PATH)? {
            Some(path) => {
                println!("{path}");
                if copy {
                    // Best-effort; a headless session without a clipboard is fine.
                    if let Err(e) = SystemClipboard.write_text(&path) {
                        warn!(error = %e, "clipboard copy skipped");
                    }
                }
            }
            None => println!("No project opened yet."),
        },

        Commands::Threads => {
            let threads =
                build_mock_workspace_data(&state.workspace.recent_projects, report::now_ms());
            state.workspace.reconcile_selected_thread(&threads);
            report::print_threads(&state, &threads);
        }
    }

    Ok(())
}
