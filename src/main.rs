#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use connect_four::{
    init_logging, ui, ConsoleFrontend, Menu, Settings, DEFAULT_SETTINGS_FILE,
};

#[cfg(feature = "std")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file holding the grid size.
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[cfg(feature = "std")]
#[derive(Subcommand)]
enum Commands {
    /// Open the interactive main menu (default).
    Menu,
    /// Start a game straight away.
    Play {
        #[arg(long, help = "Rows for this game only (clamped to 4-10)")]
        rows: Option<i64>,
        #[arg(long, help = "Columns for this game only (clamped to 4-10)")]
        columns: Option<i64>,
        #[arg(long, help = "Disable the falling-piece animation")]
        no_animation: bool,
    },
    /// Print the rules for the configured grid.
    Rules,
    /// Show the settings, or update them when sizes are given.
    Settings {
        #[arg(long)]
        rows: Option<i64>,
        #[arg(long)]
        columns: Option<i64>,
        #[arg(long)]
        animate_drops: Option<bool>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let settings = Settings::load(&cli.settings)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let console = ConsoleFrontend::stdio(settings.animate_drops);
            Menu::new(console, settings, cli.settings).run()?;
        }
        Commands::Play {
            rows,
            columns,
            no_animation,
        } => {
            // overrides apply to this game only and are never saved
            let settings = Settings {
                animate_drops: settings.animate_drops && !no_animation,
                ..settings.with_size(
                    rows.unwrap_or(settings.rows),
                    columns.unwrap_or(settings.columns),
                )
            };
            let console = ConsoleFrontend::stdio(settings.animate_drops);
            let summary = Menu::new(console, settings, cli.settings).play()?;
            println!(
                "Rounds: {}  Wins: {} / {}  Draws: {}",
                summary.rounds, summary.wins[0], summary.wins[1], summary.draws
            );
        }
        Commands::Rules => {
            ui::write_rules(&mut std::io::stdout(), settings.dimensions())?;
        }
        Commands::Settings {
            rows,
            columns,
            animate_drops,
        } => {
            let changed = rows.is_some() || columns.is_some() || animate_drops.is_some();
            let settings = Settings {
                animate_drops: animate_drops.unwrap_or(settings.animate_drops),
                ..settings.with_size(
                    rows.unwrap_or(settings.rows),
                    columns.unwrap_or(settings.columns),
                )
            };
            if changed {
                settings.save(&cli.settings)?;
            }
            ui::write_settings(
                &mut std::io::stdout(),
                settings.dimensions(),
                settings.animate_drops,
            )?;
        }
    }
    Ok(())
}
