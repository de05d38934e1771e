#![cfg(feature = "std")]

//! Main menu and the screens it dispatches to.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::{
    common::Marker,
    config::{MAX_DIMENSION, MIN_DIMENSION},
    game_loop::{GameLoop, MatchSummary},
    player::{PieceColor, Player},
    player_cli::{parse_yes, ConsoleFrontend},
    settings::Settings,
    ui,
};

/// Options on the main menu, numbered as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Play,
    Settings,
    Rules,
    Quit,
}

impl FromStr for MenuCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "play" => Ok(MenuCommand::Play),
            "2" | "settings" => Ok(MenuCommand::Settings),
            "3" | "rules" => Ok(MenuCommand::Rules),
            "4" | "quit" | "q" => Ok(MenuCommand::Quit),
            other => Err(format!("Invalid option '{}'", other)),
        }
    }
}

/// Interactive menu over a console. Holds the settings explicitly and writes
/// them back to `settings_path` when they change.
pub struct Menu<R: BufRead, W: Write> {
    console: ConsoleFrontend<R, W>,
    settings: Settings,
    settings_path: PathBuf,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(console: ConsoleFrontend<R, W>, settings: Settings, settings_path: PathBuf) -> Self {
        Self {
            console,
            settings,
            settings_path,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_console(self) -> ConsoleFrontend<R, W> {
        self.console
    }

    /// Loop until the user quits.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.console.refresh()?;
            ui::write_main_menu(self.console.output())?;
            let choice = self.console.prompt("Select an option (1-4): ")?;
            match choice.parse::<MenuCommand>() {
                Ok(MenuCommand::Play) => {
                    self.play()?;
                    self.console
                        .pause("Press Enter to return to the main menu...")?;
                }
                Ok(MenuCommand::Settings) => self.settings_screen()?,
                Ok(MenuCommand::Rules) => self.rules_screen()?,
                Ok(MenuCommand::Quit) => {
                    self.console.say("Thanks for playing!");
                    return Ok(());
                }
                Err(e) => {
                    self.console
                        .pause(&format!("{}. Press Enter to continue...", e))?;
                }
            }
        }
    }

    /// Set up two players and play rounds until they stop.
    pub fn play(&mut self) -> anyhow::Result<MatchSummary> {
        self.console.refresh()?;
        let dimensions = self.settings.dimensions();
        self.console.say(&format!(
            "Game Settings: {} rows x {} columns\n",
            dimensions.rows(),
            dimensions.columns()
        ));
        let players = self.setup_players()?;
        let mut game = GameLoop::new(players, dimensions)?;
        let summary = game.run(&mut self.console)?;
        log::info!(
            "match over: {} rounds, wins {:?}, draws {}",
            summary.rounds,
            summary.wins,
            summary.draws
        );
        Ok(summary)
    }

    /// Ask for both names and colours. Player 2 cannot reuse player 1's colour.
    pub fn setup_players(&mut self) -> anyhow::Result<[Player; 2]> {
        let first_name = self.ask_name(1)?;
        let second_name = self.ask_name(2)?;

        let mut available = PieceColor::ALL.to_vec();
        let first_color = self.ask_color(&first_name, &available)?;
        available.retain(|&color| color != first_color);
        let second_color = self.ask_color(&second_name, &available)?;

        Ok([
            Player::new(first_name, Marker::First, first_color),
            Player::new(second_name, Marker::Second, second_color),
        ])
    }

    fn ask_name(&mut self, number: usize) -> anyhow::Result<String> {
        let name = self
            .console
            .prompt(&format!("Player {}, please enter your name: ", number))?;
        Ok(if name.is_empty() {
            format!("Player {}", number)
        } else {
            name
        })
    }

    fn ask_color(&mut self, name: &str, available: &[PieceColor]) -> anyhow::Result<PieceColor> {
        self.console.refresh()?;
        ui::write_palette(self.console.output(), available)?;
        loop {
            let answer = self
                .console
                .prompt(&format!("{}, choose your color: ", name))?;
            match PieceColor::parse(&answer).filter(|color| available.contains(color)) {
                Some(color) => return Ok(color),
                None => self
                    .console
                    .say("Invalid color. Please choose from the above colors."),
            }
        }
    }

    /// Show the settings and optionally change and persist them.
    pub fn settings_screen(&mut self) -> anyhow::Result<()> {
        self.console.refresh()?;
        ui::write_settings(
            self.console.output(),
            self.settings.dimensions(),
            self.settings.animate_drops,
        )?;
        let change = self
            .console
            .prompt("Do you want to change the settings? (y/N): ")?;
        if parse_yes(&change) {
            let rows = self.ask_dimension("rows")?;
            let columns = self.ask_dimension("columns")?;
            let animate = self.console.prompt("Animate falling pieces? (y/N): ")?;
            self.settings = Settings {
                animate_drops: parse_yes(&animate),
                ..self.settings.with_size(rows, columns)
            };
            self.settings.save(&self.settings_path)?;
            self.console.say("Settings updated!");
        }
        self.console.pause("Press Enter to return to the main menu...")
    }

    fn ask_dimension(&mut self, what: &str) -> anyhow::Result<i64> {
        loop {
            let answer = self
                .console
                .prompt(&format!("Enter number of {}: ", what))?;
            match answer.parse::<i64>() {
                Ok(value) if (MIN_DIMENSION as i64..=MAX_DIMENSION as i64).contains(&value) => {
                    return Ok(value)
                }
                Ok(_) => self.console.say(&format!(
                    "{} must be between {} and {}.",
                    what, MIN_DIMENSION, MAX_DIMENSION
                )),
                Err(_) => self.console.say("Please enter a whole number."),
            }
        }
    }

    pub fn rules_screen(&mut self) -> anyhow::Result<()> {
        self.console.refresh()?;
        ui::write_rules(self.console.output(), self.settings.dimensions())?;
        self.console.pause("Press Enter to return to the main menu...")
    }
}
