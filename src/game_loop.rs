#![cfg(feature = "std")]

//! Turn orchestration around a [`Round`].
//!
//! The loop only speaks to the outside world through [`Frontend`]; the grid
//! engine itself never touches the terminal.

use anyhow::bail;

use crate::{
    common::{GridError, Marker, Outcome, Position},
    config::Dimensions,
    game::{MoveError, Round},
    grid::{GridEngine, GridState},
    player::Player,
};

/// How a finished round is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd<'a> {
    Win(&'a Player),
    Draw,
}

/// Presentation and input capability used by [`GameLoop`].
pub trait Frontend {
    /// Show the grid before a player is asked to move.
    fn show_grid(&mut self, grid: &GridState, players: &[Player; 2]);

    /// Show the marker that just landed at `landed`.
    fn show_drop(&mut self, _grid: &GridState, _players: &[Player; 2], _landed: Position) {}

    /// Ask `player` for a 0-indexed column in `[0, columns)`. Malformed input
    /// must be handled here; only a parsed column reaches the grid.
    fn choose_column(&mut self, player: &Player, columns: usize) -> anyhow::Result<usize>;

    /// Tell the acting player why the move was rejected. The message must stay
    /// readable until the player is asked again.
    fn report_error(&mut self, error: &GridError) -> anyhow::Result<()>;

    /// Announce the end of a round.
    fn announce(&mut self, grid: &GridState, players: &[Player; 2], end: RoundEnd<'_>);

    /// Whether to start another round on the same grid.
    fn play_again(&mut self) -> anyhow::Result<bool>;
}

/// Tally over all rounds of one match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub rounds: usize,
    /// Wins indexed by [`Marker::index`].
    pub wins: [usize; 2],
    pub draws: usize,
}

pub struct GameLoop {
    players: [Player; 2],
    round: Round,
}

impl GameLoop {
    /// Players are reordered so `players()[i]` owns the marker with index `i`.
    /// The player holding `Marker::First` moves first.
    pub fn new(players: [Player; 2], dimensions: Dimensions) -> anyhow::Result<Self> {
        let [a, b] = players;
        if a.marker() == b.marker() {
            bail!(
                "players {} and {} share the same marker",
                a.name(),
                b.name()
            );
        }
        let players = if a.marker() == Marker::First { [a, b] } else { [b, a] };
        Ok(Self {
            players,
            round: Round::new(GridEngine::with_dimensions(dimensions), Marker::First),
        })
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Play until the round is won or drawn. Rejected columns are reported and
    /// the same player is asked again.
    pub fn play_round<F: Frontend>(&mut self, frontend: &mut F) -> anyhow::Result<Outcome> {
        loop {
            let state = self.round.grid().render();
            frontend.show_grid(&state, &self.players);

            let player = &self.players[self.round.current().index()];
            let column = frontend.choose_column(player, state.columns())?;

            match self.round.play(column) {
                Ok(turn) => {
                    let state = self.round.grid().render();
                    frontend.show_drop(&state, &self.players, turn.position);
                    if turn.outcome.is_terminal() {
                        self.finish(frontend, turn.outcome);
                        return Ok(turn.outcome);
                    }
                }
                Err(MoveError::Grid(err)) => {
                    log::debug!("{} tried column {}: {}", player.name(), column, err);
                    frontend.report_error(&err)?;
                }
                Err(MoveError::Finished) => return Ok(self.round.outcome()),
            }
        }
    }

    fn finish<F: Frontend>(&self, frontend: &mut F, outcome: Outcome) {
        let state = self.round.grid().render();
        let end = match outcome.winner() {
            Some(marker) => RoundEnd::Win(&self.players[marker.index()]),
            None => RoundEnd::Draw,
        };
        frontend.show_grid(&state, &self.players);
        frontend.announce(&state, &self.players, end);
    }

    /// Play rounds until the frontend declines a replay.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> anyhow::Result<MatchSummary> {
        let mut summary = MatchSummary::default();
        loop {
            let outcome = self.play_round(frontend)?;
            summary.rounds += 1;
            match outcome {
                Outcome::Win(marker) => summary.wins[marker.index()] += 1,
                Outcome::Draw => summary.draws += 1,
                Outcome::InProgress => {}
            }
            if !frontend.play_again()? {
                return Ok(summary);
            }
            self.round.restart();
        }
    }
}
