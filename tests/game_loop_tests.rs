use std::collections::VecDeque;
use std::io::Cursor;

use connect_four::{
    ConsoleFrontend, Dimensions, Frontend, GameLoop, GridError, GridState, Marker, MatchSummary,
    Outcome, PieceColor, Player, Position, RoundEnd,
};

/// Frontend that replays canned columns and records what it was told.
#[derive(Default)]
struct ScriptedFrontend {
    columns: VecDeque<usize>,
    replays: VecDeque<bool>,
    asked: Vec<(String, usize)>,
    errors: Vec<GridError>,
    drops: Vec<Position>,
    endings: Vec<Option<String>>,
}

impl ScriptedFrontend {
    fn new(columns: &[usize], replays: &[bool]) -> Self {
        Self {
            columns: columns.iter().copied().collect(),
            replays: replays.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Frontend for ScriptedFrontend {
    fn show_grid(&mut self, _grid: &GridState, _players: &[Player; 2]) {}

    fn show_drop(&mut self, _grid: &GridState, _players: &[Player; 2], landed: Position) {
        self.drops.push(landed);
    }

    fn choose_column(&mut self, player: &Player, columns: usize) -> anyhow::Result<usize> {
        self.asked.push((player.name().to_string(), columns));
        self.columns
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn report_error(&mut self, error: &GridError) -> anyhow::Result<()> {
        self.errors.push(*error);
        Ok(())
    }

    fn announce(&mut self, _grid: &GridState, _players: &[Player; 2], end: RoundEnd<'_>) {
        self.endings.push(match end {
            RoundEnd::Win(player) => Some(player.name().to_string()),
            RoundEnd::Draw => None,
        });
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        Ok(self.replays.pop_front().unwrap_or(false))
    }
}

fn players() -> [Player; 2] {
    [
        Player::new("Ada", Marker::First, PieceColor::Red),
        Player::new("Grace", Marker::Second, PieceColor::Yellow),
    ]
}

#[test]
fn test_round_ends_on_first_win() {
    let mut game = GameLoop::new(players(), Dimensions::default()).unwrap();
    let mut frontend = ScriptedFrontend::new(&[0, 0, 1, 1, 2, 2, 3], &[]);
    let outcome = game.play_round(&mut frontend).unwrap();
    assert_eq!(outcome, Outcome::Win(Marker::First));
    assert_eq!(frontend.endings, vec![Some("Ada".to_string())]);
    assert_eq!(frontend.drops.len(), 7);
    assert_eq!(frontend.drops[0], Position::new(5, 0));
    let names: Vec<_> = frontend.asked.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Grace", "Ada", "Grace", "Ada", "Grace", "Ada"]);
}

#[test]
fn test_rejected_column_reprompts_same_player() {
    let mut game = GameLoop::new(players(), Dimensions::new(4, 4)).unwrap();
    // fill column 0, then Ada tries it again, then an out-of-range column
    let mut frontend = ScriptedFrontend::new(&[0, 0, 0, 0, 0, 9, 1, 1, 2, 1, 3], &[]);
    let outcome = game.play_round(&mut frontend).unwrap();
    assert_eq!(
        frontend.errors,
        vec![
            GridError::ColumnFull { column: 0 },
            GridError::InvalidColumn { column: 9, columns: 4 }
        ]
    );
    let names: Vec<_> = frontend.asked.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(&names[4..7], &["Ada", "Ada", "Ada"]);
    assert!(frontend.asked.iter().all(|(_, columns)| *columns == 4));
    assert_eq!(outcome, game.round().outcome());
}

#[test]
fn test_players_are_ordered_by_marker() {
    let [ada, grace] = players();
    let ada = Player::new(ada.name(), Marker::Second, ada.color());
    let grace = Player::new(grace.name(), Marker::First, grace.color());
    let game = GameLoop::new([ada, grace], Dimensions::default()).unwrap();
    assert_eq!(game.players()[0].name(), "Grace");
    assert_eq!(game.players()[1].name(), "Ada");
}

#[test]
fn test_duplicate_markers_are_rejected() {
    let twins = [
        Player::new("A", Marker::First, PieceColor::Red),
        Player::new("B", Marker::First, PieceColor::Blue),
    ];
    assert!(GameLoop::new(twins, Dimensions::default()).is_err());
}

#[test]
fn test_run_counts_rounds_until_declined() {
    let mut game = GameLoop::new(players(), Dimensions::default()).unwrap();
    // Round 1: Ada wins on the bottom row. Ada opens round 2 and Grace wins
    // with a vertical stack.
    let round_one = [0, 0, 1, 1, 2, 2, 3];
    let round_two = [0, 1, 0, 1, 0, 1, 2, 1];
    let script: Vec<usize> = round_one.iter().chain(round_two.iter()).copied().collect();
    let mut frontend = ScriptedFrontend::new(&script, &[true, false]);
    let summary = game.run(&mut frontend).unwrap();
    assert_eq!(
        summary,
        MatchSummary {
            rounds: 2,
            wins: [1, 1],
            draws: 0
        }
    );
    assert_eq!(
        frontend.endings,
        vec![Some("Ada".to_string()), Some("Grace".to_string())]
    );
}

#[test]
fn test_exhausted_input_is_an_error() {
    let mut game = GameLoop::new(players(), Dimensions::default()).unwrap();
    let mut frontend = ScriptedFrontend::new(&[3], &[]);
    assert!(game.play_round(&mut frontend).is_err());
}

#[test]
fn test_console_game_with_bad_input() {
    let input = "abc\n0\n8\n1\n1\n2\n2\n3\n3\n4\nn\n";
    let mut console = ConsoleFrontend::new(Cursor::new(input), Vec::new());
    let mut game = GameLoop::new(players(), Dimensions::default()).unwrap();
    let summary = game.run(&mut console).unwrap();
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.wins, [1, 0]);

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("'abc' is not a number"));
    assert!(output.contains("Column 0 out of range"));
    assert!(output.contains("Column 8 out of range"));
    assert!(output.contains("Ada wins!"));
    assert!(output.contains("1  2  3  4  5  6  7"));
}

#[test]
fn test_console_reports_full_column() {
    let input = "1\n1\n1\n1\n1\n1\n1\n2\n2\n3\n3\n4\nn\n";
    let mut console = ConsoleFrontend::new(Cursor::new(input), Vec::new());
    let mut game = GameLoop::new(players(), Dimensions::default()).unwrap();
    game.run(&mut console).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("column 1 is full, try another"));
}

#[test]
fn test_full_column_message_survives_screen_clear() {
    // the empty line after the rejected seventh "1" acknowledges the message
    let input = "1\n1\n1\n1\n1\n1\n1\n\n2\n2\n3\n3\n4\nn\n";
    let mut console = ConsoleFrontend::new(Cursor::new(input), Vec::new()).clear_screen(true);
    let mut game = GameLoop::new(players(), Dimensions::default()).unwrap();
    let summary = game.run(&mut console).unwrap();
    assert_eq!(summary.wins, [1, 0]);

    let output = String::from_utf8(console.into_output()).unwrap();
    let reported = output.find("column 1 is full, try another").unwrap();
    let after = &output[reported..];
    let pause = after.find("Press Enter to continue...").unwrap();
    let clear = after.find("\x1b[2J").unwrap();
    assert!(pause < clear);
}
