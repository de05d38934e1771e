use std::time::Duration;

use connect_four::{ui, GridEngine, Marker, PieceColor, Player};

const CLEAR: &str = "\x1b[2J";

fn players() -> [Player; 2] {
    [
        Player::new("Ada", Marker::First, PieceColor::Red),
        Player::new("Grace", Marker::Second, PieceColor::Yellow),
    ]
}

/// Animation output split into frames, each frame split into grid lines.
fn frames(output: &str) -> Vec<Vec<&str>> {
    output
        .split(CLEAR)
        .skip(1)
        .map(|frame| frame.lines().collect())
        .collect()
}

#[test]
fn test_drop_animation_falls_to_landed_row() {
    let mut grid = GridEngine::new(6, 7);
    grid.place_marker(2, Marker::First).unwrap();
    let landed = grid.place_marker(2, Marker::Second).unwrap();
    assert_eq!(landed.row, 4);

    let mut out = Vec::new();
    ui::animate_drop(&mut out, &grid.render(), &players(), landed, Duration::ZERO).unwrap();
    let output = String::from_utf8(out).unwrap();
    let frames = frames(&output);
    assert_eq!(frames.len(), landed.row + 1);

    // first frame: falling piece on top, landing cell empty, piece below kept
    let first = &frames[0];
    assert!(first[0].contains('O'));
    assert!(first[1..landed.row + 1].iter().all(|line| !line.contains('O')));
    assert!(first[5].contains('O'));

    // last frame: everything above the landed cell is empty
    let last = frames.last().unwrap();
    assert!(last[..landed.row].iter().all(|line| !line.contains('O')));
    assert!(last[landed.row].contains('O'));
    assert!(last[5].contains('O'));
    assert_eq!(last[6].trim_end(), "1  2  3  4  5  6  7");
}

#[test]
fn test_grid_draws_empty_cells_and_header() {
    let grid = GridEngine::new(4, 4);
    let mut out = Vec::new();
    ui::write_grid(&mut out, &grid.render(), &players()).unwrap();
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[..4].iter().all(|line| *line == ".  .  .  .  "));
    assert_eq!(lines[4], "1  2  3  4  ");
}
