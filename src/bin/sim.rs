use anyhow::Context;
use connect_four::{Dimensions, GridEngine, Marker, Outcome, Round};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse().context("seed must be an unsigned integer")?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse().context("games must be an unsigned integer")?,
        None => 1,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut round = Round::new(GridEngine::with_dimensions(Dimensions::default()), Marker::First);
    let mut wins = [0usize; 2];
    let mut draws = 0usize;
    let mut last_outcome = Outcome::InProgress;

    for game in 0..games {
        if game > 0 {
            round.restart();
        }
        while !round.outcome().is_terminal() {
            let column = round
                .random_column(&mut rng)
                .context("grid filled without an outcome")?;
            round.play(column)?;
        }
        last_outcome = round.outcome();
        match last_outcome {
            Outcome::Win(marker) => wins[marker.index()] += 1,
            Outcome::Draw => draws += 1,
            Outcome::InProgress => {}
        }
    }

    let final_grid: Vec<String> = round
        .grid()
        .render()
        .to_string()
        .lines()
        .map(str::to_owned)
        .collect();

    let result = json!({
        "games": games,
        "first_wins": wins[Marker::First.index()],
        "second_wins": wins[Marker::Second.index()],
        "draws": draws,
        "last_outcome": last_outcome,
        "final_grid": final_grid,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
