//! Random self-play demo.
//!
//! Plays a number of uniformly random games through the rule engine and
//! prints a timestamped line per game plus a final tally. Usage:
//!
//! ```text
//! random_playout [games]
//! ```

use chrono::Local;

use parlor_chess::utils::match_harness::{random_playout, PlayoutConfig, PlayoutOutcome};
use parlor_chess::utils::render_board::render_board;

fn main() {
    let games: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10);

    let config = PlayoutConfig::default();
    let mut rng = rand::rng();

    let mut white_wins = 0u32;
    let mut black_wins = 0u32;
    let mut stalemates = 0u32;
    let mut unfinished = 0u32;

    for game_number in 1..=games {
        let record = random_playout(&mut rng, &config);
        match record.outcome {
            PlayoutOutcome::WhiteWinCheckmate => white_wins += 1,
            PlayoutOutcome::BlackWinCheckmate => black_wins += 1,
            PlayoutOutcome::DrawStalemate => stalemates += 1,
            PlayoutOutcome::Unfinished => unfinished += 1,
        }

        println!(
            "[{}] game {game_number}: {} in {} plies",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.outcome.describe(),
            record.plies
        );

        if record.outcome != PlayoutOutcome::Unfinished {
            println!("{}", render_board(&record.final_state.board));
        }
    }

    println!(
        "summary: {games} games, white {white_wins}, black {black_wins}, \
         stalemate {stalemates}, unfinished {unfinished}"
    );
}
