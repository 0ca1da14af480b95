use std::io::Write;

use tracing::debug;
use zerosum::{visualize, BoxStyle, Playable, Side};

use crate::player::Player;

pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Tie,
}

/// Plays one game from `start` until a player has no move.
///
/// The first player plays O, the second plays X. If a `style` is given, the
/// board is drawn to `out` before every turn.
///
/// Returns an error only when a player fails, e.g. because its input was closed.
pub fn play_game<S: Playable>(
    mut players: [&mut dyn Player<S>; 2],
    start: S,
    out: &mut dyn Write,
    style: Option<BoxStyle>,
) -> anyhow::Result<(GameResult, S)> {
    let mut state = start;
    loop {
        if let Some(style) = style {
            write!(out, "{}", visualize(&state, style))?;
            if let Some((o, x)) = state.tally() {
                writeln!(out, "O: {}, X: {}", o, x)?;
            }
        }
        let player_idx = match state.turn() {
            Side::O => 0,
            Side::X => 1,
        };
        let player = &mut players[player_idx];
        let Some(next) = player.play(&state)? else {
            break;
        };
        state = next;
        if state.passed() {
            debug!(player = player.name(), "Pass");
            writeln!(out, "{} passes", player.name())?;
        } else {
            debug!(player = player.name(), played = %state.last_move());
            writeln!(out, "{} went {}", player.name(), state.last_move())?;
        }
    }

    // Report who won
    let game_result = match state.winner() {
        Some(Side::O) => GameResult::WonByPlayer { player_idx: 0 },
        Some(Side::X) => GameResult::WonByPlayer { player_idx: 1 },
        None => GameResult::Tie,
    };
    Ok((game_result, state))
}

/// The outcome of a series of games between two players.
#[derive(Debug, Default)]
pub struct MatchScore {
    pub wins: [usize; 2],
    pub ties: usize,
}

/// Plays `num_games` games between the two players, who take turns at playing O.
pub fn play_series<S: Playable>(
    player_1: &mut dyn Player<S>,
    player_2: &mut dyn Player<S>,
    start: &S,
    num_games: usize,
) -> anyhow::Result<MatchScore> {
    let player_names = [player_1.name().to_owned(), player_2.name().to_owned()];
    let mut match_score = MatchScore::default();

    for game_idx in 0..num_games {
        let swapped = game_idx % 2 == 1;
        let players: [&mut dyn Player<S>; 2] = if swapped {
            [&mut *player_2, &mut *player_1]
        } else {
            [&mut *player_1, &mut *player_2]
        };
        match play_game(players, start.clone(), &mut std::io::sink(), None)? {
            (GameResult::WonByPlayer { player_idx }, _) => {
                let winner = if swapped { 1 - player_idx } else { player_idx };
                debug!(winner = %player_names[winner], game_idx);
                match_score.wins[winner] += 1;
            }
            (GameResult::Tie, _) => {
                debug!(game_idx, "Tie");
                match_score.ties += 1;
            }
        }
    }
    Ok(match_score)
}
