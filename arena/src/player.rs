use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};
use zerosum::{min_max, rank_successors, Evaluation, Playable, Side};

/// Anything that can pick moves in a game of type `S`.
pub trait Player<S: Playable> {
    fn name(&self) -> &str;

    /// Returns the position after this player's move.
    ///
    /// `None` means the player has no move, which ends the game.
    fn play(&mut self, state: &S) -> anyhow::Result<Option<S>>;
}

/// A player that searches the game tree.
pub struct CpuPlayer {
    pub name: String,
    /// The search depth in plies.
    pub level: u32,
    /// Log every candidate move with its value.
    pub verbose: bool,
}

impl CpuPlayer {
    pub fn new(name: &str, level: u32, verbose: bool) -> Self {
        Self {
            name: String::from(name),
            level,
            verbose,
        }
    }
}

impl<S: Playable> Player<S> for CpuPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, state: &S) -> anyhow::Result<Option<S>> {
        // Evaluations are from O's point of view
        let find_min = state.turn() == Side::X;
        if !self.verbose {
            let (next, eval) = min_max(state, self.level, find_min);
            debug!(player = %self.name, %eval, "Search done");
            return Ok(next);
        }

        let mut best: Option<(S, Evaluation)> = None;
        for candidate in rank_successors(state, self.level, find_min) {
            let opponent = candidate
                .reply
                .as_ref()
                .map(|reply| reply.last_move().to_string())
                .unwrap_or_else(|| String::from("-"));
            info!(
                player = %self.name,
                candidate = %candidate.state.last_move(),
                value = %candidate.eval,
                %opponent
            );
            let improves = match &best {
                None => true,
                Some((_, eval)) if find_min => candidate.eval < *eval,
                Some((_, eval)) => candidate.eval > *eval,
            };
            if improves {
                best = Some((candidate.state, candidate.eval));
            }
        }
        Ok(best.map(|(state, _)| state))
    }
}

/// A player that picks a random successor.
pub struct RandomPlayer {
    pub name: String,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(name: &str, rng: StdRng) -> Self {
        Self {
            name: String::from(name),
            rng,
        }
    }
}

impl<S: Playable> Player<S> for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, state: &S) -> anyhow::Result<Option<S>> {
        Ok(state.next().choose(&mut self.rng).cloned())
    }
}

/// A person entering moves line by line, e.g. `C4`.
pub struct HumanPlayer<R, W> {
    pub name: String,
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    buf: String,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: &str, input: R, output: W) -> Self {
        Self {
            name: String::from(name),
            input,
            output,
            buf: String::new(),
        }
    }

    /// Asks which side the person wants to play until they give a usable answer.
    pub fn ask_side(&mut self) -> anyhow::Result<Side> {
        loop {
            let answer = self.prompt("Do you want to play as O or X? ")?;
            match answer.trim().to_ascii_uppercase().as_str() {
                "O" => return Ok(Side::O),
                "X" => return Ok(Side::X),
                _ => {}
            }
            writeln!(self.output, "Sorry, but that does not make sense.")?;
        }
    }

    fn prompt(&mut self, question: &str) -> anyhow::Result<&str> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = self.input.read_line(&mut self.buf)?;
        if num_bytes_read == 0 {
            anyhow::bail!("Input was closed");
        }
        Ok(&self.buf)
    }
}

impl<S, R, W> Player<S> for HumanPlayer<R, W>
where
    S: Playable,
    R: BufRead,
    W: Write,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, state: &S) -> anyhow::Result<Option<S>> {
        if state.is_end() {
            return Ok(None);
        }
        if state.must_pass() {
            return Ok(state.pass());
        }
        loop {
            let parsed = self.prompt("Where do you want to go? ")?.parse::<S::Move>();
            if let Some(next) = parsed.ok().and_then(|mv| state.play(mv)) {
                return Ok(Some(next));
            }
            writeln!(self.output, "Sorry, but that does not make sense.")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use zerosum::{othello, tictactoe, Cell, OthelloState, State, TicTacToeState};

    use super::*;

    fn human(input: &str) -> HumanPlayer<&[u8], Vec<u8>> {
        HumanPlayer::new("You", input.as_bytes(), Vec::new())
    }

    #[test]
    fn human_is_asked_again_after_nonsense() {
        let mut player = human("z9\nB2\nB2\nA1\n");
        let state = TicTacToeState::new().play(tictactoe::Move::new(1, 1)).unwrap();
        let next = player.play(&state).unwrap().unwrap();
        assert_eq!(next.last_move(), tictactoe::Move::new(0, 0));
        let output = String::from_utf8(player.output).unwrap();
        assert_eq!(output.matches("Where do you want to go? ").count(), 4);
        assert_eq!(output.matches("Sorry, but that does not make sense.").count(), 3);
    }

    #[test]
    fn human_fails_on_closed_input() {
        let mut player = human("");
        assert!(Player::<TicTacToeState>::play(&mut player, &TicTacToeState::new()).is_err());
    }

    #[test]
    fn human_passes_without_being_asked() {
        const E: Cell = Cell::Empty;
        const O: Cell = Cell::O;
        const X: Cell = Cell::X;
        let state = OthelloState::from_board(
            [
                [O, O, O, O, O, O, O, O],
                [O, O, X, X, X, X, X, X],
                [O, O, O, O, O, O, X, X],
                [O, O, O, O, O, O, X, X],
                [O, O, O, O, O, O, X, X],
                [O, O, O, O, O, O, X, X],
                [O, O, O, O, O, O, O, X],
                [O, X, O, E, O, O, E, O],
            ],
            othello::Move::new(6, 7),
            Side::O,
        );
        let mut player = human("");
        let next = player.play(&state).unwrap().unwrap();
        assert!(next.passed());
        assert_eq!(next.turn(), Side::X);
    }

    #[test]
    fn human_picks_a_side() {
        let mut player = human("maybe\nx\n");
        assert_eq!(player.ask_side().unwrap(), Side::X);
    }

    #[test]
    fn cpu_takes_the_win_in_both_modes() {
        const E: Cell = Cell::Empty;
        const O: Cell = Cell::O;
        const X: Cell = Cell::X;
        let state = TicTacToeState::from_board(
            [[X, X, E], [O, O, E], [E, E, E]],
            tictactoe::Move::new(0, 1),
            Side::O,
        );
        for verbose in [false, true] {
            let mut cpu = CpuPlayer::new("CPU", 1, verbose);
            let next = cpu.play(&state).unwrap().unwrap();
            assert_eq!(next.last_move(), tictactoe::Move::new(1, 2));
            assert_eq!(next.eval(), Evaluation::WON);
        }
    }

    #[test]
    fn random_player_picks_a_successor() {
        let mut player = RandomPlayer::new("Random", StdRng::seed_from_u64(7));
        let state = OthelloState::new();
        let successors = state.next();
        for _ in 0..10 {
            let next = player.play(&state).unwrap().unwrap();
            assert!(successors.contains(&next));
        }
    }
}
