use crate::State;

/// A random line of play, given as the index of the successor to pick at each ply.
///
/// The indices are taken modulo the number of successors, so every line is
/// playable in every game.
#[derive(Clone, Debug)]
pub struct Line {
    choices: Vec<u8>,
}

impl Line {
    /// All positions along the line, starting with `start`.
    ///
    /// Stops early when a position without successors is reached.
    pub fn positions<S: State + Clone>(&self, start: S) -> Vec<S> {
        let mut positions = vec![start];
        for &choice in &self.choices {
            let Some(state) = positions.last() else {
                break;
            };
            let mut nxt = state.next();
            if nxt.is_empty() {
                break;
            }
            let idx = usize::from(choice) % nxt.len();
            positions.push(nxt.swap_remove(idx));
        }
        positions
    }
}

impl quickcheck::Arbitrary for Line {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Line {
            choices: Vec::<u8>::arbitrary(g),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.choices.shrink().map(|choices| Line { choices }))
    }
}
