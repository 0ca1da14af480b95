use super::{Move, N};

/// Values for the upper triangle of the top left quadrant, row by row:
///
/// ```text
/// 99  -8   8   6
///    -24  -4  -3
///          7   4
///              0
/// ```
///
/// Corners are valuable, the cells next to them are dangerous.
const TEMPLATE: [i8; 10] = [99, -8, 8, 6, -24, -4, -3, 7, 4, 0];

/// How valuable it is to own each cell of the board.
pub const WEIGHTS: [[i8; N]; N] = mirror_template();

/// All cells of the board, most valuable first.
///
/// Cells of equal value are in row-major order. This is the order in which
/// moves are tried by [`OthelloState::next()`](super::OthelloState).
pub const MOVE_ORDER: [Move; N * N] = sort_by_weight();

const fn mirror_template() -> [[i8; N]; N] {
    let mut table = [[0; N]; N];
    let (mut i, mut j) = (0, 0);
    let mut k = 0;
    while k < TEMPLATE.len() {
        let v = TEMPLATE[k];
        table[i][j] = v;
        table[i][N - j - 1] = v;
        table[j][i] = v;
        table[j][N - i - 1] = v;
        table[N - i - 1][j] = v;
        table[N - i - 1][N - j - 1] = v;
        table[N - j - 1][i] = v;
        table[N - j - 1][N - i - 1] = v;
        j += 1;
        if j == N / 2 {
            i += 1;
            j = i;
        }
        k += 1;
    }
    table
}

pub(crate) const fn weight(mv: Move) -> i8 {
    WEIGHTS[mv.i as usize][mv.j as usize]
}

const fn sort_by_weight() -> [Move; N * N] {
    let mut moves = [Move::PASS; N * N];
    let mut k = 0;
    while k < N * N {
        moves[k] = Move::new((k / N) as u8, (k % N) as u8);
        k += 1;
    }
    // Insertion sort, which is stable
    let mut k = 1;
    while k < N * N {
        let mut m = k;
        while m > 0 && weight(moves[m - 1]) < weight(moves[m]) {
            let tmp = moves[m - 1];
            moves[m - 1] = moves[m];
            moves[m] = tmp;
            m -= 1;
        }
        k += 1;
    }
    moves
}
