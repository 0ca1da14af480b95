/// Anything that can be drawn as a rectangular grid of single characters.
pub trait Grid {
    /// The number of rows and columns.
    fn dim(&self) -> (usize, usize);

    /// The character to draw at row `i`, column `j`.
    fn token(&self, i: usize, j: usize) -> char;
}

/// The set of characters used to draw the lines of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxStyle {
    Ascii,
    Unicode,
}

struct Charset {
    /// Left end, line, crossing, right end
    top: [char; 4],
    middle: [char; 4],
    bottom: [char; 4],
    /// Outer wall, inner wall
    walls: [char; 2],
}

impl BoxStyle {
    fn charset(self) -> Charset {
        match self {
            BoxStyle::Ascii => Charset {
                top: ['+', '-', '+', '+'],
                middle: ['+', '-', '+', '+'],
                bottom: ['+', '-', '+', '+'],
                walls: ['|', '|'],
            },
            BoxStyle::Unicode => Charset {
                top: ['╔', '═', '╤', '╗'],
                middle: ['╟', '─', '┼', '╢'],
                bottom: ['╚', '═', '╧', '╝'],
                walls: ['║', '│'],
            },
        }
    }
}

fn push_rule(result: &mut String, cols: usize, rule: [char; 4]) {
    result.push(' ');
    result.push(rule[0]);
    for j in 0..cols {
        if j > 0 {
            result.push(rule[2]);
        }
        result.push(rule[1]);
    }
    result.push(rule[3]);
    result.push('\n');
}

/// Draws the grid with column numbers on top and row letters on the left.
///
/// Panics for grids with more than 9 columns.
pub fn visualize<G: Grid + ?Sized>(grid: &G, style: BoxStyle) -> String {
    let (rows, cols) = grid.dim();
    assert!(cols <= 9, "Grids with more than 9 columns are not supported");
    let charset = style.charset();

    let mut result = String::from(" ");
    for j in 0..cols {
        result.push(' ');
        result.push(char::from(b'1' + j as u8));
    }
    result.push('\n');

    push_rule(&mut result, cols, charset.top);
    for i in 0..rows {
        if i > 0 {
            push_rule(&mut result, cols, charset.middle);
        }
        result.push(char::from(b'A' + i as u8));
        result.push(charset.walls[0]);
        for j in 0..cols {
            if j > 0 {
                result.push(charset.walls[1]);
            }
            result.push(grid.token(i, j));
        }
        result.push(charset.walls[0]);
        result.push('\n');
    }
    push_rule(&mut result, cols, charset.bottom);
    result
}
