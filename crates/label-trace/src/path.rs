//! Path mini-language parser
//!
//! Accepts the subset of SVG path data produced by the tracer: move, line,
//! horizontal, vertical, cubic and close. Each letter is followed by a run
//! of numbers which is cut into fixed-size argument groups, one command per
//! group. Unknown letters swallow their arguments, and a trailing group that
//! is too short is dropped.

use label_layout::Point;

/// Whether coordinates are absolute or relative to the current pen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coord {
    Absolute,
    Relative,
}

impl Coord {
    fn of(letter: char) -> Self {
        if letter.is_ascii_uppercase() {
            Coord::Absolute
        } else {
            Coord::Relative
        }
    }

    /// Resolve `point` against the current pen position
    pub fn resolve(self, pen: Point, point: Point) -> Point {
        match self {
            Coord::Absolute => point,
            Coord::Relative => pen.offset(point.x, point.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo {
        mode: Coord,
        to: Point,
    },
    LineTo {
        mode: Coord,
        to: Point,
    },
    Horizontal {
        mode: Coord,
        x: f64,
    },
    Vertical {
        mode: Coord,
        y: f64,
    },
    CubicTo {
        mode: Coord,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    Close,
}

/// Number of arguments per command, `None` for letters we do not handle
fn arity(letter: char) -> Option<usize> {
    match letter.to_ascii_uppercase() {
        'M' | 'L' => Some(2),
        'H' | 'V' => Some(1),
        'C' => Some(6),
        'Z' => Some(0),
        _ => None,
    }
}

fn command(letter: char, args: &[f64]) -> PathCommand {
    let mode = Coord::of(letter);
    match letter.to_ascii_uppercase() {
        'M' => PathCommand::MoveTo {
            mode,
            to: Point::new(args[0], args[1]),
        },
        'L' => PathCommand::LineTo {
            mode,
            to: Point::new(args[0], args[1]),
        },
        'H' => PathCommand::Horizontal { mode, x: args[0] },
        'V' => PathCommand::Vertical { mode, y: args[0] },
        'C' => PathCommand::CubicTo {
            mode,
            ctrl1: Point::new(args[0], args[1]),
            ctrl2: Point::new(args[2], args[3]),
            to: Point::new(args[4], args[5]),
        },
        _ => PathCommand::Close,
    }
}

/// Parse path data into drawing commands
pub fn parse(data: &str) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    let mut scanner = Scanner::new(data);

    while let Some(letter) = scanner.next_letter() {
        let args = scanner.numbers();

        match arity(letter) {
            None => log::trace!("Skipping unsupported path command '{}'", letter),
            Some(0) => commands.push(PathCommand::Close),
            Some(n) => commands.extend(args.chunks_exact(n).map(|group| command(letter, group))),
        }
    }

    commands
}

// =============================================================================
// Scanner
// =============================================================================

struct Scanner<'a> {
    bytes: &'a [u8],
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            text,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if b == b',' || b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Advance to the next command letter, skipping stray characters
    fn next_letter(&mut self) -> Option<char> {
        while let Some(b) = self.peek() {
            self.pos += 1;
            if b.is_ascii_alphabetic() {
                return Some(b as char);
            }
        }
        None
    }

    /// Read the numeric run following a command letter
    fn numbers(&mut self) -> Vec<f64> {
        let mut values = Vec::new();
        loop {
            self.skip_separators();
            match self.number() {
                Some(value) => values.push(value),
                None => break,
            }
        }
        values
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// One number: sign, integer part, fraction, exponent.
    /// A second `.` or a sign ends the number and starts the next one.
    fn number(&mut self) -> Option<f64> {
        let start = self.pos;

        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut count = self.digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            count += self.digits();
        }
        if count == 0 {
            self.pos = start;
            return None;
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mantissa_end = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.digits() == 0 {
                // Not an exponent after all, leave the letter for the caller
                self.pos = mantissa_end;
            }
        }

        self.text[start..self.pos].parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abs_move(x: f64, y: f64) -> PathCommand {
        PathCommand::MoveTo {
            mode: Coord::Absolute,
            to: Point::new(x, y),
        }
    }

    fn abs_line(x: f64, y: f64) -> PathCommand {
        PathCommand::LineTo {
            mode: Coord::Absolute,
            to: Point::new(x, y),
        }
    }

    #[test]
    fn test_simple_square() {
        assert_eq!(
            parse("M0,0 L10,0 L10,10 Z"),
            vec![
                abs_move(0.0, 0.0),
                abs_line(10.0, 0.0),
                abs_line(10.0, 10.0),
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_relative_commands() {
        assert_eq!(
            parse("m1 2h3v-4z"),
            vec![
                PathCommand::MoveTo {
                    mode: Coord::Relative,
                    to: Point::new(1.0, 2.0),
                },
                PathCommand::Horizontal {
                    mode: Coord::Relative,
                    x: 3.0,
                },
                PathCommand::Vertical {
                    mode: Coord::Relative,
                    y: -4.0,
                },
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_repeated_groups() {
        assert_eq!(
            parse("L1 2 3 4 5 6"),
            vec![abs_line(1.0, 2.0), abs_line(3.0, 4.0), abs_line(5.0, 6.0)]
        );
        assert_eq!(parse("H1 2 3").len(), 3);
    }

    #[test]
    fn test_cubic() {
        assert_eq!(
            parse("C1,2 3,4 5,6"),
            vec![PathCommand::CubicTo {
                mode: Coord::Absolute,
                ctrl1: Point::new(1.0, 2.0),
                ctrl2: Point::new(3.0, 4.0),
                to: Point::new(5.0, 6.0),
            }]
        );
    }

    #[test]
    fn test_incomplete_group_is_dropped() {
        assert_eq!(parse("L1 2 3"), vec![abs_line(1.0, 2.0)]);
        assert!(parse("C1 2 3 4 5").is_empty());
    }

    #[test]
    fn test_unknown_letters_are_skipped() {
        assert_eq!(
            parse("M0 0 Q1 1 2 2 A5 5 0 0 1 9 9 L3 3"),
            vec![abs_move(0.0, 0.0), abs_line(3.0, 3.0)]
        );
    }

    #[test]
    fn test_implicit_separators() {
        assert_eq!(parse("L1-2"), vec![abs_line(1.0, -2.0)]);
        assert_eq!(parse("L.5.5"), vec![abs_line(0.5, 0.5)]);
        assert_eq!(parse("L-1.5-.25"), vec![abs_line(-1.5, -0.25)]);
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parse("L1e2 2.5E-1"), vec![abs_line(100.0, 0.25)]);
        assert_eq!(parse("L+3 1e+1"), vec![abs_line(3.0, 10.0)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("  , ").is_empty());
    }

    #[test]
    fn test_close_ignores_arguments() {
        assert_eq!(parse("Z 1 2"), vec![PathCommand::Close]);
    }
}
