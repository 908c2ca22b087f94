//! Path-command interpretation.
//!
//! A path command is a whitespace-delimited string of single-letter opcodes
//! followed by numeric operands, e.g. `"M 1.0 2.0 L 3.0 4.0 Z"`. The scan
//! is a single left-to-right pass: a recognized opcode consumes a fixed
//! number of operand tokens, and unknown tokens are skipped so that newer
//! opcodes pass through older parsers unchanged. Missing or non-numeric
//! operands abort the whole parse.

use crate::vector::Vector;
use std::fmt;

/// One drawing step in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Vector),
    LineTo(Vector),
    /// Arc parameters exactly as given in the command, six operands.
    ArcTo([f64; 6]),
    /// Arc-shaped travel move, six operands.
    ArcMoveTo([f64; 6]),
    /// Ellipse parameters exactly as given in the command, four operands.
    Ellipse([f64; 4]),
    ClosePath,
}

/// An ordered sequence of path operations. The order is the draw order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathOp> {
        self.ops.iter()
    }

    /// Bounding box over the move/line target points as
    /// `(min_x, min_y, max_x, max_y)`.
    ///
    /// Arc and ellipse operands are not interpreted geometrically, so only
    /// `MoveTo`/`LineTo` targets contribute. Returns `None` when no op
    /// carries a point.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for op in &self.ops {
            let v = match op {
                PathOp::MoveTo(v) | PathOp::LineTo(v) => *v,
                _ => continue,
            };
            bounds = Some(match bounds {
                None => (v.x, v.y, v.x, v.y),
                Some((min_x, min_y, max_x, max_y)) => (
                    min_x.min(v.x),
                    min_y.min(v.y),
                    max_x.max(v.x),
                    max_y.max(v.y),
                ),
            });
        }
        bounds
    }
}

impl From<Vec<PathOp>> for Path {
    fn from(ops: Vec<PathOp>) -> Self {
        Self { ops }
    }
}

impl IntoIterator for Path {
    type Item = PathOp;
    type IntoIter = std::vec::IntoIter<PathOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathOp;
    type IntoIter = std::slice::Iter<'a, PathOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Error from parsing a path command string.
///
/// A recognized opcode had missing or unparseable operands. Unknown opcodes
/// are never errors; they are skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommandError {
    /// The command ended before the opcode's operand count was satisfied.
    MissingOperands {
        opcode: char,
        expected: usize,
        found: usize,
    },
    /// An operand token was not a finite number.
    InvalidOperand { opcode: char, token: String },
}

impl fmt::Display for PathCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommandError::MissingOperands {
                opcode,
                expected,
                found,
            } => write!(
                f,
                "malformed path command: opcode '{}' expects {} operands, found {}",
                opcode, expected, found
            ),
            PathCommandError::InvalidOperand { opcode, token } => write!(
                f,
                "malformed path command: opcode '{}' operand {:?} is not a number",
                opcode, token
            ),
        }
    }
}

impl std::error::Error for PathCommandError {}

/// Build a [`Path`] from a path command string.
///
/// Opcode table (case-sensitive):
///
/// | Opcode | Operands | Operation |
/// |--------|----------|------------|
/// | `M`    | 2        | move to x,y |
/// | `L`    | 2        | line to x,y |
/// | `A`    | 6        | arc to |
/// | `a`    | 6        | arc move to |
/// | `E`    | 4        | ellipse |
/// | `Z`    | 0        | close path |
///
/// Tokens that are not opcodes are skipped without consuming operands. A
/// recognized opcode with too few or non-numeric operands fails the whole
/// parse; the partial path is discarded.
pub fn path_from_command(command: &str) -> Result<Path, PathCommandError> {
    let terms: Vec<&str> = command.split_whitespace().collect();
    let mut ops = Vec::new();

    let mut index = 0;
    while index < terms.len() {
        match terms[index] {
            "M" => {
                let [x, y] = take_operands::<2>(&terms, index + 1, 'M')?;
                ops.push(PathOp::MoveTo(Vector::new(x, y)));
                index += 2;
            }
            "L" => {
                let [x, y] = take_operands::<2>(&terms, index + 1, 'L')?;
                ops.push(PathOp::LineTo(Vector::new(x, y)));
                index += 2;
            }
            "A" => {
                let operands = take_operands::<6>(&terms, index + 1, 'A')?;
                ops.push(PathOp::ArcTo(operands));
                index += 6;
            }
            "a" => {
                let operands = take_operands::<6>(&terms, index + 1, 'a')?;
                ops.push(PathOp::ArcMoveTo(operands));
                index += 6;
            }
            "E" => {
                let operands = take_operands::<4>(&terms, index + 1, 'E')?;
                ops.push(PathOp::Ellipse(operands));
                index += 4;
            }
            "Z" => {
                ops.push(PathOp::ClosePath);
            }
            // Unknown token: skip it, consume no operands.
            _ => {}
        }
        index += 1;
    }

    Ok(Path { ops })
}

/// Take `N` numeric operand tokens starting at `start`.
fn take_operands<const N: usize>(
    terms: &[&str],
    start: usize,
    opcode: char,
) -> Result<[f64; N], PathCommandError> {
    let mut values = [0.0; N];
    for (offset, value) in values.iter_mut().enumerate() {
        let Some(token) = terms.get(start + offset) else {
            return Err(PathCommandError::MissingOperands {
                opcode,
                expected: N,
                found: terms.len() - start,
            });
        };
        let parsed: f64 = token.parse().map_err(|_| PathCommandError::InvalidOperand {
            opcode,
            token: token.to_string(),
        })?;
        if !parsed.is_finite() {
            return Err(PathCommandError::InvalidOperand {
                opcode,
                token: token.to_string(),
            });
        }
        *value = parsed;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_move_line_close() {
        let path = path_from_command("M 1.0 2.0 L 3.0 4.0 Z").unwrap();
        assert_eq!(
            path.ops,
            vec![
                PathOp::MoveTo(Vector::new(1.0, 2.0)),
                PathOp::LineTo(Vector::new(3.0, 4.0)),
                PathOp::ClosePath,
            ]
        );
    }

    #[test]
    fn parses_arc_with_six_operands() {
        let path = path_from_command("A 0 0 1 1 0 360").unwrap();
        assert_eq!(path.ops, vec![PathOp::ArcTo([0.0, 0.0, 1.0, 1.0, 0.0, 360.0])]);
    }

    #[test]
    fn parses_lowercase_arc_as_arc_move() {
        let path = path_from_command("a 1 2 3 4 5 6").unwrap();
        assert_eq!(
            path.ops,
            vec![PathOp::ArcMoveTo([1.0, 2.0, 3.0, 4.0, 5.0, 6.0])]
        );
    }

    #[test]
    fn parses_ellipse_with_four_operands() {
        let path = path_from_command("E 10 20 5 2.5").unwrap();
        assert_eq!(path.ops, vec![PathOp::Ellipse([10.0, 20.0, 5.0, 2.5])]);
    }

    #[test]
    fn preserves_draw_order() {
        let path = path_from_command("M 0 0 E 1 1 2 2 L 5 5 Z").unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.ops[0], PathOp::MoveTo(Vector::new(0.0, 0.0)));
        assert_eq!(path.ops[3], PathOp::ClosePath);
    }

    #[test]
    fn empty_command_gives_empty_path() {
        let path = path_from_command("").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn unknown_token_is_skipped() {
        let path = path_from_command("X M 1.0 2.0").unwrap();
        assert_eq!(path.ops, vec![PathOp::MoveTo(Vector::new(1.0, 2.0))]);
    }

    #[test]
    fn unknown_tokens_do_not_consume_operands() {
        // "Q" is noise; the following "M 1 2" must still parse.
        let path = path_from_command("Q 9 9 M 1 2").unwrap();
        // The stray "9" tokens are themselves noise and skipped.
        assert_eq!(path.ops, vec![PathOp::MoveTo(Vector::new(1.0, 2.0))]);
    }

    #[test]
    fn lowercase_m_is_not_an_opcode() {
        // The table is case-sensitive; "m" is noise and its would-be
        // operands are skipped as noise too.
        let path = path_from_command("m 1.0 2.0").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn missing_operands_fail_the_parse() {
        let err = path_from_command("M 1.0").unwrap_err();
        assert_eq!(
            err,
            PathCommandError::MissingOperands {
                opcode: 'M',
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn arc_with_too_few_operands_fails() {
        assert!(path_from_command("A 0 0 1 1 0").is_err());
    }

    #[test]
    fn non_numeric_operand_fails_the_parse() {
        let err = path_from_command("M 1.0 abc").unwrap_err();
        assert_eq!(
            err,
            PathCommandError::InvalidOperand {
                opcode: 'M',
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn nan_operand_fails_the_parse() {
        assert!(path_from_command("L nan 2.0").is_err());
    }

    #[test]
    fn failure_discards_partial_path() {
        // First op is valid but the parse as a whole must fail.
        let result = path_from_command("M 1 2 L 3");
        assert!(result.is_err());
    }

    #[test]
    fn bounding_box_covers_move_and_line_targets() {
        let path = path_from_command("M 1 2 L 5 -3 L -4 7").unwrap();
        assert_eq!(path.bounding_box(), Some((-4.0, -3.0, 5.0, 7.0)));
    }

    #[test]
    fn bounding_box_is_none_without_vertex_ops() {
        let path = path_from_command("A 0 0 1 1 0 360 Z").unwrap();
        assert_eq!(path.bounding_box(), None);
    }
}
