/// A row and column location in program source text.
///
/// Rows and columns are 1-based. Positions travel with tokens and syntax
/// tree nodes so that errors can point at the construct they describe;
/// they never influence evaluation. The default position, `0:0`, stands
/// in when no location is known (for example when the input is empty).
///
/// # Example
/// ```
/// use valet::position::Position;
///
/// let position = Position::new(3, 14);
/// assert_eq!(position.to_string(), "3:14");
/// assert_eq!(Position::default().to_string(), "0:0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Source line, starting at 1.
    pub row: usize,
    /// Column within the line, starting at 1.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}
