/// Errors raised when constructing composition components.
///
/// The engine has no runtime error taxonomy: every input after construction
/// is internally generated. Precondition violations are rejected up front so
/// downstream arithmetic can assume they hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A pattern needs at least one scale degree to draw notes from
    EmptyScale,
    /// Wandering parameter bounds must satisfy lower < upper
    InvalidBounds { lower: f64, upper: f64 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyScale => {
                write!(f, "scale must contain at least one degree")
            }
            Error::InvalidBounds { lower, upper } => {
                write!(
                    f,
                    "invalid wandering bounds: lower {} must be below upper {}",
                    lower, upper
                )
            }
        }
    }
}

impl std::error::Error for Error {}
