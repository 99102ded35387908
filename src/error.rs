/// Errors from interpolant construction and model selection.
///
/// Evaluation of an already-built interpolant never fails; every fallible
/// step happens in a constructor or in [`select_best`](crate::select_best).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpError {
    /// Fewer sample points than the method's minimum.
    TooFewPoints,
    /// A method requiring an exact point count (the fixed cubic: 4) got a
    /// different number.
    WrongPointCount,
    /// `xs`, `ys` (or derivative) slices differ in length.
    LengthMismatch,
    /// Node abscissas are not strictly increasing where the method
    /// requires ordering (splines).
    NotSorted,
    /// Two nodes share the same abscissa, which would divide by zero in a
    /// divided difference or basis denominator.
    DegenerateNodes,
    /// A derivative-consuming method (Hermite, clamped spline) was fit
    /// without its derivative data.
    MissingDerivatives,
    /// A linear system (spline tridiagonal, cubic Vandermonde) hit a zero
    /// pivot and has no unique solution.
    SingularSystem,
    /// Every candidate method was disqualified during cross-validation.
    AllMethodsFailed,
}

impl core::fmt::Display for InterpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterpError::TooFewPoints => {
                write!(f, "not enough sample points for this method")
            }
            InterpError::WrongPointCount => {
                write!(f, "method requires an exact number of sample points")
            }
            InterpError::LengthMismatch => {
                write!(f, "input slices have mismatched lengths")
            }
            InterpError::NotSorted => {
                write!(f, "node abscissas must be strictly increasing")
            }
            InterpError::DegenerateNodes => {
                write!(f, "duplicate node abscissa (zero divisor)")
            }
            InterpError::MissingDerivatives => {
                write!(f, "method requires derivative data")
            }
            InterpError::SingularSystem => {
                write!(f, "linear system is singular")
            }
            InterpError::AllMethodsFailed => {
                write!(f, "no candidate method survived cross-validation")
            }
        }
    }
}
