use std::fmt;

use plumb_core::Function;

/// The iteration to run, determined by which derivatives are available.
#[derive(Clone, Copy)]
pub enum Method<'a> {
    /// Derivative-free secant iteration.
    ///
    /// `x1` is an optional second starting estimate. Without one, the solver
    /// perturbs `x0` slightly to get the second point.
    Secant { x1: Option<f64> },

    /// Newton-Raphson iteration with the first derivative.
    Newton { fprime: &'a dyn Function },

    /// Halley's iteration with the first and second derivatives.
    Halley {
        fprime: &'a dyn Function,
        fprime2: &'a dyn Function,
    },
}

/// Identifies an iteration formula without carrying its derivatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Secant,
    Newton,
    Halley,
}

impl<'a> Method<'a> {
    /// Selects a method from whichever derivatives are supplied.
    ///
    /// A first derivative selects Newton-Raphson, upgraded to Halley when the
    /// second derivative is also present. Without a first derivative the
    /// secant method is used, starting from `x1` if given; a lone second
    /// derivative is ignored. `x1` is ignored whenever `fprime` is present.
    #[must_use]
    pub fn select(
        fprime: Option<&'a dyn Function>,
        fprime2: Option<&'a dyn Function>,
        x1: Option<f64>,
    ) -> Self {
        match (fprime, fprime2) {
            (Some(fprime), Some(fprime2)) => Self::Halley { fprime, fprime2 },
            (Some(fprime), None) => Self::Newton { fprime },
            (None, _) => Self::Secant { x1 },
        }
    }

    /// Secant method seeded by perturbing `x0`.
    #[must_use]
    pub fn secant() -> Self {
        Self::Secant { x1: None }
    }

    /// Secant method with an explicit second estimate.
    #[must_use]
    pub fn secant_from(x1: f64) -> Self {
        Self::Secant { x1: Some(x1) }
    }

    /// Newton-Raphson with the given first derivative.
    #[must_use]
    pub fn newton(fprime: &'a impl Function) -> Self {
        Self::Newton { fprime }
    }

    /// Halley's method with the given first and second derivatives.
    #[must_use]
    pub fn halley(fprime: &'a impl Function, fprime2: &'a impl Function) -> Self {
        Self::Halley { fprime, fprime2 }
    }

    /// Returns the kind of iteration this method runs.
    #[must_use]
    pub fn kind(&self) -> MethodKind {
        match self {
            Self::Secant { .. } => MethodKind::Secant,
            Self::Newton { .. } => MethodKind::Newton,
            Self::Halley { .. } => MethodKind::Halley,
        }
    }
}

impl fmt::Debug for Method<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secant { x1 } => f.debug_struct("Secant").field("x1", x1).finish(),
            Self::Newton { .. } => f.write_str("Newton"),
            Self::Halley { .. } => f.write_str("Halley"),
        }
    }
}
