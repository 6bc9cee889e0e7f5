/// A real-valued function of one real variable.
///
/// Root finders take the function whose zero is wanted, and optionally its
/// first and second derivatives, as `Function`s. Any `Fn(f64) -> f64`
/// closure or function pointer is a `Function`, and physical models can
/// implement it on small value types that carry their parameters.
pub trait Function {
    /// Evaluates the function at `x`.
    fn value(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
