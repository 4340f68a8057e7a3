use crate::core::Strategy;

/// Context holding the currently active strategy.
///
/// The box always holds a strategy; construction without one is not
/// expressible, so `calculate` never has a missing-algorithm path.
pub struct Calculator {
    strategy: Box<dyn Strategy>,
}

impl Calculator {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    /// Replaces the active strategy. Takes effect for every later
    /// `calculate` call; the previous strategy is dropped.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    /// Forwards the operands unmodified to the active strategy and
    /// returns its result unmodified.
    pub fn calculate(&self, a: i32, b: i32) -> f64 {
        tracing::debug!("delegating calculate({}, {}) to active strategy", a, b);
        self.strategy.execute(a, b)
    }
}
