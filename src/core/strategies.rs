use crate::core::{DiagnosticSink, Strategy};

#[derive(Debug, Clone, Copy, Default)]
pub struct Addition;

impl Strategy for Addition {
    fn execute(&self, a: i32, b: i32) -> f64 {
        f64::from(a) + f64::from(b)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Subtraction;

impl Strategy for Subtraction {
    fn execute(&self, a: i32, b: i32) -> f64 {
        f64::from(a) - f64::from(b)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplication;

impl Strategy for Multiplication {
    fn execute(&self, a: i32, b: i32) -> f64 {
        f64::from(a) * f64::from(b)
    }
}

/// Division with a graceful zero-divisor policy: emits one notice on
/// the injected sink and returns the NaN sentinel instead of failing.
pub struct Division<D: DiagnosticSink> {
    diagnostics: D,
}

impl<D: DiagnosticSink> Division<D> {
    pub fn new(diagnostics: D) -> Self {
        Self { diagnostics }
    }
}

impl<D: DiagnosticSink> Strategy for Division<D> {
    fn execute(&self, a: i32, b: i32) -> f64 {
        if b == 0 {
            self.diagnostics
                .notify(&format!("division by zero ({} / 0), returning NaN", a));
            return f64::NAN;
        }
        f64::from(a) / f64::from(b)
    }
}
