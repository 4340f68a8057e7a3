/// A swappable binary arithmetic algorithm.
///
/// Implementations are stateless pure functions of their operands; the
/// division variant additionally reports its zero-divisor edge case
/// through an injected [`DiagnosticSink`].
pub trait Strategy: Send + Sync {
    fn execute(&self, a: i32, b: i32) -> f64;
}

/// Ambient diagnostic-output channel.
///
/// Injected rather than hard-coded so strategies stay testable without
/// capturing process output.
pub trait DiagnosticSink: Send + Sync {
    fn notify(&self, message: &str);
}
