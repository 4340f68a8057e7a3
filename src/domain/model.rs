use serde::{Deserialize, Serialize};

/// One computation performed during a demonstration run.
///
/// `result` may be the NaN sentinel (zero divisor); serde_json renders
/// it as `null` in the summary output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculation {
    pub operation: String,
    pub a: i32,
    pub b: i32,
    pub result: f64,
}
