pub mod calculator;
pub mod strategies;

pub use crate::domain::model::Calculation;
pub use crate::domain::ports::{DiagnosticSink, Strategy};
