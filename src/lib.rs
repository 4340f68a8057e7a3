pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::calculator::Calculator;
pub use crate::core::strategies::{Addition, Division, Multiplication, Subtraction};
pub use crate::domain::model::Calculation;
pub use crate::domain::ports::{DiagnosticSink, Strategy};
pub use crate::utils::error::{CalcError, Result};
pub use crate::utils::logger::TracingDiagnostics;
