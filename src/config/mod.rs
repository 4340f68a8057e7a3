use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "strategy-calc")]
#[command(about = "A calculator demo driven by runtime-swappable arithmetic strategies")]
pub struct CliConfig {
    #[arg(long, default_value = "20", allow_negative_numbers = true)]
    pub a: i32,

    #[arg(long, default_value = "10", allow_negative_numbers = true)]
    pub b: i32,

    #[arg(long, help = "Print the run summary as JSON")]
    pub json: bool,

    #[arg(long, help = "Write the run summary JSON into this directory")]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_canonical_demo_operands() {
        let config = CliConfig::parse_from(["strategy-calc"]);
        assert_eq!(config.a, 20);
        assert_eq!(config.b, 10);
        assert!(!config.json);
        assert!(config.output_path.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_output_path() {
        let config = CliConfig::parse_from(["strategy-calc", "--output-path", ""]);
        assert!(config.validate().is_err());
    }
}
