use clap::Parser;
use std::fs;
use std::path::Path;
use strategy_calc::utils::{logger, validation::Validate};
use strategy_calc::{
    Addition, Calculation, Calculator, CliConfig, Division, Multiplication, Subtraction,
    TracingDiagnostics,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting strategy-calc demonstration");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match run_demo(&config) {
        Ok(()) => {
            tracing::info!("✅ Demonstration completed successfully!");
        }
        Err(e) => {
            tracing::error!("❌ Demonstration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Runs the fixed demonstration sequence: every strategy over the
/// configured operand pair, then the zero-divisor probe.
fn run_demo(config: &CliConfig) -> strategy_calc::Result<()> {
    let (a, b) = (config.a, config.b);
    let mut calculations = Vec::new();

    let mut calculator = Calculator::new(Box::new(Addition));
    record(&calculator, "Addition", a, b, &mut calculations);

    calculator.set_strategy(Box::new(Subtraction));
    record(&calculator, "Subtraction", a, b, &mut calculations);

    calculator.set_strategy(Box::new(Multiplication));
    record(&calculator, "Multiplication", a, b, &mut calculations);

    calculator.set_strategy(Box::new(Division::new(TracingDiagnostics)));
    record(&calculator, "Division", a, b, &mut calculations);

    // zero-divisor probe: sentinel result, not a failure
    record(&calculator, "Division", a, 0, &mut calculations);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&calculations)?);
    }

    if let Some(output_path) = &config.output_path {
        fs::create_dir_all(output_path)?;
        let summary_path = Path::new(output_path).join("summary.json");
        fs::write(&summary_path, serde_json::to_vec_pretty(&calculations)?)?;
        tracing::info!("📁 Summary saved to: {}", summary_path.display());
        println!("📁 Summary saved to: {}", summary_path.display());
    }

    Ok(())
}

fn record(
    calculator: &Calculator,
    operation: &str,
    a: i32,
    b: i32,
    calculations: &mut Vec<Calculation>,
) {
    let result = calculator.calculate(a, b);
    println!("{} result: {}", operation, result);
    calculations.push(Calculation {
        operation: operation.to_string(),
        a,
        b,
        result,
    });
}
