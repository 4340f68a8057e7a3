use std::sync::{Arc, Mutex};
use strategy_calc::{
    Addition, Calculation, Calculator, DiagnosticSink, Division, Multiplication, Strategy,
    Subtraction,
};

#[derive(Clone, Default)]
struct RecordingSink {
    notices: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

#[test]
fn test_full_demonstration_sequence() {
    let sink = RecordingSink::default();

    let mut calculator = Calculator::new(Box::new(Addition));
    assert_eq!(calculator.calculate(20, 10), 30.0);

    calculator.set_strategy(Box::new(Subtraction));
    assert_eq!(calculator.calculate(20, 10), 10.0);

    calculator.set_strategy(Box::new(Multiplication));
    assert_eq!(calculator.calculate(20, 10), 200.0);

    calculator.set_strategy(Box::new(Division::new(sink.clone())));
    assert_eq!(calculator.calculate(20, 10), 2.0);

    // the zero-divisor probe returns the sentinel and emits exactly
    // one diagnostic notice, with no failure surfaced to the caller
    let result = calculator.calculate(20, 0);
    assert!(result.is_nan());
    assert_ne!(result, result);
    assert_eq!(sink.notices().len(), 1);
}

#[test]
fn test_calculate_after_replacement_matches_direct_execution() {
    let histories: Vec<fn() -> Calculator> = vec![
        || Calculator::new(Box::new(Addition)),
        || Calculator::new(Box::new(Subtraction)),
        || {
            let mut c = Calculator::new(Box::new(Multiplication));
            c.set_strategy(Box::new(Addition));
            c
        },
    ];

    for make in histories {
        let mut calculator = make();
        calculator.set_strategy(Box::new(Subtraction));
        assert_eq!(calculator.calculate(-3, 8), Subtraction.execute(-3, 8));
    }
}

#[test]
fn test_strategies_are_pure() {
    let division = Division::new(RecordingSink::default());
    for _ in 0..3 {
        assert_eq!(Addition.execute(13, -4), 9.0);
        assert_eq!(division.execute(9, 2), 4.5);
    }
}

#[test]
fn test_summary_serializes_nan_sentinel_as_null() {
    let calculation = Calculation {
        operation: "Division".to_string(),
        a: 20,
        b: 0,
        result: f64::NAN,
    };

    let json = serde_json::to_string(&calculation).unwrap();
    assert!(json.contains("\"result\":null"));
}
