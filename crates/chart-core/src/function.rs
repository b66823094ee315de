// File: crates/chart-core/src/function.rs
// Summary: Target function evaluators and the static metadata describing them.

use serde::{Deserialize, Serialize};

/// A real function the global chart can resample.
pub trait Evaluator {
    /// Legend label, e.g. `f(x) = x⁵ − 3x⁴ + 10x − 8`.
    fn label(&self) -> &str;
    fn eval(&self, x: f64) -> f64;
}

/// f(x) = x⁵ − 3x⁴ + 10x − 8, the function the backend solves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quintic;

impl Quintic {
    /// f'(x) = 5x⁴ − 12x³ + 10
    pub fn df(x: f64) -> f64 {
        5.0 * x.powi(4) - 12.0 * x.powi(3) + 10.0
    }

    /// f''(x) = 20x³ − 36x²
    pub fn d2f(x: f64) -> f64 {
        20.0 * x.powi(3) - 36.0 * x.powi(2)
    }

    pub fn info() -> FunctionInfo {
        FunctionInfo {
            function: "f(x) = x⁵ - 3x⁴ + 10x - 8".into(),
            derivative: "f'(x) = 5x⁴ - 12x³ + 10".into(),
            second_derivative: "f''(x) = 20x³ - 36x²".into(),
            newton_formula: "x_{n+1} = x_n - f(x_n) / f'(x_n)".into(),
            approximate_roots: vec![
                ApproximateRoot { value: 0.8, description: "Primary real root".into() },
                ApproximateRoot { value: 2.9, description: "Second real root".into() },
            ],
        }
    }
}

impl Evaluator for Quintic {
    fn label(&self) -> &str {
        "f(x) = x⁵ − 3x⁴ + 10x − 8"
    }

    fn eval(&self, x: f64) -> f64 {
        x.powi(5) - 3.0 * x.powi(4) + 10.0 * x - 8.0
    }
}

/// Any closure with a label is an evaluator.
pub struct FnEvaluator<F> {
    label: String,
    f: F,
}

impl<F: Fn(f64) -> f64> FnEvaluator<F> {
    pub fn new(label: impl Into<String>, f: F) -> Self {
        Self { label: label.into(), f }
    }
}

impl<F: Fn(f64) -> f64> Evaluator for FnEvaluator<F> {
    fn label(&self) -> &str { &self.label }
    fn eval(&self, x: f64) -> f64 { (self.f)(x) }
}

/// Descriptive payload served by the function-info endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInfo {
    pub function: String,
    pub derivative: String,
    pub second_derivative: String,
    pub newton_formula: String,
    pub approximate_roots: Vec<ApproximateRoot>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApproximateRoot {
    pub value: f64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quintic_values() {
        assert_eq!(Quintic.eval(1.0), 0.0);
        assert_eq!(Quintic.eval(0.0), -8.0);
        assert_eq!(Quintic.eval(2.0), 32.0 - 48.0 + 20.0 - 8.0);
        assert_eq!(Quintic::df(1.0), 3.0);
        assert_eq!(Quintic::d2f(1.0), -16.0);
    }

    #[test]
    fn closure_evaluator() {
        let sq = FnEvaluator::new("x²", |x| x * x);
        assert_eq!(sq.label(), "x²");
        assert_eq!(sq.eval(-3.0), 9.0);
    }

    #[test]
    fn info_serializes_camel_case() {
        let json = serde_json::to_value(Quintic::info()).unwrap();
        assert!(json.get("secondDerivative").is_some());
        assert_eq!(json["approximateRoots"].as_array().map(Vec::len), Some(2));
    }
}
