//! Report rendering for run outcomes.
//!
//! The text line is the program's human-facing output. The JSON form
//! carries the same result plus its bit pattern and digest for tooling.

use crate::runner::RunOutcome;

/// Default label preceding the result.
pub const DEFAULT_LABEL: &str = "C-computed Sum";

/// Default number of fraction digits.
const DEFAULT_DECIMALS: usize = 2;

/// Program name recorded in the JSON report.
pub const PROGRAM_NAME: &str = "csum";

/// Presentation options for the text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Text before ` = `.
    pub label: String,
    /// Exact number of digits after the decimal point.
    pub decimals: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

/// Render `"<label> = <result>"` with a fixed number of fraction digits.
///
/// No trailing newline; the caller decides how to terminate the line.
/// NaN renders as `nan` (or `-nan` with the sign bit set) and infinities as
/// `inf` / `-inf`, matching a C `printf("%.2f")` on glibc.
#[must_use]
pub fn render_line(result: f64, config: &ReportConfig) -> String {
    if result.is_nan() {
        let sign = if result.is_sign_negative() { "-" } else { "" };
        return format!("{} = {sign}nan", config.label);
    }
    format!("{} = {:.*}", config.label, config.decimals, result)
}

/// Render a one-object JSON summary of `outcome`.
///
/// `sum` is `null` for non-finite results, since JSON has no NaN or
/// infinity; `sum_bits_hex` always carries the exact value.
#[must_use]
pub fn render_json(outcome: &RunOutcome) -> serde_json::Value {
    let sum = if outcome.sum.is_finite() {
        serde_json::json!(outcome.sum)
    } else {
        serde_json::Value::Null
    };
    serde_json::json!({
        "program": PROGRAM_NAME,
        "n": outcome.n(),
        "sum": sum,
        "sum_bits_hex": hex::encode(outcome.sum.to_bits().to_be_bytes()),
        "digest": outcome.digest.as_str(),
    })
}
