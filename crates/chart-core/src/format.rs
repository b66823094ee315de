// File: crates/chart-core/src/format.rs
// Summary: Number formatting for result summaries and axis ticks.

/// Fixed `decimals` with trailing zeros trimmed; exponential outside 1e-10..=1e6.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    let Some(n) = value else { return "-".into() };
    if n.abs() < 1e-10 || n.abs() > 1e6 {
        return exponential(n, 4);
    }
    trim_zeros(format!("{n:.decimals$}"))
}

/// Exponential for |n| < 0.001 or > 10000, else 6 decimals trimmed. Zero is "0".
pub fn format_scientific(value: Option<f64>) -> String {
    let Some(n) = value else { return "-".into() };
    if n == 0.0 {
        return "0".into();
    }
    if n.abs() < 0.001 || n.abs() > 10_000.0 {
        return exponential(n, 4);
    }
    trim_zeros(format!("{n:.6}"))
}

/// Short tick label: integers stay bare, others get up to 3 decimals.
pub fn format_tick(v: f64) -> String {
    if v == 0.0 {
        return "0".into();
    }
    if v.abs() >= 1e5 || v.abs() < 1e-3 {
        return exponential(v, 1);
    }
    trim_zeros(format!("{v:.3}"))
}

/// `1.2346e-5` / `1.2346e+6`, mantissa with `digits` decimals.
fn exponential(n: f64, digits: usize) -> String {
    let s = format!("{n:.digits$e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

fn trim_zeros(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
