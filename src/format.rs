//! Diagnostic rendering of axis values. Debug/logging aid only, never on a
//! hot path.

/// Significant digits kept when rendering a scalar.
const SIGNIFICANT_DIGITS: i32 = 16;

/// Joins the first `count` values into a comma-separated string, each value
/// rendered at 16 significant digits with trailing zeros trimmed.
///
/// `join(&[1.0, 2.5, -3.0], 3)` yields `"1, 2.5, -3"`.
pub fn join(values: &[f64], count: usize) -> String {
    values
        .iter()
        .take(count)
        .map(|&value| format_scalar(value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders like C++ `defaultfloat` at precision 16: fixed notation while the
/// decimal exponent lies in [-4, 16), scientific notation outside it.
fn format_scalar(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return value.to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    if magnitude < -4 || magnitude >= SIGNIFICANT_DIGITS {
        let rendered = format!("{value:.15e}");
        match rendered.split_once('e') {
            Some((mantissa, exponent)) => {
                format!("{}e{exponent}", trim_trailing_zeros(mantissa))
            }
            None => rendered,
        }
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude) as usize;
        trim_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_trailing_zeros(rendered: &str) -> &str {
    if !rendered.contains('.') {
        return rendered;
    }
    rendered.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_trailing_zeros() {
        assert_eq!(join(&[1.0, 2.5, -3.0], 3), "1, 2.5, -3");
    }

    #[test]
    fn respects_count() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(join(&values, 2), "1, 2");
        assert_eq!(join(&values, 0), "");
    }

    #[test]
    fn sixteen_significant_digits() {
        assert_eq!(join(&[std::f64::consts::PI], 1), "3.141592653589793");
        assert_eq!(join(&[1.0 / 3.0], 1), "0.3333333333333333");
    }

    #[test]
    fn mixed_magnitudes() {
        assert_eq!(join(&[123456.789, 0.001], 2), "123456.789, 0.001");
    }

    #[test]
    fn tiny_magnitudes_keep_their_significant_digits() {
        assert_eq!(join(&[1e-18], 1), "1e-18");
        assert_eq!(join(&[2.5e-5], 1), "2.5e-5");
    }

    #[test]
    fn huge_magnitudes_switch_to_scientific() {
        assert_eq!(join(&[1.234567890123456e20], 1), "1.234567890123456e20");
        assert_eq!(join(&[-1e16], 1), "-1e16");
    }

    #[test]
    fn fixed_notation_boundary() {
        // Largest and smallest magnitudes still rendered in fixed notation.
        assert_eq!(join(&[1e15], 1), "1000000000000000");
        assert_eq!(join(&[0.0001], 1), "0.0001");
    }

    #[test]
    fn zero_renders_bare() {
        assert_eq!(join(&[0.0], 1), "0");
    }
}
