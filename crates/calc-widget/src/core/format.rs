//! Result formatting

/// Magnitude at or above which results switch to exponent notation
const SCIENTIFIC_UPPER: f64 = 1e15;
/// Magnitude below which results switch to exponent notation
const SCIENTIFIC_LOWER: f64 = 1e-4;

/// Formats a number for the result field.
///
/// Whole numbers carry no decimal point (`150`, not `150.0`). Fractions use
/// the shortest text that reads back as the same value. Very large and very
/// small magnitudes use exponent notation such as `1E+20` or `1E-07`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    if value == 0.0 {
        // also folds -0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude) {
        format!("{value}")
    } else {
        format_scientific(value)
    }
}

fn format_scientific(value: f64) -> String {
    let text = format!("{value:E}");
    let Some((mantissa, exponent)) = text.split_once('E') else {
        return text;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return text;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs())
}
