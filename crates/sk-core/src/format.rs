//! Float rendering for the human-readable string forms.
//!
//! Output consumers expect the shortest round-trip digits with a
//! fractional part on integral values (`1.0`, not `1`) and exponents in
//! the `1e+16` / `1e-05` style. Rust's `Debug` output already picks the
//! same digits and the same switch-over points, so only the exponent
//! needs rewriting.

/// Render a float in the canonical shortest form used by all string forms.
pub fn format_float(value: f64) -> String {
    let raw = format!("{value:?}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
