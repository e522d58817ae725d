//! Fixed-precision number formatting for the text report.

/// Format `value` with `precision` decimals.
///
/// Not-a-number prints as lowercase `nan`, the spelling dataframe tooling
/// uses, so reports stay byte-comparable with theirs.
pub fn fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    format!("{:.*}", precision, value)
}

/// Format `value` with `precision` decimals and `,` between thousands groups.
pub fn grouped(value: f64, precision: usize) -> String {
    let text = fixed(value, precision);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
