use crate::utils::error::{Result, ToonError};

/// `{}` marks where the formatted value goes.
pub const DEFAULT_RATING_FORMAT: &str = "Rating: {}";

/// Formats a rating given as text, e.g. `"4.5"` becomes `"Rating: 4.50"`.
pub fn format_rating(text: &str) -> Result<String> {
    format_rating_with_template(DEFAULT_RATING_FORMAT, text)
}

/// Like [`format_rating`], with the first `{}` of `template` replaced by the value.
pub fn format_rating_with_template(template: &str, text: &str) -> Result<String> {
    let value = parse_rating(text)?;
    Ok(template.replacen("{}", &two_decimals(value), 1))
}

/// Parses decimal text the way the rating feed writes it: optional sign,
/// digits with optional fraction and exponent, an optional `f`/`d` type
/// suffix, or the literals `NaN` and `Infinity`.
pub fn parse_rating(text: &str) -> Result<f64> {
    let invalid = |reason: String| ToonError::InvalidRating {
        value: text.to_string(),
        reason,
    };

    let trimmed = text.trim_matches(|c: char| c <= ' ');
    let negative = trimmed.starts_with('-');
    let unsigned = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);

    match unsigned {
        "NaN" => return Ok(f64::NAN),
        "Infinity" if negative => return Ok(f64::NEG_INFINITY),
        "Infinity" => return Ok(f64::INFINITY),
        _ => {}
    }

    let body = unsigned
        .strip_suffix(&['f', 'F', 'd', 'D'][..])
        .unwrap_or(unsigned);
    // Keeps `inf`, `nan` and friends away from the float parser.
    if !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(invalid("not a decimal number".to_string()));
    }

    let magnitude: f64 = body.parse().map_err(|e| invalid(format!("{}", e)))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Two fraction digits, rounding half up on the shortest decimal form of
/// `value`, so `2.675` gives `2.68` even though its binary value is below the tie.
fn two_decimals(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let point = digits.len() - 2;
    let render = |ds: &[u8]| ds.iter().map(|&d| char::from(b'0' + d)).collect::<String>();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, render(&digits[..point]), render(&digits[point..]))
}
