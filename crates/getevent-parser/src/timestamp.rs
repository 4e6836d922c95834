//! Bracketed kernel timestamp extraction.
//!
//! `getevent -t` prefixes each event with `[   12345.678901]`. The accepted
//! grammar is `'[' ws* digit+ '.' digit+ ws* ']'`, matched at the first `[`
//! on the line that satisfies it.

/// Extract the first well-formed bracketed timestamp from `line`.
pub fn extract_timestamp(line: &str) -> Option<f64> {
    line.match_indices('[')
        .find_map(|(idx, _)| scan_bracket(&line[idx + 1..]))
}

/// Scan one candidate starting just after a `[`.
fn scan_bracket(rest: &str) -> Option<f64> {
    let body = rest.trim_start();

    let int_len = leading_digits(body);
    if int_len == 0 {
        return None;
    }
    let after_int = body[int_len..].strip_prefix('.')?;

    let frac_len = leading_digits(after_int);
    if frac_len == 0 {
        return None;
    }

    let number_len = int_len + 1 + frac_len;
    let tail = after_int[frac_len..].trim_start();
    if !tail.starts_with(']') {
        return None;
    }

    body[..number_len]
        .parse()
        .ok()
        .filter(|secs: &f64| secs.is_finite())
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
