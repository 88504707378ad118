use crate::domain::StockRecord;

/// Column delimiter of the stock file
pub const FIELD_DELIMITER: char = ',';

/// Parse one data line into a record
///
/// Never fails: missing trailing columns become empty strings and an
/// unparseable value becomes `None`. Columns past the fifth are ignored.
/// Quoted delimiters are not supported.
pub fn parse_line(line: &str) -> StockRecord {
    let mut fields = line.split(FIELD_DELIMITER);
    let mut next = || fields.next().unwrap_or_default();

    let name = next();
    let date = next();
    let notes = next();
    let value = parse_leading_float(next());
    let change = next();

    StockRecord::new(name, date, notes, value, change)
}

/// Parse the longest leading decimal float of `text`
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `"12.5abc"` yields `12.5`. Returns `None` when no digits lead the text.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
