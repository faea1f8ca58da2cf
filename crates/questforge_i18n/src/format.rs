/// Positional markers follow Qt's `%1`..`%99` range: up to two digits.
const MAX_MARKER_DIGITS: usize = 2;

/// Substitute positional `%N` markers (1-based) with `args[N - 1]`.
///
/// - `%%` renders a literal `%`.
/// - Markers with no corresponding argument are left literal so malformed
///   catalogs stay visible in the UI instead of producing empty output.
/// - A stray `%` followed by neither `%` nor a digit is literal.
pub fn format_positional(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(d) if d.is_ascii_digit() => {
                let mut digits = String::new();
                while digits.len() < MAX_MARKER_DIGITS {
                    match chars.peek() {
                        Some(&n) if n.is_ascii_digit() => {
                            digits.push(n);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                // One or two ASCII digits always parse; 0 stays literal
                // since markers are 1-based.
                let n: usize = digits.parse().unwrap_or(0);
                if n >= 1 && n <= args.len() {
                    out.push_str(&args[n - 1]);
                } else {
                    out.push('%');
                    out.push_str(&digits);
                }
            }
            _ => out.push('%'),
        }
    }

    out
}
