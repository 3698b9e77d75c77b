//! Fixed-width field formatting.

/// Left-justify `value` in a slot of exactly `len` characters.
///
/// A missing value is treated as empty. Shorter values are padded with
/// trailing spaces; longer values are cut from the right.
pub fn pad_or_truncate(value: Option<&str>, len: usize) -> String {
    let mut out: String = value.unwrap_or("").chars().take(len).collect();
    let used = out.chars().count();
    out.extend(std::iter::repeat_n(' ', len - used));
    out
}

/// Shorthand for [`pad_or_truncate`] with a present value.
pub fn fit(value: &str, len: usize) -> String {
    pad_or_truncate(Some(value), len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_short_value() {
        assert_eq!(fit("EC", 5), "EC   ");
    }

    #[test]
    fn test_exact_value_unchanged() {
        assert_eq!(fit("USD", 3), "USD");
    }

    #[test]
    fn test_truncates_long_value() {
        assert_eq!(fit("OWNER_NAME_1", 5), "OWNER");
    }

    #[test]
    fn test_missing_value_is_blank() {
        assert_eq!(pad_or_truncate(None, 4), "    ");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(fit("anything", 0), "");
        assert_eq!(pad_or_truncate(None, 0), "");
    }

    #[test]
    fn test_width_counts_chars() {
        let out = fit("é€x", 2);
        assert_eq!(out, "é€");
        assert_eq!(fit("é", 3).chars().count(), 3);
    }

    #[test]
    fn test_length_always_matches() {
        let inputs = ["", "a", "abcdef", "a longer value than most slots"];
        for s in inputs {
            for n in 0..40 {
                let out = fit(s, n);
                assert_eq!(out.chars().count(), n, "fit({s:?}, {n})");
                if s.len() <= n {
                    assert!(out.starts_with(s));
                    assert!(out[s.len()..].chars().all(|c| c == ' '));
                } else {
                    assert_eq!(out, &s[..n]);
                }
            }
        }
    }
}
