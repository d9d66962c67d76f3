//! Natural ordering for version strings.
//!
//! `"1.10"` sorts after `"1.9"` because digit runs compare as numbers.

use std::cmp::Ordering;

/// One run of digits or non-digits.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Chunk {
    /// Digit run with leading zeros removed.
    Num(String),
    Text(String),
}

impl Ord for Chunk {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Chunk::Num(a), Chunk::Num(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Chunk::Text(a), Chunk::Text(b)) => a.cmp(b),
            (Chunk::Num(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Num(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Chunk {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key splitting text into alternating digit and non-digit runs.
///
/// Digit runs of any length compare numerically. A key that is a prefix of
/// another sorts first, so `"1.0" < "1.0.1"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<Chunk>);

impl NaturalKey {
    pub fn new(text: &str) -> Self {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut in_digits = false;

        for c in text.chars() {
            let is_digit = c.is_ascii_digit();
            if !current.is_empty() && is_digit != in_digits {
                chunks.push(Self::chunk(std::mem::take(&mut current), in_digits));
            }
            in_digits = is_digit;
            current.push(c);
        }
        if !current.is_empty() {
            chunks.push(Self::chunk(current, in_digits));
        }

        NaturalKey(chunks)
    }

    fn chunk(run: String, digits: bool) -> Chunk {
        if digits {
            let trimmed = run.trim_start_matches('0');
            if trimmed.is_empty() {
                Chunk::Num("0".to_string())
            } else {
                Chunk::Num(trimmed.to_string())
            }
        } else {
            Chunk::Text(run)
        }
    }
}

/// Compare two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    NaturalKey::new(a).cmp(&NaturalKey::new(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_runs_compare_by_value() {
        assert_eq!(natural_cmp("1.10", "1.9"), Ordering::Greater);
        assert_eq!(natural_cmp("1.9", "1.10"), Ordering::Less);
        assert_eq!(natural_cmp("2.0", "10.0"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_are_ignored() {
        assert_eq!(natural_cmp("1.01", "1.1"), Ordering::Equal);
        assert_eq!(natural_cmp("1.00", "1.0"), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(natural_cmp("1.0", "1.0.1"), Ordering::Less);
        assert_eq!(natural_cmp("", "0"), Ordering::Less);
    }

    #[test]
    fn digits_sort_before_text() {
        assert_eq!(natural_cmp("1", "a"), Ordering::Less);
    }

    #[test]
    fn huge_numbers_do_not_overflow() {
        assert_eq!(
            natural_cmp("1.99999999999999999999999", "1.100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn sorting_versions() {
        let mut versions = vec!["1.10", "1.2", "1.9.1", "0.9", "1.9"];
        versions.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(versions, vec!["0.9", "1.2", "1.9", "1.9.1", "1.10"]);
    }
}
