//! Index-modulo cycling over curated sequences

/// Element at `index` modulo the sequence length, `None` when empty
#[must_use]
pub fn rotate<T>(sequence: &[T], index: usize) -> Option<&T> {
    if sequence.is_empty() {
        None
    } else {
        sequence.get(index % sequence.len())
    }
}

/// Like [`rotate`], with a caller-supplied fallback for empty sequences
#[must_use]
pub fn pick<'a>(sequence: &'a [String], index: usize, fallback: &'a str) -> &'a str {
    rotate(sequence, index).map_or(fallback, String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Some(&"a"))]
    #[case(2, Some(&"c"))]
    #[case(3, Some(&"a"))]
    #[case(7, Some(&"b"))]
    fn test_rotate_wraps(#[case] index: usize, #[case] expected: Option<&&str>) {
        let sequence = ["a", "b", "c"];
        assert_eq!(rotate(&sequence, index), expected);
    }

    #[test]
    fn test_rotate_empty() {
        let empty: [u8; 0] = [];
        assert_eq!(rotate(&empty, 4), None);
    }

    #[test]
    fn test_pick_uses_fallback_only_when_empty() {
        let tips = vec!["Bring cash".to_string()];
        assert_eq!(pick(&tips, 5, "none"), "Bring cash");

        let none: Vec<String> = Vec::new();
        assert_eq!(pick(&none, 5, "none"), "none");
    }
}
