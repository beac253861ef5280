use std::collections::BTreeSet;

/// Parse a page selection like "2, 4-6, 9" into 0-based page indices.
///
/// Tokens are comma-separated; each is a single 1-based page number or an
/// inclusive range "start-end". Whitespace around tokens and around the
/// hyphen is ignored. Invalid tokens (empty, non-numeric, reversed
/// ranges) and pages outside the document are dropped rather than
/// reported: free-form text input yields a smaller selection, never an
/// error.
pub fn parse_selection(text: &str, page_count: usize) -> BTreeSet<usize> {
    let mut selected = BTreeSet::new();

    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        if let Some((start, end)) = token.split_once('-') {
            let start = match start.trim().parse::<usize>() {
                Ok(n) => n,
                Err(_) => continue,
            };
            let end = match end.trim().parse::<usize>() {
                Ok(n) => n,
                Err(_) => continue,
            };
            if start > end {
                continue;
            }

            // 1-based inclusive on both ends; page 0 has no index
            for page in start.max(1)..=end.min(page_count) {
                selected.insert(page - 1);
            }
        } else {
            match token.parse::<usize>() {
                Ok(page) if page >= 1 && page <= page_count => {
                    selected.insert(page - 1);
                }
                _ => continue,
            }
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(indices: &[usize]) -> BTreeSet<usize> {
        indices.iter().copied().collect()
    }

    #[test]
    fn test_single_page() {
        assert_eq!(parse_selection("3", 10), set(&[2]));
    }

    #[test]
    fn test_range() {
        assert_eq!(parse_selection("4-6", 10), set(&[3, 4, 5]));
    }

    #[test]
    fn test_mixed_expression() {
        assert_eq!(parse_selection("2, 4-6, 9", 10), set(&[1, 3, 4, 5, 8]));
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(parse_selection("2-2", 10), set(&[1]));
    }

    #[test]
    fn test_reversed_range_discarded() {
        assert_eq!(parse_selection("5-2", 10), set(&[]));
    }

    #[test]
    fn test_all_tokens_invalid() {
        assert_eq!(parse_selection("0, 10, 3-1", 5), set(&[]));
    }

    #[test]
    fn test_page_zero_discarded() {
        assert_eq!(parse_selection("0", 10), set(&[]));
        // A range starting at 0 still contributes its valid tail
        assert_eq!(parse_selection("0-2", 10), set(&[0, 1]));
    }

    #[test]
    fn test_out_of_range_clipped() {
        assert_eq!(parse_selection("8-20", 10), set(&[7, 8, 9]));
        assert_eq!(parse_selection("11", 10), set(&[]));
    }

    #[test]
    fn test_whitespace_and_stray_commas() {
        assert_eq!(parse_selection(" 2 ,, 4 - 6 ,", 10), set(&[1, 3, 4, 5]));
    }

    #[test]
    fn test_non_numeric_discarded() {
        assert_eq!(parse_selection("abc, 3, 1-x", 10), set(&[2]));
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(parse_selection("3, 3, 2-4", 10), set(&[1, 2, 3]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_selection("", 10), set(&[]));
        assert_eq!(parse_selection("   ", 10), set(&[]));
    }

    #[test]
    fn test_zero_page_document() {
        assert_eq!(parse_selection("1-5", 0), set(&[]));
    }

    proptest! {
        #[test]
        fn single_token_selects_exactly_one(page in 1usize..200, page_count in 1usize..200) {
            let parsed = parse_selection(&page.to_string(), page_count);
            if page <= page_count {
                prop_assert_eq!(parsed, set(&[page - 1]));
            } else {
                prop_assert!(parsed.is_empty());
            }
        }

        #[test]
        fn range_token_is_bounded_and_contiguous(
            start in 1usize..100,
            len in 0usize..100,
            page_count in 1usize..100,
        ) {
            let end = start + len;
            let parsed = parse_selection(&format!("{}-{}", start, end), page_count);
            let expected: BTreeSet<usize> =
                (start - 1..=end - 1).filter(|&i| i < page_count).collect();
            prop_assert_eq!(parsed, expected);
        }
    }
}
