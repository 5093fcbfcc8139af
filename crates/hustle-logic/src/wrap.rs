//! Dialogue text layout — greedy line wrapping and fixed-size pagination.
//!
//! Wrapping fills each line up to the character budget. When a line
//! overflows, the break lands on the last space seen in that line; with no
//! space available the word is hard-broken exactly at the budget. Embedded
//! newlines end the current line and reset the column counter.

/// Wrap `text` into lines of at most `budget` characters.
pub fn wrap(text: &str, budget: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, budget.max(1), &mut lines);
    }
    lines
}

fn wrap_segment(segment: &str, budget: usize, out: &mut Vec<String>) {
    let mut line = String::new();
    let mut count = 0usize;
    let mut last_space: Option<usize> = None; // byte offset of the space

    for ch in segment.chars() {
        if count < budget {
            if ch == ' ' {
                last_space = Some(line.len());
            }
            line.push(ch);
            count += 1;
            continue;
        }

        // Budget reached: a break is due before `ch` can be placed.
        if ch == ' ' {
            // The overflowing character is itself a space - break there.
            out.push(std::mem::take(&mut line));
            count = 0;
            last_space = None;
            continue;
        }

        match last_space {
            Some(offset) => {
                // Break at the last space; the partial word moves down.
                let mut carried = line.split_off(offset);
                carried.remove(0);
                out.push(std::mem::replace(&mut line, carried));
                line.push(ch);
                count = line.chars().count();
                last_space = None;
            }
            None => {
                // No legal break point - hard break at the budget boundary.
                out.push(std::mem::take(&mut line));
                line.push(ch);
                count = 1;
            }
        }
    }

    out.push(line);
}

/// Wrap and then group lines into pages of `lines_per_page`, joined with
/// newlines. Always returns at least one page.
pub fn paginate(text: &str, budget: usize, lines_per_page: usize) -> Vec<String> {
    wrap(text, budget)
        .chunks(lines_per_page.max(1))
        .map(|chunk| chunk.join("\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap("hello world", 35), vec!["hello world"]);
    }

    #[test]
    fn test_no_space_hard_breaks_at_budget() {
        let text = "a".repeat(12);
        let lines = wrap(&text, 5);
        assert_eq!(lines, vec!["aaaaa", "aaaaa", "aa"]);
    }

    #[test]
    fn test_breaks_at_last_space_not_mid_word() {
        let lines = wrap("the quick brown fox", 12);
        // "the quick br" would split "brown"; the legal break wins.
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_space_at_boundary_consumed_by_break() {
        let lines = wrap("abcde fghij", 5);
        assert_eq!(lines, vec!["abcde", "fghij"]);
    }

    #[test]
    fn test_embedded_newline_resets_column() {
        let lines = wrap("ab\ncdefgh", 6);
        assert_eq!(lines, vec!["ab", "cdefgh"]);
    }

    #[test]
    fn test_long_word_after_short_word() {
        let lines = wrap("hi aaaaaaaaaa", 6);
        // Break at the space, then the long word hard-breaks on its own.
        assert_eq!(lines, vec!["hi", "aaaaaa", "aaaa"]);
    }

    #[test]
    fn test_paginate_groups_lines() {
        let text = "a\nb\nc\nd\ne";
        let pages = paginate(text, 10, 3);
        assert_eq!(pages, vec!["a\nb\nc", "d\ne"]);
    }

    #[test]
    fn test_paginate_empty_text_yields_one_page() {
        assert_eq!(paginate("", 35, 3), vec![""]);
    }
}
