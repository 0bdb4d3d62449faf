use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)//.*$").unwrap());
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

pub trait TextCleaner: Send + Sync {
    fn clean(&self, text: &str) -> String;
}

/// Removes `//` and `/* */` comments, then drops blank lines.
///
/// Line comments are removed first and block comments second, so a `/*`
/// that only appears after a `//` on the same line is gone before the block
/// pass runs. Neither pass knows about string literals: `"http://x"` loses
/// everything from the `//` onwards.
pub struct CommentStripper;

impl CommentStripper {
    pub fn strip_line_comments(text: &str) -> String {
        LINE_COMMENT.replace_all(text, "").into_owned()
    }

    pub fn strip_block_comments(text: &str) -> String {
        BLOCK_COMMENT.replace_all(text, "").into_owned()
    }
}

impl TextCleaner for CommentStripper {
    fn clean(&self, text: &str) -> String {
        let without_lines = Self::strip_line_comments(text);
        let without_blocks = Self::strip_block_comments(&without_lines);
        debug!(
            "comment passes removed {} bytes",
            text.len() - without_blocks.len()
        );
        drop_blank_lines(&without_blocks)
    }
}

// Expects '\n' line endings; callers fold '\r' beforehand.
pub(crate) fn drop_blank_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !is_blank(line))
        .collect::<Vec<&str>>()
        .join("\n")
}

// Unicode whitespace plus the U+001C..=U+001F information separators.
fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_inline_and_block_comments() {
        let source = "pragma solidity ^0.8.0;\ncontract A {\n    uint x; // inline comment\n    /* block\n       comment */\n    uint y;\n}\n";
        let cleaned = CommentStripper.clean(source);
        assert_eq!(
            cleaned,
            "pragma solidity ^0.8.0;\ncontract A {\n    uint x; \n    uint y;\n}"
        );
    }

    #[test]
    fn comment_free_text_only_loses_blank_lines() {
        let source = "contract B {\n\n    uint z;\n   \t\n}";
        assert_eq!(CommentStripper.clean(source), "contract B {\n    uint z;\n}");
    }

    #[test]
    fn block_after_line_marker_is_not_reached() {
        // The `/*` is eaten by the line pass, leaving the closing `*/` behind.
        let source = "a; // start /* hidden\nb;\nc; */ d;";
        assert_eq!(CommentStripper.clean(source), "a; \nb;\nc; */ d;");
    }

    #[test]
    fn block_comments_are_non_greedy() {
        let source = "x /* one */ y /* two */ z";
        assert_eq!(CommentStripper.clean(source), "x  y  z");
    }

    #[test]
    fn unterminated_block_comment_is_kept() {
        let source = "uint a;\n/* never closed\nuint b;";
        assert_eq!(CommentStripper.clean(source), source);
    }

    #[test]
    fn string_literals_are_not_protected() {
        let source = "string s = \"https://example.com\";";
        assert_eq!(CommentStripper.clean(source), "string s = \"https:");
    }

    #[test]
    fn no_line_comment_survives() {
        let source = "// a\nuint a; // b\n/* c */ // d\n  //e\nuint f;//";
        let cleaned = CommentStripper.clean(source);
        assert!(cleaned.lines().all(|line| !line.contains("//")));
    }

    #[test]
    fn stripping_is_idempotent() {
        let source = "// h\ncontract C {\n  /** @dev doc\n   * more */\n  function f() public {} // x\n\n}\n";
        let once = CommentStripper.clean(source);
        let twice = CommentStripper.clean(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(CommentStripper.clean(""), "");
        assert_eq!(CommentStripper.clean("// only\n/* only */\n"), "");
    }

    #[test]
    fn separator_only_lines_count_as_blank() {
        assert_eq!(drop_blank_lines("a\n\u{1c}\u{1f} \n\u{a0}\u{3000}\nb"), "a\nb");
        assert_eq!(drop_blank_lines("a\n\u{1d}x\n"), "a\n\u{1d}x");
    }
}
