use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static PRAGMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"pragma solidity[^;]+;").unwrap());

/// Drops everything before the first `pragma solidity ...;` statement.
///
/// Text without a pragma is returned unchanged. The search is purely textual,
/// so a pragma mentioned inside an earlier comment wins over the real one.
pub fn truncate_to_pragma(source: &str) -> &str {
    match PRAGMA.find(source) {
        Some(found) => {
            debug!("pragma found at byte {}", found.start());
            &source[found.start()..]
        }
        None => {
            debug!("no pragma found, keeping the whole source");
            source
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_before_pragma_is_dropped() {
        let source = "// SPDX-License-Identifier: MIT\n// banner\npragma solidity ^0.8.20;\ncontract A {}";
        assert_eq!(
            truncate_to_pragma(source),
            "pragma solidity ^0.8.20;\ncontract A {}"
        );
    }

    #[test]
    fn text_without_pragma_is_unchanged() {
        let source = "contract A {\n    uint x;\n}";
        assert_eq!(truncate_to_pragma(source), source);
    }

    #[test]
    fn only_the_first_pragma_counts() {
        let source = "x\npragma solidity >=0.7.0;\ny\npragma solidity ^0.8.0;\n";
        assert_eq!(
            truncate_to_pragma(source),
            "pragma solidity >=0.7.0;\ny\npragma solidity ^0.8.0;\n"
        );
    }

    #[test]
    fn pragma_inside_a_comment_is_still_matched() {
        let source = "/* see pragma solidity 0.4; */\npragma solidity ^0.8.0;";
        assert_eq!(
            truncate_to_pragma(source),
            "pragma solidity 0.4; */\npragma solidity ^0.8.0;"
        );
    }

    #[test]
    fn pragma_without_version_is_ignored() {
        let source = "// x\npragma solidity;\n";
        assert_eq!(truncate_to_pragma(source), source);
    }

    #[test]
    fn other_pragmas_are_not_anchors() {
        let source = "// x\npragma abicoder v2;\ncontract A {}";
        assert_eq!(truncate_to_pragma(source), source);
    }
}
