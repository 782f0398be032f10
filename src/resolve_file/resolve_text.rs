use super::conflict_block_regex;
use regex::{Captures, Regex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    /// Number of conflict blocks that were replaced.
    pub blocks: usize,
}

/// Replaces every conflict block matched by `regex` with its "ours" side.
///
/// Text outside of conflict blocks is kept verbatim. The line ending of the
/// end-marker line is kept too, unless the "ours" side is empty.
pub fn resolve_blocks(regex: &Regex, content: &str) -> Resolution {
    let mut blocks = 0;

    let text = regex
        .replace_all(content, |caps: &Captures| {
            blocks += 1;
            let ours = caps.name("ours").map_or("", |m| m.as_str());
            let eol = caps.name("eol").map_or("", |m| m.as_str());
            if ours.is_empty() {
                String::new()
            } else {
                format!("{}{}", ours, eol)
            }
        })
        .into_owned();

    Resolution { text, blocks }
}

pub fn resolve_text(content: &str) -> String {
    resolve_blocks(&conflict_block_regex(), content).text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_markers_is_unchanged() {
        let content = "fn main() {\n    println!(\"hi\");\n}\n";
        let resolution = resolve_blocks(&conflict_block_regex(), content);
        assert_eq!(resolution.text, content);
        assert_eq!(resolution.blocks, 0);
    }

    #[test]
    fn keeps_ours_side_of_a_single_block() {
        let content = "x = 1;\n<<<<<<< HEAD\ny = 2;\n=======\ny = 3;\n>>>>>>> origin/MA\nz = 4;\n";
        assert_eq!(resolve_text(content), "x = 1;\ny = 2;\nz = 4;\n");
    }

    #[test]
    fn resolves_many_blocks_in_order() {
        let content = concat!(
            "import a;\n",
            "<<<<<<< HEAD\nconst first = 1;\n=======\nconst first = 2;\n>>>>>>> feature\n",
            "between();\n",
            "<<<<<<< HEAD\nconst second = 'ours';\nconst third = 3;\n=======\nconst second = 'theirs';\n>>>>>>> origin/main\n",
            "export default a;\n",
        );

        let resolution = resolve_blocks(&conflict_block_regex(), content);

        assert_eq!(resolution.blocks, 2);
        assert_eq!(
            resolution.text,
            concat!(
                "import a;\n",
                "const first = 1;\n",
                "between();\n",
                "const second = 'ours';\nconst third = 3;\n",
                "export default a;\n",
            )
        );
    }

    #[test]
    fn keeps_crlf_line_endings() {
        let content = "x\r\n<<<<<<< HEAD\r\ny\r\n=======\r\nz\r\n>>>>>>> m\r\nw\r\n";
        assert_eq!(resolve_text(content), "x\r\ny\r\nw\r\n");
    }

    #[test]
    fn block_at_end_of_input_without_newline() {
        let content = "a\n<<<<<<< HEAD\nours\n=======\ntheirs\n>>>>>>> branch";
        assert_eq!(resolve_text(content), "a\nours");
    }

    #[test]
    fn empty_ours_side_drops_the_block() {
        let content = "a\n<<<<<<< HEAD\n=======\ntheirs\n>>>>>>> branch\nb\n";
        assert_eq!(resolve_text(content), "a\nb\n");
    }

    #[test]
    fn block_without_start_marker_is_left_alone() {
        let content = "a\nours\n=======\ntheirs\n>>>>>>> branch\nb\n";
        assert_eq!(resolve_text(content), content);
    }

    #[test]
    fn resolving_twice_is_a_no_op() {
        let content = "x\n<<<<<<< HEAD\nkeep\n=======\ndrop\n>>>>>>> other\ny\n";
        let once = resolve_text(content);
        assert_eq!(resolve_text(&once), once);
    }
}
