//! Text rendering of the trie shape.
//!
//! Produces a box-drawing tree, one node per line, children in ascending
//! order. Nothing is written anywhere; callers decide where the text goes.

use super::node::TrieNode;

const LAST_BRANCH: &str = "└─";
const MID_BRANCH: &str = "├─";
const LAST_INDENT: &str = "  ";
const MID_INDENT: &str = "│ ";

/// Renders the subtree rooted at `root` as a multi-line string.
///
/// The first line is the literal `root`; the root node itself follows as the
/// sole last child, showing its sentinel symbol. The walk uses an explicit
/// stack, so depth is limited only by memory.
pub fn render(root: &TrieNode) -> String {
    let mut out = String::from("root\n");
    let mut indent = String::from(" ");

    // (node, indent length for its line, whether it is its parent's last child)
    let mut stack = vec![(root, indent.len(), true)];
    while let Some((node, indent_len, is_last)) = stack.pop() {
        indent.truncate(indent_len);
        let (branch, child_indent) = if is_last {
            (LAST_BRANCH, LAST_INDENT)
        } else {
            (MID_BRANCH, MID_INDENT)
        };

        out.push_str(&indent);
        out.push_str(branch);
        out.push(node.symbol());
        out.push('\n');

        indent.push_str(child_indent);
        let child_len = indent.len();
        let count = node.child_count();
        // Reversed so the smallest edge is popped first
        for (i, (_, child)) in node.children().enumerate().rev() {
            stack.push((child, child_len, i + 1 == count));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_root() {
        let root = TrieNode::root();
        assert_eq!(render(&root), "root\n └─ \n");
    }

    #[test]
    fn test_render_branches() {
        let mut root = TrieNode::root();
        let a = root.child_or_insert('a');
        a.child_or_insert('t');
        a.child_or_insert('n');
        root.child_or_insert('b');

        let expected = "root\n \
                        └─ \n   \
                        ├─a\n   \
                        │ ├─n\n   \
                        │ └─t\n   \
                        └─b\n";
        assert_eq!(render(&root), expected);
    }

    #[test]
    fn test_render_deep_chain_on_small_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(64 * 1024)
            .spawn(|| {
                let mut root = TrieNode::root();
                let mut current = &mut root;
                for _ in 0..2_000 {
                    current = current.child_or_insert('z');
                }
                let rendered = render(&root);
                drop(root);
                rendered
            })
            .unwrap();

        let rendered = handle.join().unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2_002);
        assert_eq!(lines[2], "   └─z");
        assert!(lines[2_001].ends_with("└─z"));
        assert_eq!(lines[2_001].chars().count(), 1 + 2 * 2_000 + 3);
    }
}
