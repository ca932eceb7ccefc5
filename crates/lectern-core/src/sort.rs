//! Sibling ordering for course tree nodes.

use std::cmp::Ordering;

use crate::node::Node;

/// Total order over sibling nodes.
///
/// Folders strictly precede files; within each group names compare
/// case-aware: lowercase-folded first, exact name as tiebreak. Equal names
/// compare equal, so a stable sort keeps duplicates in input order.
pub fn compare_nodes(a: &Node, b: &Node) -> Ordering {
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_names(a.name(), b.name()),
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort one sibling level in place.
pub fn sort_children(children: &mut [Node]) {
    children.sort_by(compare_nodes);
}

/// Sort every level of a tree in place.
pub fn sort_tree(nodes: &mut [Node]) {
    sort_children(nodes);
    for node in nodes {
        if let Node::Folder(folder) = node {
            sort_tree(&mut folder.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;
    use crate::node::{ContentRef, FileNode, FolderNode};

    fn folder(name: &str) -> Node {
        Node::Folder(FolderNode::new(name, name, Vec::new()))
    }

    fn file(name: &str) -> Node {
        Node::File(FileNode::new(
            name,
            name,
            0,
            SystemTime::UNIX_EPOCH,
            ContentRef::new("/src"),
        ))
    }

    fn names(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(Node::name).collect()
    }

    #[test]
    fn test_folders_before_files() {
        let mut nodes = vec![file("a.txt"), folder("zzz"), file("b.mp4"), folder("aaa")];
        sort_children(&mut nodes);
        assert_eq!(names(&nodes), ["aaa", "zzz", "a.txt", "b.mp4"]);
    }

    #[test]
    fn test_case_aware_name_order() {
        let mut nodes = vec![file("beta.mp4"), file("Alpha.mp4"), file("alpha.mp4")];
        sort_children(&mut nodes);
        // Folded names group together; the exact comparison orders the pair.
        assert_eq!(names(&nodes), ["Alpha.mp4", "alpha.mp4", "beta.mp4"]);
    }

    #[test]
    fn test_sort_idempotent() {
        let mut nodes = vec![folder("b"), file("c.mp4"), folder("a"), file("a.png")];
        sort_children(&mut nodes);
        let once = names(&nodes).join(",");
        sort_children(&mut nodes);
        assert_eq!(names(&nodes).join(","), once);
    }

    #[test]
    fn test_sort_tree_recurses() {
        let inner = vec![file("z.mp4"), folder("sub"), file("a.png")];
        let mut nodes = vec![
            file("top.mp4"),
            Node::Folder(FolderNode::new("mod", "mod", inner)),
        ];
        sort_tree(&mut nodes);
        assert_eq!(names(&nodes), ["mod", "top.mp4"]);
        assert_eq!(names(nodes[0].children()), ["sub", "a.png", "z.mp4"]);
    }
}
