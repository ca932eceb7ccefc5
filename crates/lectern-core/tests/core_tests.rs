use std::time::SystemTime;

use lectern_core::{
    ContentRef, CourseStats, FileNode, FolderNode, MediaKind, Node, compare_nodes, sort_children,
    sort_tree,
};

fn file(name: &str, path: &str) -> Node {
    Node::File(FileNode::new(
        name,
        path,
        1024,
        SystemTime::UNIX_EPOCH,
        ContentRef::new(format!("/course/{path}")),
    ))
}

fn folder(name: &str, path: &str, children: Vec<Node>) -> Node {
    Node::Folder(FolderNode::new(name, path, children))
}

fn names(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(Node::name).collect()
}

#[test]
fn test_classification_matrix() {
    let cases = [
        ("lecture.MP4", true, false),
        ("diagram.SVG", false, true),
        ("notes.txt", false, false),
        ("clip.mkv", true, false),
        ("photo.WEBP", false, true),
        ("video", false, false),
    ];
    for (name, is_video, is_image) in cases {
        let kind = MediaKind::classify(name);
        assert_eq!(kind.is_video(), is_video, "{name}");
        assert_eq!(kind.is_image(), is_image, "{name}");
    }
}

#[test]
fn test_classification_never_both() {
    for name in ["a.mp4", "b.png", "c.pdf", "d.M4V", "e.JpEg"] {
        let kind = MediaKind::classify(name);
        assert!(!(kind.is_video() && kind.is_image()), "{name}");
    }
}

#[test]
fn test_folders_precede_files_for_any_mix() {
    let mut nodes = vec![
        file("10.mp4", "10.mp4"),
        folder("zz", "zz", Vec::new()),
        file("AAA.txt", "AAA.txt"),
        folder("AAA", "AAA", Vec::new()),
        file("zz.png", "zz.png"),
    ];
    sort_children(&mut nodes);

    let first_file = nodes.iter().position(Node::is_file).unwrap();
    assert!(nodes[..first_file].iter().all(Node::is_folder));
    assert!(nodes[first_file..].iter().all(Node::is_file));
    assert_eq!(names(&nodes), ["AAA", "zz", "10.mp4", "AAA.txt", "zz.png"]);
}

#[test]
fn test_comparator_is_total_and_consistent() {
    let nodes = [
        folder("a", "a", Vec::new()),
        folder("B", "B", Vec::new()),
        file("a.mp4", "a.mp4"),
        file("B.mp4", "B.mp4"),
    ];
    for a in &nodes {
        for b in &nodes {
            let forward = compare_nodes(a, b);
            let backward = compare_nodes(b, a);
            assert_eq!(forward, backward.reverse(), "{} vs {}", a.name(), b.name());
        }
    }
}

#[test]
fn test_sort_tree_idempotent_at_every_level() {
    let mut tree = vec![
        file("outro.mp4", "outro.mp4"),
        folder(
            "week2",
            "week2",
            vec![
                file("b.mp4", "week2/b.mp4"),
                folder("assets", "week2/assets", vec![file("x.png", "week2/assets/x.png")]),
                file("a.mp4", "week2/a.mp4"),
            ],
        ),
    ];
    sort_tree(&mut tree);
    let snapshot = format!("{tree:?}");
    sort_tree(&mut tree);
    assert_eq!(format!("{tree:?}"), snapshot);

    assert_eq!(names(&tree), ["week2", "outro.mp4"]);
    assert_eq!(names(tree[0].children()), ["assets", "a.mp4", "b.mp4"]);
}

#[test]
fn test_stats_on_empty_tree() {
    let stats = CourseStats::collect(&[]);
    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.total_videos, 0);
    assert_eq!(stats.total_size, 0);
    assert_eq!(stats.max_depth, 0);
}

#[test]
fn test_node_serialization_round_trip() {
    let node = folder("mod1", "mod1", vec![file("a.mp4", "mod1/a.mp4")]);
    let json = serde_json::to_string(&node).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}
