#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use menutree::Node;

pub const ANONYMOUS: i64 = 0x01;
pub const AUTHENTICATED: i64 = 0x02;
pub const ADMIN: i64 = 0x80;

/// Path to a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Root/[A, B/[B0, B1], C] with default masks.
pub fn nested_tree() -> Node {
    Node::group(
        "Root",
        vec![
            Node::leaf("A", "/a"),
            Node::group("B", vec![Node::leaf("B0", "/b0"), Node::leaf("B1", "/b1")]),
            Node::leaf("C", "/c"),
        ],
    )
}

/// A group whose leaves only match bits 0x10 and 0x08, next to an
/// always-visible leaf.
pub fn masked_tree() -> Node {
    Node::group(
        "Root",
        vec![
            Node::group(
                "Hidden",
                vec![
                    Node::leaf_masked("T1", "/1", 0x10),
                    Node::leaf_masked("T2", "/2", 0x10),
                    Node::leaf_masked("T3", "/3", 0x08),
                ],
            ),
            Node::leaf("Keep", "/keep"),
        ],
    )
}

/// Four-entry navigation: two public entries, an admin-only link and an
/// anonymous-only link.
pub fn example_menu() -> Node {
    Node::group(
        "",
        vec![
            Node::leaf("About", "/about"),
            Node::group(
                "Locations",
                vec![
                    Node::leaf("Berlin", "/locations/Berlin"),
                    Node::leaf("Seoul", "/locations/Seoul"),
                ],
            ),
            Node::leaf_masked("Admin", "/admin", ADMIN),
            Node::leaf_masked("FAQ", "/faq", ANONYMOUS),
        ],
    )
}

/// Site navigation with anonymous, authenticated and admin sections.
pub fn site_menu() -> Node {
    Node::group(
        "",
        vec![
            Node::leaf("About", "/about"),
            Node::group(
                "Locations",
                vec![
                    Node::leaf("Berlin", "/locations/Berlin"),
                    Node::leaf("Seoul", "/locations/Seoul"),
                ],
            ),
            Node::leaf_masked("Admin", "/admin", ADMIN),
            Node::leaf_masked("FAQ", "/faq", ANONYMOUS),
            Node::group_masked(
                "Account",
                vec![
                    Node::leaf_masked("Profile", "/user", AUTHENTICATED),
                    Node::group(
                        "Moderation",
                        vec![Node::leaf_masked("Queue", "/moderation", ADMIN)],
                    ),
                ],
                AUTHENTICATED | ADMIN,
            ),
        ],
    )
}

/// Labels of every leaf that survives filtering with `mask`.
pub fn visible_leaf_labels(tree: &Node, mask: i64) -> Vec<String> {
    tree.filtered(mask)
        .leaves()
        .into_iter()
        .map(|leaf| leaf.label().to_string())
        .collect()
}

/// Assert that no group below the root of `node` is empty.
pub fn assert_no_empty_groups(node: &Node) {
    for child in node.children() {
        if child.is_group() {
            assert!(
                !child.children().is_empty(),
                "empty group '{}' survived filtering",
                child.label()
            );
        }
        assert_no_empty_groups(child);
    }
}
