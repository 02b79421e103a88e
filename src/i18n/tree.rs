//! Translation tree
//!
//! A catalog is a tree of named sections whose leaves are translated
//! strings. Key paths address leaves by joining segment names with `.`,
//! e.g. `"messages.success.linkCopied"`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::utils::errors::MissReason;

/// Separator between segments of a key path
pub const KEY_SEPARATOR: char = '.';

/// A node of the translation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A translated string
    Leaf(&'static str),
    /// A section holding further named nodes
    Interior(BTreeMap<&'static str, Node>),
}

impl Node {
    /// Create a leaf node
    pub fn leaf(text: &'static str) -> Self {
        Node::Leaf(text)
    }

    /// Create a section from `(name, node)` pairs
    pub fn interior<I>(children: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Node)>,
    {
        Node::Interior(children.into_iter().collect())
    }

    /// Translated text, if this node is a leaf
    pub fn as_leaf(&self) -> Option<&'static str> {
        match self {
            Node::Leaf(text) => Some(*text),
            Node::Interior(_) => None,
        }
    }

    /// Named children, if this node is a section
    pub fn children(&self) -> Option<&BTreeMap<&'static str, Node>> {
        match self {
            Node::Leaf(_) => None,
            Node::Interior(children) => Some(children),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Number of leaves at or below this node
    pub fn count_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Interior(children) => children.values().map(Node::count_leaves).sum(),
        }
    }

    fn collect_paths(&self, prefix: &mut String, out: &mut Vec<String>) {
        match self {
            Node::Leaf(_) => out.push(prefix.clone()),
            Node::Interior(children) => {
                for (name, child) in children {
                    let restore = prefix.len();
                    if !prefix.is_empty() {
                        prefix.push(KEY_SEPARATOR);
                    }
                    prefix.push_str(name);
                    child.collect_paths(prefix, out);
                    prefix.truncate(restore);
                }
            }
        }
    }
}

/// An immutable catalog of translated strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TranslationTree {
    root: Node,
}

impl TranslationTree {
    /// Build a tree from its top-level sections
    pub fn new<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Node)>,
    {
        Self {
            root: Node::interior(sections),
        }
    }

    /// Walk `path` segment by segment and return the leaf it ends on
    pub fn lookup(&self, path: &str) -> Result<&'static str, MissReason> {
        let mut current = &self.root;

        for segment in path.split(KEY_SEPARATOR) {
            current = match current {
                Node::Interior(children) => children
                    .get(segment)
                    .ok_or_else(|| MissReason::UnknownSegment(segment.to_string()))?,
                Node::Leaf(_) => return Err(MissReason::BelowLeaf(segment.to_string())),
            };
        }

        current.as_leaf().ok_or(MissReason::InteriorNode)
    }

    /// The root section
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Top-level section
    pub fn section(&self, name: &str) -> Option<&Node> {
        self.root.children().and_then(|children| children.get(name))
    }

    /// Names of the top-level sections
    pub fn section_names(&self) -> Vec<&'static str> {
        self.root
            .children()
            .map(|children| children.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Every leaf path in the tree, dot-joined, in sorted order
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.root.collect_paths(&mut String::new(), &mut out);
        out
    }

    /// Number of leaves in the tree
    pub fn count_leaves(&self) -> usize {
        self.root.count_leaves()
    }
}
