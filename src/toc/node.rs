use std::error::Error;
use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};

/// One entry of a table of contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocNode {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_target: Option<String>,
    #[serde(default)]
    pub children: Vec<TocNode>,
}

impl TocNode {
    pub fn new(id: impl Into<String>, text: impl Into<String>, link_target: Option<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            link_target,
            children: Vec::new(),
        }
    }

    /// Empty entry standing in for a skipped heading level
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_empty() && self.text.is_empty() && self.link_target.is_none()
    }

    /// Number of heading entries in this subtree, placeholders not counted
    pub fn count(&self) -> usize {
        let own = usize::from(!self.is_placeholder());
        own + self.children.iter().map(TocNode::count).sum::<usize>()
    }
}

/// Construction errors for a [`TocTree`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The node already has a parent, or is the root
    AlreadyAttached,
    /// Attaching would make a node its own ancestor
    Cycle,
    /// The handle does not belong to this tree
    UnknownNode,
    /// The cursor tried to move above the implicit root
    AscendPastRoot,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::AlreadyAttached => write!(f, "node already has a parent"),
            TreeError::Cycle => write!(f, "node cannot be attached below itself"),
            TreeError::UnknownNode => write!(f, "node does not belong to this tree"),
            TreeError::AscendPastRoot => write!(f, "cannot ascend past the root"),
        }
    }
}

impl Error for TreeError {}

/// Handle to a node stored in a [`TocTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Slot {
    node: TocNode,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena used while a TOC is being assembled.
///
/// Parent links are plain handles, so the finished forest handed out by
/// [`TocTree::into_forest`] owns its children and carries no back-references.
#[derive(Debug)]
pub struct TocTree {
    slots: Vec<Slot>,
}

impl TocTree {
    /// Create a tree holding only the implicit root
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                node: TocNode::placeholder(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Allocate a detached node
    pub fn create(&mut self, id: impl Into<String>, text: impl Into<String>, link_target: Option<String>) -> NodeId {
        self.insert(TocNode::new(id, text, link_target))
    }

    pub fn create_placeholder(&mut self) -> NodeId {
        self.insert(TocNode::placeholder())
    }

    fn insert(&mut self, node: TocNode) -> NodeId {
        self.slots.push(Slot {
            node,
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.slots.len() - 1)
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// A node may be attached exactly once. On error the tree is unchanged.
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.slot(parent)?;
        let child_slot = self.slot(child)?;

        if child == self.root() || child_slot.parent.is_some() {
            return Err(TreeError::AlreadyAttached);
        }

        let mut ancestor = Some(parent);
        while let Some(current) = ancestor {
            if current == child {
                return Err(TreeError::Cycle);
            }
            ancestor = self.slots[current.0].parent;
        }

        self.slots[child.0].parent = Some(parent);
        self.slots[parent.0].children.push(child);
        Ok(())
    }

    /// Parent of `node`, `None` for the root and for detached nodes
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.slots.get(node.0).and_then(|slot| slot.parent)
    }

    fn slot(&self, node: NodeId) -> Result<&Slot, TreeError> {
        self.slots.get(node.0).ok_or(TreeError::UnknownNode)
    }

    /// Consume the tree and return the root's children as an owned forest
    pub fn into_forest(mut self) -> Vec<TocNode> {
        let root_children = mem::take(&mut self.slots[0].children);
        root_children
            .into_iter()
            .map(|child| self.take(child))
            .collect()
    }

    fn take(&mut self, node: NodeId) -> TocNode {
        let slot = &mut self.slots[node.0];
        let mut entry = mem::take(&mut slot.node);
        let children = mem::take(&mut slot.children);
        entry.children = children.into_iter().map(|child| self.take(child)).collect();
        entry
    }
}

impl Default for TocTree {
    fn default() -> Self {
        Self::new()
    }
}
