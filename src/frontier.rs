//! Exploration order policies for the path searches.

use error_chain::bail;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::cells::{Action, Cell};
use crate::errors::*;

pub type Priority = usize;

/// Index of a search node in the arena of nodes already taken off the frontier.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodeId(pub usize);

/// A discovered cell along with how it was reached.
#[derive(Copy, Clone, Debug)]
pub struct SearchNode {
    pub state: Cell,
    /// None for the root node at the start cell.
    pub parent: Option<NodeId>,
    /// The move from the parent's cell into `state`. None for the root.
    pub action: Option<Action>,
    pub priority: Priority,
    /// Number of moves from the start.
    pub depth: usize,
}

impl SearchNode {
    pub fn root(state: Cell) -> SearchNode {
        SearchNode {
            state,
            parent: None,
            action: None,
            priority: 0,
            depth: 0,
        }
    }

    pub fn child(parent_id: NodeId, parent: &SearchNode, action: Action, state: Cell) -> SearchNode {
        SearchNode {
            state,
            parent: Some(parent_id),
            action: Some(action),
            priority: 0,
            depth: parent.depth + 1,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> SearchNode {
        self.priority = priority;
        self
    }
}

// Nodes compare on priority alone, whatever their state.
impl PartialEq for SearchNode {
    fn eq(&self, other: &SearchNode) -> bool {
        self.priority == other.priority
    }
}
impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &SearchNode) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for SearchNode {
    fn cmp(&self, other: &SearchNode) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// A node waiting in the priority frontier. The insertion sequence breaks priority ties so equal priority
/// nodes come out first in, first out.
#[derive(Debug)]
pub struct Queued {
    node: SearchNode,
    sequence: u64,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Queued) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Queued) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Queued {
    // BinaryHeap is a max heap, so the lowest priority and then the earliest sequence must compare greatest.
    fn cmp(&self, other: &Queued) -> Ordering {
        other.node
            .cmp(&self.node)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum FrontierKind {
    /// Last in, first out. Depth first search.
    Lifo,
    /// First in, first out. Breadth first search.
    Fifo,
    /// Lowest priority first, ties in insertion order.
    Priority,
}

/// Discovered but not yet expanded search nodes.
#[derive(Debug)]
pub enum Frontier {
    Stack(Vec<SearchNode>),
    Queue(VecDeque<SearchNode>),
    Heap {
        nodes: BinaryHeap<Queued>,
        next_sequence: u64,
    },
}

impl Frontier {
    pub fn new(kind: FrontierKind) -> Frontier {
        match kind {
            FrontierKind::Lifo => Frontier::Stack(Vec::new()),
            FrontierKind::Fifo => Frontier::Queue(VecDeque::new()),
            FrontierKind::Priority => Frontier::Heap {
                nodes: BinaryHeap::new(),
                next_sequence: 0,
            },
        }
    }

    pub fn add(&mut self, node: SearchNode) {
        match *self {
            Frontier::Stack(ref mut nodes) => nodes.push(node),
            Frontier::Queue(ref mut nodes) => nodes.push_back(node),
            Frontier::Heap { ref mut nodes, ref mut next_sequence } => {
                nodes.push(Queued { node, sequence: *next_sequence });
                *next_sequence += 1;
            }
        }
    }

    /// Take the next node to expand according to the frontier's policy.
    pub fn remove(&mut self) -> Result<SearchNode> {
        let next = match *self {
            Frontier::Stack(ref mut nodes) => nodes.pop(),
            Frontier::Queue(ref mut nodes) => nodes.pop_front(),
            Frontier::Heap { ref mut nodes, .. } => nodes.pop().map(|queued| queued.node),
        };
        match next {
            Some(node) => Ok(node),
            None => bail!(ErrorKind::EmptyFrontier),
        }
    }

    /// Is there a node for `state` waiting in the frontier? A linear scan.
    pub fn contains_state(&self, state: Cell) -> bool {
        match *self {
            Frontier::Stack(ref nodes) => nodes.iter().any(|n| n.state == state),
            Frontier::Queue(ref nodes) => nodes.iter().any(|n| n.state == state),
            Frontier::Heap { ref nodes, .. } => nodes.iter().any(|q| q.node.state == state),
        }
    }

    pub fn len(&self) -> usize {
        match *self {
            Frontier::Stack(ref nodes) => nodes.len(),
            Frontier::Queue(ref nodes) => nodes.len(),
            Frontier::Heap { ref nodes, .. } => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
