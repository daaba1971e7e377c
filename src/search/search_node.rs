use crate::search::HeuristicValue;

/// Index of a node in a [`SearchSpace`](crate::search::SearchSpace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is one entry of the search tree: the action that reached
/// it, its parent and the accumulated path cost. Several nodes may share the
/// same state when a search reaches that state along different paths.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    node_id: NodeId,
    /// Parent node, a sentinel id for the root
    parent_id: NodeId,
    /// Action that led to this node, `None` only for the root
    action: Option<A>,
    /// G-value of the node, i.e. the cost of the path from the root.
    g: HeuristicValue,
    /// Number of actions on the path from the root.
    depth: usize,
}

impl<A> SearchNode<A> {
    /// Create a new search node with no parent. This should only be used for
    /// the root node of the search space. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            parent_id: NO_NODE,
            action: None,
            g: HeuristicValue::from(0.),
            depth: 0,
        }
    }

    pub fn new_with_parent(node_id: NodeId, parent: &SearchNode<A>, action: A, cost: f64) -> Self {
        Self {
            node_id,
            parent_id: parent.node_id,
            action: Some(action),
            g: parent.g + cost,
            depth: parent.depth + 1,
        }
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }
}
