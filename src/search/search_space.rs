use crate::search::{NodeId, Plan, SearchNode};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] stores every node a search generates together with its
/// state. Paths are not copied: a node only knows its parent and the action
/// that led to it, so extending a path never changes the path of a sibling.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
}

impl<S, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();

        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new_without_parent(root_node_id));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
        }
    }

    /// Add a child of `parent_id` reached by `action` at `cost`.
    pub fn insert_node(&mut self, state: S, action: A, cost: f64, parent_id: NodeId) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        let node = SearchNode::new_with_parent(node_id, self.get_node(parent_id), action, cost);
        self.nodes.push(node);
        self.states.push(state);
        node_id
    }

    /// Walk the parent links back to the root and return the actions in
    /// execution order.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<A> {
        let mut steps = Vec::with_capacity(self.get_node(goal_id).get_depth());
        let mut current_node = self.get_node(goal_id);
        while let Some(action) = current_node.get_action() {
            steps.push(action.clone());
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }

    #[inline(always)]
    pub fn get_root_id(&self) -> NodeId {
        self.root_node_id
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
