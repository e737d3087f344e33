use crate::NodeId;

/// The search-transient data of one node in one search.
///
/// A node has a `NodeState` exactly when it has been visited, meaning it was added to the
/// open list at some point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeState {
    /// Cost from the start node along the best known way.
    pub g_value: f32,
    /// Estimated remaining cost to the end node.
    pub h_value: f32,
    /// The node this one was reached from. `None` for the start node.
    pub parent: Option<NodeId>,
}

impl NodeState {
    /// `g_value + h_value`
    pub fn f_value(&self) -> f32 {
        self.g_value + self.h_value
    }
}
