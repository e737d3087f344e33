use crate::{NodeId, Point};

/// A node of a [`RouteModel`](super::RouteModel).
///
/// Only static data lives here. Costs, parents and visited flags belong to a single search
/// and are kept by the [`RoutePlanner`](crate::search::RoutePlanner).
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Position in normalized coordinates.
    pub pos: Point,
    /// Nodes connected to this one by an edge, in insertion order.
    pub neighbors: Vec<NodeId>,
}

impl Node {
    /// Creates a Node without any edges.
    pub fn new(pos: Point) -> Node {
        Node {
            pos,
            neighbors: vec![],
        }
    }
}
