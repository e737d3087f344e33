use crate::{map_model::MapModel, NodeId, Point};

/// A sequence of connected nodes together with its real-world length.
///
/// Routes produced by a search run from the start node to the end node.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    nodes: Vec<NodeId>,
    distance: f32,
}

impl Route {
    /// Creates a Route from its nodes and its length.
    pub fn new(nodes: Vec<NodeId>, distance: f32) -> Route {
        Route { nodes, distance }
    }

    /// The nodes along the route, start first.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Consumes the Route and returns its nodes.
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    /// The length of the route in real-world units.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The number of nodes in the route.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the route has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first node.
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// The last node.
    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// An iterator over the nodes, start first.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, NodeId>> {
        self.nodes.iter().copied()
    }

    /// Looks up the normalized position of every node, e.g. to draw the route.
    pub fn positions<M: MapModel + ?Sized>(&self, model: &M) -> Vec<Point> {
        self.iter().map(|id| model.position(id)).collect()
    }

    /// The same route travelled the other way.
    pub fn reversed(&self) -> Route {
        let mut nodes = self.nodes.clone();
        nodes.reverse();
        Route {
            nodes,
            distance: self.distance,
        }
    }
}

impl std::ops::Index<usize> for Route {
    type Output = NodeId;
    #[track_caller]
    fn index(&self, index: usize) -> &NodeId {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Route {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
