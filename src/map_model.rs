//! The interface between the search and the graph it runs on.

use crate::{euclidean_distance, NodeId, Point};

/// A graph of positioned nodes that a [`RoutePlanner`](crate::search::RoutePlanner) can
/// search.
///
/// Implementors own the nodes, the spatial lookup and the unit scaling. The search only
/// ever reads from the model.
pub trait MapModel {
    /// The node closest to `point` in normalized coordinates, or `None` if the model is
    /// empty.
    fn find_closest_node(&self, point: Point) -> Option<NodeId>;

    /// The position of `id` in normalized coordinates.
    fn position(&self, id: NodeId) -> Point;

    /// Appends all Nodes reachable from `id` over a single edge to `target`.
    ///
    /// `target` is not cleared beforehand. The order of the appended Nodes is the order in
    /// which the search discovers them.
    fn find_neighbors(&self, id: NodeId, target: &mut Vec<NodeId>);

    /// Conversion factor from normalized distances to real-world units (usually meters).
    fn metric_scale(&self) -> f32;

    /// Straight-line distance between two nodes in normalized units.
    fn distance(&self, a: NodeId, b: NodeId) -> f32 {
        euclidean_distance(self.position(a), self.position(b))
    }
}
