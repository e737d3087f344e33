use slotmap::SlotMap;

use super::Node;
use crate::{
    euclidean_distance,
    map_model::MapModel,
    search::{RoutePlanner, SearchConfig},
    NodeId, PlanError, Point,
};

/// An arena-backed [`MapModel`] of nodes connected by undirected edges.
///
/// Besides the graph, the model carries the output slots of the last search started through
/// [`plan_route`](RouteModel::plan_route).
#[derive(Clone, Debug)]
pub struct RouteModel {
    nodes: SlotMap<NodeId, Node>,
    metric_scale: f32,
    /// The nodes of the last route found by [`plan_route`](RouteModel::plan_route), from
    /// start to end. Empty if no route was found.
    pub path: Vec<NodeId>,
    /// Real-world length of [`path`](RouteModel::path).
    pub distance: f32,
}

impl RouteModel {
    /// Creates an empty model. `metric_scale` converts normalized distances to real-world
    /// units.
    pub fn new(metric_scale: f32) -> Self {
        Self::with_capacity(metric_scale, 0)
    }

    /// Creates an empty model with room for `capacity` nodes.
    pub fn with_capacity(metric_scale: f32, capacity: usize) -> Self {
        RouteModel {
            nodes: SlotMap::with_capacity_and_key(capacity),
            metric_scale,
            path: vec![],
            distance: 0.0,
        }
    }

    /// The number of nodes in the model.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the model has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds an unconnected node at `pos`.
    pub fn add_node(&mut self, pos: Point) -> NodeId {
        self.nodes.insert(Node::new(pos))
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// Self-loops and edges that already exist are ignored.
    #[track_caller]
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        assert!(self.nodes.contains_key(b), "add_edge: {:?} is not in the model", b);

        let a_node = &mut self[a];
        if a_node.neighbors.contains(&b) {
            return;
        }
        a_node.neighbors.push(b);
        self[b].neighbors.push(a);
    }

    /// Connects consecutive nodes of a polyline, like the nodes of a road.
    #[track_caller]
    pub fn add_way(&mut self, way: &[NodeId]) {
        for pair in way.windows(2) {
            self.add_edge(pair[0], pair[1]);
        }
    }

    /// Removes a node and every edge leading to it.
    #[track_caller]
    pub fn remove_node(&mut self, id: NodeId) {
        let node = self.nodes.remove(id).expect("remove_node: id is not in the model");
        for other_id in node.neighbors {
            self[other_id].neighbors.retain(|n| *n != id);
        }
    }

    /// The ids of all nodes in the model.
    pub fn keys(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys()
    }

    /// Checks if `id` refers to a node of this model.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Searches a route between two percentage coordinates and stores it in
    /// [`path`](RouteModel::path) and [`distance`](RouteModel::distance).
    ///
    /// Returns the real-world length of the route, or `Ok(None)` if the two coordinates
    /// resolve to unconnected nodes. In that case `path` is left empty.
    pub fn plan_route(
        &mut self,
        start: Point,
        end: Point,
        config: SearchConfig,
    ) -> Result<Option<f32>, PlanError> {
        let route =
            RoutePlanner::with_config(&*self, start.0, start.1, end.0, end.1, config)?
                .a_star_search();

        self.path.clear();
        self.distance = 0.0;

        Ok(route.map(|route| {
            self.distance = route.distance();
            self.path = route.into_nodes();
            self.distance
        }))
    }
}

impl MapModel for RouteModel {
    #[cfg(not(feature = "parallel"))]
    fn find_closest_node(&self, point: Point) -> Option<NodeId> {
        self.nodes
            .iter()
            .map(|(id, node)| (euclidean_distance(node.pos, point), id))
            .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)))
            .map(|(_, id)| id)
    }

    #[cfg(feature = "parallel")]
    fn find_closest_node(&self, point: Point) -> Option<NodeId> {
        use rayon::prelude::*;

        self.nodes
            .iter()
            .par_bridge()
            .map(|(id, node)| (euclidean_distance(node.pos, point), id))
            .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)))
            .map(|(_, id)| id)
    }

    #[track_caller]
    fn position(&self, id: NodeId) -> Point {
        self[id].pos
    }

    #[track_caller]
    fn find_neighbors(&self, id: NodeId, target: &mut Vec<NodeId>) {
        target.extend_from_slice(&self[id].neighbors);
    }

    fn metric_scale(&self) -> f32 {
        self.metric_scale
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeId> for RouteModel {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeId) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeId> for RouteModel {
    #[track_caller]
    fn index_mut(&mut self, index: NodeId) -> &mut Node {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_undirected_and_unique() {
        let mut model = RouteModel::new(1.0);
        let a = model.add_node((0.0, 0.0));
        let b = model.add_node((1.0, 0.0));

        model.add_edge(a, b);
        model.add_edge(b, a);
        model.add_edge(a, a);

        assert_eq!(model[a].neighbors, vec![b]);
        assert_eq!(model[b].neighbors, vec![a]);
    }

    #[test]
    fn add_way_links_consecutive_nodes() {
        let mut model = RouteModel::new(1.0);
        let way: Vec<_> = (0..4).map(|i| model.add_node((i as f32, 0.0))).collect();
        model.add_way(&way);

        assert_eq!(model[way[0]].neighbors, vec![way[1]]);
        assert_eq!(model[way[1]].neighbors, vec![way[0], way[2]]);
        assert_eq!(model[way[3]].neighbors, vec![way[2]]);
    }

    #[test]
    fn remove_node_drops_edges() {
        let mut model = RouteModel::new(1.0);
        let a = model.add_node((0.0, 0.0));
        let b = model.add_node((0.5, 0.0));
        let c = model.add_node((1.0, 0.0));
        model.add_way(&[a, b, c]);

        model.remove_node(b);

        assert_eq!(model.len(), 2);
        assert!(!model.contains(b));
        assert!(model[a].neighbors.is_empty());
        assert!(model[c].neighbors.is_empty());
    }

    #[test]
    fn closest_node() {
        let mut model = RouteModel::new(1.0);
        assert_eq!(model.find_closest_node((0.5, 0.5)), None);

        let a = model.add_node((0.1, 0.1));
        let b = model.add_node((0.9, 0.2));
        let c = model.add_node((0.4, 0.8));

        assert_eq!(model.find_closest_node((0.0, 0.0)), Some(a));
        assert_eq!(model.find_closest_node((1.0, 0.0)), Some(b));
        assert_eq!(model.find_closest_node((0.5, 1.0)), Some(c));
    }

    #[test]
    fn closest_node_tie_prefers_older_node() {
        let mut model = RouteModel::new(1.0);
        let a = model.add_node((0.0, 0.0));
        let _b = model.add_node((1.0, 0.0));

        for _ in 0..10 {
            assert_eq!(model.find_closest_node((0.5, 0.0)), Some(a));
        }
    }

    #[test]
    fn plan_route_commits_path() {
        let mut model = RouteModel::new(100.0);
        let a = model.add_node((0.0, 0.0));
        let b = model.add_node((0.0, 0.5));
        let c = model.add_node((0.0, 1.0));
        model.add_way(&[a, b, c]);
        let lonely = model.add_node((1.0, 1.0));

        let distance = model
            .plan_route((0.0, 0.0), (0.0, 100.0), SearchConfig::default())
            .unwrap();
        assert_eq!(distance, Some(100.0));
        assert_eq!(model.path, vec![a, b, c]);
        assert_eq!(model.distance, 100.0);

        let distance = model
            .plan_route((0.0, 0.0), (100.0, 100.0), SearchConfig::default())
            .unwrap();
        assert_eq!(distance, None);
        assert!(model.path.is_empty());
        assert_eq!(model.distance, 0.0);
        assert!(model.contains(lonely));
    }

    #[test]
    fn plan_route_on_empty_model() {
        let mut model = RouteModel::new(1.0);
        assert_eq!(
            model.plan_route((0.0, 0.0), (1.0, 1.0), SearchConfig::default()),
            Err(PlanError::EmptyGraph)
        );
    }
}
