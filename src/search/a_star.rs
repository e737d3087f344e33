use super::{HeuristicElement, NodeState, SearchConfig, TieBreak};
use crate::{map_model::MapModel, path::Route, NodeId, NodeMap, PlanError};

use std::collections::BinaryHeap;

/// The progress of a [`RoutePlanner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// The start node is on the open list, nothing has been expanded yet.
    Initialized,
    /// Nodes are being expanded.
    Searching,
    /// The end node was reached. Terminal.
    Found,
    /// The open list ran empty before reaching the end node. Terminal.
    Exhausted,
}

impl SearchState {
    /// Returns `true` for [`Found`](SearchState::Found) and
    /// [`Exhausted`](SearchState::Exhausted).
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}

/// A single A* query between two coordinates of a [`MapModel`].
///
/// The planner owns the open list and the per-node search data (costs, parents, visited
/// flags) and only reads from the model. It is used for exactly one search:
/// [`a_star_search`](RoutePlanner::a_star_search) consumes it.
///
/// ## Examples
/// ```
/// use route_planner::prelude::*;
///
/// let mut model = RouteModel::new(2.0);
/// let a = model.add_node((0.0, 0.0));
/// let b = model.add_node((1.0, 0.0));
/// let c = model.add_node((1.0, 1.0));
/// model.add_way(&[a, b, c]);
///
/// let planner = RoutePlanner::new(&model, 0.0, 0.0, 100.0, 100.0)?;
/// assert_eq!(planner.start_node(), a);
/// assert_eq!(planner.end_node(), c);
///
/// let route = planner.a_star_search().unwrap();
/// assert_eq!(route.nodes(), &[a, b, c]);
/// assert_eq!(route.distance(), 4.0);
/// # Ok::<(), PlanError>(())
/// ```
#[derive(Debug)]
pub struct RoutePlanner<'a, M: MapModel + ?Sized> {
    model: &'a M,
    config: SearchConfig,
    start_node: NodeId,
    end_node: NodeId,
    open_list: BinaryHeap<HeuristicElement>,
    nodes: NodeMap<NodeState>,
    neighbors: Vec<NodeId>,
    next_seq: u64,
    distance: f32,
    state: SearchState,
    route: Option<Route>,
}

impl<'a, M: MapModel + ?Sized> RoutePlanner<'a, M> {
    /// Creates a planner with the default [`SearchConfig`].
    ///
    /// The coordinates are percentages (`0.0..=100.0`) of the map's extent on each axis and
    /// get resolved to the closest nodes of the model.
    ///
    /// ## Errors
    /// - [`PlanError::InvalidCoordinate`] if a coordinate is NaN or infinite
    /// - [`PlanError::EmptyGraph`] if the model has no nodes
    pub fn new(
        model: &'a M,
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
    ) -> Result<Self, PlanError> {
        Self::with_config(model, start_x, start_y, end_x, end_y, SearchConfig::default())
    }

    /// Creates a planner with the given [`SearchConfig`]. See [`new`](RoutePlanner::new).
    pub fn with_config(
        model: &'a M,
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
        config: SearchConfig,
    ) -> Result<Self, PlanError> {
        for (x, y) in [(start_x, start_y), (end_x, end_y)] {
            if !x.is_finite() || !y.is_finite() {
                return Err(PlanError::InvalidCoordinate { x, y });
            }
        }

        let start_node = model
            .find_closest_node((start_x * 0.01, start_y * 0.01))
            .ok_or(PlanError::EmptyGraph)?;
        let end_node = model
            .find_closest_node((end_x * 0.01, end_y * 0.01))
            .ok_or(PlanError::EmptyGraph)?;

        let mut planner = RoutePlanner {
            model,
            config,
            start_node,
            end_node,
            open_list: BinaryHeap::with_capacity(config.size_hint / 2),
            nodes: NodeMap::with_capacity(config.size_hint),
            neighbors: vec![],
            next_seq: 0,
            distance: 0.0,
            state: SearchState::Initialized,
            route: None,
        };

        let h_value = planner.calculate_h_value(start_node);
        planner.visit(start_node, None, 0.0, h_value);

        Ok(planner)
    }

    /// The node the start coordinate resolved to.
    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    /// The node the end coordinate resolved to.
    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    /// The real-world length of the route. `0.0` until the route is found.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The current [`SearchState`].
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The number of entries on the open list.
    pub fn open_len(&self) -> usize {
        self.open_list.len()
    }

    /// The search data of `id`, or `None` if `id` was not visited yet.
    pub fn node_state(&self, id: NodeId) -> Option<&NodeState> {
        self.nodes.get(&id)
    }

    /// Checks if `id` was ever added to the open list.
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// The heuristic: straight-line distance from `id` to the end node.
    pub fn calculate_h_value(&self, id: NodeId) -> f32 {
        self.model.distance(id, self.end_node)
    }

    /// Adds the unvisited neighbors of `current` to the open list, with `current` as their
    /// parent.
    ///
    /// With [`relax_costs`](SearchConfig::relax_costs), visited neighbors are re-added when
    /// `current` offers a cheaper way to them.
    ///
    /// ## Panics
    /// If `current` was not visited.
    #[track_caller]
    pub fn add_neighbors(&mut self, current: NodeId) {
        let current_g = self.nodes[&current].g_value;

        let mut neighbors = std::mem::take(&mut self.neighbors);
        neighbors.clear();
        self.model.find_neighbors(current, &mut neighbors);

        for &neighbor in neighbors.iter() {
            let g_value = current_g + self.model.distance(current, neighbor);

            let h_value = match self.nodes.get(&neighbor) {
                None => self.calculate_h_value(neighbor),
                Some(state) if self.config.relax_costs && g_value < state.g_value => {
                    state.h_value
                }
                Some(_) => continue,
            };
            self.visit(neighbor, Some(current), g_value, h_value);
        }

        self.neighbors = neighbors;
    }

    /// Removes and returns the open-list node with the lowest `f = g + h`, or `None` if the
    /// open list is empty.
    ///
    /// Ties are resolved by [`tie_break`](SearchConfig::tie_break).
    pub fn next_node(&mut self) -> Option<NodeId> {
        while let Some(element) = self.open_list.pop() {
            // entries superseded by a cheaper way to the same node
            if element.g > self.nodes[&element.id].g_value {
                continue;
            }
            return Some(element.id);
        }
        None
    }

    /// Follows the parents from `current` back to the start node and returns the route in
    /// start-to-end order, with its length converted to real-world units.
    ///
    /// `current` should be a visited node, otherwise the route only contains `current`.
    pub fn construct_final_path(&self, current: NodeId) -> Route {
        let mut path_found = vec![current];
        let mut distance = 0.0;

        let mut current = current;
        while let Some(parent) = self.nodes.get(&current).and_then(|state| state.parent) {
            distance += self.model.distance(current, parent);
            path_found.push(parent);
            current = parent;
        }
        debug_assert!(current == self.start_node || path_found.len() == 1);

        path_found.reverse();
        Route::new(path_found, distance * self.model.metric_scale())
    }

    /// Runs one iteration of the search: take the best node off the open list and either
    /// finish on it or expand it.
    ///
    /// Returns the new [`SearchState`]. Once a terminal state is reached, further calls do
    /// nothing.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.state = SearchState::Searching;

        match self.next_node() {
            None => self.state = SearchState::Exhausted,
            Some(current) if current == self.end_node => {
                let route = self.construct_final_path(current);
                self.distance = route.distance();
                self.route = Some(route);
                self.state = SearchState::Found;
            }
            Some(current) => self.add_neighbors(current),
        }
        self.state
    }

    /// Searches the route from the start node to the end node.
    ///
    /// Returns `None` if the two nodes are not connected.
    pub fn a_star_search(mut self) -> Option<Route> {
        #[cfg(feature = "log")]
        let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

        while !self.step().is_terminal() {}

        re_trace!("a* search loop", timer);

        #[cfg(feature = "log")]
        match &self.route {
            Some(route) => log::debug!(
                "route found: {} nodes, {} visited, distance {}",
                route.len(),
                self.nodes.len(),
                route.distance()
            ),
            None => log::debug!(
                "no route between {:?} and {:?} ({} visited)",
                self.start_node,
                self.end_node,
                self.nodes.len()
            ),
        }

        re_trace!("a* total", outer_timer);

        self.route
    }

    fn visit(&mut self, id: NodeId, parent: Option<NodeId>, g_value: f32, h_value: f32) {
        self.nodes.insert(
            id,
            NodeState {
                g_value,
                h_value,
                parent,
            },
        );

        let tie = match self.config.tie_break {
            TieBreak::LowerH => h_value,
            TieBreak::Fifo => 0.0,
        };
        self.open_list.push(HeuristicElement {
            id,
            g: g_value,
            f: g_value + h_value,
            tie,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }
}
