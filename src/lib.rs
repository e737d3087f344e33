#![deny(missing_docs)]
//! A crate to find the shortest route between two coordinates on a geographic node graph.
//!
//! The graph lives in a [`MapModel`](map_model::MapModel). Coordinates are given as
//! percentages (`0.0..=100.0`) of the map's bounding box, resolved to the closest graph
//! nodes, and connected with an A* search.
//!
//! ## Examples
//! ```
//! use route_planner::prelude::*;
//!
//! // a tiny road: A - B - C, one unit apart in normalized space
//! let mut model = RouteModel::new(1000.0);
//! let a = model.add_node((0.0, 0.0));
//! let b = model.add_node((0.5, 0.0));
//! let c = model.add_node((1.0, 0.0));
//! model.add_way(&[a, b, c]);
//!
//! let planner = RoutePlanner::new(&model, 0.0, 0.0, 100.0, 0.0).unwrap();
//! let route = planner.a_star_search().expect("A and C are connected");
//!
//! assert_eq!(route.nodes(), &[a, b, c]);
//! assert!((route.distance() - 1000.0).abs() < 1e-3);
//! ```
//!
//! The search is single-shot: [`a_star_search`](search::RoutePlanner::a_star_search)
//! consumes the planner. All search-transient state lives in the planner, so the model can
//! be queried again by constructing a new planner.
//!
//! ## Crate features
//! - `parallel` (default): runs the closest-node lookup of
//!   [`RouteModel`](graph::RouteModel) on [rayon](https://docs.rs/rayon).
//! - `log`: traces internal timings through the [log](https://docs.rs/log) facade.

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

mod error;
pub use error::PlanError;

pub mod graph;
pub mod map_model;
pub mod path;
pub mod search;

/// A position in the normalized coordinate space of a map. Both axes span `0.0..=1.0`
/// across the map's bounding box.
pub type Point = (f32, f32);

slotmap::new_key_type! {
    /// A stable handle to a node of a [`RouteModel`](graph::RouteModel).
    pub struct NodeId;
}

/// A `HashMap` keyed by [`NodeId`].
pub type NodeMap<V> = hashbrown::HashMap<NodeId, V>;
/// A `HashSet` of [`NodeId`]s.
pub type NodeSet = hashbrown::HashSet<NodeId>;

/// Straight-line distance between two points.
pub fn euclidean_distance(a: Point, b: Point) -> f32 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        graph::{Node, RouteModel},
        map_model::MapModel,
        path::Route,
        search::{dijkstra_search, RoutePlanner, SearchConfig, SearchState, TieBreak},
        NodeId, PlanError, Point,
    };
}
