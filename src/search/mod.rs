//! The search algorithms and their configuration.

mod a_star;
pub use a_star::{RoutePlanner, SearchState};

mod config;
pub use config::{SearchConfig, TieBreak};

mod dijkstra;
pub use dijkstra::dijkstra_search;

mod state;
pub use state::NodeState;

use crate::NodeId;

use std::cmp::Ordering;

/// An open-list entry of the A* search. `tie` is compared when `f` is equal, `seq` after that.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HeuristicElement {
    pub id: NodeId,
    pub g: f32,
    pub f: f32,
    pub tie: f32,
    pub seq: u64,
}
impl PartialEq for HeuristicElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    // reversed: BinaryHeap pops the maximum
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.f
            .total_cmp(&self.f)
            .then_with(|| rhs.tie.total_cmp(&self.tie))
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Element(pub NodeId, pub f32);
impl PartialEq for Element {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for Element {}
impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.total_cmp(&self.1).then_with(|| rhs.0.cmp(&self.0))
    }
}
