use super::Element;
use crate::{map_model::MapModel, path::Route, NodeId, NodeMap, NodeSet};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Uniform-cost search from `start` to every node in `goals`.
///
/// Returns the shortest [`Route`] to each reachable goal, keyed by goal. Unreachable goals
/// are missing from the result. With `only_closest_goal`, the search stops at the first goal
/// it settles.
///
/// Edge costs are straight-line distances, and route distances are in real-world units like
/// the ones of the [`RoutePlanner`](super::RoutePlanner), so both can be compared directly.
///
/// ## Examples
/// ```
/// use route_planner::prelude::*;
///
/// let mut model = RouteModel::new(1.0);
/// let a = model.add_node((0.0, 0.0));
/// let b = model.add_node((1.0, 0.0));
/// let c = model.add_node((2.0, 0.0));
/// let lonely = model.add_node((5.0, 5.0));
/// model.add_way(&[a, b, c]);
///
/// let routes = dijkstra_search(&model, a, &[b, c, lonely], false, 4);
/// assert_eq!(routes[&b].nodes(), &[a, b]);
/// assert_eq!(routes[&c].distance(), 2.0);
/// assert!(!routes.contains_key(&lonely));
/// ```
pub fn dijkstra_search<M: MapModel + ?Sized>(
    model: &M,
    start: NodeId,
    goals: &[NodeId],
    only_closest_goal: bool,
    size_hint: usize,
) -> NodeMap<Route> {
    #[cfg(feature = "log")]
    let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

    let mut visited: NodeMap<(f32, NodeId)> = NodeMap::with_capacity(size_hint);
    let mut next = BinaryHeap::with_capacity(size_hint / 2);

    next.push(Element(start, 0.0));
    visited.insert(start, (0.0, start));

    let mut remaining_goals: NodeSet = goals.iter().copied().collect();

    let mut goal_costs = NodeMap::with_capacity(goals.len());

    let mut all_neighbors = vec![];

    re_trace!("dijkstra setup", timer);

    while let Some(Element(current_id, current_cost)) = next.pop() {
        match current_cost.total_cmp(&visited[&current_id].0) {
            Ordering::Greater => continue,
            Ordering::Equal => {}
            Ordering::Less => panic!("Binary Heap failed"),
        }

        if remaining_goals.remove(&current_id) {
            goal_costs.insert(current_id, current_cost);
            if only_closest_goal || remaining_goals.is_empty() {
                break;
            }
        }

        all_neighbors.clear();
        model.find_neighbors(current_id, &mut all_neighbors);

        for &other_id in all_neighbors.iter() {
            let other_cost = current_cost + model.distance(current_id, other_id);

            let mut needs_visit = true;
            if let Some((prev_cost, prev_id)) = visited.get_mut(&other_id) {
                if *prev_cost > other_cost {
                    *prev_cost = other_cost;
                    *prev_id = current_id;
                } else {
                    needs_visit = false;
                }
            } else {
                visited.insert(other_id, (other_cost, current_id));
            }

            if needs_visit {
                next.push(Element(other_id, other_cost));
            }
        }
    }

    re_trace!("dijkstra 1st loop", timer);

    let scale = model.metric_scale();
    let mut goal_data = NodeMap::with_capacity(goal_costs.len());

    for (&goal, &cost) in goal_costs.iter() {
        let steps = {
            let mut steps = vec![];
            let mut current = goal;

            while current != start {
                steps.push(current);
                let (_, prev) = visited[&current];
                current = prev;
            }
            steps.push(start);
            steps.reverse();
            steps
        };

        goal_data.insert(goal, Route::new(steps, cost * scale));
    }

    re_trace!("dijkstra 2nd loop", timer);

    re_trace!("dijkstra total", outer_timer);

    goal_data
}
