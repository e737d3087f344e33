/// How the open list orders nodes with equal `f = g + h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TieBreak {
    /// The node closer to the goal (lower `h`) wins; among those, the one added first.
    #[default]
    LowerH,
    /// The node added to the open list first wins.
    Fifo,
}

/// Options for a [`RoutePlanner`](super::RoutePlanner).
///
/// ## Examples
/// ```
/// use route_planner::prelude::*;
///
/// let config = SearchConfig::default()
///     .with_tie_break(TieBreak::Fifo)
///     .with_relax_costs(true);
///
/// assert_eq!(config.tie_break, TieBreak::Fifo);
/// assert!(config.relax_costs);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    /// Ordering of open-list nodes with equal `f`.
    ///
    /// Default: [`TieBreak::LowerH`]
    pub tie_break: TieBreak,
    /// Lower the cost of a node that is already on the open list when a cheaper way to it is
    /// found.
    ///
    /// When `false`, the first cost assigned to a node is final. This is faster, but can
    /// produce a longer route than the shortest one when a node is first discovered from a
    /// detour.
    ///
    /// Default: `false`
    pub relax_costs: bool,
    /// The expected number of nodes the search touches. Used to pre-allocate.
    ///
    /// Default: `64`
    pub size_hint: usize,
}

impl SearchConfig {
    /// Sets [`tie_break`](SearchConfig::tie_break).
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets [`relax_costs`](SearchConfig::relax_costs).
    pub fn with_relax_costs(mut self, relax_costs: bool) -> Self {
        self.relax_costs = relax_costs;
        self
    }

    /// Sets [`size_hint`](SearchConfig::size_hint).
    pub fn with_size_hint(mut self, size_hint: usize) -> Self {
        self.size_hint = size_hint;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            tie_break: TieBreak::LowerH,
            relax_costs: false,
            size_hint: 64,
        }
    }
}
