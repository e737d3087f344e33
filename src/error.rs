use thiserror::Error;

/// Errors raised while setting up a route search.
///
/// A search that finds no route is not an error: it yields `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The map model has no nodes to snap a coordinate to.
    #[error("map model contains no nodes")]
    EmptyGraph,

    /// A coordinate was NaN or infinite.
    #[error("invalid coordinate: ({x}, {y})")]
    InvalidCoordinate {
        /// Horizontal percentage as passed in.
        x: f32,
        /// Vertical percentage as passed in.
        y: f32,
    },
}
