//! The node graph of a map.

mod node;
pub use node::Node;

mod route_model;
pub use route_model::RouteModel;
