//! The result of a search.

mod route;
pub use route::Route;
