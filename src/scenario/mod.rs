//! Scenario drivers wiring graph construction, engine and reconstruction
//! together. Each returns a structured value; presentation is the binary's
//! concern.

pub mod central;
pub mod grid;
pub mod route;

pub use central::{find_central_vertex, CentralReport};
pub use grid::{find_grid_route, GridRouteOutcome};
pub use route::{find_route, RouteOutcome};
