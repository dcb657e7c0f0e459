//! Path queries on rectangular navigation meshes.
//!
//! A query runs in three steps:
//!
//! - **Locate** both points in their cells ([`locate`])
//! - **Search** the cell-adjacency graph for a route between those cells
//!   ([`bidirectional_cells`], or [`astar_cells`] / [`breadth_first_cells`])
//! - **Synthesize** waypoints, one crossing point per portal on the route
//!   ([`synthesize`], built on [`crossing_point`])
//!
//! [`find_path`] runs all three. Search state lives only for the duration
//! of a call; nothing is cached between queries.
//!
//! # Example
//!
//! ```
//! use rectnav_core::{Mesh, Point};
//! use rectnav_paths::find_path;
//!
//! let mesh = Mesh::grid(2, 1, 10.0, 10.0);
//! let route = find_path(Point::new(1.0, 1.0), Point::new(19.0, 9.0), &mesh).unwrap();
//! assert_eq!(route.path[1], Point::new(10.0, 5.0));
//! ```

mod astar;
mod bfs;
mod bidir;
mod error;
mod frontier;
mod locate;
mod portal;
mod query;
mod synth;
mod traits;

pub use astar::astar_cells;
pub use bfs::breadth_first_cells;
pub use bidir::bidirectional_cells;
pub use error::{Endpoint, PathError};
pub use locate::locate;
pub use portal::crossing_point;
pub use query::{QueryConfig, Route, Strategy, find_path, find_path_or_empty, find_path_with};
pub use synth::{centroid_path, synthesize};
pub use traits::NavGraph;
