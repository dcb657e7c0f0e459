//! The path query entry points.

use rectnav_core::{Cell, Point};

use crate::astar::astar_cells;
use crate::bfs::breadth_first_cells;
use crate::bidir::bidirectional_cells;
use crate::error::{Endpoint, PathError};
use crate::locate::locate;
use crate::synth::synthesize;
use crate::traits::NavGraph;

/// Cell search used to route between the located cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Strategy {
    /// Two fronts, one from each endpoint, meeting in the middle.
    #[default]
    Bidirectional,
    /// A single forward A* front.
    Astar,
    /// Fewest portal crossings, ignoring geometry.
    Breadth,
}

/// Options for [`find_path_with`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: Strategy,
}

/// A successful query: waypoints plus the cell route they pass through.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Starts at the source point, ends at the destination point, and has
    /// one crossing point per cell transition in between.
    pub path: Vec<Point>,
    /// The cell route, from the source's cell to the destination's cell.
    pub cells: Vec<Cell>,
}

impl Route {
    /// Split into `(path, cells)`.
    pub fn into_parts(self) -> (Vec<Point>, Vec<Cell>) {
        (self.path, self.cells)
    }

    /// Total polyline length of the path.
    pub fn length(&self) -> f64 {
        self.path.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

/// Find a path from `source` to `dest` using the bidirectional search.
pub fn find_path<G: NavGraph + ?Sized>(
    source: Point,
    dest: Point,
    graph: &G,
) -> Result<Route, PathError> {
    find_path_with(source, dest, graph, &QueryConfig::default())
}

/// Find a path from `source` to `dest` with the given options.
///
/// Locates both points, routes between their cells, then places one
/// crossing point on every portal along the route. Points in the same cell
/// give the direct two-point path.
pub fn find_path_with<G: NavGraph + ?Sized>(
    source: Point,
    dest: Point,
    graph: &G,
    cfg: &QueryConfig,
) -> Result<Route, PathError> {
    let start = locate(source, graph).ok_or(PathError::PointNotInMesh {
        endpoint: Endpoint::Source,
        point: source,
    });
    let goal = locate(dest, graph).ok_or(PathError::PointNotInMesh {
        endpoint: Endpoint::Destination,
        point: dest,
    });
    let (start, goal) = match (start, goal) {
        (Ok(s), Ok(g)) => (s, g),
        (Err(e), _) | (_, Err(e)) => {
            log::debug!("path query failed: {e}");
            return Err(e);
        }
    };

    let cells = if start == goal {
        vec![start]
    } else {
        let found = match cfg.strategy {
            Strategy::Bidirectional => bidirectional_cells(graph, start, goal, source, dest),
            Strategy::Astar => astar_cells(graph, start, goal, source, dest),
            Strategy::Breadth => breadth_first_cells(graph, start, goal),
        };
        let Some(cells) = found else {
            let e = PathError::NoRoute {
                from: start,
                to: goal,
            };
            log::debug!("path query failed: {e}");
            return Err(e);
        };
        cells
    };

    let path = synthesize(&cells, source, dest);
    log::debug!(
        "{:?} route from {source} to {dest}: {} cells, {} waypoints",
        cfg.strategy,
        cells.len(),
        path.len()
    );
    Ok(Route { path, cells })
}

/// Find a path, reporting any failure as an empty path and empty route.
pub fn find_path_or_empty<G: NavGraph + ?Sized>(
    source: Point,
    dest: Point,
    graph: &G,
) -> (Vec<Point>, Vec<Cell>) {
    find_path(source, dest, graph)
        .map(Route::into_parts)
        .unwrap_or_default()
}
