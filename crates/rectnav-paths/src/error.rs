use std::fmt;

use rectnav_core::{Cell, Point};

/// Which end of a query a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Why a path query produced no path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// A query point lies inside no cell of the mesh.
    #[error("{endpoint} point {point} is not inside any cell")]
    PointNotInMesh { endpoint: Endpoint, point: Point },

    /// Both points were located but no chain of adjacent cells joins them.
    #[error("no route from cell {from} to cell {to}")]
    NoRoute { from: Cell, to: Cell },
}
