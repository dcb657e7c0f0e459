//! Random mesh generation.
//!
//! Produces irregular but well-formed meshes: rows of variable-width cells
//! with random holes, connected wherever two cells share an edge. Useful for
//! demos and for exercising path queries on many layouts.

use rand::Rng;

use crate::geom::Cell;
use crate::mesh::Mesh;

/// Parameters for [`MeshGen::strips`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshGenConfig {
    /// Number of unit columns per row.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
    /// Width of one unit column.
    pub unit_w: f64,
    /// Height of one row.
    pub unit_h: f64,
    /// Longest run of unit columns merged into a single cell.
    pub max_run: usize,
    /// Probability (0.0–1.0) that a run is left out as a hole.
    pub hole_pct: f64,
}

impl Default for MeshGenConfig {
    fn default() -> Self {
        Self {
            cols: 16,
            rows: 12,
            unit_w: 1.0,
            unit_h: 1.0,
            max_run: 4,
            hole_pct: 0.2,
        }
    }
}

/// Mesh generator driven by a caller-supplied random source.
pub struct MeshGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MeshGen<R> {
    /// Create a new generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a strip mesh.
    ///
    /// Each row is split into runs of 1 to `max_run` unit columns; every run
    /// becomes one cell unless it is dropped as a hole. Cells are then
    /// connected with [`Mesh::connect_touching`], so vertical portals appear
    /// between runs of the same row and horizontal portals of varying
    /// length between rows.
    ///
    /// `hole_pct` is clamped to 0.0–1.0; NaN means no holes.
    pub fn strips(&mut self, cfg: &MeshGenConfig) -> Mesh {
        let max_run = cfg.max_run.max(1);
        let hole_pct = if cfg.hole_pct.is_nan() {
            0.0
        } else {
            cfg.hole_pct.clamp(0.0, 1.0)
        };
        let mut mesh = Mesh::new();

        for r in 0..cfg.rows {
            let y = r as f64 * cfg.unit_h;
            let mut c = 0;
            while c < cfg.cols {
                let run = self.rng.random_range(1..=max_run).min(cfg.cols - c);
                if !self.rng.random_bool(hole_pct) {
                    let x0 = c as f64 * cfg.unit_w;
                    let x1 = (c + run) as f64 * cfg.unit_w;
                    mesh.add_cell(Cell::new(x0, x1, y, y + cfg.unit_h));
                }
                c += run;
            }
        }

        mesh.connect_touching();
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn strips_cover_rows_without_overlap() {
        let cfg = MeshGenConfig {
            hole_pct: 0.0,
            ..MeshGenConfig::default()
        };
        let mut mg = MeshGen::new(StdRng::seed_from_u64(7));
        let mesh = mg.strips(&cfg);

        // Without holes every row is fully covered.
        let area: f64 = mesh.cells().iter().map(|c| c.width() * c.height()).sum();
        assert_eq!(area, (cfg.cols * cfg.rows) as f64);
        assert_eq!(
            mesh.bounds(),
            Some(Cell::new(0.0, cfg.cols as f64, 0.0, cfg.rows as f64))
        );

        for (i, a) in mesh.cells().iter().enumerate() {
            assert!(a.width() >= 1.0 && a.width() <= cfg.max_run as f64);
            for b in &mesh.cells()[i + 1..] {
                let p = a.portal(b);
                let interior = p.x_max > p.x_min && p.y_max > p.y_min;
                assert!(!interior, "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn strips_adjacency_is_symmetric() {
        let mut mg = MeshGen::new(StdRng::seed_from_u64(42));
        let mesh = mg.strips(&MeshGenConfig::default());
        for (cell, neighbors) in mesh.adjacency() {
            for n in neighbors {
                assert!(mesh.is_adjacent(n, cell));
                assert!(cell.shares_edge(n));
            }
        }
    }

    #[test]
    fn same_seed_same_mesh() {
        let cfg = MeshGenConfig::default();
        let a = MeshGen::new(StdRng::seed_from_u64(3)).strips(&cfg);
        let b = MeshGen::new(StdRng::seed_from_u64(3)).strips(&cfg);
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn all_holes_gives_empty_mesh() {
        let cfg = MeshGenConfig {
            hole_pct: 1.0,
            ..MeshGenConfig::default()
        };
        let mesh = MeshGen::new(StdRng::seed_from_u64(1)).strips(&cfg);
        assert!(mesh.is_empty());
    }

    #[test]
    fn nan_hole_pct_means_no_holes() {
        let cfg = MeshGenConfig {
            cols: 5,
            rows: 3,
            hole_pct: f64::NAN,
            ..MeshGenConfig::default()
        };
        let mesh = MeshGen::new(StdRng::seed_from_u64(1)).strips(&cfg);
        let area: f64 = mesh.cells().iter().map(|c| c.width() * c.height()).sum();
        assert_eq!(area, 15.0);
    }

    #[test]
    fn out_of_range_hole_pct_is_clamped() {
        let cfg = MeshGenConfig {
            hole_pct: -3.0,
            ..MeshGenConfig::default()
        };
        let mesh = MeshGen::new(StdRng::seed_from_u64(2)).strips(&cfg);
        let area: f64 = mesh.cells().iter().map(|c| c.width() * c.height()).sum();
        assert_eq!(area, (cfg.cols * cfg.rows) as f64);

        let cfg = MeshGenConfig {
            hole_pct: f64::INFINITY,
            ..cfg
        };
        assert!(MeshGen::new(StdRng::seed_from_u64(2)).strips(&cfg).is_empty());
    }
}
