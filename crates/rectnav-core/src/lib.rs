//! **rectnav-core** — value types for rectangular navigation meshes.
//!
//! This crate provides the types shared across *rectnav*: floating-point
//! points, axis-aligned cells with value identity, the portals between
//! them, the mesh that ties cells together through an adjacency relation,
//! and a random mesh generator.

pub mod geom;
pub mod mapgen;
pub mod mesh;

pub use geom::{Cell, Point, Portal};
pub use mapgen::{MeshGen, MeshGenConfig};
pub use mesh::Mesh;
