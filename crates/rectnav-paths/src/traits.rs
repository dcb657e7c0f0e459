use rectnav_core::{Cell, Mesh};

/// Navigation graph interface: cell enumeration for point location plus
/// neighbor enumeration for searches.
pub trait NavGraph {
    /// Every cell, in a stable order. Point location returns the first match.
    fn cells(&self) -> &[Cell];

    /// Append neighbors of `cell` into `buf`. The caller clears `buf` before
    /// calling.
    fn neighbors(&self, cell: &Cell, buf: &mut Vec<Cell>);
}

impl NavGraph for Mesh {
    #[inline]
    fn cells(&self) -> &[Cell] {
        Mesh::cells(self)
    }

    #[inline]
    fn neighbors(&self, cell: &Cell, buf: &mut Vec<Cell>) {
        buf.extend_from_slice(Mesh::neighbors(self, cell));
    }
}
