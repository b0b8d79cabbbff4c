use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod gridtools;

/// Index of the synthetic cell on the outside of the domain. A face whose
/// neighbor row contains this value is a boundary face.
pub const OUTSIDE_CELL: i64 = -1;

/// What kind of neighborship relation to extract from a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeighborKind {
    /// Physical face adjacency only, as listed in `faces.neighbors`.
    Geometrical,
    /// Geometric connections plus the non-neighboring connections carried
    /// by the grid's `nnc` block, e.g. from pinch-out processing or an
    /// explicit NNC list in the input deck.
    Topological,
}

impl Default for NeighborKind {
    fn default() -> Self {
        NeighborKind::Geometrical
    }
}

/// Face data of a grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faces {
    /// (M, 2) array giving the two cell indices bordering each face.
    /// Boundary faces carry [`OUTSIDE_CELL`] on their outside.
    pub neighbors: Array2<i64>,
}

/// Non-neighboring connections of a grid. Present only on grids that went
/// through pinch-out processing or that carried explicit NNC input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nnc {
    /// (K, 2) array of cell pairs connected without a shared physical face.
    pub cells: Array2<i64>,
}

/// An already constructed reservoir grid, reduced to the connectivity
/// fields the utilities in this crate read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    pub faces: Faces,
    pub nnc: Option<Nnc>,
}

/*
 * Constructors
 */
impl Grid {
    pub fn new(neighbors: Array2<i64>) -> Self {
        Grid {
            faces: Faces { neighbors },
            nnc: None,
        }
    }

    pub fn with_nnc(neighbors: Array2<i64>, cells: Array2<i64>) -> Self {
        Grid {
            faces: Faces { neighbors },
            nnc: Some(Nnc { cells }),
        }
    }
}

/*
 * Access to data
 */
impl Grid {
    pub fn num_faces(&self) -> usize {
        self.faces.neighbors.nrows()
    }

    /// True if the grid carries NNC data with at least one connection.
    pub fn has_nnc(&self) -> bool {
        self.nnc.as_ref().is_some_and(|nnc| nnc.cells.nrows() > 0)
    }
}
