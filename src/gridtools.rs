use crate::error::{GridError, GridResult};
use crate::{Grid, NeighborKind, OUTSIDE_CELL};
use ndarray::{s, Array1, Array2, Axis};

/// Retrieve the neighborship relation ("graph") of a grid.
///
/// Arguments:
///  - grid: Grid to read the relation from.
///  - kind: With NeighborKind::Geometrical, the relation holds the
///    physical interfaces listed in `faces.neighbors`. With
///    NeighborKind::Topological, the non-neighboring connections of the
///    grid's `nnc` block are appended below them, when the grid has any.
///  - include_boundary: Whether to keep boundary connections, i.e. rows
///    in which one of the connecting cells is the outside.
///
/// Returns an (m, 2) array of cell-index pairs. Geometric rows come
/// first, in `faces.neighbors` order; NNC rows follow in their given
/// order.
///
/// If the relation is later used to build a graph adjacency matrix,
/// `include_boundary` must be false.
pub fn neighborship(
    grid: &Grid,
    kind: NeighborKind,
    include_boundary: bool,
) -> GridResult<Array2<i64>> {
    let (pairs, _) = extract(grid, kind, include_boundary)?;
    Ok(pairs)
}

/// Same relation as [`neighborship`], paired with one flag per row that
/// is true iff the row came from the NNC list rather than a geometric
/// interface. On a grid without NNC data the flags are all false.
pub fn neighborship_with_flags(
    grid: &Grid,
    kind: NeighborKind,
    include_boundary: bool,
) -> GridResult<(Array2<i64>, Array1<bool>)> {
    let (pairs, nnc_rows) = extract(grid, kind, include_boundary)?;
    let geometric_rows = pairs.nrows() - nnc_rows;
    let mut is_nnc = Array1::from_elem(pairs.nrows(), false);
    is_nnc.slice_mut(s![geometric_rows..]).fill(true);
    Ok((pairs, is_nnc))
}

fn extract(
    grid: &Grid,
    kind: NeighborKind,
    include_boundary: bool,
) -> GridResult<(Array2<i64>, usize)> {
    let neighbors = &grid.faces.neighbors;
    if neighbors.ncols() != 2 {
        return Err(GridError::shape_mismatch(
            "faces.neighbors",
            2,
            neighbors.ncols(),
        ));
    }

    let geometric = if include_boundary {
        neighbors.clone()
    } else {
        let interior: Vec<usize> = neighbors
            .outer_iter()
            .enumerate()
            .filter(|(_, pair)| pair.iter().all(|&cell| cell != OUTSIDE_CELL))
            .map(|(face, _)| face)
            .collect();
        neighbors.select(Axis(0), &interior)
    };

    let cells = match (kind, &grid.nnc) {
        (NeighborKind::Topological, Some(nnc)) if nnc.cells.nrows() > 0 => &nnc.cells,
        _ => return Ok((geometric, 0)),
    };
    if cells.ncols() != 2 {
        return Err(GridError::shape_mismatch("nnc.cells", 2, cells.ncols()));
    }

    let geometric_rows = geometric.nrows();
    let nnc_rows = cells.nrows();
    let mut pairs = Array2::zeros((geometric_rows + nnc_rows, 2));
    pairs.slice_mut(s![..geometric_rows, ..]).assign(&geometric);
    pairs.slice_mut(s![geometric_rows.., ..]).assign(cells);
    Ok((pairs, nnc_rows))
}
