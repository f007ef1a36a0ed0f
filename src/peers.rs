use itertools::Itertools;

use crate::grid::SIZE;

/// Precomputed peer lists: for every cell, the cells sharing its row,
/// column or 3x3 box, excluding the cell itself. Depends only on grid
/// geometry, so one map can be shared read-only across any number of
/// solves.
#[derive(Debug, Clone)]
pub struct PeerMap {
    peers: Vec<Vec<(usize, usize)>>,
}

impl PeerMap {
    pub fn new() -> Self {
        let peers = (0..SIZE)
            .cartesian_product(0..SIZE)
            .map(|(x, y)| {
                let x0 = x - x % 3;
                let y0 = y - y % 3;
                let row = (0..SIZE).map(move |i| (i, y));
                let col = (0..SIZE).map(move |i| (x, i));
                let square = (x0..x0 + 3).cartesian_product(y0..y0 + 3);
                row.chain(col)
                    .chain(square)
                    .filter(|&cell| cell != (x, y))
                    .sorted()
                    .dedup()
                    .collect()
            })
            .collect();
        Self { peers }
    }

    /// The 20 peers of `(x, y)`. Iteration order is fixed but carries no
    /// meaning; only membership does.
    pub fn peers(&self, x: usize, y: usize) -> &[(usize, usize)] {
        &self.peers[x * SIZE + y]
    }
}

impl Default for PeerMap {
    fn default() -> Self {
        Self::new()
    }
}
