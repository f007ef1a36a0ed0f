use crate::grid::Grid;
use crate::peers::PeerMap;

/// Rule queries over a [`Grid`], backed by a precomputed [`PeerMap`] so a
/// legality check walks 20 cells instead of re-deriving row, column and
/// box bounds on every call.
///
/// Both queries are pure: the grid is never mutated. `candidates` is only
/// meaningful for empty target cells; for a filled cell it reports what
/// the peers allow, ignoring the cell's own value.
#[derive(Debug, Clone, Default)]
pub struct CellChecker {
    peers: PeerMap,
}

impl CellChecker {
    pub fn new() -> Self {
        Self {
            peers: PeerMap::new(),
        }
    }

    /// Builds a checker over an existing peer map, so callers can share
    /// one map between several checkers or solvers.
    pub fn with_peers(peers: PeerMap) -> Self {
        Self { peers }
    }

    pub fn peer_map(&self) -> &PeerMap {
        &self.peers
    }

    /// True when no peer of `(x, y)` currently holds `value`.
    pub fn is_valid_move(&self, grid: &Grid, x: usize, y: usize, value: u8) -> bool {
        self.peers
            .peers(x, y)
            .iter()
            .all(|&(px, py)| grid.value(px, py) != Some(value))
    }

    /// The digits 1-9 not present among the peers of `(x, y)`, ascending.
    pub fn candidates(&self, grid: &Grid, x: usize, y: usize) -> Vec<u8> {
        let mut taken = [false; 10];
        for &(px, py) in self.peers.peers(x, y) {
            if let Some(value) = grid.value(px, py) {
                taken[value as usize] = true;
            }
        }
        (1..=9).filter(|&value| !taken[value as usize]).collect()
    }
}
