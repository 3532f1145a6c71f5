//! Double-buffered cell board with edge-aware neighbor lookups.
//!
//! [`Board`] keeps two equally-sized row-major buffers that alternate
//! between the "current" role (read by the renderer and by neighbor
//! probes) and the "write" role (the target of an in-progress tick
//! pass). [`Board::swap`] exchanges the roles by flipping a flag; cell
//! data is never copied or reallocated after construction.
//!
//! The lifecycle per tick is:
//! 1. The tick pass reads the current buffer (`get` / `get_wrapped` /
//!    `live_neighbours`) and writes every cell via `set_next`
//! 2. `swap()`: the write buffer becomes current
//! 3. The old current buffer becomes the next write target; its stale
//!    contents are irrelevant because a tick pass writes every cell

use crate::dims::Dims;
use crate::frame::Frame;
use glider_core::{EdgePolicy, Generation};
use smallvec::SmallVec;

/// All 8 Moore offsets as `(dcol, drow)`: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Resolve a single axis value under the given edge policy.
/// Returns `Some(in_range_value)` or `None` for Bounded out-of-range.
fn resolve_axis(val: i32, len: u32, edge: EdgePolicy) -> Option<u32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val as u32);
    }
    match edge {
        EdgePolicy::Bounded => None,
        EdgePolicy::Wrap => Some((((val % n) + n) % n) as u32),
    }
}

/// Double-buffered Life board.
///
/// # Buffer roles
///
/// ```text
/// cells_a: Vec<bool>  ←─ current while b_is_current = false, write after swap
/// cells_b: Vec<bool>  ←─ write while b_is_current = false, current after swap
/// ```
///
/// Reads (`get`, `get_wrapped`, `live_neighbours`) and direct writes
/// (`set`, `toggle`, `clear`, `fill_with`) address the current buffer;
/// only `set_next` addresses the write buffer. Keeping the two strictly
/// apart is what makes a tick's updates simultaneous: no neighbor probe
/// can observe a half-updated generation.
///
/// # Examples
///
/// ```
/// use glider_core::EdgePolicy;
/// use glider_grid::{Board, Dims};
///
/// let mut board = Board::new(Dims::new(5, 5).unwrap(), EdgePolicy::Wrap);
/// board.set(0, 0, true);
/// assert!(board.get(0, 0));
/// // The far corner is a diagonal neighbor on a torus.
/// assert_eq!(board.live_neighbours(4, 4), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    dims: Dims,
    /// Cell buffer A.
    cells_a: Vec<bool>,
    /// Cell buffer B.
    cells_b: Vec<bool>,
    /// Which buffer is current (false = A current, true = B current).
    b_is_current: bool,
    edge: EdgePolicy,
}

impl Board {
    /// Creates a board with all cells dead in both buffers.
    pub fn new(dims: Dims, edge: EdgePolicy) -> Self {
        let cells = vec![false; dims.cell_count()];
        Self {
            dims,
            cells_a: cells.clone(),
            cells_b: cells,
            b_is_current: false,
            edge,
        }
    }

    /// Board dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The edge policy currently in force.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge
    }

    /// Changes the edge policy for subsequent lookups.
    ///
    /// Cell state is untouched; only neighbor resolution changes.
    pub fn set_edge_policy(&mut self, edge: EdgePolicy) {
        self.edge = edge;
    }

    fn current(&self) -> &[bool] {
        if self.b_is_current {
            &self.cells_b
        } else {
            &self.cells_a
        }
    }

    fn current_mut(&mut self) -> &mut [bool] {
        if self.b_is_current {
            &mut self.cells_b
        } else {
            &mut self.cells_a
        }
    }

    fn write_mut(&mut self) -> &mut [bool] {
        if self.b_is_current {
            &mut self.cells_a
        } else {
            &mut self.cells_b
        }
    }

    /// Reads a cell from the current buffer.
    ///
    /// Total: any coordinate outside `[0, cols) × [0, rows)` reads as
    /// dead, so callers probe near edges without special-casing. The
    /// edge policy is deliberately not consulted here.
    pub fn get(&self, col: i32, row: i32) -> bool {
        if !self.dims.contains(col, row) {
            return false;
        }
        self.current()[self.dims.index(col as u32, row as u32)]
    }

    /// Reads a cell from the current buffer, resolving out-of-range
    /// coordinates under the edge policy.
    ///
    /// Under [`EdgePolicy::Wrap`] each out-of-range axis is reduced
    /// `((v % n) + n) % n` before the lookup; under
    /// [`EdgePolicy::Bounded`] this behaves exactly like [`Board::get`].
    pub fn get_wrapped(&self, col: i32, row: i32) -> bool {
        match (
            resolve_axis(col, self.dims.cols(), self.edge),
            resolve_axis(row, self.dims.rows(), self.edge),
        ) {
            (Some(c), Some(r)) => self.current()[self.dims.index(c, r)],
            _ => false,
        }
    }

    /// Counts live cells among the eight Moore neighbors, resolving
    /// each probe under the edge policy.
    ///
    /// The center cell is excluded and must be in range. On wrap grids
    /// narrower than 3 cells an off-grid probe can land on an
    /// already-counted cell or the center itself; all eight probes are
    /// still taken, matching the lookup semantics of `get_wrapped`.
    pub fn live_neighbours(&self, col: u32, row: u32) -> u8 {
        debug_assert!(
            self.dims.contains(col as i32, row as i32),
            "center cell ({col}, {row}) outside {} grid",
            self.dims
        );
        let (c, r) = (col as i32, row as i32);
        let mut count = 0u8;
        for (dc, dr) in OFFSETS_8 {
            count += u8::from(self.get_wrapped(c + dc, r + dr));
        }
        count
    }

    /// The resolved in-range Moore neighborhood of a cell under the
    /// edge policy, as `(col, row)` pairs.
    ///
    /// Eight entries under `Wrap` (duplicates possible on tiny grids),
    /// possibly fewer under `Bounded`. The center cell must be in
    /// range.
    pub fn neighbours(&self, col: u32, row: u32) -> SmallVec<[(u32, u32); 8]> {
        debug_assert!(
            self.dims.contains(col as i32, row as i32),
            "center cell ({col}, {row}) outside {} grid",
            self.dims
        );
        let mut result = SmallVec::new();
        for (dc, dr) in OFFSETS_8 {
            let nc = resolve_axis(col as i32 + dc, self.dims.cols(), self.edge);
            let nr = resolve_axis(row as i32 + dr, self.dims.rows(), self.edge);
            if let (Some(nc), Some(nr)) = (nc, nr) {
                result.push((nc, nr));
            }
        }
        result
    }

    /// Writes a cell in the current buffer.
    ///
    /// The coordinate must be in range: an out-of-range write is a
    /// coordinate-mapping bug in the caller, asserted in debug builds.
    pub fn set(&mut self, col: u32, row: u32, alive: bool) {
        debug_assert!(
            self.dims.contains(col as i32, row as i32),
            "write to ({col}, {row}) outside {} grid",
            self.dims
        );
        let idx = self.dims.index(col, row);
        self.current_mut()[idx] = alive;
    }

    /// Writes a cell in the write buffer. Same range contract as
    /// [`Board::set`]; used exclusively by the tick pass.
    pub fn set_next(&mut self, col: u32, row: u32, alive: bool) {
        debug_assert!(
            self.dims.contains(col as i32, row as i32),
            "write to ({col}, {row}) outside {} grid",
            self.dims
        );
        let idx = self.dims.index(col, row);
        self.write_mut()[idx] = alive;
    }

    /// Flips a cell in the current buffer and returns its new state.
    /// Same range contract as [`Board::set`].
    pub fn toggle(&mut self, col: u32, row: u32) -> bool {
        debug_assert!(
            self.dims.contains(col as i32, row as i32),
            "toggle of ({col}, {row}) outside {} grid",
            self.dims
        );
        let idx = self.dims.index(col, row);
        let cells = self.current_mut();
        cells[idx] = !cells[idx];
        cells[idx]
    }

    /// Exchanges the roles of the current and write buffers.
    ///
    /// O(1): a flag flip, never an element-wise copy. After the swap
    /// the old current buffer is the next write target; its contents
    /// are stale until the next full tick pass overwrites them.
    pub fn swap(&mut self) {
        self.b_is_current = !self.b_is_current;
    }

    /// Sets every cell in the current buffer to dead.
    pub fn clear(&mut self) {
        self.current_mut().fill(false);
    }

    /// Overwrites every current-buffer cell from `f(col, row)`, visited
    /// in row-major order.
    ///
    /// This is the bulk-seed entry point; the population generator
    /// passes its sampler here so randomness stays out of this crate.
    pub fn fill_with(&mut self, mut f: impl FnMut(u32, u32) -> bool) {
        let (cols, rows) = (self.dims.cols(), self.dims.rows());
        let dims = self.dims;
        let cells = self.current_mut();
        for row in 0..rows {
            for col in 0..cols {
                cells[dims.index(col, row)] = f(col, row);
            }
        }
    }

    /// Number of live cells in the current buffer.
    pub fn live_cells(&self) -> usize {
        self.current().iter().filter(|&&alive| alive).count()
    }

    /// Clones the current buffer into an owned [`Frame`] stamped with
    /// `generation`.
    ///
    /// The frame never aliases the live buffers; later board mutations
    /// do not affect it.
    pub fn frame(&self, generation: Generation) -> Frame {
        Frame::new(self.dims, generation, self.current().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cols: u32, rows: u32, edge: EdgePolicy) -> Board {
        Board::new(Dims::new(cols, rows).unwrap(), edge)
    }

    // ── Read totality ───────────────────────────────────────────

    #[test]
    fn new_board_is_all_dead() {
        let b = board(4, 4, EdgePolicy::Bounded);
        assert_eq!(b.live_cells(), 0);
        for row in 0..4 {
            for col in 0..4 {
                assert!(!b.get(col, row));
            }
        }
    }

    #[test]
    fn get_is_total_over_out_of_range() {
        let mut b = board(3, 3, EdgePolicy::Bounded);
        b.fill_with(|_, _| true);
        assert!(!b.get(-1, 0));
        assert!(!b.get(0, -1));
        assert!(!b.get(3, 0));
        assert!(!b.get(0, 3));
        assert!(!b.get(i32::MIN, i32::MAX));
    }

    #[test]
    fn get_ignores_edge_policy() {
        let mut b = board(3, 3, EdgePolicy::Wrap);
        b.set(2, 2, true);
        // (-1, -1) would wrap to (2, 2), but plain get never wraps.
        assert!(!b.get(-1, -1));
        assert!(b.get_wrapped(-1, -1));
    }

    // ── Wrap resolution ─────────────────────────────────────────

    #[test]
    fn wrap_reduces_by_modulo() {
        let mut b = board(5, 4, EdgePolicy::Wrap);
        b.set(3, 1, true);
        // 3 + 5k columns, 1 + 4k rows all land on the same cell.
        assert!(b.get_wrapped(8, 5));
        assert!(b.get_wrapped(-2, -3));
        assert!(b.get_wrapped(-7, 9));
    }

    #[test]
    fn bounded_get_wrapped_matches_get() {
        let mut b = board(4, 4, EdgePolicy::Bounded);
        b.set(0, 0, true);
        assert!(!b.get_wrapped(-1, -1));
        assert!(!b.get_wrapped(4, 0));
        assert!(b.get_wrapped(0, 0));
    }

    #[test]
    fn far_corner_is_diagonal_neighbour_under_wrap() {
        let mut b = board(6, 5, EdgePolicy::Wrap);
        b.set(5, 4, true);
        assert_eq!(b.live_neighbours(0, 0), 1);

        b.set_edge_policy(EdgePolicy::Bounded);
        assert_eq!(b.live_neighbours(0, 0), 0);
    }

    #[test]
    fn interior_counts_are_policy_independent() {
        for edge in [EdgePolicy::Bounded, EdgePolicy::Wrap] {
            let mut b = board(5, 5, EdgePolicy::Bounded);
            b.set_edge_policy(edge);
            b.set(1, 1, true);
            b.set(2, 1, true);
            b.set(3, 1, true);
            assert_eq!(b.live_neighbours(2, 2), 3, "edge={edge:?}");
        }
    }

    // ── Neighbourhood resolution ────────────────────────────────

    #[test]
    fn neighbours_interior_has_eight() {
        let b = board(5, 5, EdgePolicy::Bounded);
        assert_eq!(b.neighbours(2, 2).len(), 8);
    }

    #[test]
    fn neighbours_bounded_corner_has_three() {
        let b = board(5, 5, EdgePolicy::Bounded);
        let n = b.neighbours(0, 0);
        assert_eq!(n.len(), 3);
        assert!(n.contains(&(1, 0)));
        assert!(n.contains(&(0, 1)));
        assert!(n.contains(&(1, 1)));
    }

    #[test]
    fn neighbours_wrap_corner_has_eight() {
        let b = board(5, 5, EdgePolicy::Wrap);
        let n = b.neighbours(0, 0);
        assert_eq!(n.len(), 8);
        assert!(n.contains(&(4, 4))); // NW wraps on both axes
        assert!(n.contains(&(0, 4))); // N wraps
        assert!(n.contains(&(4, 0))); // W wraps
    }

    #[test]
    fn single_cell_wrap_neighbours_itself() {
        let mut b = board(1, 1, EdgePolicy::Wrap);
        let n = b.neighbours(0, 0);
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|&nb| nb == (0, 0)));

        // A live 1x1 torus cell therefore counts 8 live neighbors.
        b.set(0, 0, true);
        assert_eq!(b.live_neighbours(0, 0), 8);
    }

    #[test]
    fn single_cell_bounded_has_no_neighbours() {
        let mut b = board(1, 1, EdgePolicy::Bounded);
        b.set(0, 0, true);
        assert!(b.neighbours(0, 0).is_empty());
        assert_eq!(b.live_neighbours(0, 0), 0);
    }

    // ── Double buffering ────────────────────────────────────────

    #[test]
    fn set_next_is_invisible_until_swap() {
        let mut b = board(3, 3, EdgePolicy::Bounded);
        b.set_next(1, 1, true);
        assert!(!b.get(1, 1));
        assert_eq!(b.live_cells(), 0);

        // Complete the pass before swapping, as a tick would.
        for row in 0..3 {
            for col in 0..3 {
                if (col, row) != (1, 1) {
                    b.set_next(col, row, false);
                }
            }
        }
        b.swap();
        assert!(b.get(1, 1));
        assert_eq!(b.live_cells(), 1);
    }

    #[test]
    fn swap_alternates_roles() {
        let mut b = board(2, 2, EdgePolicy::Bounded);
        b.set(0, 0, true);
        b.swap();
        // The old write buffer (all dead) is now current.
        assert!(!b.get(0, 0));
        b.swap();
        // Roles restored; the original write is visible again.
        assert!(b.get(0, 0));
    }

    #[test]
    fn direct_writes_never_touch_the_write_buffer() {
        let mut b = board(3, 3, EdgePolicy::Bounded);
        b.set(0, 0, true);
        b.toggle(1, 1);
        b.clear();
        b.fill_with(|col, row| col == row);
        b.swap();
        // Nothing above wrote the other buffer.
        assert_eq!(b.live_cells(), 0);
    }

    #[test]
    fn clear_kills_current_buffer_only() {
        let mut b = board(3, 3, EdgePolicy::Bounded);
        b.fill_with(|_, _| true);
        b.set_next(2, 2, true);
        b.clear();
        assert_eq!(b.live_cells(), 0);
        // The pending write survives the clear.
        for row in 0..3 {
            for col in 0..3 {
                if (col, row) != (2, 2) {
                    b.set_next(col, row, false);
                }
            }
        }
        b.swap();
        assert!(b.get(2, 2));
    }

    // ── Direct mutation ─────────────────────────────────────────

    #[test]
    fn toggle_flips_and_reports() {
        let mut b = board(3, 3, EdgePolicy::Bounded);
        assert!(b.toggle(1, 2));
        assert!(b.get(1, 2));
        assert!(!b.toggle(1, 2));
        assert!(!b.get(1, 2));
    }

    #[test]
    fn fill_with_visits_row_major() {
        let mut b = board(3, 2, EdgePolicy::Bounded);
        let mut visited = Vec::new();
        b.fill_with(|col, row| {
            visited.push((col, row));
            false
        });
        assert_eq!(
            visited,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    // ── Frames ──────────────────────────────────────────────────

    #[test]
    fn frame_is_isolated_from_later_mutation() {
        let mut b = board(3, 3, EdgePolicy::Bounded);
        b.set(1, 1, true);
        let frame = b.frame(Generation(7));
        b.clear();

        assert_eq!(frame.generation(), Generation(7));
        assert!(frame.alive(1, 1));
        assert_eq!(frame.live_cells(), 1);
        assert_eq!(b.live_cells(), 0);
    }

    // ── Property tests ──────────────────────────────────────────

    use proptest::prelude::*;

    fn arb_edge() -> impl Strategy<Value = EdgePolicy> {
        prop_oneof![Just(EdgePolicy::Bounded), Just(EdgePolicy::Wrap)]
    }

    proptest! {
        #[test]
        fn get_never_panics(
            cols in 1u32..12,
            rows in 1u32..12,
            edge in arb_edge(),
            col in i32::MIN..=i32::MAX,
            row in i32::MIN..=i32::MAX,
        ) {
            let b = board(cols, rows, edge);
            prop_assert!(!b.get(col, row));
            prop_assert!(!b.get_wrapped(col, row));
        }

        #[test]
        fn wrapped_lookup_lands_in_range(
            cols in 1u32..12,
            rows in 1u32..12,
            col in -100i32..100,
            row in -100i32..100,
        ) {
            let mut b = board(cols, rows, EdgePolicy::Wrap);
            b.fill_with(|_, _| true);
            // Every cell is alive, so a resolved lookup must hit one.
            prop_assert!(b.get_wrapped(col, row));
        }

        #[test]
        fn wrapped_matches_plain_get_in_range(
            cols in 1u32..12,
            rows in 1u32..12,
            edge in arb_edge(),
            seed_col in 0u32..12,
            seed_row in 0u32..12,
        ) {
            let mut b = board(cols, rows, edge);
            let (sc, sr) = (seed_col % cols, seed_row % rows);
            b.set(sc, sr, true);
            for row in 0..rows as i32 {
                for col in 0..cols as i32 {
                    prop_assert_eq!(b.get(col, row), b.get_wrapped(col, row));
                }
            }
        }

        #[test]
        fn live_neighbours_agrees_with_neighbourhood(
            cols in 1u32..10,
            rows in 1u32..10,
            edge in arb_edge(),
            fill_seed in 0u64..1000,
            col in 0u32..10,
            row in 0u32..10,
        ) {
            let (col, row) = (col % cols, row % rows);
            let mut b = board(cols, rows, edge);
            // Cheap deterministic fill.
            b.fill_with(|c, r| {
                (u64::from(c * 31 + r * 17) ^ fill_seed).count_ones() % 2 == 0
            });
            let counted: u8 = b
                .neighbours(col, row)
                .iter()
                .map(|&(nc, nr)| u8::from(b.get(nc as i32, nr as i32)))
                .sum();
            prop_assert_eq!(b.live_neighbours(col, row), counted);
        }

        #[test]
        fn neighbours_symmetric(
            cols in 2u32..10,
            rows in 2u32..10,
            edge in arb_edge(),
            col in 0u32..10,
            row in 0u32..10,
        ) {
            let (col, row) = (col % cols, row % rows);
            let b = board(cols, rows, edge);
            for &(nc, nr) in &b.neighbours(col, row) {
                prop_assert!(
                    b.neighbours(nc, nr).contains(&(col, row)),
                    "({nc}, {nr}) does not list ({col}, {row}) back"
                );
            }
        }
    }
}
