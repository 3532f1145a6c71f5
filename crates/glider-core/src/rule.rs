//! The Life rule table.

/// Computes a cell's next state from its current state and live Moore
/// neighbor count.
///
/// The full rule table, written out case by case:
///
/// | current | neighbors | next  |                  |
/// |---------|-----------|-------|------------------|
/// | alive   | 0 or 1    | dead  | under-population |
/// | alive   | 2 or 3    | alive | survival         |
/// | alive   | 4 or more | dead  | overcrowding     |
/// | dead    | exactly 3 | alive | reproduction     |
/// | dead    | not 3     | dead  | stays dead       |
///
/// Each case has its own match arm. Collapsing arms that coincide on a
/// few inputs invites silent divergence when someone later adjusts one
/// boundary, so the table stays branch-complete.
///
/// Pure and total: no side effects, deterministic for all inputs.
/// Neighbor counts above 8 cannot occur on a Moore neighborhood but are
/// still mapped (they fall into the overcrowding / stays-dead arms).
///
/// # Examples
///
/// ```
/// use glider_core::rule::next_state;
///
/// assert!(!next_state(true, 1));  // isolation kills
/// assert!(next_state(true, 2));   // survives
/// assert!(next_state(false, 3));  // birth
/// assert!(!next_state(false, 2)); // stays dead
/// ```
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    match (alive, live_neighbours) {
        (true, 0..=1) => false, // under-population
        (true, 2..=3) => true,  // survival
        (true, _) => false,     // overcrowding
        (false, 3) => true,     // reproduction
        (false, _) => false,    // stays dead
    }
}
