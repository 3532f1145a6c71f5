//! Grid edge (boundary) policy.

/// How the grid treats neighbor lookups that fall off its edges.
///
/// This controls topology only: which cells count as neighbors of
/// boundary cells. Cell state itself is unaffected, and the policy
/// never applies to the center-cell read of a tick pass, only to the
/// eight neighbor probes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Out-of-range neighbor addresses are permanently dead. Corner
    /// cells see at most 3 live neighbors, edge cells at most 5.
    Bounded,
    /// Out-of-range indices wrap to the opposite side (torus). Every
    /// cell has a full Moore neighborhood; `(0, 0)` and the far corner
    /// are diagonal neighbors.
    Wrap,
}
