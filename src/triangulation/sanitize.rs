use tracing::trace;

use super::shape::SideRef;

/// Drops walls that cannot bound floor area.
///
/// Walls whose endpoints are the same vertex are removed. A wall sharing its
/// undirected segment with any other remaining wall is removed together with
/// all of its matches: the sector lies on both sides of that segment.
pub(crate) fn sanitize(walls: &[SideRef]) -> Vec<SideRef> {
    let mut pending: Vec<SideRef> = walls
        .iter()
        .filter(|wall| wall.left != wall.right)
        .copied()
        .collect();

    let mut i = 0;
    while i < pending.len() {
        let wall = pending[i];
        if pending[i + 1..].iter().any(|other| other.same_segment(&wall)) {
            let before = pending.len();
            pending.retain(|other| !other.same_segment(&wall));
            trace!(wall = wall.index, removed = before - pending.len(), "dropping shared segment");
        } else {
            i += 1;
        }
    }

    pending
}
