use std::cmp::Ordering;

/// Returns true if a dense-matrix entry denotes an edge.  Both `0` and
/// `+inf` mean "no edge".
pub fn is_edge_weight(weight: f64) -> bool {
    weight != 0.0 && weight.is_finite()
}

/// A weight paired with a payload, ordered so that a `BinaryHeap` pops the
/// lowest weight first.  Ties are broken by the smallest payload.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MinScored<T>(pub f64, pub T);

impl<T: Ord> Ord for MinScored<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .total_cmp(&self.0)
            .then_with(|| other.1.cmp(&self.1))
    }
}

impl<T: Ord> PartialOrd for MinScored<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> PartialEq for MinScored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for MinScored<T> {}
