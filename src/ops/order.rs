//! Multi-key stable ordering.

use std::cmp::Ordering;
use std::fmt;

type Comparator<'a, F> = Box<dyn Fn(&F, &F) -> Ordering + 'a>;

/// One link of a lexicographic comparator chain
pub struct OrderKey<'a, F> {
    compare: Comparator<'a, F>,
}

impl<'a, F> OrderKey<'a, F> {
    /// Order by an extracted key, smallest first.
    pub fn ascending<K: Ord>(key: impl Fn(&F) -> K + 'a) -> Self {
        Self {
            compare: Box::new(move |a, b| key(a).cmp(&key(b))),
        }
    }

    /// Order by an extracted key, largest first.
    pub fn descending<K: Ord>(key: impl Fn(&F) -> K + 'a) -> Self {
        Self {
            compare: Box::new(move |a, b| key(b).cmp(&key(a))),
        }
    }

    /// Order by a floating point key using IEEE total ordering.
    pub fn ascending_f64(key: impl Fn(&F) -> f64 + 'a) -> Self {
        Self {
            compare: Box::new(move |a, b| key(a).total_cmp(&key(b))),
        }
    }

    pub fn descending_f64(key: impl Fn(&F) -> f64 + 'a) -> Self {
        Self {
            compare: Box::new(move |a, b| key(b).total_cmp(&key(a))),
        }
    }

    /// Order with an arbitrary comparator.
    pub fn by(compare: impl Fn(&F, &F) -> Ordering + 'a) -> Self {
        Self {
            compare: Box::new(compare),
        }
    }

    pub fn compare(&self, a: &F, b: &F) -> Ordering {
        (self.compare)(a, b)
    }
}

impl<F> fmt::Debug for OrderKey<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderKey").finish_non_exhaustive()
    }
}

/// Stable sort by a chain of keys.
///
/// The first key is primary; each later key only breaks ties left by the
/// keys before it. Frames equal on every key keep their input order. The
/// input buffer is reordered and returned.
pub fn order<F>(mut frames: Vec<F>, keys: &[OrderKey<'_, F>]) -> Vec<F> {
    if keys.is_empty() {
        return frames;
    }

    frames.sort_by(|a, b| {
        keys.iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    frames
}
