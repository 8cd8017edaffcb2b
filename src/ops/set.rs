//! Set algebra over frame collections: bind, group_by, intersect, union.

use crate::error::AlgebraError;
use crate::ops::convert::{merge_into, to_mapping, to_sequence, IdentityMap};
use crate::ops::strategy::GroupingStrategy;

/// Concatenate collections in argument order without deduplication.
pub fn bind<F>(collections: impl IntoIterator<Item = Vec<F>>) -> Vec<F> {
    let mut group = Vec::new();
    for frames in collections {
        group.extend(frames);
    }
    group
}

/// Deduplicate frames by identity.
///
/// No two output frames share an identity under `strategy`; each output frame
/// is the left fold (in input order) of every input frame with its identity.
/// Output order is unspecified.
pub fn group_by<F, S>(strategy: &S, frames: Vec<F>) -> Result<Vec<F>, AlgebraError>
where
    S: GroupingStrategy<F> + ?Sized,
{
    Ok(to_sequence(to_mapping(strategy, frames)?))
}

/// Keep only identities present in every collection.
///
/// `first` is grouped, then narrowed by each collection of `rest` in turn.
/// When an identity of the running result first appears in the collection
/// being processed, the incoming frame is the merge `primary` and the running
/// result's frame is `secondary`; further frames of that identity in the same
/// collection are folded in as `secondary`. This is the reverse of
/// [`union`]'s argument order.
pub fn intersect<F, S>(
    strategy: &S,
    first: Vec<F>,
    rest: impl IntoIterator<Item = Vec<F>>,
) -> Result<Vec<F>, AlgebraError>
where
    S: GroupingStrategy<F> + ?Sized,
{
    let mut current = to_mapping(strategy, first)?;

    for frames in rest {
        let mut narrowed: IdentityMap<S::Key, F> = IdentityMap::new();

        for frame in frames {
            let key = strategy.identity(&frame);

            if let Some(existing) = narrowed.remove(&key) {
                let merged = strategy.merge(existing, frame)?;
                narrowed.insert(key, merged);
            } else if let Some(stored) = current.remove(&key) {
                let merged = strategy.merge(frame, stored)?;
                narrowed.insert(key, merged);
            }
        }

        current = narrowed;
    }

    Ok(to_sequence(current))
}

/// Keep every identity present in any collection.
///
/// Each identity appears once, carrying the fold of all frames that shared
/// it, processed collection by collection and in order within each. The
/// frame already held is always the merge `primary`.
pub fn union<F, S>(
    strategy: &S,
    first: Vec<F>,
    rest: impl IntoIterator<Item = Vec<F>>,
) -> Result<Vec<F>, AlgebraError>
where
    S: GroupingStrategy<F> + ?Sized,
{
    let mut map = to_mapping(strategy, first)?;
    for frames in rest {
        merge_into(strategy, &mut map, frames)?;
    }
    Ok(to_sequence(map))
}
