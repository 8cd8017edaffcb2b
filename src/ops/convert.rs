//! Conversion between frame sequences and identity mappings.

use crate::error::AlgebraError;
use crate::ops::strategy::GroupingStrategy;
use std::collections::HashMap;

/// Transient map from identity to the current merged frame
pub type IdentityMap<K, F> = HashMap<K, F>;

/// Build the identity mapping for a sequence of frames.
///
/// Frames are processed in input order. On a collision the frame already in
/// the map is the `primary` argument to [`GroupingStrategy::merge`] and the
/// incoming frame is `secondary`, so each entry is the left fold of every
/// frame sharing its identity.
pub fn to_mapping<F, S>(
    strategy: &S,
    frames: impl IntoIterator<Item = F>,
) -> Result<IdentityMap<S::Key, F>, AlgebraError>
where
    S: GroupingStrategy<F> + ?Sized,
{
    let mut map = IdentityMap::new();
    merge_into(strategy, &mut map, frames)?;
    Ok(map)
}

/// Fold frames into an existing mapping with stored-as-primary semantics.
pub(crate) fn merge_into<F, S>(
    strategy: &S,
    map: &mut IdentityMap<S::Key, F>,
    frames: impl IntoIterator<Item = F>,
) -> Result<(), AlgebraError>
where
    S: GroupingStrategy<F> + ?Sized,
{
    for frame in frames {
        let key = strategy.identity(&frame);
        let merged = match map.remove(&key) {
            Some(stored) => strategy.merge(stored, frame)?,
            None => frame,
        };
        map.insert(key, merged);
    }
    Ok(())
}

/// Flatten a mapping back into a sequence.
///
/// The output order follows map iteration and is unrelated to the order the
/// frames were originally supplied in. Apply [`crate::ops::order`] when a
/// deterministic order is needed.
pub fn to_sequence<K, F>(map: IdentityMap<K, F>) -> Vec<F> {
    map.into_values().collect()
}
