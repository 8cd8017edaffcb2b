//! Identity/merge capability used by every identity-aware operation.

use crate::error::AlgebraError;
use std::fmt::Debug;
use std::hash::Hash;

/// Grouping strategy: decides when two frames are the same record and how
/// to fold them together.
///
/// Implementations must be pure. `identity` is total and deterministic;
/// `merge` is only called with frames that share an identity and must return
/// [`AlgebraError::IdentityMismatch`] otherwise. `merge` is not required to be
/// commutative, so argument order is part of each operation's contract.
///
/// A strategy is passed by shared reference into every operation and never
/// stored globally; the same value can be used from several threads when it
/// is `Sync`.
pub trait GroupingStrategy<F> {
    type Key: Eq + Hash + Clone + Debug;

    /// Short name used in errors and logs
    fn name(&self) -> &'static str;

    fn identity(&self, frame: &F) -> Self::Key;

    fn merge(&self, primary: F, secondary: F) -> Result<F, AlgebraError>;
}

/// Build the mismatch error for a strategy whose keys disagree.
pub fn identity_mismatch<K: Debug>(strategy: &'static str, primary: &K, secondary: &K) -> AlgebraError {
    AlgebraError::IdentityMismatch {
        strategy,
        primary: format!("{:?}", primary),
        secondary: format!("{:?}", secondary),
    }
}
