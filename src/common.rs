use std::hash::BuildHasherDefault;
use wyhash::WyHash;

/// Index into a [`crate::zdd::ZddManager`] node arena.
pub type NodeId = usize;

/// A ZDD variable id: the 64-bit path-dependent hash described by the
/// expression-lowering algebra. Distinct from `NodeId` even though both are
/// plain integers, so that confusing the two does not typecheck.
pub type Var = u64;

pub type HashMap<T, U> = std::collections::HashMap<T, U, BuildHasherDefault<WyHash>>;
pub type HashSet<T> = std::collections::HashSet<T, BuildHasherDefault<WyHash>>;
