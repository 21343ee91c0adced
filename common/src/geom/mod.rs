pub mod coord;
pub mod hex;
pub mod layout;

/// Upper bound on up-front `Vec` reservations; larger outputs grow on demand.
pub(crate) const PREALLOC_LIMIT: usize = 1 << 16;
