//! Existence checks and idempotent lifecycle operations for fsinspect.
//!
//! All operations are synchronous and can be repeated safely:
//!
//! - [`file_exists`] / [`directory_exists`] never fail; anything that cannot
//!   be inspected counts as absent.
//! - [`ensure_directory_exists`] creates a missing directory (and its
//!   ancestors) with mode `0755` and does nothing if the path exists.
//! - [`remove_file_if_exists`] / [`remove_directory_if_exists`] do nothing
//!   when the target is already gone.
//!
//! Removal is not transactional. A recursive removal that fails partway
//! returns the first error and leaves whatever was not yet deleted.

mod lifecycle;
mod predicates;

pub use lifecycle::{
    ensure_directory_exists, remove_directory_if_exists, remove_file_if_exists, DIRECTORY_MODE,
};
pub use predicates::{directory_exists, file_exists};

pub use fsinspect_core::FsError;
