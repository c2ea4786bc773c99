//! Key-value persistence for snapshots and drafts.

mod store_trait;
pub use store_trait::*;
pub(crate) use store_trait::{deserialize_value, serialize_value};

mod memory;
pub use memory::*;

#[cfg(feature = "file-store")]
mod file;
#[cfg(feature = "file-store")]
pub use file::*;
