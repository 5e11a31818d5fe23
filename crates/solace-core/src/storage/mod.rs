//! Persistence for the journal's named slots.
//!
//! - **traits**: the `SlotStore` interface
//! - **file**: JSON-file-backed store with atomic writes
//! - **memory**: in-memory store for tests and embedding

mod file;
mod memory;
mod traits;

pub use file::FileSlotStore;
pub use memory::MemorySlotStore;
pub use traits::SlotStore;
