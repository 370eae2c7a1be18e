//! Browser-backed implementations of the core seams.

pub mod storage;
pub mod timer;
pub mod wallet;

pub use storage::LocalStorage;
pub use timer::GlooSleeper;
