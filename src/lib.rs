pub mod core {
	pub mod engine;
	pub mod words;
}

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;

// Re-export for convenience
pub use crate::core::engine::{run_reveal, RevealError, RevealEvent, RevealStream, Session};
pub use crate::core::words::{WordEntry, WordSet, WordStoreError};
