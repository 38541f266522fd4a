//! Undo/redo history over board snapshots.

pub mod manager;

pub use manager::HistoryManager;
