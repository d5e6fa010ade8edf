//! Core functionality for directory walking and documentation extraction

pub mod walker;

pub use walker::DocWalker;
