//! Headline Engine — procedural satirical-headline generation.
//!
//! Composes fixed content pools (subjects across three categories,
//! actions, places) into templated satirical headlines, keeps a
//! timestamped session history, and drives an optional auto-generation
//! timer. The `tui` module provides the terminal newsroom desk built on
//! top of the engine.

pub mod core;
pub mod schema;
pub mod tui;
