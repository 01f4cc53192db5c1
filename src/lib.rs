//! Flappy ASCII (workspace facade crate).
//!
//! This package exposes `flappy_ascii::{core,engine,input,store,term,types}`
//! while the implementation lives in dedicated crates under `crates/`, plus
//! the environment [`config`] used by the binary.

pub mod config;

pub use flappy_ascii_core as core;
pub use flappy_ascii_engine as engine;
pub use flappy_ascii_input as input;
pub use flappy_ascii_store as store;
pub use flappy_ascii_term as term;
pub use flappy_ascii_types as types;
