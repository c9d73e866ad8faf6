//! Position-based Verlet simulation for rope-like appendages.
//!
//! `lash` simulates whips, tentacles, tethers, and lightning arcs as a
//! chain of 2D particles relaxed by iterative distance constraints. Each
//! frame produces an ordered sequence of point positions for an external
//! renderer to draw; the crate itself renders nothing.
//!
//! # Features
//!
//! - **Verlet integration**: velocity is implicit in the position history
//! - **Constraint relaxation**: Gauss-Seidel distance passes with tunable
//!   stiffness and iteration count
//! - **Anchoring**: either endpoint can be externally driven
//! - **Impulses**: per-particle, global, and radial explosion forces
//! - **Tile collision**: optional push-out against a solid-cell predicate
//! - **Presets**: pre-tuned whip, tentacle, rope, and lightning chains
//! - **Observable**: monitor simulation steps via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod config;
pub mod chain;
pub mod collision;
pub mod presets;
pub mod observer;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use config::ChainConfig;
pub use chain::Chain;
pub use collision::TileGrid;
pub use observer::{StepObserver, NoOpStepObserver};
