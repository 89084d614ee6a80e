//! Deterministic procedural artworks.
//!
//! A [`GenerationRequest`] names one of fifteen [`Style`]s, an optional seed, and optional
//! parameters. [`Engine::generate`] resolves it, draws onto a fresh square canvas with a random
//! stream seeded from the request, and encodes the result as PNG. The same request always yields
//! the same bytes.

pub mod art;
pub mod canvas;
pub mod color;
pub mod config;
pub mod encode;
pub mod engine;
pub mod error;
pub mod math;
pub mod params;
pub mod rand;
pub mod style;

pub use color::Rgb;
pub use config::Config;
pub use engine::{Artifact, Engine, Rendering};
pub use error::{GenerationError, Result};
pub use params::{GenerationRequest, Parameters, SeedSource};
pub use style::Style;
