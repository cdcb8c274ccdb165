//! CPU-side scene tessellation
//!
//! Turns game state into flat triangle lists ready for a vertex buffer.
//! The windowing and GPU pipeline layer sits above this crate.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::scene_vertices;
pub use vertex::Vertex;
