//! Board-agnostic pixel canvas and rasterization for tiled dot-matrix
//! displays
//!
//! This crate contains everything that does not touch a bus:
//!
//! - [`canvas::Canvas`] - one bit per pixel across a grid of 8x8 tiles,
//!   with rotation-aware addressing
//! - [`raster::Painter`] - integer-only line, rectangle, circle and
//!   triangle primitives
//! - [`glyph`] - character and string drawing from bitmap fonts
//! - [`font`] - the font format plus the two shipped fonts
//!
//! Serialization to actual driver chips lives in `tessella-max7219`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod canvas;
pub mod font;
pub mod glyph;
pub mod raster;

// Re-export key types at crate root for convenience
pub use canvas::{Canvas, CanvasError, Rotation};
pub use font::{Font, Glyph, FONT_3X5, FONT_4X6};
pub use raster::Painter;
