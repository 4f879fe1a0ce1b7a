//! MAX7219 driver for daisy-chained 8x8 LED tile grids
//!
//! Turns a [`tessella_core::Canvas`] into the per-row command stream a
//! chain of MAX7219 row drivers expects, including the alternating
//! direction and mirrored orientation of zigzag-wired tile rows. The
//! driver is generic over [`tessella_hal::SpiDevice`], so it runs on
//! any platform HAL and against mocks in tests.

#![no_std]
#![deny(unsafe_code)]

mod bitrev;
mod driver;

pub use bitrev::reverse_bits;
pub use driver::{DisplayConfig, Error, Matrix, Wiring, MAX_INTENSITY};

// Re-export the core types a caller needs alongside the driver
pub use tessella_core::{Canvas, CanvasError, Font, Rotation, FONT_3X5, FONT_4X6};
