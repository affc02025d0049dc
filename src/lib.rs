#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Pixel`**: A single validated color + brightness sample
//! - **`Frame`**: An ordered list of pixels shown for a fixed duration
//! - **`Animation`**: An ordered list of frames plus loop and pause policy
//! - **`PlayCount`**: How many times to play (`Finite(n)` or `Infinite`)
//! - **`StrandPlayer`**: Walks an animation's frames and loops on one strand
//! - **`PixelSink`**: Trait to implement for your LED driver
//! - **`DelaySource`**: Trait to implement for your timing system
//! - **`AnimationCodec`**: Serialization boundary, with JSON and binary codecs
//!
//! Colors are `palette::Srgb<u8>` with a separate 0.0-1.0 brightness factor.
//! When implementing [`PixelSink`] for your hardware, map these onto your
//! device's native format.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animation;
pub mod codec;
pub mod delay;
pub mod player;
pub mod types;

pub use animation::{Animation, AnimationBuilder, Frame, MIN_DISPLAY_MS};
pub use codec::{AnimationCodec, BinaryCodec, DecodeError, JsonCodec};
pub use delay::{DelaySource, ThreadDelay};
pub use player::{PixelSink, PlayerError, PlayerState, StrandPlayer};
pub use types::{BRIGHTNESS_MAX, BRIGHTNESS_MIN, Pixel, PlayCount, ValidationError};

pub const COLOR_OFF: Srgb<u8> = Srgb::new(0, 0, 0);
