//! Core value types for animation construction.

use palette::Srgb;
use thiserror::Error;

/// Lowest legal pixel brightness.
pub const BRIGHTNESS_MIN: f32 = 0.0;

/// Highest legal pixel brightness.
pub const BRIGHTNESS_MAX: f32 = 1.0;

/// How many times an animation should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCount {
    /// Play a specific number of times. `Finite(0)` is legal and plays nothing.
    Finite(u32),

    /// Play indefinitely.
    Infinite,
}

impl PlayCount {
    /// Builds a play count from the wire-format field pair.
    ///
    /// Serialized animations carry a `loop_infinitely` flag next to an optional
    /// `max_plays` count, and exactly one of the two must be in effect.
    ///
    /// # Errors
    /// * `MaxPlaysWithInfiniteLoop` - both a finite count and infinite looping supplied
    /// * `MissingMaxPlays` - neither supplied (a finite bound needs a count)
    pub fn from_flags(
        loop_infinitely: bool,
        max_plays: Option<u32>,
    ) -> Result<Self, ValidationError> {
        match (loop_infinitely, max_plays) {
            (true, None) => Ok(PlayCount::Infinite),
            (false, Some(count)) => Ok(PlayCount::Finite(count)),
            (true, Some(count)) => Err(ValidationError::MaxPlaysWithInfiniteLoop { value: count }),
            (false, None) => Err(ValidationError::MissingMaxPlays),
        }
    }

    /// Returns true for `PlayCount::Infinite`.
    pub fn is_infinite(&self) -> bool {
        matches!(self, PlayCount::Infinite)
    }

    /// Returns the finite count, if any.
    pub fn max_plays(&self) -> Option<u32> {
        match self {
            PlayCount::Finite(count) => Some(*count),
            PlayCount::Infinite => None,
        }
    }
}

/// A single pixel within a frame, at one physical strand position.
///
/// Holds an 8-bit sRGB color and a brightness factor in the range 0.0-1.0.
/// Brightness is validated at construction; the color channels are bounded
/// to 0-255 by `Srgb<u8>` itself. Once built, a pixel never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    color: Srgb<u8>,
    brightness: f32,
}

impl Pixel {
    /// Creates a validated pixel.
    ///
    /// # Errors
    /// * `Brightness` - brightness outside 0.0-1.0 inclusive
    pub fn new(color: Srgb<u8>, brightness: f32) -> Result<Self, ValidationError> {
        if !(BRIGHTNESS_MIN..=BRIGHTNESS_MAX).contains(&brightness) {
            return Err(ValidationError::Brightness { value: brightness });
        }

        Ok(Self { color, brightness })
    }

    /// Creates a validated pixel from individual color channels.
    pub fn from_channels(
        red: u8,
        green: u8,
        blue: u8,
        brightness: f32,
    ) -> Result<Self, ValidationError> {
        Self::new(Srgb::new(red, green, blue), brightness)
    }

    /// Returns the pixel's color.
    pub fn color(&self) -> Srgb<u8> {
        self.color
    }

    /// Returns the pixel's brightness (0.0-1.0).
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Returns the red channel.
    pub fn red(&self) -> u8 {
        self.color.red
    }

    /// Returns the green channel.
    pub fn green(&self) -> u8 {
        self.color.green
    }

    /// Returns the blue channel.
    pub fn blue(&self) -> u8 {
        self.color.blue
    }
}

/// Construction-time invariant violations.
///
/// Each variant names the offending field, the value supplied, and the
/// constraint it broke. Validation happens exactly once, at construction;
/// there is no later mutation path that could bypass it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    /// Pixel brightness outside the closed interval [0.0, 1.0].
    #[error(
        "brightness must be between {BRIGHTNESS_MIN} and {BRIGHTNESS_MAX}, inclusive; \
         this pixel's brightness was set to {value}"
    )]
    Brightness {
        /// The rejected brightness.
        value: f32,
    },

    /// Frame display duration below one millisecond.
    #[error("display_ms must be at least 1; this frame's display_ms was set to {value}")]
    DisplayMs {
        /// The rejected duration.
        value: u32,
    },

    /// Frame with no pixels.
    #[error("a frame must contain at least one pixel")]
    EmptyFrame,

    /// Animation with no frames.
    #[error("an animation must contain at least one frame")]
    EmptyAnimation,

    /// A finite play count supplied together with infinite looping.
    #[error("max_plays must be unset when loop_infinitely is true; max_plays was set to {value}")]
    MaxPlaysWithInfiniteLoop {
        /// The rejected count.
        value: u32,
    },

    /// Neither infinite looping nor a finite play count supplied.
    #[error("max_plays is required when loop_infinitely is false")]
    MissingMaxPlays,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_bounds_are_inclusive() {
        assert!(Pixel::from_channels(10, 20, 30, 0.0).is_ok());
        assert!(Pixel::from_channels(10, 20, 30, 1.0).is_ok());
        assert!(Pixel::from_channels(10, 20, 30, 0.5).is_ok());
    }

    #[test]
    fn brightness_outside_bounds_is_rejected() {
        assert_eq!(
            Pixel::from_channels(0, 0, 0, -0.001),
            Err(ValidationError::Brightness { value: -0.001 })
        );
        assert_eq!(
            Pixel::from_channels(0, 0, 0, 1.001),
            Err(ValidationError::Brightness { value: 1.001 })
        );
        assert!(Pixel::from_channels(0, 0, 0, f32::NAN).is_err());
    }

    #[test]
    fn channel_boundary_values_are_legal() {
        let pixel = Pixel::from_channels(0, 255, 0, 1.0).unwrap();
        assert_eq!(pixel.red(), 0);
        assert_eq!(pixel.green(), 255);
        assert_eq!(pixel.blue(), 0);
    }

    #[test]
    fn play_count_from_flags_accepts_exactly_one_policy() {
        assert_eq!(PlayCount::from_flags(true, None), Ok(PlayCount::Infinite));
        assert_eq!(
            PlayCount::from_flags(false, Some(3)),
            Ok(PlayCount::Finite(3))
        );
        assert_eq!(
            PlayCount::from_flags(true, Some(3)),
            Err(ValidationError::MaxPlaysWithInfiniteLoop { value: 3 })
        );
        assert_eq!(
            PlayCount::from_flags(false, None),
            Err(ValidationError::MissingMaxPlays)
        );
    }

    #[test]
    fn zero_max_plays_is_legal() {
        assert_eq!(
            PlayCount::from_flags(false, Some(0)),
            Ok(PlayCount::Finite(0))
        );
    }
}
