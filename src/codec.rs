//! Serialization adapters for animations.
//!
//! Two interchangeable codecs share one logical schema:
//!
//! * [`JsonCodec`] - human-readable text with field names verbatim on the
//!   wire (`frames`, `loop_infinitely`, `pause_between_play_ms`,
//!   `max_plays` / `display_ms`, `pixels` / `brightness`, `red`, `green`,
//!   `blue`).
//! * [`BinaryCodec`] - compact binary via bincode's standard configuration
//!   (little-endian, variable-width integers). No field names on the wire;
//!   field order is fixed to the declaration order above.
//!
//! Both decode paths distinguish malformed bytes ([`DecodeError::MalformedJson`],
//! [`DecodeError::MalformedBinary`]) from well-formed input whose values break
//! an animation invariant ([`DecodeError::Validation`]). Either way, no partial
//! animation is ever returned. Color channels outside 0-255 fail structurally,
//! because the wire schema carries them as `u8`.

use crate::animation::{Animation, Frame};
use crate::types::{Pixel, PlayCount, ValidationError};
use bincode::error::DecodeError as BincodeDecodeError;
use bincode::{Decode, Encode};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from decoding a serialized animation.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input is not structurally valid JSON for the animation schema.
    #[error("malformed json animation: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Input is not structurally valid binary for the animation schema.
    #[error("malformed binary animation: {0}")]
    MalformedBinary(#[from] BincodeDecodeError),

    /// Input parsed cleanly but its values violate an animation invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Converts animations to and from a serialized byte representation.
///
/// Implementations must round-trip: `decode(encode(a))` reconstructs an
/// animation equal to `a` in every field.
pub trait AnimationCodec {
    /// Parses a serialized animation, validating it on the way in.
    fn decode(&self, input: &[u8]) -> Result<Animation, DecodeError>;

    /// Serializes an animation.
    ///
    /// Infallible: every constructible [`Animation`] already satisfies the
    /// invariants the wire schema can express.
    fn encode(&self, animation: &Animation) -> Vec<u8>;
}

#[derive(Debug, Serialize, Deserialize, Encode, Decode)]
struct PixelRepr {
    brightness: f32,
    red: u8,
    green: u8,
    blue: u8,
}

#[derive(Debug, Serialize, Deserialize, Encode, Decode)]
struct FrameRepr {
    display_ms: u32,
    pixels: Vec<PixelRepr>,
}

#[derive(Debug, Serialize, Deserialize, Encode, Decode)]
struct AnimationRepr {
    frames: Vec<FrameRepr>,
    loop_infinitely: bool,
    pause_between_play_ms: u32,
    #[serde(default)]
    max_plays: Option<u32>,
}

impl From<&Animation> for AnimationRepr {
    fn from(animation: &Animation) -> Self {
        Self {
            frames: animation
                .frames()
                .iter()
                .map(|frame| FrameRepr {
                    display_ms: frame.display_ms(),
                    pixels: frame
                        .pixels()
                        .iter()
                        .map(|pixel| PixelRepr {
                            brightness: pixel.brightness(),
                            red: pixel.red(),
                            green: pixel.green(),
                            blue: pixel.blue(),
                        })
                        .collect(),
                })
                .collect(),
            loop_infinitely: animation.play_count().is_infinite(),
            pause_between_play_ms: animation.pause_between_play_ms(),
            max_plays: animation.play_count().max_plays(),
        }
    }
}

impl TryFrom<AnimationRepr> for Animation {
    type Error = ValidationError;

    fn try_from(repr: AnimationRepr) -> Result<Self, Self::Error> {
        let play_count = PlayCount::from_flags(repr.loop_infinitely, repr.max_plays)?;

        let frames = repr
            .frames
            .into_iter()
            .map(|frame| {
                let pixels = frame
                    .pixels
                    .into_iter()
                    .map(|pixel| {
                        Pixel::from_channels(pixel.red, pixel.green, pixel.blue, pixel.brightness)
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Frame::new(frame.display_ms, pixels)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let animation = Animation::new(frames, play_count, repr.pause_between_play_ms)?;
        debug!(
            "decoded animation: {} frame(s), {} ms per pass",
            animation.frame_count(),
            animation.frame_total_time_ms(),
        );
        Ok(animation)
    }
}

/// Reads and writes animations as JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl AnimationCodec for JsonCodec {
    fn decode(&self, input: &[u8]) -> Result<Animation, DecodeError> {
        let repr: AnimationRepr = serde_json::from_slice(input)?;
        Ok(Animation::try_from(repr)?)
    }

    fn encode(&self, animation: &Animation) -> Vec<u8> {
        serde_json::to_vec(&AnimationRepr::from(animation))
            .expect("serializing a valid animation cannot fail")
    }
}

/// Reads and writes animations in a compact binary form.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl AnimationCodec for BinaryCodec {
    fn decode(&self, input: &[u8]) -> Result<Animation, DecodeError> {
        let (repr, _) =
            bincode::decode_from_slice::<AnimationRepr, _>(input, bincode::config::standard())?;
        Ok(Animation::try_from(repr)?)
    }

    fn encode(&self, animation: &Animation) -> Vec<u8> {
        bincode::encode_to_vec(AnimationRepr::from(animation), bincode::config::standard())
            .expect("serializing a valid animation cannot fail")
    }
}
