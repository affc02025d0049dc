use crate::types::{Pixel, PlayCount, ValidationError};

/// Shortest legal frame display duration, in milliseconds.
pub const MIN_DISPLAY_MS: u32 = 1;

/// A single frame of animation: one color+brightness sample per strand
/// position, held for a fixed duration.
///
/// Pixel order is physical strand order. A frame exclusively owns its
/// pixels and neither can change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    display_ms: u32,
    pixels: Vec<Pixel>,
}

impl Frame {
    /// Creates a validated frame.
    ///
    /// # Errors
    /// * `DisplayMs` - duration below [`MIN_DISPLAY_MS`]
    /// * `EmptyFrame` - no pixels supplied
    pub fn new(display_ms: u32, pixels: Vec<Pixel>) -> Result<Self, ValidationError> {
        if display_ms < MIN_DISPLAY_MS {
            return Err(ValidationError::DisplayMs { value: display_ms });
        }

        if pixels.is_empty() {
            return Err(ValidationError::EmptyFrame);
        }

        Ok(Self { display_ms, pixels })
    }

    /// Returns how long this frame should be displayed, in milliseconds.
    pub fn display_ms(&self) -> u32 {
        self.display_ms
    }

    /// Returns the pixels in strand order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Returns the number of pixels in this frame.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}

/// A complete animation: ordered frames plus loop and pause policy.
///
/// Built either directly from parts, through [`Animation::builder`], or by
/// decoding a serialized representation ([`crate::codec`]). Valid by
/// construction and immutable after; the player only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<Frame>,
    play_count: PlayCount,
    pause_between_play_ms: u32,
}

impl Animation {
    /// Creates a validated animation.
    ///
    /// # Errors
    /// * `EmptyAnimation` - no frames supplied
    pub fn new(
        frames: Vec<Frame>,
        play_count: PlayCount,
        pause_between_play_ms: u32,
    ) -> Result<Self, ValidationError> {
        if frames.is_empty() {
            return Err(ValidationError::EmptyAnimation);
        }

        Ok(Self {
            frames,
            play_count,
            pause_between_play_ms,
        })
    }

    /// Creates a new animation builder.
    pub fn builder() -> AnimationBuilder {
        AnimationBuilder::new()
    }

    /// Returns the frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the number of frames in this animation.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns the play count policy.
    pub fn play_count(&self) -> PlayCount {
        self.play_count
    }

    /// Returns the pause applied after each full pass over the frames,
    /// in milliseconds.
    pub fn pause_between_play_ms(&self) -> u32 {
        self.pause_between_play_ms
    }

    /// Sums the display duration of every frame, in milliseconds.
    ///
    /// Recomputed on each call; covers a single pass, without the
    /// inter-play pause.
    pub fn frame_total_time_ms(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.display_ms)).sum()
    }
}

/// Builder for constructing validated animations.
#[derive(Debug, Default)]
pub struct AnimationBuilder {
    frames: Vec<Frame>,
    play_count: Option<PlayCount>,
    pause_between_play_ms: u32,
}

impl AnimationBuilder {
    /// Creates a new empty animation builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame to the animation.
    pub fn frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Sets how many times the animation should play.
    ///
    /// Default is `PlayCount::Finite(1)`.
    pub fn play_count(mut self, count: PlayCount) -> Self {
        self.play_count = Some(count);
        self
    }

    /// Sets the pause applied after each full pass, in milliseconds.
    ///
    /// Default is no pause.
    pub fn pause_between_play_ms(mut self, millis: u32) -> Self {
        self.pause_between_play_ms = millis;
        self
    }

    /// Builds and validates the animation.
    ///
    /// # Errors
    /// * `EmptyAnimation` - no frames were added
    pub fn build(self) -> Result<Animation, ValidationError> {
        Animation::new(
            self.frames,
            self.play_count.unwrap_or(PlayCount::Finite(1)),
            self.pause_between_play_ms,
        )
    }
}
