//! Pixel-strand playback with state management and timing control.
//!
//! Provides [`StrandPlayer`] which walks a loaded [`Animation`] frame by
//! frame, writing each pixel to a [`PixelSink`] and blocking on a
//! [`DelaySource`] between frames. Also defines the [`PixelSink`] trait for
//! hardware abstraction.

use crate::animation::Animation;
use crate::delay::DelaySource;
use crate::types::PlayCount;
use log::{debug, trace};
use palette::Srgb;
use thiserror::Error;

/// Trait for abstracting pixel-strand hardware.
///
/// Implement this for your LED driver (SPI, PWM, a vendor library's
/// pixel buffer, etc.) to let the player render through it. Handle any
/// hardware errors internally - these methods cannot fail.
pub trait PixelSink {
    /// Stages a color+brightness value at the given strand position.
    ///
    /// Brightness is in the range 0.0-1.0. Staged values become visible on
    /// the next [`flush`](PixelSink::flush).
    fn set(&mut self, index: usize, color: Srgb<u8>, brightness: f32);

    /// Displays everything staged since the last flush.
    fn flush(&mut self);

    /// Sets every strand position to black at zero brightness and displays
    /// the result, leaving the strand dark.
    fn clear_and_flush(&mut self);
}

/// The current state of a strand player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// No animation loaded.
    Idle,
    /// Animation loaded and ready to play.
    Loaded,
    /// Animation actively rendering. Only observable from within a
    /// [`StrandPlayer::play`] call, which blocks until playback ends.
    Playing,
    /// Playback finished and the strand cleared. The animation stays
    /// loaded; playing again starts over from a fresh loop count.
    Finished,
}

/// Errors from player operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// `play` was called before any animation was loaded.
    #[error("no animation loaded; call load() before play()")]
    NoAnimationLoaded,
}

/// Plays animations on a single pixel strand.
///
/// The player owns its sink and delay source and executes one animation at
/// a time. Playback is a plain blocking loop: the only suspension points
/// are the per-frame and inter-play delays, and `&mut self` on
/// [`play`](StrandPlayer::play) rules out concurrent loads or sink writers
/// for its whole duration. One player per strand; independent players may
/// coexist when independent sinks exist.
///
/// Frames shorter than the physical strand leave the positions beyond
/// their length untouched on the sink.
pub struct StrandPlayer<S: PixelSink, D: DelaySource> {
    sink: S,
    delay: D,
    animation: Option<Animation>,
    state: PlayerState,
}

impl<S: PixelSink, D: DelaySource> StrandPlayer<S, D> {
    /// Creates a new idle player.
    pub fn new(sink: S, delay: D) -> Self {
        Self {
            sink,
            delay,
            animation: None,
            state: PlayerState::Idle,
        }
    }

    /// Loads an animation to play. Can be called from any state.
    ///
    /// Replaces any previously loaded animation and transitions to
    /// `Loaded`. The animation is already valid by construction, so no
    /// further checks run here.
    pub fn load(&mut self, animation: Animation) {
        debug!(
            "loaded animation: {} frame(s), {} ms per pass, {:?}",
            animation.frame_count(),
            animation.frame_total_time_ms(),
            animation.play_count(),
        );
        self.animation = Some(animation);
        self.state = PlayerState::Loaded;
    }

    /// Plays the loaded animation to completion.
    ///
    /// Blocks until every pass has rendered, then clears the strand. An
    /// animation with `PlayCount::Infinite` never completes on its own;
    /// use [`play_until`](StrandPlayer::play_until) to keep it
    /// interruptible.
    ///
    /// # Errors
    /// * `NoAnimationLoaded` - `load` was never called; nothing is rendered
    pub fn play(&mut self) -> Result<(), PlayerError> {
        self.play_until(|| false)
    }

    /// Plays the loaded animation until completion or cancellation.
    ///
    /// `cancelled` is evaluated once per pass boundary, after the pass and
    /// its trailing pause; when it returns true, playback stops before the
    /// next pass begins. This cooperative check is the only way to end an
    /// infinite animation, and is an addition over the original player,
    /// which could only be interrupted by killing the process.
    ///
    /// One pass writes every pixel of every frame to the sink in order,
    /// flushing and then holding each frame for its `display_ms`. After the
    /// pass comes the animation's inter-play pause. A `Finite(n)` animation
    /// stops after `n` passes; `Finite(0)` renders nothing. However
    /// playback ends, the strand is cleared and the player lands in
    /// `Finished`, from where `play` may be called again to start over.
    ///
    /// # Errors
    /// * `NoAnimationLoaded` - `load` was never called; nothing is rendered
    pub fn play_until<C>(&mut self, mut cancelled: C) -> Result<(), PlayerError>
    where
        C: FnMut() -> bool,
    {
        let Self {
            sink,
            delay,
            animation,
            state,
        } = self;
        let animation = animation.as_ref().ok_or(PlayerError::NoAnimationLoaded)?;

        *state = PlayerState::Playing;
        debug!("playback started: {:?}", animation.play_count());

        let mut loop_count: u32 = 0;
        loop {
            if let PlayCount::Finite(max_plays) = animation.play_count() {
                if loop_count >= max_plays {
                    break;
                }
            }

            for (frame_idx, frame) in animation.frames().iter().enumerate() {
                trace!(
                    "frame {}/{}: {} pixel(s), hold {} ms",
                    frame_idx + 1,
                    animation.frame_count(),
                    frame.pixel_count(),
                    frame.display_ms(),
                );

                for (pixel_idx, pixel) in frame.pixels().iter().enumerate() {
                    sink.set(pixel_idx, pixel.color(), pixel.brightness());
                }

                sink.flush();
                delay.wait_ms(u64::from(frame.display_ms()));
            }

            delay.wait_ms(u64::from(animation.pause_between_play_ms()));

            if !animation.play_count().is_infinite() {
                loop_count += 1;
            }

            if cancelled() {
                debug!("playback cancelled after {loop_count} completed pass(es)");
                break;
            }
        }

        sink.clear_and_flush();
        *state = PlayerState::Finished;
        debug!("playback finished, strand cleared");
        Ok(())
    }

    /// Returns the current state of the player.
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Returns a reference to the currently loaded animation, if any.
    pub fn current_animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Consumes the player and returns its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
