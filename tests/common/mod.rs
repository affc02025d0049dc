//! Shared test infrastructure for strand-player integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use std::cell::RefCell;
use std::rc::Rc;
use strand_player::{DelaySource, Frame, Pixel, PixelSink};

// ============================================================================
// Mock Sink
// ============================================================================

/// One recorded call against the mock sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SinkCall {
    Set {
        index: usize,
        color: Srgb<u8>,
        brightness: f32,
    },
    Flush,
    ClearAndFlush,
}

/// Mock sink that records every call for later inspection.
///
/// Clones share the same call log, so tests can hand one clone to the
/// player and keep another to assert against.
#[derive(Clone, Default)]
pub struct MockSink {
    calls: Rc<RefCell<Vec<SinkCall>>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.borrow().clone()
    }

    pub fn set_count(&self) -> usize {
        self.count(|call| matches!(call, SinkCall::Set { .. }))
    }

    pub fn flush_count(&self) -> usize {
        self.count(|call| matches!(call, SinkCall::Flush))
    }

    pub fn clear_count(&self) -> usize {
        self.count(|call| matches!(call, SinkCall::ClearAndFlush))
    }

    fn count(&self, predicate: impl Fn(&SinkCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| predicate(c)).count()
    }
}

impl PixelSink for MockSink {
    fn set(&mut self, index: usize, color: Srgb<u8>, brightness: f32) {
        self.calls.borrow_mut().push(SinkCall::Set {
            index,
            color,
            brightness,
        });
    }

    fn flush(&mut self) {
        self.calls.borrow_mut().push(SinkCall::Flush);
    }

    fn clear_and_flush(&mut self) {
        self.calls.borrow_mut().push(SinkCall::ClearAndFlush);
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay source that records requested waits instead of sleeping.
#[derive(Clone, Default)]
pub struct MockDelay {
    waits: Rc<RefCell<Vec<u64>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<u64> {
        self.waits.borrow().clone()
    }
}

impl DelaySource for MockDelay {
    fn wait_ms(&mut self, millis: u64) {
        self.waits.borrow_mut().push(millis);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);

/// Builds a frame of `count` identical full-brightness pixels.
pub fn solid_frame(count: usize, display_ms: u32, color: Srgb<u8>) -> Frame {
    let pixel = Pixel::new(color, 1.0).unwrap();
    Frame::new(display_ms, vec![pixel; count]).unwrap()
}
