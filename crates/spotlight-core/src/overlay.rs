//! Overlay state machine.
//!
//! One [`OverlayEngine`] per displayed image. It owns the frame tracker
//! and the region sequence, toggles between the fitted and zoomed
//! presentation, and derives the current view as a pure function of the
//! latest observations.

use crate::frame::{Frame, FrameTracker, SourceEpoch};
use crate::mapper::to_render_pixels;
use crate::region::{Region, RenderRect};
use crate::zoom::{compute_zoom, Transform};

/// Presentation state of the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayMode {
    /// Whole page visible, regions drawn as outlined boxes.
    Fitted,
    /// Page transformed to frame the primary region, boxes hidden.
    Zoomed,
}

impl std::fmt::Display for OverlayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fitted => write!(f, "fitted"),
            Self::Zoomed => write!(f, "zoomed"),
        }
    }
}

/// Everything a host needs to draw the composite for one event cycle.
///
/// Derived all-or-nothing; never partially updated.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayView {
    pub mode: OverlayMode,
    /// Identity unless the view is zoomed and the frame is ready.
    pub transform: Transform,
    /// Outline rectangles in render-space pixels. Empty while zoomed
    /// (the zoom itself communicates location) or while not ready.
    pub outlines: Vec<RenderRect>,
}

/// State machine tying one image's frame, regions, and presentation mode
/// together. Instance-owned: nothing here is shared across images.
#[derive(Clone, Debug)]
pub struct OverlayEngine {
    tracker: FrameTracker,
    regions: Vec<Region>,
    mode: OverlayMode,
}

impl OverlayEngine {
    /// Create an engine for one displayed image. The initial mode is
    /// `Zoomed` iff at least one region exists.
    pub fn new(src: &str, regions: Vec<Region>) -> Self {
        let mut tracker = FrameTracker::new();
        tracker.set_source(src);
        let mode = Self::default_mode(&regions);
        Self {
            tracker,
            regions,
            mode,
        }
    }

    fn default_mode(regions: &[Region]) -> OverlayMode {
        if regions.is_empty() {
            OverlayMode::Fitted
        } else {
            OverlayMode::Zoomed
        }
    }

    pub fn mode(&self) -> OverlayMode {
        self.mode
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn frame(&self) -> Frame {
        self.tracker.frame()
    }

    pub fn epoch(&self) -> SourceEpoch {
        self.tracker.epoch()
    }

    pub fn src(&self) -> Option<&str> {
        self.tracker.src()
    }

    /// Whether the toggle control should be enabled.
    pub fn can_toggle(&self) -> bool {
        !self.regions.is_empty()
    }

    /// Flip between fitted and zoomed. A no-op with zero regions.
    pub fn toggle(&mut self) -> OverlayMode {
        if self.can_toggle() {
            self.mode = match self.mode {
                OverlayMode::Fitted => OverlayMode::Zoomed,
                OverlayMode::Zoomed => OverlayMode::Fitted,
            };
        }
        self.mode
    }

    /// Replace the region set, re-entering the initial mode for the new
    /// set. A new result set starts zoomed-if-available; the prior
    /// toggle choice is not preserved.
    pub fn regions_changed(&mut self, regions: Vec<Region>) {
        self.regions = regions;
        self.mode = Self::default_mode(&self.regions);
        tracing::debug!(
            regions = self.regions.len(),
            mode = %self.mode,
            "region set replaced"
        );
    }

    /// Point the engine at a new image source. The frame reads not-ready
    /// until the new image reports load completion under the returned
    /// epoch; completions for the old source are dropped.
    pub fn source_changed(&mut self, src: &str) -> SourceEpoch {
        self.tracker.set_source(src)
    }

    /// Feed a load completion. Returns false when `epoch` is stale.
    pub fn image_loaded(&mut self, epoch: SourceEpoch, width: f32, height: f32) -> bool {
        self.tracker.image_loaded(epoch, width, height)
    }

    /// Feed the current layout size of the image.
    pub fn viewport_resized(&mut self, width: f32, height: f32) {
        self.tracker.viewport_resized(width, height);
    }

    /// The auto-zoom target: the first region with usable area.
    pub fn zoom_target(&self) -> Option<&Region> {
        self.regions.iter().find(|r| !r.is_degenerate())
    }

    /// Derive the current view from the latest observations.
    ///
    /// Pure with respect to the engine's state: repeated calls between
    /// events return identical views, and a fitted view reproduced after
    /// a zoomed round trip is bit-for-bit the same.
    pub fn view(&self) -> OverlayView {
        let frame = self.tracker.frame();

        match self.mode {
            OverlayMode::Fitted => {
                let outlines = if frame.ready() {
                    self.regions
                        .iter()
                        .map(|r| to_render_pixels(r, &frame))
                        .filter(|rect| !rect.is_empty())
                        .collect()
                } else {
                    Vec::new()
                };
                OverlayView {
                    mode: OverlayMode::Fitted,
                    transform: Transform::IDENTITY,
                    outlines,
                }
            }
            OverlayMode::Zoomed => {
                let transform = self
                    .zoom_target()
                    .and_then(|target| compute_zoom(target, &frame))
                    .unwrap_or(Transform::IDENTITY);
                OverlayView {
                    mode: OverlayMode::Zoomed,
                    transform,
                    outlines: Vec::new(),
                }
            }
        }
    }
}
