//! Frame dimension tracking.
//!
//! A [`Frame`] pairs an image's intrinsic (source-pixel) size with its
//! currently rendered (viewport-pixel) size. The [`FrameTracker`] owns the
//! observations for one displayed image and rebuilds the frame on demand,
//! so repeated load/resize signals never accumulate state.

/// Intrinsic and rendered dimensions of one displayed image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    /// Source width in the image's own pixel space.
    pub intrinsic_width: f32,
    /// Source height in the image's own pixel space.
    pub intrinsic_height: f32,
    /// Width the image currently occupies on screen.
    pub rendered_width: f32,
    /// Height the image currently occupies on screen.
    pub rendered_height: f32,
}

impl Frame {
    pub fn new(
        intrinsic_width: f32,
        intrinsic_height: f32,
        rendered_width: f32,
        rendered_height: f32,
    ) -> Self {
        Self {
            intrinsic_width,
            intrinsic_height,
            rendered_width,
            rendered_height,
        }
    }

    /// True once both the intrinsic and rendered sizes are known.
    ///
    /// A non-ready frame carries no layout information; consumers must
    /// suspend transform computation until this turns true.
    pub fn ready(&self) -> bool {
        [
            self.intrinsic_width,
            self.intrinsic_height,
            self.rendered_width,
            self.rendered_height,
        ]
        .iter()
        .all(|d| d.is_finite() && *d > 0.0)
    }

    /// Center of the rendered box, used as the zoom viewport center.
    pub fn viewport_center(&self) -> (f32, f32) {
        (self.rendered_width / 2.0, self.rendered_height / 2.0)
    }
}

/// Identity of one image source occupying the tracker.
///
/// Bumped whenever the source changes, so load completions that raced a
/// source swap can be recognized as stale and dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceEpoch(u64);

/// Observes one displayed image's dimensions.
///
/// Purely observational: the only state is the latest intrinsic and
/// rendered sizes plus the source identity they belong to. [`frame`] is
/// rebuilt from those observations on every call, so invoking the update
/// methods repeatedly (e.g. a burst of resize events) is idempotent.
///
/// [`frame`]: FrameTracker::frame
#[derive(Clone, Debug, Default)]
pub struct FrameTracker {
    src: Option<String>,
    epoch: SourceEpoch,
    intrinsic: Option<(f32, f32)>,
    rendered: Option<(f32, f32)>,
}

impl FrameTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current source locator, if any image is being tracked.
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Epoch of the currently tracked source.
    pub fn epoch(&self) -> SourceEpoch {
        self.epoch
    }

    /// Point the tracker at a (possibly new) image source.
    ///
    /// A genuinely new source bumps the epoch and drops the intrinsic
    /// dimensions, so the frame reads not-ready until the new image
    /// reports load completion. The rendered box is kept: it belongs to
    /// the layout slot, which outlives the image occupying it.
    /// Re-setting the unchanged source is a no-op.
    pub fn set_source(&mut self, src: &str) -> SourceEpoch {
        if self.src.as_deref() == Some(src) {
            return self.epoch;
        }
        self.src = Some(src.to_owned());
        self.epoch = SourceEpoch(self.epoch.0 + 1);
        self.intrinsic = None;
        tracing::debug!(src, epoch = self.epoch.0, "tracking new image source");
        self.epoch
    }

    /// Record load completion for the source identified by `epoch`.
    ///
    /// Returns false (and changes nothing) when the epoch is stale, i.e.
    /// the completion belongs to an image that has since been replaced.
    pub fn image_loaded(&mut self, epoch: SourceEpoch, width: f32, height: f32) -> bool {
        if epoch != self.epoch {
            tracing::debug!(
                stale = epoch.0,
                current = self.epoch.0,
                "ignoring load completion for retired image"
            );
            return false;
        }
        self.intrinsic = Some((width, height));
        true
    }

    /// Record the size the layout currently gives the image.
    pub fn viewport_resized(&mut self, width: f32, height: f32) {
        self.rendered = Some((width, height));
    }

    /// The current frame, rebuilt from the latest observations.
    pub fn frame(&self) -> Frame {
        let (iw, ih) = self.intrinsic.unwrap_or((0.0, 0.0));
        let (rw, rh) = self.rendered.unwrap_or((0.0, 0.0));
        Frame::new(iw, ih, rw, rh)
    }

    pub fn is_ready(&self) -> bool {
        self.frame().ready()
    }
}

/// Fit an intrinsic size into an available box, preserving aspect ratio
/// (contain semantics). This models the layout pass that produces the
/// rendered dimensions from the host's width and `viewport_max_height`
/// budget. Degenerate inputs yield a zero-size box.
pub fn fit_rendered_size(
    intrinsic_width: f32,
    intrinsic_height: f32,
    max_width: f32,
    max_height: f32,
) -> (f32, f32) {
    if intrinsic_width <= 0.0
        || intrinsic_height <= 0.0
        || max_width <= 0.0
        || max_height <= 0.0
    {
        return (0.0, 0.0);
    }
    let scale = (max_width / intrinsic_width).min(max_height / intrinsic_height);
    (intrinsic_width * scale, intrinsic_height * scale)
}
