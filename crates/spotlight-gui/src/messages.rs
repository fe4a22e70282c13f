use std::path::PathBuf;

use image::RgbaImage;
use spotlight_core::frame::SourceEpoch;

/// Commands sent from the UI thread to the decode worker.
pub enum WorkerCommand {
    /// Decode a page image. `epoch` identifies the source generation the
    /// request was issued under; the result carries it back so stale
    /// completions can be dropped after a source swap.
    LoadImage { path: PathBuf, epoch: SourceEpoch },
}

/// Results sent from the worker back to the UI thread.
pub enum WorkerResult {
    ImageLoaded {
        epoch: SourceEpoch,
        image: RgbaImage,
    },
    LoadFailed {
        epoch: SourceEpoch,
        error: String,
    },
}
