use std::sync::mpsc;
use std::thread;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the image decode worker.
///
/// Decoding happens off the UI thread; every `LoadImage` command produces
/// exactly one result (success or failure), even when the image was
/// decoded before, so the tracker never misses an initial load signal.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    thread::spawn(move || {
        while let Ok(command) = cmd_rx.recv() {
            let result = match command {
                WorkerCommand::LoadImage { path, epoch } => {
                    match spotlight_core::render::load_page_image(&path) {
                        Ok(image) => WorkerResult::ImageLoaded { epoch, image },
                        Err(error) => {
                            tracing::warn!(path = %path.display(), %error, "image decode failed");
                            WorkerResult::LoadFailed {
                                epoch,
                                error: error.to_string(),
                            }
                        }
                    }
                }
            };

            if result_tx.send(result).is_err() {
                break;
            }
            ctx.request_repaint();
        }
    });

    cmd_tx
}
