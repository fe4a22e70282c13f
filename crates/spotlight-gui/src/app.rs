use std::path::{Path, PathBuf};
use std::sync::mpsc;

use spotlight_core::manifest::RegionManifest;
use spotlight_core::overlay::OverlayEngine;

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{UIState, ViewportState};
use crate::worker;

pub struct SpotlightApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    /// One engine per displayed page; none until a manifest is opened.
    pub engine: Option<OverlayEngine>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
}

impl SpotlightApp {
    pub fn new(ctx: &egui::Context, manifest: Option<PathBuf>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        let mut app = Self {
            cmd_tx,
            result_rx,
            engine: None,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
        };
        if let Some(path) = manifest {
            app.open_manifest(&path);
        }
        app
    }

    /// Load a page manifest and point the engine at its image.
    ///
    /// Reuses the existing engine when present so a changed source or
    /// region set goes through the reset paths (stale-load protection,
    /// zoomed-if-available re-entry) instead of rebuilding state.
    pub fn open_manifest(&mut self, path: &Path) {
        let manifest: RegionManifest = match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| toml::from_str(&text).map_err(|e| e.to_string()))
        {
            Ok(manifest) => manifest,
            Err(error) => {
                self.ui_state.load_error = Some(format!("{}: {error}", path.display()));
                return;
            }
        };

        let regions = manifest.validated_regions();
        let image_path = path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&manifest.src);
        let src = image_path.display().to_string();

        let epoch = match self.engine.as_mut() {
            Some(engine) => {
                let epoch = engine.source_changed(&src);
                engine.regions_changed(regions);
                epoch
            }
            None => {
                let engine = OverlayEngine::new(&src, regions);
                let epoch = engine.epoch();
                self.engine = Some(engine);
                epoch
            }
        };

        // The old texture would show the retired image; drop it now and
        // let the load completion install the new one.
        self.viewport.texture = None;
        self.ui_state.load_error = None;
        self.ui_state.manifest_path = Some(path.to_owned());
        self.ui_state.viewport_max_height = manifest.viewport_max_height();
        self.ui_state
            .add_log(format!("Opened {} ({src})", path.display()));

        let _ = self.cmd_tx.send(WorkerCommand::LoadImage {
            path: image_path,
            epoch,
        });
    }

    /// Drain all pending results from the decode worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { epoch, image } => {
                    let accepted = self
                        .engine
                        .as_mut()
                        .map(|engine| {
                            engine.image_loaded(epoch, image.width() as f32, image.height() as f32)
                        })
                        .unwrap_or(false);
                    if !accepted {
                        // Completion for a retired source.
                        continue;
                    }

                    let texture = ctx.load_texture(
                        "page",
                        rgba_to_color_image(&image),
                        egui::TextureOptions::LINEAR,
                    );
                    self.viewport.texture = Some(texture);
                    self.ui_state
                        .add_log(format!("Loaded page {}x{}", image.width(), image.height()));
                }
                WorkerResult::LoadFailed { epoch, error } => {
                    let current = self
                        .engine
                        .as_ref()
                        .map(|engine| engine.epoch() == epoch)
                        .unwrap_or(false);
                    if current {
                        self.ui_state.load_error = Some(error);
                    }
                }
            }
        }
    }
}

impl eframe::App for SpotlightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);
    }
}
