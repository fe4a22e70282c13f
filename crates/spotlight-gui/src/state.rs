use std::path::PathBuf;

use spotlight_core::consts::DEFAULT_VIEWPORT_MAX_HEIGHT;

/// General UI state: current manifest, height budget, activity log.
pub struct UIState {
    pub manifest_path: Option<PathBuf>,
    /// Display budget for the rendered page height, from the manifest.
    pub viewport_max_height: f32,
    pub load_error: Option<String>,
    pub log: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            manifest_path: None,
            viewport_max_height: DEFAULT_VIEWPORT_MAX_HEIGHT,
            load_error: None,
            log: Vec::new(),
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, line: String) {
        tracing::info!("{line}");
        self.log.push(line);
        if self.log.len() > 100 {
            self.log.remove(0);
        }
    }
}

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
}
