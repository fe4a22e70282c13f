use spotlight_core::overlay::OverlayMode;

use crate::app::SpotlightApp;

pub fn show(ctx: &egui::Context, app: &mut SpotlightApp) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Open manifest…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Page manifest", &["toml"])
                    .pick_file()
                {
                    app.open_manifest(&path);
                }
            }

            ui.separator();

            if let Some(engine) = app.engine.as_mut() {
                let label = match engine.mode() {
                    OverlayMode::Fitted => "Zoom to result",
                    OverlayMode::Zoomed => "Show full page",
                };
                let toggle = ui.add_enabled(engine.can_toggle(), egui::Button::new(label));
                if toggle.clicked() {
                    engine.toggle();
                }

                ui.separator();
                ui.label(format!(
                    "{} region(s), {}",
                    engine.regions().len(),
                    engine.mode()
                ));
            } else {
                ui.label("No page loaded");
            }

            if let Some(error) = &app.ui_state.load_error {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, error);
            }
        });
    });
}
