use spotlight_core::consts::{BACKGROUND_GRAY, OUTLINE_COLOR};
use spotlight_core::frame::fit_rendered_size;
use spotlight_core::overlay::OverlayMode;

use crate::app::SpotlightApp;

/// Padding around the rendered page inside the panel.
const PAGE_MARGIN: f32 = 12.0;

pub fn show(ctx: &egui::Context, app: &mut SpotlightApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let Some(engine) = app.engine.as_mut() else {
            show_placeholder(ui, rect, "Open a page manifest to begin");
            return;
        };

        // Layout pass: refit the rendered box to the current panel size
        // and the manifest's height budget. Runs every frame; the
        // tracker makes repeated identical observations free.
        let observed = engine.frame();
        let (rw, rh) = fit_rendered_size(
            observed.intrinsic_width,
            observed.intrinsic_height,
            rect.width() - 2.0 * PAGE_MARGIN,
            app.ui_state
                .viewport_max_height
                .min(rect.height() - 2.0 * PAGE_MARGIN),
        );
        engine.viewport_resized(rw, rh);

        let frame = engine.frame();
        let Some(texture) = app.viewport.texture.as_ref() else {
            show_placeholder(ui, rect, "Loading page\u{2026}");
            return;
        };
        if !frame.ready() {
            show_placeholder(ui, rect, "Loading page\u{2026}");
            return;
        }

        let view = engine.view();
        let origin = egui::pos2(rect.center().x - rw / 2.0, rect.top() + PAGE_MARGIN);
        let center = frame.viewport_center();

        // Map the page corners through the zoom transform (identity when
        // fitted) into panel coordinates.
        let (x0, y0) = view.transform.apply(0.0, 0.0, center);
        let (x1, y1) = view.transform.apply(rw, rh, center);
        let img_rect = egui::Rect::from_min_max(
            origin + egui::vec2(x0, y0),
            origin + egui::vec2(x1, y1),
        );

        let painter = ui.painter_at(rect);
        painter.image(
            texture.id(),
            img_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        if view.mode == OverlayMode::Fitted {
            let [r, g, b, _] = OUTLINE_COLOR;
            let stroke = egui::Stroke::new(2.0, egui::Color32::from_rgb(r, g, b));
            for outline in &view.outlines {
                let box_rect = egui::Rect::from_min_size(
                    origin + egui::vec2(outline.x, outline.y),
                    egui::vec2(outline.width, outline.height),
                );
                painter.rect_stroke(box_rect, 0.0, stroke, egui::epaint::StrokeKind::Outside);
            }
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(BACKGROUND_GRAY));
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect, text: &str) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(16.0),
        egui::Color32::from_white_alpha(180),
    );
}
