use console::Style;

use spotlight_core::frame::Frame;
use spotlight_core::mapper::to_render_pixels;
use spotlight_core::overlay::{OverlayEngine, OverlayMode};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    mode: Style,
    warn: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            mode: Style::new().green(),
            warn: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_overlay_summary(engine: &OverlayEngine, src: &str) {
    let s = Styles::new();
    let frame = engine.frame();
    let view = engine.view();

    println!();
    println!("  {}", s.title.apply_to("Spotlight Overlay"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Page"), s.path.apply_to(src));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Intrinsic"),
        s.value.apply_to(format!(
            "{:.0}x{:.0}",
            frame.intrinsic_width, frame.intrinsic_height
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Rendered"),
        s.value.apply_to(format!(
            "{:.0}x{:.0}",
            frame.rendered_width, frame.rendered_height
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mode"),
        s.mode.apply_to(view.mode.to_string())
    );

    print_regions(&s, engine, &frame);

    match view.mode {
        OverlayMode::Zoomed if !view.transform.is_identity() => {
            println!(
                "  {:<14}{}",
                s.label.apply_to("Zoom"),
                s.value.apply_to(format!(
                    "scale {:.2}, translate ({:.1}, {:.1})",
                    view.transform.scale, view.transform.tx, view.transform.ty
                ))
            );
        }
        OverlayMode::Zoomed => {
            println!(
                "  {:<14}{}",
                s.label.apply_to("Zoom"),
                s.warn.apply_to("not available (frame not ready or no usable region)")
            );
        }
        OverlayMode::Fitted => {}
    }
    println!();
}

fn print_regions(s: &Styles, engine: &OverlayEngine, frame: &Frame) {
    let regions = engine.regions();
    if regions.is_empty() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Regions"),
            s.warn.apply_to("none")
        );
        return;
    }

    println!(
        "  {:<14}{}",
        s.label.apply_to("Regions"),
        s.value.apply_to(regions.len())
    );
    for (index, region) in regions.iter().enumerate() {
        let rect = to_render_pixels(region, frame);
        let marker = if index == 0 { " (primary)" } else { "" };
        println!(
            "    {:<12}{}",
            s.label.apply_to(format!("#{index}{marker}")),
            s.value.apply_to(format!(
                "{:?} -> x {:.1}, y {:.1}, {:.1}x{:.1} px",
                region.coordinate_system, rect.x, rect.y, rect.width, rect.height
            ))
        );
    }
}
