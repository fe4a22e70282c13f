use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use spotlight_core::frame::fit_rendered_size;
use spotlight_core::overlay::{OverlayEngine, OverlayMode};
use spotlight_core::render::render_composite;

use crate::commands::load_page;
use crate::summary::print_overlay_summary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    Fitted,
    Zoomed,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Page manifest (TOML)
    pub manifest: PathBuf,

    /// Output image path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Viewport width budget in pixels
    #[arg(long, default_value_t = 800.0)]
    pub view_width: f32,

    /// Override the initial view (default: zoomed if the manifest has
    /// regions, fitted otherwise)
    #[arg(long, value_enum)]
    pub mode: Option<ViewMode>,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let page = load_page(&args.manifest)?;
    let regions = page.manifest.validated_regions();

    let mut engine = OverlayEngine::new(&page.manifest.src, regions);
    let epoch = engine.epoch();
    let (iw, ih) = (page.image.width() as f32, page.image.height() as f32);
    engine.image_loaded(epoch, iw, ih);

    let (rw, rh) = fit_rendered_size(iw, ih, args.view_width, page.manifest.viewport_max_height());
    engine.viewport_resized(rw, rh);

    if let Some(mode) = args.mode {
        let wanted = match mode {
            ViewMode::Fitted => OverlayMode::Fitted,
            ViewMode::Zoomed => OverlayMode::Zoomed,
        };
        if engine.mode() != wanted && engine.can_toggle() {
            engine.toggle();
        }
        if engine.mode() != wanted {
            tracing::warn!(
                wanted = %wanted,
                "cannot enter requested mode without regions; rendering fitted"
            );
        }
    }

    let frame = engine.frame();
    let composite = render_composite(&page.image, &engine.view(), &frame)
        .context("composing overlay image")?;
    composite
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    print_overlay_summary(&engine, &page.image_path.display().to_string());
    println!("  Wrote {}", args.output.display());
    Ok(())
}
