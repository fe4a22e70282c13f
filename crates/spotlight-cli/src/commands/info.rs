use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use spotlight_core::frame::fit_rendered_size;
use spotlight_core::overlay::OverlayEngine;

use crate::commands::load_page;
use crate::summary::print_overlay_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Page manifest (TOML)
    pub manifest: PathBuf,

    /// Viewport width budget in pixels
    #[arg(long, default_value_t = 800.0)]
    pub view_width: f32,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let page = load_page(&args.manifest)?;
    let regions = page.manifest.validated_regions();

    let mut engine = OverlayEngine::new(&page.manifest.src, regions);
    let epoch = engine.epoch();
    let (iw, ih) = (page.image.width() as f32, page.image.height() as f32);
    engine.image_loaded(epoch, iw, ih);

    let (rw, rh) = fit_rendered_size(iw, ih, args.view_width, page.manifest.viewport_max_height());
    engine.viewport_resized(rw, rh);

    print_overlay_summary(&engine, &page.image_path.display().to_string());
    Ok(())
}
