//! PNG previews rasterised from the SVG output.

use miette::{IntoDiagnostic, Result, miette};

/// usvg resolves physical units (our `mm` root size) at this density.
const USVG_DPI: f32 = 96.0;

/// Rasterise an SVG at `dpi` dots per inch on a white background.
pub fn svg_to_png(svg: &str, dpi: f32) -> Result<Vec<u8>> {
    if !(dpi.is_finite() && dpi > 0.0) {
        return Err(miette!("dpi must be a positive number, got {dpi}"));
    }

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options).into_diagnostic()?;

    let scale = dpi / USVG_DPI;
    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| miette!("cannot allocate a {width}x{height} image"))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap.encode_png().into_diagnostic()
}
