//! PNG export of the committed canvas.
//!
//! Only History is exported: the live stroke and the preview never are.

use std::io::Cursor;

use crate::config::AppConfig;
use crate::error::{ExportError, ExportResult};
use crate::history::History;
use crate::renderer::Renderer;
use crate::surface::RasterSurface;

/// Render `history` at `config.export_scale` and encode it as PNG
pub fn export_png(history: &History, config: &AppConfig) -> ExportResult<Vec<u8>> {
    let (width, height) = config.export_dimensions();
    let mut surface = RasterSurface::new(width, height, config.export_scale)?;
    Renderer::new().render(&mut surface, history, None, None);

    let image = image::RgbaImage::from_raw(width, height, surface.into_rgba())
        .ok_or(ExportError::SurfaceAllocation { width, height })?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

/// Export and hand the PNG to the user. Failures are logged and the download skipped.
pub fn export_and_deliver(history: &History, config: &AppConfig) {
    let result = export_png(history, config).and_then(|bytes| {
        log::info!(
            "Exporting {} drawables as {} ({} bytes)",
            history.len(),
            config.export_file_name,
            bytes.len()
        );
        deliver(&bytes, config)
    });

    if let Err(err) = result {
        log::warn!("Export skipped: {err}");
    }
}

/// Write the PNG into the configured export directory
#[cfg(not(target_arch = "wasm32"))]
pub fn deliver(bytes: &[u8], config: &AppConfig) -> ExportResult<()> {
    std::fs::create_dir_all(&config.export_dir)?;
    let path = config.export_dir.join(&config.export_file_name);
    std::fs::write(&path, bytes)?;
    log::info!("Saved {}", path.display());
    Ok(())
}

/// Offer the PNG as a browser download
#[cfg(target_arch = "wasm32")]
pub fn deliver(bytes: &[u8], config: &AppConfig) -> ExportResult<()> {
    use eframe::wasm_bindgen::JsCast as _;

    fn js_err(err: impl std::fmt::Debug) -> ExportError {
        ExportError::Download(format!("{err:?}"))
    }

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob =
        web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(js_err)?;
    anchor.set_href(&url);
    anchor.set_download(&config.export_file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    Ok(())
}
