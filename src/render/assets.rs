//! Where logo images come from.

use std::io;
use std::path::{Component, Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::errors::RenderError;

/// Raster formats a sign may embed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Identify a format from its leading bytes
    pub fn sniff(bytes: &[u8]) -> Option<ImageFormat> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else {
            None
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    /// `data:` URL carrying `bytes`
    pub fn data_url(self, bytes: &[u8]) -> String {
        format!("data:{};base64,{}", self.mime(), STANDARD.encode(bytes))
    }
}

/// Resolves an image reference to its raw bytes.
pub trait AssetSource {
    fn fetch(&self, href: &str) -> io::Result<Vec<u8>>;
}

/// Reads references as paths below a root directory.
#[derive(Debug, Clone)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsAssets { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for FsAssets {
    fn fetch(&self, href: &str) -> io::Result<Vec<u8>> {
        let relative = Path::new(href.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "image reference escapes the asset root",
            ));
        }
        std::fs::read(self.root.join(relative))
    }
}

/// Resolves nothing; every file reference is reported missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetSource for NoAssets {
    fn fetch(&self, _href: &str) -> io::Result<Vec<u8>> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no asset source configured"))
    }
}

/// Turn an image reference into an embeddable `data:` URL.
///
/// A `data:` URL is decoded and re-encoded, and must hold the PNG or JPEG
/// it claims to. Anything else is fetched from `assets` and sniffed.
pub fn resolve_image(href: &str, assets: &dyn AssetSource) -> Result<String, RenderError> {
    if let Some(rest) = href.strip_prefix("data:") {
        let unsupported = || RenderError::UnsupportedImage {
            href: truncate_href(href),
        };
        let (mime, payload) = rest.split_once(";base64,").ok_or_else(unsupported)?;
        let bytes = STANDARD.decode(payload).map_err(|_| unsupported())?;
        return match ImageFormat::sniff(&bytes) {
            Some(format) if format.mime() == mime => Ok(format.data_url(&bytes)),
            _ => Err(unsupported()),
        };
    }

    let bytes = assets.fetch(href).map_err(|source| RenderError::MissingImage {
        href: href.to_string(),
        source,
    })?;
    let format = ImageFormat::sniff(&bytes).ok_or_else(|| RenderError::UnsupportedImage {
        href: href.to_string(),
    })?;
    Ok(format.data_url(&bytes))
}

/// Data URLs can be megabytes; keep diagnostics readable
fn truncate_href(href: &str) -> String {
    const MAX: usize = 48;
    match href.char_indices().nth(MAX) {
        Some((at, _)) => format!("{}...", &href[..at]),
        None => href.to_string(),
    }
}
