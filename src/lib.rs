//! svg2gif rendering surface
//!
//! The library half of svg2gif: a small capability interface over a headless
//! rendering surface that can display an HTML document and capture full-page
//! PNG snapshots of it. The `svg2gif` binary drives this surface to sample an
//! animated SVG at fixed intervals before assembling the samples into a GIF.
//!
//! # Example
//!
//! ```no_run
//! use svg2gif::{Surface, SurfaceConfig, Viewport};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SurfaceConfig {
//!     viewport: Viewport { width: 1280, height: 720 },
//!     ..Default::default()
//! };
//!
//! let mut surface = svg2gif::new_surface(config)?;
//! surface.load_html("<html><body><svg></svg></body></html>")?;
//! let png = surface.snapshot_png()?;
//! println!("captured {} bytes", png.len());
//! surface.close()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

#[cfg(feature = "cdp")]
pub mod cdp;

/// Configuration for the rendering surface
///
/// The defaults are conservative: a desktop-sized viewport and a generous
/// timeout for browser startup and navigation.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Viewport dimensions
    pub viewport: Viewport,
    /// Timeout for surface operations in milliseconds
    pub timeout_ms: u64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            timeout_ms: 30000,
        }
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Core trait for rendering surface implementations
///
/// A surface displays one document at a time and produces raster snapshots of
/// it. Dropping a surface releases its underlying resources (for the CDP
/// backend, the Chrome child process), so cleanup is guaranteed on error
/// paths too; `close` exists to make teardown explicit and error-reporting on
/// the success path.
pub trait Surface {
    /// Create a new surface with the given configuration
    fn new(config: SurfaceConfig) -> Result<Self>
    where
        Self: Sized;

    /// Load an HTML document into the surface and wait until it is displayed
    fn load_html(&mut self, html: &str) -> Result<()>;

    /// Capture the current state of the surface as a full-page PNG
    fn snapshot_png(&self) -> Result<Vec<u8>>;

    /// Close the surface and release its resources
    fn close(self) -> Result<()>;
}

/// Create a new surface with the default backend
///
/// The CDP backend (headless Chrome) is the only backend and is enabled by
/// the default `cdp` feature.
#[cfg(feature = "cdp")]
pub fn new_surface(config: SurfaceConfig) -> Result<impl Surface> {
    cdp::CdpSurface::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SurfaceConfig::default();
        assert_eq!(config.viewport.width, 1280);
        assert_eq!(config.viewport.height, 720);
        assert_eq!(config.timeout_ms, 30000);
    }

    #[test]
    fn test_viewport() {
        let viewport = Viewport {
            width: 1920,
            height: 1080,
        };
        assert_eq!(viewport.width, 1920);
        assert_eq!(viewport.height, 1080);
    }
}
