//! Chrome DevTools Protocol adapter implementation

use crate::{Error, Result, Surface, SurfaceConfig};
use base64::Engine as Base64Engine;
use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use log::debug;
use std::sync::Arc;
use std::time::Duration;

/// CDP-based surface implementation (uses the `headless_chrome` crate)
///
/// This adapter launches a headless Chrome instance, manages a single tab,
/// and provides the `Surface` trait implementation over it. Documents are
/// loaded by navigating the tab to a base64 `data:` URL, which sidesteps any
/// escaping concerns in the document text.
pub struct CdpSurface {
    browser: Browser,
    tab: Arc<Tab>,
}

impl Surface for CdpSurface {
    fn new(config: SurfaceConfig) -> Result<Self>
    where
        Self: Sized,
    {
        debug!(
            "launching headless chrome, viewport {}x{}",
            config.viewport.width, config.viewport.height
        );

        // Configure headless Chrome launch options. The idle timeout is
        // raised to the configured operation timeout: the capture loop can
        // sleep for long stretches between CDP commands and the default idle
        // timeout would tear the browser down underneath it.
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((config.viewport.width, config.viewport.height)))
            .idle_browser_timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::InitializationError(format!("Failed to build launch options: {}", e)))?;

        // Launch the browser
        let browser = Browser::new(launch_options)
            .map_err(|e| Error::InitializationError(format!("Failed to launch browser: {}", e)))?;

        // Get a tab to render into
        let tab = browser
            .new_tab()
            .map_err(|e| Error::InitializationError(format!("Failed to create tab: {}", e)))?;

        tab.set_default_timeout(Duration::from_millis(config.timeout_ms));

        Ok(Self { browser, tab })
    }

    fn load_html(&mut self, html: &str) -> Result<()> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(html);
        let url = format!("data:text/html;base64,{}", encoded);

        self.tab
            .navigate_to(&url)
            .map_err(|e| Error::LoadError(format!("Navigation failed: {}", e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| Error::LoadError(format!("Wait for navigation failed: {}", e)))?;

        // Wait for the page to stabilize
        std::thread::sleep(Duration::from_millis(500));

        debug!("document loaded ({} bytes of markup)", html.len());

        Ok(())
    }

    fn snapshot_png(&self) -> Result<Vec<u8>> {
        let screenshot_data = self
            .tab
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| Error::RenderError(format!("Screenshot failed: {}", e)))?;

        Ok(screenshot_data)
    }

    fn close(self) -> Result<()> {
        // Dropping the browser terminates the Chrome child process; drop the
        // tab first so no handle outlives it.
        drop(self.tab);
        drop(self.browser);
        Ok(())
    }
}
