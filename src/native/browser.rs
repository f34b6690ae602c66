//! Full page navigation through the system browser

/// Open `url` with the default browser
pub fn open_url(url: &str) -> Result<(), String> {
    open::that_detached(url).map_err(|e| format!("Failed to open {}: {}", url, e))?;
    tracing::info!("Opened {}", url);
    Ok(())
}
