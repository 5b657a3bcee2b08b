//! System clipboard access

use anyhow::{Context, Result};

/// Put `text` on the system clipboard
///
/// On X11/Wayland the clipboard owner must stay alive for other programs to
/// read the selection, so callers run this on a short-lived background thread.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_owned())
        .context("failed to copy to clipboard")?;
    Ok(())
}
