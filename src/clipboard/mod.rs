use anyhow::{Context, Result};
use arboard::Clipboard;

/// Cap on transcript size copied to the clipboard (1MB); a scripted chat
/// never gets near this, but arboard misbehaves on huge payloads.
const MAX_TRANSCRIPT_SIZE: usize = 1024 * 1024;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

fn validate_transcript(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Nothing to copy: the conversation is empty");
    }

    if text.len() > MAX_TRANSCRIPT_SIZE {
        anyhow::bail!(
            "Transcript too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_TRANSCRIPT_SIZE
        );
    }

    Ok(())
}

#[cfg(test)]
fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_transcript(text)?;
    provider.set_text(text)?;
    Ok(())
}

/// Copy a chat transcript to the system clipboard.
///
/// # Errors
/// Returns an error if the transcript is empty, too large, or the system
/// clipboard is unavailable (for example in a headless environment).
pub fn copy_transcript(text: &str) -> Result<()> {
    // Validate before touching the clipboard so headless CI still gets the
    // right error for bad input
    validate_transcript(text)?;

    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
