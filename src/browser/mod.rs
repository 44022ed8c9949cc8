use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

/// Trait for URL opening (allows mocking in tests)
trait UrlOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's default handler
struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg(url);
            command
        } else if cfg!(windows) {
            let mut command = Command::new("cmd");
            // Empty title argument, otherwise `start` treats a quoted URL as the window title
            command.args(["/C", "start", ""]).arg(url);
            command
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(url);
            command
        }
    }
}

impl UrlOpener for SystemBrowser {
    fn open(&mut self, url: &str) -> Result<()> {
        let status = Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .context("Failed to launch browser")?;

        if !status.success() {
            bail!("Browser launcher exited with {}", status);
        }
        Ok(())
    }
}

/// Only web URLs are handed to the platform opener
fn validate_url(url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        bail!("Refusing to open non-web URL: {}", url);
    }

    if url.chars().any(char::is_control) {
        bail!("URL contains control characters");
    }

    Ok(())
}

fn open_with(url: &str, opener: &mut dyn UrlOpener) -> Result<()> {
    validate_url(url)?;
    opener.open(url)
}

/// Open a search URL in the default browser.
///
/// # Errors
/// Returns error if:
/// - The URL is not `http://` or `https://`
/// - The URL contains control characters
/// - The platform launcher (`open`, `start`, `xdg-open`) is missing or fails
pub fn open_in_browser(url: &str) -> Result<()> {
    open_with(url, &mut SystemBrowser)
}
