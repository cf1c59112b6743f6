// UI layer: everything the user sees. Report lines go to a caller-supplied
// writer (stdout in the binary) so they can be captured; the transient
// progress line and error banner go to stderr.

use crate::error::UgcError;
use crate::poller::PollObserver;
use crate::types::{download_url, Avatar};
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::io::{self, Write};
use std::time::Duration;

/// Prints the avatar table, or a notice when the listing is empty.
pub fn print_avatars<W: Write>(out: &mut W, avatars: &[Avatar]) -> io::Result<()> {
    if avatars.is_empty() {
        return writeln!(out, "No avatars found.");
    }
    writeln!(out, "Available avatars ({}):", avatars.len())?;
    writeln!(out)?;
    for avatar in avatars {
        writeln!(out, "  {}  -  {}", avatar.id, avatar.name)?;
    }
    Ok(())
}

/// Announces a submission before the request goes out.
pub fn print_submitting<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "Submitting video generation request: \"{name}\"")
}

/// Confirms the job id and that polling starts.
pub fn print_submitted<W: Write>(out: &mut W, video_id: &str) -> io::Result<()> {
    writeln!(out, "Video ID: {video_id}")?;
    writeln!(out, "Waiting for video to be generated...")
}

/// Reports a finished job: the download link, or the whole response when
/// the service did not include one.
pub fn print_ready<W: Write>(out: &mut W, response: &Value) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Video ready!")?;
    match download_url(response) {
        Some(url) => writeln!(out, "Download URL: {url}"),
        None => writeln!(out, "Full response: {}", pretty(response)),
    }
}

/// Pretty JSON for human-facing dumps.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Writes a failure to stderr with a red `Error:` prefix.
pub fn print_error(err: &UgcError) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle, "{} {}", "Error:".red().bold(), err);
}

/// Formats an elapsed duration as `<m>m <s>s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}m {}s", secs / 60, secs % 60)
}

/// Transient status line shown while polling. It is redrawn in place and
/// cleared once polling ends.
pub struct ProgressLine {
    bar: ProgressBar,
}

impl ProgressLine {
    /// Spinner drawn on stderr. Nothing shows until the first status.
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        Self { bar }
    }

    /// Draws nothing. Used when stderr is not worth decorating.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Text currently shown on the line.
    pub fn message(&self) -> String {
        self.bar.message()
    }
}

impl Default for ProgressLine {
    fn default() -> Self {
        Self::new()
    }
}

impl PollObserver for ProgressLine {
    fn waiting(&mut self, status: &str, elapsed: Duration) {
        self.bar
            .set_message(format!("Status: {status} ({} elapsed)", format_elapsed(elapsed)));
        self.bar.tick();
    }

    fn finished(&mut self) {
        self.bar.finish_and_clear();
    }
}
