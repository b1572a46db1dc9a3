//! Compositor capture capability probe
//!
//! The engine never intercepts key presses; it only reports whether the
//! running session could support a global-shortcut capture portal, so a
//! frontend can surface a capability warning. Tri-state because the
//! answer is genuinely unknowable on unrecognized sessions.

use std::env;
use std::fmt;

/// Whether the compositor exposes a global-shortcut capture mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureCapability {
    Supported,
    Unsupported,
    Unknown,
}

impl fmt::Display for CaptureCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureCapability::Supported => write!(f, "supported"),
            CaptureCapability::Unsupported => write!(f, "unsupported"),
            CaptureCapability::Unknown => write!(f, "unknown"),
        }
    }
}

/// Derive the capability from session identifiers.
///
/// `XDG_CURRENT_DESKTOP` can carry multiple colon-separated values
/// (`ubuntu:GNOME`), so each part is checked.
pub fn capability_from(session_type: &str, current_desktop: &str) -> CaptureCapability {
    let session = session_type.trim().to_lowercase();
    let gnome = current_desktop
        .split(':')
        .any(|part| matches!(part.trim().to_uppercase().as_str(), "GNOME" | "UNITY" | "UBUNTU"));

    match session.as_str() {
        // X11 allows synthetic global grabs regardless of desktop.
        "x11" => CaptureCapability::Supported,
        // GNOME on Wayland does not expose a capture portal to clients.
        "wayland" if gnome => CaptureCapability::Unsupported,
        "wayland" => CaptureCapability::Unknown,
        _ => CaptureCapability::Unknown,
    }
}

/// Probe the current process environment.
pub fn probe_from_env() -> CaptureCapability {
    let session_type = env::var("XDG_SESSION_TYPE").unwrap_or_default();
    let current_desktop = env::var("XDG_CURRENT_DESKTOP").unwrap_or_default();
    capability_from(&session_type, &current_desktop)
}
