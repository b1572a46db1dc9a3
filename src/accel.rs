//! Accelerator parsing and canonical serialization
//!
//! Raw accelerator strings come from the configuration backend in GTK
//! spelling (`<Control><Shift>p`, `<Super>Return`). Parsing produces a
//! canonical token: modifiers in a fixed order, aliases collapsed to one
//! spelling, single letters lowercased. Two accelerators are equal iff
//! their canonical serializations are equal.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::AccelError;

/// Keyboard modifier. The `Ord` derive fixes the canonical serialization
/// order: Control < Shift < Alt < Super.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Control,
    Shift,
    Alt,
    Super,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Control => write!(f, "Control"),
            Modifier::Shift => write!(f, "Shift"),
            Modifier::Alt => write!(f, "Alt"),
            Modifier::Super => write!(f, "Super"),
        }
    }
}

impl FromStr for Modifier {
    type Err = AccelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "control" | "ctrl" | "ctl" | "primary" => Ok(Modifier::Control),
            "shift" => Ok(Modifier::Shift),
            "alt" | "mod1" | "meta" => Ok(Modifier::Alt),
            "super" | "mod4" | "win" => Ok(Modifier::Super),
            _ => Err(AccelError::UnknownModifier(s.to_string())),
        }
    }
}

/// A canonical accelerator: a set of modifiers plus one base key.
///
/// The base key is stored verbatim for named keys (`Return`, `F4`,
/// `XF86AudioPlay`); single ASCII letters are lowercased so `<Super>Q`
/// and `<Super>q` canonicalize identically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Accelerator {
    pub modifiers: BTreeSet<Modifier>,
    pub key: String,
}

impl Accelerator {
    /// Build an accelerator from parts. The key is normalized the same
    /// way parsing normalizes it.
    pub fn new(modifiers: impl IntoIterator<Item = Modifier>, key: &str) -> Self {
        Accelerator {
            modifiers: modifiers.into_iter().collect(),
            key: normalize_key(key),
        }
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "<{}>", modifier)?;
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for Accelerator {
    type Err = AccelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(AccelError::Empty);
        }

        let mut modifiers = BTreeSet::new();
        let mut rest = raw;
        while let Some(tail) = rest.strip_prefix('<') {
            let end = tail
                .find('>')
                .ok_or_else(|| AccelError::UnterminatedModifier(raw.to_string()))?;
            modifiers.insert(tail[..end].parse()?);
            rest = &tail[end + 1..];
        }

        // A modifier-only accelerator is invalid, not "any key".
        if rest.is_empty() {
            return Err(AccelError::MissingBaseKey(raw.to_string()));
        }
        // Modifier groups after the base key started are malformed.
        if rest.contains('<') || rest.contains('>') {
            return Err(AccelError::UnterminatedModifier(raw.to_string()));
        }

        Ok(Accelerator {
            modifiers,
            key: normalize_key(rest),
        })
    }
}

impl Serialize for Accelerator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Accelerator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn normalize_key(key: &str) -> String {
    if key.len() == 1 && key.chars().all(|c| c.is_ascii_alphabetic()) {
        key.to_ascii_lowercase()
    } else {
        key.to_string()
    }
}

/// A binding slot value: either the disabled sentinel or one accelerator.
///
/// `disabled` is a distinguished state in the backend, not an empty
/// modifier set, so it gets its own variant rather than an empty token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Binding {
    Disabled,
    Bound(Accelerator),
}

impl Binding {
    /// Parse a raw store value, treating `""` and `"disabled"` as the
    /// disabled sentinel.
    pub fn parse(raw: &str) -> Result<Self, AccelError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("disabled") {
            return Ok(Binding::Disabled);
        }
        trimmed.parse().map(Binding::Bound)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Binding::Disabled)
    }

    pub fn as_accelerator(&self) -> Option<&Accelerator> {
        match self {
            Binding::Disabled => None,
            Binding::Bound(accel) => Some(accel),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Disabled => write!(f, "disabled"),
            Binding::Bound(accel) => write!(f, "{}", accel),
        }
    }
}

/// Normalize a raw accelerator string to its canonical spelling.
///
/// Collapses modifier aliases (`<Primary>` → `<Control>`) and reorders
/// modifiers to the fixed order. Fails on anything `Binding::parse`
/// rejects.
pub fn canonicalize(raw: &str) -> Result<String, AccelError> {
    Ok(Binding::parse(raw)?.to_string())
}
