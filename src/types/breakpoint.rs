//! Responsive breakpoints.
//!
//! There are exactly six tiers. Authors can move their pixel widths but can
//! never add or remove a tier.

use std::fmt;

use serde::Serialize;

use crate::parser::Object;

/// One of the six fixed breakpoint tiers, ordered narrowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breakpoint {
    Base,
    Small,
    Medium,
    Large,
    ExtraLarge,
    ExtraExtraLarge,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Small,
        Breakpoint::Medium,
        Breakpoint::Large,
        Breakpoint::ExtraLarge,
        Breakpoint::ExtraExtraLarge,
    ];

    /// Name as written in documents.
    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Small => "small",
            Breakpoint::Medium => "medium",
            Breakpoint::Large => "large",
            Breakpoint::ExtraLarge => "extra-large",
            Breakpoint::ExtraExtraLarge => "extra-extra-large",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.name() == name)
    }

    /// Default width in pixels (Bootstrap v5).
    pub fn default_width(self) -> u32 {
        match self {
            Breakpoint::Base => 0,
            Breakpoint::Small => 576,
            Breakpoint::Medium => 768,
            Breakpoint::Large => 992,
            Breakpoint::ExtraLarge => 1200,
            Breakpoint::ExtraExtraLarge => 1400,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pixel widths for each breakpoint tier.
///
/// Width 0 means "no media query".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointTable {
    widths: [u32; 6],
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            widths: Breakpoint::ALL.map(Breakpoint::default_width),
        }
    }
}

impl BreakpointTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of a tier in pixels.
    pub fn width(&self, breakpoint: Breakpoint) -> u32 {
        self.widths[breakpoint.index()]
    }

    /// Width for a breakpoint name, if the name is one of the six tiers.
    pub fn width_of(&self, name: &str) -> Option<u32> {
        Breakpoint::from_name(name).map(|bp| self.width(bp))
    }

    /// Set a tier's width. `base` is pinned to 0 and cannot be moved.
    pub fn set_width(&mut self, breakpoint: Breakpoint, width: u32) {
        if breakpoint == Breakpoint::Base {
            log::debug!("ignoring width {} for breakpoint 'base', which is always 0", width);
            return;
        }
        self.widths[breakpoint.index()] = width;
    }

    pub fn with_width(mut self, breakpoint: Breakpoint, width: u32) -> Self {
        self.set_width(breakpoint, width);
        self
    }

    /// Apply width overrides from a document's `breakpoints` section.
    ///
    /// Unknown names, `base`, and values that are not non-negative numbers
    /// are ignored.
    pub fn with_overrides(mut self, section: &Object) -> Self {
        for (name, node) in section.iter() {
            let Some(breakpoint) = Breakpoint::from_name(name) else {
                log::debug!("ignoring unknown breakpoint '{}'", name);
                continue;
            };
            match node.as_scalar().and_then(|v| v.as_f64()) {
                Some(width) if width >= 0.0 => self.set_width(breakpoint, width as u32),
                _ => log::debug!("ignoring non-numeric width for breakpoint '{}'", name),
            }
        }
        self
    }

    /// Iterate tiers with their widths, narrowest tier first.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, u32)> + '_ {
        Breakpoint::ALL.into_iter().map(|bp| (bp, self.width(bp)))
    }

    /// Whether an object is a per-breakpoint value set.
    ///
    /// The object must be non-empty, every key must name a tier, and every
    /// value must be a scalar. Anything else is a nested fragment.
    pub fn is_breakpoint_set(&self, obj: &Object) -> bool {
        !obj.is_empty()
            && obj
                .iter()
                .all(|(key, node)| Breakpoint::from_name(key).is_some() && !node.is_object())
    }
}
