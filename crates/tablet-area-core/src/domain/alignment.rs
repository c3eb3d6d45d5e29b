//! Alignment engine: places the active area inside the tablet area.
//!
//! Each of the nine alignments is a pair of independent per-axis anchors.
//! The pairs live in [`ALIGNMENT_TABLE`]; there is no branch chain to keep in
//! sync when an alignment is added or renamed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::area::{ActiveAreaSize, ParseError, TabletArea};

/// Where the active area sits on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Flush with the top / left edge: offset `0`.
    Start,
    /// Centred: offset `(T - S) / 2`.
    Center,
    /// Flush with the bottom / right edge: offset `T - S`.
    End,
}

impl Anchor {
    /// Offset along one axis given the tablet extent and active-area extent.
    pub fn offset(self, tablet: f64, size: f64) -> f64 {
        match self {
            Anchor::Start => 0.0,
            Anchor::Center => (tablet - size) / 2.0,
            Anchor::End => tablet - size,
        }
    }
}

/// One of the nine supported alignment positions.
///
/// Discriminants index into [`ALIGNMENT_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    TopLeft = 0,
    Top = 1,
    TopRight = 2,
    Left = 3,
    #[default]
    Center = 4,
    Right = 5,
    BottomLeft = 6,
    Bottom = 7,
    BottomRight = 8,
}

/// A row of the alignment table.
#[derive(Debug, Clone, Copy)]
pub struct AlignmentEntry {
    pub alignment: Alignment,
    pub name: &'static str,
    pub x: Anchor,
    pub y: Anchor,
}

const fn entry(alignment: Alignment, name: &'static str, x: Anchor, y: Anchor) -> AlignmentEntry {
    AlignmentEntry { alignment, name, x, y }
}

/// The complete alignment behaviour, one row per [`Alignment`].
pub const ALIGNMENT_TABLE: [AlignmentEntry; 9] = [
    entry(Alignment::TopLeft, "topleft", Anchor::Start, Anchor::Start),
    entry(Alignment::Top, "top", Anchor::Center, Anchor::Start),
    entry(Alignment::TopRight, "topright", Anchor::End, Anchor::Start),
    entry(Alignment::Left, "left", Anchor::Start, Anchor::Center),
    entry(Alignment::Center, "center", Anchor::Center, Anchor::Center),
    entry(Alignment::Right, "right", Anchor::End, Anchor::Center),
    entry(Alignment::BottomLeft, "bottomleft", Anchor::Start, Anchor::End),
    entry(Alignment::Bottom, "bottom", Anchor::Center, Anchor::End),
    entry(Alignment::BottomRight, "bottomright", Anchor::End, Anchor::End),
];

impl Alignment {
    /// The table row describing this alignment.
    pub fn entry(self) -> &'static AlignmentEntry {
        &ALIGNMENT_TABLE[self as usize]
    }

    /// Per-axis anchors `(x, y)`.
    pub fn anchors(self) -> (Anchor, Anchor) {
        let row = self.entry();
        (row.x, row.y)
    }

    /// The name used on the command line and in the config file.
    pub fn as_str(self) -> &'static str {
        self.entry().name
    }

    /// Every alignment, in table order.
    pub fn all() -> impl Iterator<Item = Alignment> {
        ALIGNMENT_TABLE.iter().map(|row| row.alignment)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALIGNMENT_TABLE
            .iter()
            .find(|row| row.name == s)
            .map(|row| row.alignment)
            .ok_or_else(|| ParseError::Alignment(s.to_string()))
    }
}

/// Top-left offset of the active area, in real-valued device lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Computes the origin of the active area for `alignment`.
///
/// Offsets may be negative when `size` exceeds the tablet on an axis; the
/// bounds validator rejects such rectangles after quantization.
pub fn align(tablet: TabletArea, size: ActiveAreaSize, alignment: Alignment) -> Offset {
    let (ax, ay) = alignment.anchors();
    Offset {
        x: ax.offset(f64::from(tablet.width), size.width),
        y: ay.offset(f64::from(tablet.height), size.height),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
