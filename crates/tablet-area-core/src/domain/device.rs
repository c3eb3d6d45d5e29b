//! Typed record of an input device as listed by the device utility.

use std::fmt;

/// Kind of input device, as reported in the `type:` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Stylus,
    Eraser,
    Cursor,
    Pad,
    Touch,
    /// Any other type tag, kept verbatim.
    Other(String),
}

impl DeviceKind {
    /// Maps a type tag to a kind.  Unknown tags become [`DeviceKind::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "STYLUS" => DeviceKind::Stylus,
            "ERASER" => DeviceKind::Eraser,
            "CURSOR" => DeviceKind::Cursor,
            "PAD" => DeviceKind::Pad,
            "TOUCH" => DeviceKind::Touch,
            other => DeviceKind::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            DeviceKind::Stylus => "STYLUS",
            DeviceKind::Eraser => "ERASER",
            DeviceKind::Cursor => "CURSOR",
            DeviceKind::Pad => "PAD",
            DeviceKind::Touch => "TOUCH",
            DeviceKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A device entry: numeric id, human-readable name, and kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabletDevice {
    /// The id column, passed back to the utility to address the device.
    pub id: String,
    pub name: String,
    pub kind: DeviceKind,
}

impl TabletDevice {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

impl fmt::Display for TabletDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id {}, {})", self.name, self.id, self.kind)
    }
}
