//! Built-in flavors.

use std::fmt;
use std::str::FromStr;

use crate::{Palette, Rgb};

/// A built-in Catppuccin flavor.
///
/// Each flavor carries a stable lowercase identifier used for persistence
/// and for the root theme attribute, a human-readable display name, and a
/// complete [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// The light flavor.
    Latte,
    /// The softest of the dark flavors.
    Frappe,
    /// A mid-tone dark flavor.
    Macchiato,
    /// The darkest flavor and the default.
    Mocha,
}

impl Flavor {
    /// All flavors, in registry order.
    pub const ALL: [Flavor; 4] = [
        Flavor::Latte,
        Flavor::Frappe,
        Flavor::Macchiato,
        Flavor::Mocha,
    ];

    /// The flavor applied when no valid selection exists.
    pub const DEFAULT: Flavor = Flavor::Mocha;

    /// The unique lowercase identifier (e.g. "mocha").
    ///
    /// Identifiers are stable: persisted selections and the root theme
    /// attribute are spelled in these exact strings.
    pub const fn identifier(self) -> &'static str {
        match self {
            Flavor::Latte => "latte",
            Flavor::Frappe => "frappe",
            Flavor::Macchiato => "macchiato",
            Flavor::Mocha => "mocha",
        }
    }

    /// The human-readable name (e.g. "Frappé").
    pub const fn display_name(self) -> &'static str {
        match self {
            Flavor::Latte => "Latte",
            Flavor::Frappe => "Frappé",
            Flavor::Macchiato => "Macchiato",
            Flavor::Mocha => "Mocha",
        }
    }

    /// Look up a flavor by identifier.
    ///
    /// Matching is exact: no case folding, no trimming. Returns `None` for
    /// anything that is not a registered identifier.
    pub fn from_identifier(id: &str) -> Option<Flavor> {
        match id {
            "latte" => Some(Flavor::Latte),
            "frappe" => Some(Flavor::Frappe),
            "macchiato" => Some(Flavor::Macchiato),
            "mocha" => Some(Flavor::Mocha),
            _ => None,
        }
    }

    /// The flavor's color palette.
    pub fn palette(self) -> &'static Palette {
        match self {
            Flavor::Latte => &LATTE,
            Flavor::Frappe => &FRAPPE,
            Flavor::Macchiato => &MACCHIATO,
            Flavor::Mocha => &MOCHA,
        }
    }
}

impl Default for Flavor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Error returned when parsing an unknown flavor identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown flavor '{0}'")]
pub struct ParseFlavorError(pub String);

impl FromStr for Flavor {
    type Err = ParseFlavorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flavor::from_identifier(s).ok_or_else(|| ParseFlavorError(s.to_string()))
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::Flavor;

    impl Serialize for Flavor {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.identifier())
        }
    }

    impl<'de> Deserialize<'de> for Flavor {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Flavor::from_identifier(&s).ok_or_else(|| {
                de::Error::unknown_variant(&s, &["latte", "frappe", "macchiato", "mocha"])
            })
        }
    }
}

// ============================================================================
// Palette data
// ============================================================================

static LATTE: Palette = Palette {
    // Base colors
    base: Rgb::from_u32(0xeff1f5),
    mantle: Rgb::from_u32(0xe6e9ef),
    crust: Rgb::from_u32(0xdce0e8),

    // Text colors
    text: Rgb::from_u32(0x4c4f69),
    subtext1: Rgb::from_u32(0x5c5f77),
    subtext0: Rgb::from_u32(0x6c6f85),

    // Overlays
    overlay2: Rgb::from_u32(0x7c7f93),
    overlay1: Rgb::from_u32(0x8c8fa1),
    overlay0: Rgb::from_u32(0x9ca0b0),

    // Surfaces
    surface2: Rgb::from_u32(0xacb0be),
    surface1: Rgb::from_u32(0xbcc0cc),
    surface0: Rgb::from_u32(0xccd0da),

    // Accents
    blue: Rgb::from_u32(0x1e66f5),
    lavender: Rgb::from_u32(0x7287fd),
    sapphire: Rgb::from_u32(0x209fb5),
    sky: Rgb::from_u32(0x04a5e5),
    teal: Rgb::from_u32(0x179299),
    green: Rgb::from_u32(0x40a02b),
    yellow: Rgb::from_u32(0xdf8e1d),
    peach: Rgb::from_u32(0xfe640b),
    maroon: Rgb::from_u32(0xe64553),
    red: Rgb::from_u32(0xd20f39),
    mauve: Rgb::from_u32(0x8839ef),
    pink: Rgb::from_u32(0xea76cb),
    flamingo: Rgb::from_u32(0xdd7878),
    rosewater: Rgb::from_u32(0xdc8a78),
};

static FRAPPE: Palette = Palette {
    // Base colors
    base: Rgb::from_u32(0x303446),
    mantle: Rgb::from_u32(0x292c3c),
    crust: Rgb::from_u32(0x232634),

    // Text colors
    text: Rgb::from_u32(0xc6d0f5),
    subtext1: Rgb::from_u32(0xb5bfe2),
    subtext0: Rgb::from_u32(0xa5adce),

    // Overlays
    overlay2: Rgb::from_u32(0x949cbb),
    overlay1: Rgb::from_u32(0x838ba7),
    overlay0: Rgb::from_u32(0x737994),

    // Surfaces
    surface2: Rgb::from_u32(0x626880),
    surface1: Rgb::from_u32(0x51576d),
    surface0: Rgb::from_u32(0x414559),

    // Accents
    blue: Rgb::from_u32(0x8caaee),
    lavender: Rgb::from_u32(0xbabbf1),
    sapphire: Rgb::from_u32(0x85c1dc),
    sky: Rgb::from_u32(0x99d1db),
    teal: Rgb::from_u32(0x81c8be),
    green: Rgb::from_u32(0xa6d189),
    yellow: Rgb::from_u32(0xe5c890),
    peach: Rgb::from_u32(0xef9f76),
    maroon: Rgb::from_u32(0xea999c),
    red: Rgb::from_u32(0xe78284),
    mauve: Rgb::from_u32(0xca9ee6),
    pink: Rgb::from_u32(0xf4b8e4),
    flamingo: Rgb::from_u32(0xeebebe),
    rosewater: Rgb::from_u32(0xf2d5cf),
};

static MACCHIATO: Palette = Palette {
    // Base colors
    base: Rgb::from_u32(0x24273a),
    mantle: Rgb::from_u32(0x1e2030),
    crust: Rgb::from_u32(0x181926),

    // Text colors
    text: Rgb::from_u32(0xcad3f5),
    subtext1: Rgb::from_u32(0xb8c0e0),
    subtext0: Rgb::from_u32(0xa5adcb),

    // Overlays
    overlay2: Rgb::from_u32(0x939ab7),
    overlay1: Rgb::from_u32(0x8087a2),
    overlay0: Rgb::from_u32(0x6e738d),

    // Surfaces
    surface2: Rgb::from_u32(0x5b6078),
    surface1: Rgb::from_u32(0x494d64),
    surface0: Rgb::from_u32(0x363a4f),

    // Accents
    blue: Rgb::from_u32(0x8aadf4),
    lavender: Rgb::from_u32(0xb7bdf8),
    sapphire: Rgb::from_u32(0x7dc4e4),
    sky: Rgb::from_u32(0x91d7e3),
    teal: Rgb::from_u32(0x8bd5ca),
    green: Rgb::from_u32(0xa6da95),
    yellow: Rgb::from_u32(0xeed49f),
    peach: Rgb::from_u32(0xf5a97f),
    maroon: Rgb::from_u32(0xee99a0),
    red: Rgb::from_u32(0xed8796),
    mauve: Rgb::from_u32(0xc6a0f6),
    pink: Rgb::from_u32(0xf5bde6),
    flamingo: Rgb::from_u32(0xf0c6c6),
    rosewater: Rgb::from_u32(0xf4dbd6),
};

static MOCHA: Palette = Palette {
    // Base colors
    base: Rgb::from_u32(0x1e1e2e),
    mantle: Rgb::from_u32(0x181825),
    crust: Rgb::from_u32(0x11111b),

    // Text colors
    text: Rgb::from_u32(0xcdd6f4),
    subtext1: Rgb::from_u32(0xbac2de),
    subtext0: Rgb::from_u32(0xa6adc8),

    // Overlays
    overlay2: Rgb::from_u32(0x9399b2),
    overlay1: Rgb::from_u32(0x7f849c),
    overlay0: Rgb::from_u32(0x6c7086),

    // Surfaces
    surface2: Rgb::from_u32(0x585b70),
    surface1: Rgb::from_u32(0x45475a),
    surface0: Rgb::from_u32(0x313244),

    // Accents
    blue: Rgb::from_u32(0x89b4fa),
    lavender: Rgb::from_u32(0xb4befe),
    sapphire: Rgb::from_u32(0x74c7ec),
    sky: Rgb::from_u32(0x89dceb),
    teal: Rgb::from_u32(0x94e2d5),
    green: Rgb::from_u32(0xa6e3a1),
    yellow: Rgb::from_u32(0xf9e2af),
    peach: Rgb::from_u32(0xfab387),
    maroon: Rgb::from_u32(0xeba0ac),
    red: Rgb::from_u32(0xf38ba8),
    mauve: Rgb::from_u32(0xcba6f7),
    pink: Rgb::from_u32(0xf5c2e7),
    flamingo: Rgb::from_u32(0xf2cdcd),
    rosewater: Rgb::from_u32(0xf5e0dc),
};
