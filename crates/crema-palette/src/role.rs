//! Semantic color roles.

use std::fmt;

/// A semantic color slot that every flavor assigns a value.
///
/// Presentation logic refers to roles, never to raw colors, so switching
/// flavors restyles everything consistently. The set of roles is fixed and
/// identical across flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    // Base colors
    Base,
    Mantle,
    Crust,

    // Text colors
    Text,
    Subtext1,
    Subtext0,

    // Overlays
    Overlay2,
    Overlay1,
    Overlay0,

    // Surfaces
    Surface2,
    Surface1,
    Surface0,

    // Accents
    Blue,
    Lavender,
    Sapphire,
    Sky,
    Teal,
    Green,
    Yellow,
    Peach,
    Maroon,
    Red,
    Mauve,
    Pink,
    Flamingo,
    Rosewater,
}

impl Role {
    /// All roles, in registry order.
    pub const ALL: [Role; 26] = [
        Role::Base,
        Role::Mantle,
        Role::Crust,
        Role::Text,
        Role::Subtext1,
        Role::Subtext0,
        Role::Overlay2,
        Role::Overlay1,
        Role::Overlay0,
        Role::Surface2,
        Role::Surface1,
        Role::Surface0,
        Role::Blue,
        Role::Lavender,
        Role::Sapphire,
        Role::Sky,
        Role::Teal,
        Role::Green,
        Role::Yellow,
        Role::Peach,
        Role::Maroon,
        Role::Red,
        Role::Mauve,
        Role::Pink,
        Role::Flamingo,
        Role::Rosewater,
    ];

    /// The stable lowercase name of this role, used for variable naming.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Base => "base",
            Role::Mantle => "mantle",
            Role::Crust => "crust",
            Role::Text => "text",
            Role::Subtext1 => "subtext1",
            Role::Subtext0 => "subtext0",
            Role::Overlay2 => "overlay2",
            Role::Overlay1 => "overlay1",
            Role::Overlay0 => "overlay0",
            Role::Surface2 => "surface2",
            Role::Surface1 => "surface1",
            Role::Surface0 => "surface0",
            Role::Blue => "blue",
            Role::Lavender => "lavender",
            Role::Sapphire => "sapphire",
            Role::Sky => "sky",
            Role::Teal => "teal",
            Role::Green => "green",
            Role::Yellow => "yellow",
            Role::Peach => "peach",
            Role::Maroon => "maroon",
            Role::Red => "red",
            Role::Mauve => "mauve",
            Role::Pink => "pink",
            Role::Flamingo => "flamingo",
            Role::Rosewater => "rosewater",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn all_covers_every_role_once() {
        let unique: HashSet<_> = Role::ALL.iter().collect();
        assert_eq!(unique.len(), Role::ALL.len());
    }

    #[test]
    fn names_are_lowercase_and_unique() {
        let mut seen = HashSet::new();
        for role in Role::ALL {
            let name = role.as_str();
            assert_eq!(name, name.to_lowercase());
            assert!(seen.insert(name), "duplicate role name {}", name);
        }
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Role::Base.to_string(), "base");
        assert_eq!(Role::Subtext1.to_string(), "subtext1");
        assert_eq!(Role::Rosewater.to_string(), "rosewater");
    }
}
