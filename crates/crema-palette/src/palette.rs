//! Flavor color palettes.

use crate::{Rgb, Role};

/// A complete assignment of every [`Role`] to a color.
///
/// One public field per role keeps the set closed: a palette cannot miss a
/// role or carry an extra one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    // Base colors
    pub base: Rgb,
    pub mantle: Rgb,
    pub crust: Rgb,

    // Text colors
    pub text: Rgb,
    pub subtext1: Rgb,
    pub subtext0: Rgb,

    // Overlays
    pub overlay2: Rgb,
    pub overlay1: Rgb,
    pub overlay0: Rgb,

    // Surfaces
    pub surface2: Rgb,
    pub surface1: Rgb,
    pub surface0: Rgb,

    // Accents
    pub blue: Rgb,
    pub lavender: Rgb,
    pub sapphire: Rgb,
    pub sky: Rgb,
    pub teal: Rgb,
    pub green: Rgb,
    pub yellow: Rgb,
    pub peach: Rgb,
    pub maroon: Rgb,
    pub red: Rgb,
    pub mauve: Rgb,
    pub pink: Rgb,
    pub flamingo: Rgb,
    pub rosewater: Rgb,
}

impl Palette {
    /// Get the color assigned to a role.
    pub const fn get(&self, role: Role) -> Rgb {
        match role {
            Role::Base => self.base,
            Role::Mantle => self.mantle,
            Role::Crust => self.crust,
            Role::Text => self.text,
            Role::Subtext1 => self.subtext1,
            Role::Subtext0 => self.subtext0,
            Role::Overlay2 => self.overlay2,
            Role::Overlay1 => self.overlay1,
            Role::Overlay0 => self.overlay0,
            Role::Surface2 => self.surface2,
            Role::Surface1 => self.surface1,
            Role::Surface0 => self.surface0,
            Role::Blue => self.blue,
            Role::Lavender => self.lavender,
            Role::Sapphire => self.sapphire,
            Role::Sky => self.sky,
            Role::Teal => self.teal,
            Role::Green => self.green,
            Role::Yellow => self.yellow,
            Role::Peach => self.peach,
            Role::Maroon => self.maroon,
            Role::Red => self.red,
            Role::Mauve => self.mauve,
            Role::Pink => self.pink,
            Role::Flamingo => self.flamingo,
            Role::Rosewater => self.rosewater,
        }
    }

    /// Iterate over all `(role, color)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Rgb)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

#[cfg(test)]
mod tests {
    use crate::Flavor;

    use super::*;

    #[test]
    fn iter_yields_every_role_in_order() {
        let palette = Flavor::Mocha.palette();
        let roles: Vec<Role> = palette.iter().map(|(role, _)| role).collect();

        assert_eq!(roles.as_slice(), Role::ALL.as_slice());
    }

    #[test]
    fn get_matches_fields() {
        let palette = Flavor::Latte.palette();

        assert_eq!(palette.get(Role::Base), palette.base);
        assert_eq!(palette.get(Role::Text), palette.text);
        assert_eq!(palette.get(Role::Rosewater), palette.rosewater);
    }
}
