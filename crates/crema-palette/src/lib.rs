//! Catppuccin flavor registry for Crema.
//!
//! This crate is the data layer of the Crema theming system:
//!
//! - **Roles**: the fixed set of 26 semantic color slots ([`Role`])
//! - **Palettes**: a complete role-to-color assignment ([`Palette`])
//! - **Flavors**: the four built-in Catppuccin palettes with stable
//!   identifiers and a designated default ([`Flavor`])
//!
//! The registry is immutable and fully populated at compile time. Looking up
//! an unknown identifier returns `None`; deciding what to do about it is the
//! caller's business.
//!
//! # Example
//!
//! ```
//! use crema_palette::{Flavor, Role};
//!
//! let flavor = Flavor::from_identifier("latte").unwrap_or(Flavor::DEFAULT);
//! assert_eq!(flavor.display_name(), "Latte");
//! assert_eq!(flavor.palette().get(Role::Base).to_string(), "#eff1f5");
//! ```

mod flavor;
mod palette;
mod rgb;
mod role;

pub use flavor::{Flavor, ParseFlavorError};
pub use palette::Palette;
pub use rgb::Rgb;
pub use role::Role;
