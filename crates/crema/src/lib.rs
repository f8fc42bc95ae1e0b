//! Flavor theming with persistent selection.
//!
//! `crema` applies Catppuccin flavors to a host application:
//!
//! - **Registry**: the four built-in flavors come from [`crema_palette`]
//!   and are re-exported here
//! - **Controller**: [`ThemeController`] projects a flavor onto a
//!   [`StyleRoot`] as `--ctp-*` variables and records the selection
//! - **Persistence**: [`SelectionStore`] keeps the last requested
//!   identifier under the `selectedTheme` key; [`JsonFileStore`] stores it
//!   in a JSON settings file
//! - **CSS**: the [`css`] module renders flavors as `:root` blocks for
//!   hosts that inject stylesheets wholesale
//!
//! Unknown identifiers never fail an application: the controller falls back
//! to [`Flavor::DEFAULT`] and logs the substitution.
//!
//! # Example
//!
//! ```
//! use crema::{Flavor, MemoryStore, MemoryStyleRoot, ThemeController};
//!
//! let controller = ThemeController::new(MemoryStyleRoot::new(), MemoryStore::new());
//!
//! // Startup: restore whatever the last session selected.
//! let restored = controller.restore().unwrap();
//! assert_eq!(restored, Flavor::Mocha);
//!
//! // The user picks a flavor.
//! controller.apply("latte").unwrap();
//! assert_eq!(
//!     controller.root().attribute("data-theme").as_deref(),
//!     Some("latte"),
//! );
//! ```

pub mod css;

mod controller;
mod error;
mod root;
mod store;

pub use controller::{THEME_ATTRIBUTE, ThemeController};
pub use css::VARIABLE_PREFIX;
pub use error::{Error, Result};
pub use root::{MemoryStyleRoot, StyleRoot};
pub use store::{JsonFileStore, MemoryStore, SELECTION_KEY, SelectionStore};

// Re-export the registry so hosts can depend on this crate alone.
pub use crema_palette::{Flavor, Palette, ParseFlavorError, Rgb, Role};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::controller::{THEME_ATTRIBUTE, ThemeController};
    pub use crate::css;
    pub use crate::error::{Error, Result};
    pub use crate::root::{MemoryStyleRoot, StyleRoot};
    pub use crate::store::{JsonFileStore, MemoryStore, SELECTION_KEY, SelectionStore};
    pub use crema_palette::{Flavor, Palette, Rgb, Role};
}
