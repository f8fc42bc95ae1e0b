//! Theme application and restoration.

use parking_lot::Mutex;

use crema_palette::Flavor;

use crate::css;
use crate::error::Result;
use crate::root::StyleRoot;
use crate::store::SelectionStore;

/// Root attribute recording the requested theme identifier.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Applies flavors to a style root and keeps the selection persisted.
///
/// The controller is stateless apart from its collaborators: the active
/// theme lives in the style root, the durable selection in the store.
///
/// # Example
///
/// ```
/// use crema::{MemoryStore, MemoryStyleRoot, ThemeController};
///
/// let controller = ThemeController::new(MemoryStyleRoot::new(), MemoryStore::new());
///
/// let flavor = controller.apply("latte").unwrap();
/// assert_eq!(flavor.identifier(), "latte");
/// assert_eq!(
///     controller.root().variable("--ctp-base").as_deref(),
///     Some("#eff1f5"),
/// );
/// ```
pub struct ThemeController<R: StyleRoot, S: SelectionStore> {
    root: R,
    store: S,
    /// Serializes apply/restore so variable writes never interleave.
    write_guard: Mutex<()>,
}

impl<R: StyleRoot, S: SelectionStore> ThemeController<R, S> {
    /// Create a controller over a style root and a selection store.
    pub fn new(root: R, store: S) -> Self {
        Self {
            root,
            store,
            write_guard: Mutex::new(()),
        }
    }

    /// The style root this controller writes to.
    pub fn root(&self) -> &R {
        &self.root
    }

    /// The selection store this controller persists to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply the flavor named by `requested`.
    ///
    /// An identifier that matches no registered flavor falls back to
    /// [`Flavor::DEFAULT`]; the substitution is visible only through the
    /// returned flavor. The root attribute and the persisted selection both
    /// record `requested` as given, so a later [`restore`](Self::restore)
    /// of an unknown identifier lands on the default.
    ///
    /// Returns the flavor whose palette was written.
    ///
    /// # Errors
    ///
    /// Only persistence failures surface; style writes are infallible. The
    /// style root already holds the new palette when a persistence error is
    /// returned.
    pub fn apply(&self, requested: &str) -> Result<Flavor> {
        let flavor = Flavor::from_identifier(requested).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown theme '{}', falling back to '{}'",
                requested,
                Flavor::DEFAULT.identifier()
            );
            Flavor::DEFAULT
        });

        let _guard = self.write_guard.lock();

        for (role, color) in flavor.palette().iter() {
            self.root
                .set_variable(&css::variable_name(role), &color.to_string());
        }
        self.root.set_attribute(THEME_ATTRIBUTE, requested);
        self.store.store(requested)?;

        tracing::debug!("Applied theme '{}' (requested '{}')", flavor, requested);
        Ok(flavor)
    }

    /// Apply a flavor directly, bypassing identifier resolution.
    ///
    /// Equivalent to `apply(flavor.identifier())`; never falls back.
    pub fn apply_flavor(&self, flavor: Flavor) -> Result<Flavor> {
        self.apply(flavor.identifier())
    }

    /// Restore the persisted selection, falling back to the default flavor.
    ///
    /// Applies whichever flavor the persisted identifier resolves to. An
    /// absent or unregistered selection yields [`Flavor::DEFAULT`] and, as a
    /// side effect of the apply, rewrites the persisted value to the default
    /// identifier.
    ///
    /// # Errors
    ///
    /// Store failures propagate, both from the load and from re-persisting
    /// the selection.
    pub fn restore(&self) -> Result<Flavor> {
        let flavor = match self.store.load()? {
            Some(id) => match Flavor::from_identifier(&id) {
                Some(flavor) => flavor,
                None => {
                    tracing::warn!(
                        "Persisted theme '{}' is not registered, using '{}'",
                        id,
                        Flavor::DEFAULT.identifier()
                    );
                    Flavor::DEFAULT
                }
            },
            None => {
                tracing::debug!(
                    "No persisted theme, using '{}'",
                    Flavor::DEFAULT.identifier()
                );
                Flavor::DEFAULT
            }
        };

        self.apply_flavor(flavor)
    }
}

// Ensure the controller is Send + Sync over thread-safe collaborators
static_assertions::assert_impl_all!(
    ThemeController<crate::MemoryStyleRoot, crate::MemoryStore>: Send, Sync
);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crema_palette::Role;

    use super::*;
    use crate::error::Error;
    use crate::root::MemoryStyleRoot;
    use crate::store::MemoryStore;

    fn controller() -> ThemeController<MemoryStyleRoot, MemoryStore> {
        ThemeController::new(MemoryStyleRoot::new(), MemoryStore::new())
    }

    #[test]
    fn apply_writes_every_variable() {
        let c = controller();
        let flavor = c.apply("latte").unwrap();

        assert_eq!(flavor, Flavor::Latte);
        assert_eq!(c.root().variable_count(), 26);
        for (role, color) in Flavor::Latte.palette().iter() {
            assert_eq!(
                c.root().variable(&css::variable_name(role)),
                Some(color.to_string()),
                "role {}",
                role
            );
        }
    }

    #[test]
    fn apply_sets_attribute_to_requested() {
        let c = controller();
        c.apply("frappe").unwrap();

        assert_eq!(
            c.root().attribute(THEME_ATTRIBUTE).as_deref(),
            Some("frappe")
        );
    }

    #[test]
    fn apply_persists_requested() {
        let c = controller();
        c.apply("macchiato").unwrap();

        assert_eq!(c.store().load().unwrap().as_deref(), Some("macchiato"));
    }

    #[test]
    fn unknown_identifier_falls_back_to_default_palette() {
        let c = controller();
        let flavor = c.apply("solarized").unwrap();

        assert_eq!(flavor, Flavor::Mocha);
        assert_eq!(c.root().variable("--ctp-base").as_deref(), Some("#1e1e2e"));
        // The requested string is still recorded verbatim.
        assert_eq!(
            c.root().attribute(THEME_ATTRIBUTE).as_deref(),
            Some("solarized")
        );
        assert_eq!(c.store().load().unwrap().as_deref(), Some("solarized"));
    }

    #[test]
    fn apply_is_idempotent() {
        let once = controller();
        once.apply("mocha").unwrap();

        let twice = controller();
        twice.apply("mocha").unwrap();
        twice.apply("mocha").unwrap();

        assert_eq!(once.root().variable_count(), twice.root().variable_count());
        for role in Role::ALL {
            let name = css::variable_name(role);
            assert_eq!(once.root().variable(&name), twice.root().variable(&name));
        }
        assert_eq!(
            once.root().attribute(THEME_ATTRIBUTE),
            twice.root().attribute(THEME_ATTRIBUTE)
        );
    }

    #[test]
    fn reapplying_overwrites_previous_flavor() {
        let c = controller();
        c.apply("latte").unwrap();
        c.apply("mocha").unwrap();

        assert_eq!(c.root().variable_count(), 26);
        assert_eq!(c.root().variable("--ctp-base").as_deref(), Some("#1e1e2e"));
    }

    #[test]
    fn apply_flavor_never_falls_back() {
        let c = controller();
        for flavor in Flavor::ALL {
            assert_eq!(c.apply_flavor(flavor).unwrap(), flavor);
            assert_eq!(
                c.root().attribute(THEME_ATTRIBUTE).as_deref(),
                Some(flavor.identifier())
            );
        }
    }

    #[test]
    fn restore_without_selection_applies_default() {
        let c = controller();
        let flavor = c.restore().unwrap();

        assert_eq!(flavor, Flavor::Mocha);
        assert_eq!(c.root().attribute(THEME_ATTRIBUTE).as_deref(), Some("mocha"));
        assert_eq!(c.root().variable("--ctp-text").as_deref(), Some("#cdd6f4"));
        assert_eq!(c.store().load().unwrap().as_deref(), Some("mocha"));
    }

    #[test]
    fn restore_round_trips_a_selection() {
        let store = Arc::new(MemoryStore::new());

        let first = ThemeController::new(MemoryStyleRoot::new(), store.clone());
        first.apply("frappe").unwrap();

        let second = ThemeController::new(MemoryStyleRoot::new(), store);
        let flavor = second.restore().unwrap();

        assert_eq!(flavor, Flavor::Frappe);
        assert_eq!(
            second.root().variable("--ctp-base").as_deref(),
            Some("#303446")
        );
        assert_eq!(
            second.root().attribute(THEME_ATTRIBUTE).as_deref(),
            Some("frappe")
        );
    }

    #[test]
    fn restore_heals_a_stale_unknown_selection() {
        let store = Arc::new(MemoryStore::new());

        let first = ThemeController::new(MemoryStyleRoot::new(), store.clone());
        first.apply("no-such-theme").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("no-such-theme"));

        let second = ThemeController::new(MemoryStyleRoot::new(), store.clone());
        let flavor = second.restore().unwrap();

        assert_eq!(flavor, Flavor::Mocha);
        // The restore rewrote the stale value with the default identifier.
        assert_eq!(store.load().unwrap().as_deref(), Some("mocha"));
    }

    struct FailingStore;

    impl SelectionStore for FailingStore {
        fn load(&self) -> Result<Option<String>> {
            Err(Error::io(
                "/nowhere/settings.json",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ))
        }

        fn store(&self, _identifier: &str) -> Result<()> {
            Err(Error::io(
                "/nowhere/settings.json",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ))
        }
    }

    #[test]
    fn store_failures_propagate() {
        let c = ThemeController::new(MemoryStyleRoot::new(), FailingStore);

        assert!(c.apply("mocha").is_err());
        assert!(c.restore().is_err());
        // Style writes land before persistence runs.
        assert_eq!(c.root().variable_count(), 26);
    }

    #[test]
    fn concurrent_applies_never_interleave() {
        let c = Arc::new(controller());

        let handles: Vec<_> = Flavor::ALL
            .iter()
            .map(|&flavor| {
                let c = c.clone();
                std::thread::spawn(move || c.apply_flavor(flavor).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Whichever apply finished last, the root holds one complete palette.
        let attribute = c.root().attribute(THEME_ATTRIBUTE).unwrap();
        let flavor = Flavor::from_identifier(&attribute).unwrap();
        assert_eq!(c.root().variable_count(), 26);
        for (role, color) in flavor.palette().iter() {
            assert_eq!(
                c.root().variable(&css::variable_name(role)),
                Some(color.to_string())
            );
        }
    }
}
