//! CSS generation for webview hosts.
//!
//! Hosts that present through a document tree consume flavors as custom
//! properties on the root element. This module renders those declarations
//! as text, for hosts that inject a stylesheet instead of setting variables
//! one at a time.

use crema_palette::{Flavor, Role};

use crate::controller::THEME_ATTRIBUTE;

/// Prefix for generated custom property names.
pub const VARIABLE_PREFIX: &str = "--ctp-";

/// The custom property name for a role, e.g. `--ctp-base`.
pub fn variable_name(role: Role) -> String {
    format!("{}{}", VARIABLE_PREFIX, role.as_str())
}

/// Render one flavor as a `:root` declaration block.
pub fn root_block(flavor: Flavor) -> String {
    let mut out = String::new();
    push_block(&mut out, ":root", flavor);
    out
}

/// Render all flavors as a stylesheet.
///
/// The default flavor doubles as the bare `:root` rule, so a document picks
/// it up before any theme attribute is set; each flavor then gets a rule
/// scoped to its `data-theme` value.
pub fn stylesheet() -> String {
    let mut out = String::new();
    push_block(&mut out, ":root", Flavor::DEFAULT);

    for flavor in Flavor::ALL {
        out.push('\n');
        let selector = format!(":root[{}=\"{}\"]", THEME_ATTRIBUTE, flavor.identifier());
        push_block(&mut out, &selector, flavor);
    }

    out
}

fn push_block(out: &mut String, selector: &str, flavor: Flavor) {
    out.push_str(selector);
    out.push_str(" {\n");
    for (role, color) in flavor.palette().iter() {
        out.push_str(&format!("  {}: {};\n", variable_name(role), color));
    }
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_names_carry_the_prefix() {
        assert_eq!(variable_name(Role::Base), "--ctp-base");
        assert_eq!(variable_name(Role::Subtext1), "--ctp-subtext1");
        assert_eq!(variable_name(Role::Rosewater), "--ctp-rosewater");
    }

    #[test]
    fn root_block_contains_every_declaration() {
        let block = root_block(Flavor::Mocha);

        assert!(block.starts_with(":root {"));
        assert!(block.trim_end().ends_with('}'));
        assert_eq!(block.matches(VARIABLE_PREFIX).count(), 26);
        assert!(block.contains("--ctp-base: #1e1e2e;"));
        assert!(block.contains("--ctp-rosewater: #f5e0dc;"));
    }

    #[test]
    fn stylesheet_scopes_every_flavor() {
        let sheet = stylesheet();

        for flavor in Flavor::ALL {
            let selector = format!(":root[data-theme=\"{}\"]", flavor.identifier());
            assert!(sheet.contains(&selector), "missing {}", selector);
        }
        // Default block plus four attribute-scoped blocks.
        assert_eq!(sheet.matches("--ctp-base:").count(), 5);
        assert!(sheet.contains("--ctp-base: #1e1e2e;"));
        assert!(sheet.contains("--ctp-base: #eff1f5;"));
    }
}
