//! Cycles through every flavor and prints the resulting style state.

use crema::{Flavor, MemoryStore, MemoryStyleRoot, THEME_ATTRIBUTE, ThemeController, css};

fn main() -> crema::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let controller = ThemeController::new(MemoryStyleRoot::new(), MemoryStore::new());

    let restored = controller.restore()?;
    println!(
        "restored flavor: {} ({})\n",
        restored,
        restored.display_name()
    );

    for flavor in Flavor::ALL {
        controller.apply_flavor(flavor)?;
        println!(
            "{:<10} {}={:<10} --ctp-base={}",
            flavor.display_name(),
            THEME_ATTRIBUTE,
            controller
                .root()
                .attribute(THEME_ATTRIBUTE)
                .unwrap_or_default(),
            controller.root().variable("--ctp-base").unwrap_or_default(),
        );
    }

    // Unknown names fall back to the default flavor.
    let fallback = controller.apply("solarized")?;
    println!("\napply(\"solarized\") -> {}", fallback.display_name());

    println!("\n{}", css::stylesheet());
    Ok(())
}
