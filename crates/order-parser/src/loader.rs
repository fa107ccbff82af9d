use crate::catalog::{MenuCatalog, MenuConfig};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// A validated menu ready for use by the parser and price calculator
#[derive(Debug, Clone)]
pub struct LoadedMenu {
    pub config: MenuConfig,
    pub catalog: MenuCatalog,
}

pub fn load_menu_str(raw: &str) -> anyhow::Result<LoadedMenu> {
    let config: MenuConfig = serde_yaml::from_str(raw).context("parsing menu yaml")?;
    build_menu(config)
}

pub fn load_menu_file(path: impl AsRef<Path>) -> anyhow::Result<LoadedMenu> {
    let path = path.as_ref();
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading menu: {}", path.display()))?;
    let config: MenuConfig =
        serde_yaml::from_str(&raw).with_context(|| format!("parsing yaml: {}", path.display()))?;
    build_menu(config).with_context(|| format!("validating menu: {}", path.display()))
}

fn build_menu(config: MenuConfig) -> anyhow::Result<LoadedMenu> {
    config.pricing.validate()?;
    let catalog = MenuCatalog::new(&config)?;
    tracing::info!(
        items = config.items.len(),
        sizes = config.sizes.len(),
        "menu loaded"
    );
    Ok(LoadedMenu { config, catalog })
}
