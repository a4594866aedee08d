//! Content domain: data-driven tuning loaded from assets/data.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::MoverConfig;
pub use loader::{load_mover_config, parse_single};
pub use validation::validate_mover_config;

use bevy::prelude::*;
use std::path::Path;

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoverConfig>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load mover tuning, falling back to defaults when the file is missing or broken.
fn load_content(mut config: ResMut<MoverConfig>) {
    *config = read_mover_config(Path::new(CONTENT_DIR));
}

/// Read and validate mover.ron, logging every problem. Never fails.
pub fn read_mover_config(base_path: &Path) -> MoverConfig {
    let config = match load_mover_config(base_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default mover tuning", e);
            return MoverConfig::default();
        }
    };

    for error in validate_mover_config(&config) {
        warn!("{}", error);
    }

    info!(
        "Mover tuning loaded: force={}, jump_impulse={}",
        config.force, config.jump_impulse
    );
    config
}
