//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::{DEFAULT_FORCE, DEFAULT_JUMP_IMPULSE, Mover};

// ============================================================================
// Mover tuning (mover.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MoverConfig {
    pub schema_version: u32,
    /// How much force to move with.
    pub force: f32,
    /// How strong the jump should be.
    pub jump_impulse: f32,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            force: DEFAULT_FORCE,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
        }
    }
}

impl MoverConfig {
    /// Build a validated Mover from this config.
    pub fn to_mover(&self) -> Mover {
        Mover::new(self.force, self.jump_impulse)
    }
}
