//! Movement domain: input snapshot and key binding resources.

use bevy::prelude::*;

/// Per-frame input snapshot shared by every Mover.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MoverInput {
    /// Horizontal axis, one of -1, 0 or 1.
    pub axis: f32,
    /// True only on the frame the jump key went from released to pressed.
    pub jump_just_pressed: bool,
}

#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Resource)]
pub struct MoverBindings {
    pub right: KeyCode,
    pub left: KeyCode,
    pub jump: KeyCode,
}

impl Default for MoverBindings {
    fn default() -> Self {
        Self {
            right: KeyCode::ArrowRight,
            left: KeyCode::ArrowLeft,
            jump: KeyCode::ArrowUp,
        }
    }
}
