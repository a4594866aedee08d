//! Core domain: window-independent scene setup and physics scale.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Pixels per physics meter.
pub const LENGTH_UNIT: f32 = 100.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.1)))
            .insert_resource(Gravity(Vec2::NEG_Y * 9.81 * LENGTH_UNIT))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
