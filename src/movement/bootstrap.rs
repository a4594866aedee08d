//! Movement domain: player bootstrap from data-driven tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::MoverConfig;
use crate::movement::GameLayer;

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player Mover using the loaded tuning.
pub(crate) fn spawn_player(mut commands: Commands, config: Res<MoverConfig>) {
    let mover = config.to_mover();

    info!(
        "Spawning player: force={}, jump_impulse={}",
        mover.force(),
        mover.jump_impulse()
    );

    commands.spawn((
        mover,
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            Mass(1.0),
            NoAutoMass,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
