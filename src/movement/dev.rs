//! Movement domain: test room and debug-only tuning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // (size, position, color)
    let pieces = [
        // Ground
        (Vec2::new(800.0, 40.0), Vec2::new(0.0, -200.0), ground_color),
        // Walls
        (Vec2::new(40.0, 500.0), Vec2::new(-420.0, 50.0), wall_color),
        (Vec2::new(40.0, 500.0), Vec2::new(420.0, 50.0), wall_color),
        // Platforms, rising left to right
        (Vec2::new(150.0, 20.0), Vec2::new(-250.0, -100.0), platform_color),
        (Vec2::new(150.0, 20.0), Vec2::new(250.0, -30.0), platform_color),
        (Vec2::new(120.0, 20.0), Vec2::new(0.0, 40.0), platform_color),
    ];

    for (size, position, color) in pieces {
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        ));
    }
}

#[cfg(feature = "dev-tools")]
pub(crate) use tools::{dump_mover_state, reload_mover_config};

#[cfg(feature = "dev-tools")]
mod tools {
    use avian2d::prelude::*;
    use bevy::prelude::*;
    use serde::Serialize;
    use std::path::Path;

    use crate::content::{CONTENT_DIR, MoverConfig, read_mover_config};
    use crate::movement::{GroundState, Mover};

    pub const RELOAD_KEY: KeyCode = KeyCode::F5;
    pub const DUMP_KEY: KeyCode = KeyCode::F6;

    /// Serializable view of one Mover for the F6 dump.
    #[derive(Debug, Serialize)]
    pub struct MoverSnapshot {
        pub entity: String,
        pub force: f32,
        pub jump_impulse: f32,
        pub grounded: bool,
        pub velocity: [f32; 2],
    }

    /// F5: re-read mover.ron and push the values into every Mover.
    pub(crate) fn reload_mover_config(
        keyboard: Res<ButtonInput<KeyCode>>,
        mut config: ResMut<MoverConfig>,
        mut movers: Query<&mut Mover>,
    ) {
        if !keyboard.just_pressed(RELOAD_KEY) {
            return;
        }

        *config = read_mover_config(Path::new(CONTENT_DIR));
        for mut mover in &mut movers {
            mover.set_force(config.force);
            mover.set_jump_impulse(config.jump_impulse);
        }
        info!("Reloaded mover tuning into {} movers", movers.iter().count());
    }

    /// F6: log every Mover as JSON.
    pub(crate) fn dump_mover_state(
        keyboard: Res<ButtonInput<KeyCode>>,
        movers: Query<(Entity, &Mover, &GroundState, Option<&LinearVelocity>)>,
    ) {
        if !keyboard.just_pressed(DUMP_KEY) {
            return;
        }

        let snapshots: Vec<MoverSnapshot> = movers
            .iter()
            .map(|(entity, mover, ground, velocity)| MoverSnapshot {
                entity: entity.to_string(),
                force: mover.force(),
                jump_impulse: mover.jump_impulse(),
                grounded: ground.is_grounded(),
                velocity: velocity.map(|v| [v.x, v.y]).unwrap_or_default(),
            })
            .collect();

        match serde_json::to_string_pretty(&snapshots) {
            Ok(json) => info!("Mover state:\n{}", json),
            Err(e) => warn!("Failed to serialize mover state: {}", e),
        }
    }
}
