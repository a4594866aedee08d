//! Movement domain: force-driven 2D locomotion with a single grounded jump.
//!
//! Schedule layout:
//! - `PreUpdate`: sample input, resolve body handles, re-clamp edited tuning.
//! - `FixedUpdate`: ground tracking from last step's contacts, then horizontal force.
//! - `Update`: jump impulse.
//!
//! Ground state is written on fixed steps and read on frames, so a jump may see a value
//! from a different step than the latest force. That is accepted.

mod bootstrap;
mod components;
mod dev;
mod errors;
mod resources;
mod systems;
mod tick;

pub use components::{
    DEFAULT_FORCE, DEFAULT_JUMP_IMPULSE, GameLayer, GroundState, MIN_MAGNITUDE, Mover, MoverBody,
    clamp_magnitude,
};
pub use errors::MoverError;
pub use resources::{MoverBindings, MoverInput};
pub use tick::{ContactSignal, TickOutput, TickPhase, axis_from_keys};

use bevy::input::InputSystems;
use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_horizontal_force, apply_jump, read_input, resolve_mover_bodies, track_contact_end,
    track_contact_persist, validate_movers,
};

/// Mover systems only. Needs avian's `PhysicsPlugins` and Bevy's input.
pub struct MoverPlugin;

impl Plugin for MoverPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Mover>()
            .register_type::<MoverBody>()
            .register_type::<GroundState>()
            .register_type::<MoverBindings>()
            .init_resource::<MoverInput>()
            .init_resource::<MoverBindings>()
            .add_systems(
                PreUpdate,
                (
                    read_input.after(InputSystems),
                    (resolve_mover_bodies, validate_movers).chain(),
                ),
            )
            .add_systems(
                FixedUpdate,
                (
                    (track_contact_persist, track_contact_end).chain(),
                    apply_horizontal_force,
                )
                    .chain(),
            )
            .add_systems(Update, apply_jump);
    }
}

/// Playable scene: test room, player, and dev tooling.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MoverPlugin)
            .add_systems(Startup, (spawn_test_room, spawn_player));

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            (dev::reload_mover_config, dev::dump_mover_state),
        );
    }
}
