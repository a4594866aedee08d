//! Movement domain: force and impulse application on the driven bodies.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GroundState, Mover, MoverBody, MoverInput, TickPhase};

/// Fixed step: horizontal drive. Forces accumulate for this step only.
pub(crate) fn apply_horizontal_force(
    input: Res<MoverInput>,
    movers: Query<(&Mover, &MoverBody, &GroundState)>,
    mut bodies: Query<Forces>,
) {
    for (mover, body, ground) in &movers {
        let output = mover.tick(TickPhase::FixedStep, &input, *ground);
        // Zero force would still wake a sleeping body.
        if output.force == Vec2::ZERO {
            continue;
        }

        let Ok(mut forces) = bodies.get_mut(body.0) else {
            continue;
        };
        forces.apply_force(output.force);
    }
}

/// Frame: single jump, only when grounded and the key was just pressed.
pub(crate) fn apply_jump(
    input: Res<MoverInput>,
    movers: Query<(Entity, &Mover, &MoverBody, &GroundState)>,
    mut bodies: Query<Forces>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (entity, mover, body, ground) in &movers {
        let Some(impulse) = mover.tick(TickPhase::Frame, &input, *ground).impulse else {
            debug!("Mover {} jump dropped: airborne", entity);
            continue;
        };

        let Ok(mut forces) = bodies.get_mut(body.0) else {
            continue;
        };
        forces.apply_linear_impulse(impulse);
        debug!("Mover {} jumped: impulse={}", entity, impulse);
    }
}
