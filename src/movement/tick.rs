//! Movement domain: engine-free locomotion step.
//!
//! The Bevy systems collect the inputs and apply the returned forces; everything that
//! decides *what* happens on a tick lives here so it can be driven without a physics world.

use bevy::prelude::*;

use crate::movement::{GroundState, Mover, MoverInput};

/// Which host loop is calling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPhase {
    /// Fixed-rate simulation step: horizontal drive.
    FixedStep,
    /// Variable-rate frame: jump.
    Frame,
}

/// What a tick wants done to the body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutput {
    /// Continuous force, added to whatever the body has accumulated this step.
    pub force: Vec2,
    /// Instantaneous velocity change.
    pub impulse: Option<Vec2>,
}

/// Contact notification from the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSignal {
    /// A collider is still touching this step.
    Persist,
    /// A previously touching collider separated.
    End,
}

impl GroundState {
    /// Apply one contact signal.
    ///
    /// `End` clears the state even if other contacts still touch; a one-step false
    /// negative is possible with several contacts.
    pub fn apply(&mut self, signal: ContactSignal) {
        *self = match signal {
            ContactSignal::Persist => GroundState::Grounded,
            ContactSignal::End => GroundState::Airborne,
        };
    }
}

impl Mover {
    /// Horizontal drive for an axis value.
    pub fn horizontal_force(&self, axis: f32) -> Vec2 {
        Vec2::new(axis * self.force(), 0.0)
    }

    /// Jump impulse, if one is due this frame.
    pub fn jump(&self, ground: GroundState, jump_just_pressed: bool) -> Option<Vec2> {
        (ground.is_grounded() && jump_just_pressed).then(|| Vec2::new(0.0, self.jump_impulse()))
    }

    pub fn tick(&self, phase: TickPhase, input: &MoverInput, ground: GroundState) -> TickOutput {
        match phase {
            TickPhase::FixedStep => TickOutput {
                force: self.horizontal_force(input.axis),
                impulse: None,
            },
            TickPhase::Frame => TickOutput {
                force: Vec2::ZERO,
                impulse: self.jump(ground, input.jump_just_pressed),
            },
        }
    }
}

/// Axis value from two held keys. Both held cancel out.
pub fn axis_from_keys(right_held: bool, left_held: bool) -> f32 {
    let mut axis = 0.0;
    if right_held {
        axis += 1.0;
    }
    if left_held {
        axis -= 1.0;
    }
    axis
}
