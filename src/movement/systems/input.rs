//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{MoverBindings, MoverInput, axis_from_keys};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<MoverBindings>,
    mut input: ResMut<MoverInput>,
) {
    input.axis = axis_from_keys(
        keyboard.pressed(bindings.right),
        keyboard.pressed(bindings.left),
    );
    input.jump_just_pressed = keyboard.just_pressed(bindings.jump);
}
