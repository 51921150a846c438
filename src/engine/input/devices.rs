use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

/// The gamepad entity the rig reads. `None` until a pad is claimed.
#[derive(Resource, Debug, Default)]
pub struct ActiveGamepad(pub Option<Entity>);

/// Resolves the pointer, keyboard, and touch device slots.
///
/// `init_resource` keeps the device the host app already routes input to
/// and default-constructs a virtual one otherwise, so resolution never
/// fails. A required resource that is somehow absent at tick time panics
/// at the use site, which is the intended fatal behavior.
pub fn resolve_input_devices(app: &mut App) {
    app.init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<Touches>()
        .init_resource::<AccumulatedMouseMotion>()
        .init_resource::<AccumulatedMouseScroll>()
        .init_resource::<ActiveGamepad>();
}

/// Forces the first connected gamepad to be the rig's controller, and
/// re-claims when the held pad disappears. Leaves the slot empty when no
/// pad is connected; the rig then skips gamepad contributions.
pub fn claim_active_gamepad(
    mut active: ResMut<ActiveGamepad>,
    gamepads: Query<Entity, With<Gamepad>>,
) {
    match active.0 {
        Some(held) if gamepads.contains(held) => {}
        _ => {
            let previous = active.0.take();
            active.0 = gamepads.iter().next();
            match (previous, active.0) {
                (_, Some(claimed)) => info!("Claimed gamepad {claimed} for camera control"),
                (Some(lost), None) => warn!("Lost active gamepad {lost}"),
                (None, None) => {}
            }
        }
    }
}

/// Reads a two-axis stick, or `None` when the pad lacks either axis.
pub fn stick_value(gamepad: &Gamepad, x: GamepadAxis, y: GamepadAxis) -> Option<Vec2> {
    Some(Vec2::new(gamepad.get(x)?, gamepad.get(y)?))
}
