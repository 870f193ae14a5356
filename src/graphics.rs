use bevy::prelude::*;

use crate::ship::CamTarget;

pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d with default scale shows roughly the full window area
    commands.spawn(Camera2d);
}

/// Keeps the camera centred on the current [`CamTarget`].
///
/// With no target (or several), the camera stays put; target selection is
/// whoever holds the component, not this system's problem.
pub fn camera_follow_system(
    target: Query<&Transform, (With<CamTarget>, Without<Camera2d>)>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(target_transform) = target.single() else {
        return;
    };
    for mut camera_transform in cameras.iter_mut() {
        camera_transform.translation.x = target_transform.translation.x;
        camera_transform.translation.y = target_transform.translation.y;
    }
}
