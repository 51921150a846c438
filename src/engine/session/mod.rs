//! Streaming session registry.
//!
//! A remote-control layer outside this crate inserts the registry resource
//! and consumes the list of registered rigs. Registration is explicit
//! dependency injection: when the resource is absent the rig systems skip
//! it silently, fire-and-forget.

use bevy::prelude::*;

use crate::engine::camera::free_fly::FreeFlyRig;

/// Ordered list of camera-rig entities available to a streaming session.
#[derive(Resource, Debug, Default)]
pub struct SessionRegistry {
    controllers: Vec<Entity>,
}

impl SessionRegistry {
    /// Registers a rig entity. Duplicate adds are ignored.
    pub fn add_controller(&mut self, entity: Entity) {
        if !self.controllers.contains(&entity) {
            self.controllers.push(entity);
        }
    }

    /// Unregisters a rig entity. Unknown entities are a no-op.
    pub fn remove_controller(&mut self, entity: Entity) {
        self.controllers.retain(|registered| *registered != entity);
    }

    pub fn controllers(&self) -> &[Entity] {
        &self.controllers
    }

    pub fn is_registered(&self, entity: Entity) -> bool {
        self.controllers.contains(&entity)
    }
}

/// Registers newly activated rigs with the session registry, if present.
pub fn register_added_rigs(
    added: Query<Entity, Added<FreeFlyRig>>,
    registry: Option<ResMut<SessionRegistry>>,
) {
    let Some(mut registry) = registry else {
        return;
    };
    for entity in &added {
        registry.add_controller(entity);
        info!("Registered camera rig {entity} with the session registry");
    }
}

/// Unregisters rigs whose component was removed or whose entity despawned.
pub fn unregister_removed_rigs(
    mut removed: RemovedComponents<FreeFlyRig>,
    registry: Option<ResMut<SessionRegistry>>,
) {
    let Some(mut registry) = registry else {
        return;
    };
    for entity in removed.read() {
        registry.remove_controller(entity);
        info!("Unregistered camera rig {entity} from the session registry");
    }
}
