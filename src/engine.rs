//! The engine value: world, registry and frame driver.
//!
//! An [`Engine`] owns a bevy [`World`] holding every entity and resource, and
//! a single-threaded [`Schedule`] running the registered systems in
//! registration order. It is an ordinary owned value; there is no global
//! instance, and [`Engine::reinitialize`] consumes the old engine before
//! building a new one.
//!
//! # Frame
//!
//! Each call to [`Engine::step`] (or [`Engine::frame`] while running):
//!
//! 1. updates [`WorldTime`] with the elapsed milliseconds,
//! 2. samples the input collaborator into [`InputState`],
//! 3. captures the [`FrameSnapshot`] from the registry,
//! 4. clears the surface to the configured background color,
//! 5. runs every system, then applies deferred commands,
//! 6. updates [`FrameStats`] and honours pending stop requests.
//!
//! # Example
//!
//! ```no_run
//! use plinthengine::components::transform::Transform;
//! use plinthengine::engine::Engine;
//! use plinthengine::resources::engineconfig::EngineConfig;
//! use plinthengine::resources::input::NoInput;
//! use plinthengine::resources::surface::LogSurface;
//!
//! let mut engine = Engine::new(EngineConfig::new(), LogSurface::new())?;
//! engine.register_default_systems();
//! engine
//!     .create_entity("player")
//!     .add_component(Transform::new(100.0, 50.0))
//!     .add_tag("player");
//! engine.step(16.0, &NoInput);
//! # Ok::<(), plinthengine::error::EngineError>(())
//! ```

use std::time::Instant;

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{ExecutorKind, ScheduleBuildSettings};
use bevy_ecs::system::ScheduleSystem;
use log::{debug, info, warn};

use crate::components::tags::{EntityId, Tags};
use crate::entity::{EntityHandle, EntityView};
use crate::error::{EngineError, Result};
use crate::resources::collisionreport::CollisionReport;
use crate::resources::control::{EngineControl, FrameStats};
use crate::resources::engineconfig::EngineConfig;
use crate::resources::input::{InputSource, InputState};
use crate::resources::registry::EntityRegistry;
use crate::resources::snapshot::FrameSnapshot;
use crate::resources::surface::{DrawSurface, Surface};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation_system;
use crate::systems::collision::collision_system;
use crate::systems::input::update_input_state;
use crate::systems::movement::movement_system;
use crate::systems::physics::physics_system;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

/// One slot per registered system; each slot runs after the previous one.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
struct SystemSlot(usize);

pub struct Engine {
    world: World,
    schedule: Schedule,
    system_count: usize,
    running: bool,
    last_frame: Option<Instant>,
    torn_down: bool,
}

impl Engine {
    /// Build an engine for `config`, drawing through `surface`.
    ///
    /// Fails when the configuration is invalid or the surface cannot be
    /// configured for the requested viewport.
    pub fn new(config: EngineConfig, mut surface: impl DrawSurface + 'static) -> Result<Self> {
        config.validate()?;
        surface
            .configure(config.width, config.height)
            .map_err(EngineError::Surface)?;

        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(InputState::default());
        world.insert_resource(FrameSnapshot::default());
        world.insert_resource(EntityRegistry::new());
        world.insert_resource(CollisionReport::default());
        world.insert_resource(EngineControl::default());
        world.insert_resource(FrameStats::default());
        world.insert_resource(SystemsStore::new());
        world.insert_non_send_resource(Surface::new(surface));
        info!(
            "Engine ready: {}x{} @ {} fps, gravity {}",
            config.width, config.height, config.target_fps, config.gravity
        );
        world.insert_resource(config);

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        // Commands from every system are applied once, after the last one.
        schedule.set_build_settings(ScheduleBuildSettings {
            auto_insert_apply_deferred: false,
            ..Default::default()
        });

        Ok(Self {
            world,
            schedule,
            system_count: 0,
            running: false,
            last_frame: None,
            torn_down: false,
        })
    }

    /// Tear this engine down and build a fresh one.
    pub fn reinitialize(
        self,
        config: EngineConfig,
        surface: impl DrawSurface + 'static,
    ) -> Result<Self> {
        drop(self);
        Engine::new(config, surface)
    }

    // ------------------------------------------------------------------
    // Systems
    // ------------------------------------------------------------------

    /// Append `system` to the pipeline; it runs after every system registered
    /// before it.
    pub fn register_system<M>(
        &mut self,
        system: impl IntoScheduleConfigs<ScheduleSystem, M>,
    ) -> &mut Self {
        let slot = SystemSlot(self.system_count);
        if let Some(previous) = self.system_count.checked_sub(1) {
            self.schedule
                .configure_sets(slot.clone().after(SystemSlot(previous)));
        }
        self.schedule.add_systems(system.in_set(slot));
        self.system_count += 1;
        self
    }

    /// Register the built-in pipeline: movement, physics, collision,
    /// animation, render.
    pub fn register_default_systems(&mut self) -> &mut Self {
        self.register_system(movement_system)
            .register_system(physics_system)
            .register_system(collision_system)
            .register_system(animation_system)
            .register_system(render_system)
    }

    pub fn system_count(&self) -> usize {
        self.system_count
    }

    /// Register a cleanup system run once when the engine shuts down.
    /// Hooks run in registration order, before entities are destroyed.
    pub fn on_shutdown<M>(
        &mut self,
        name: impl Into<String>,
        system: impl IntoSystem<(), (), M> + 'static,
    ) {
        let id = self.world.register_system(system);
        let name = name.into();
        if let Some(previous) = self.world.resource_mut::<SystemsStore>().insert(name.clone(), id)
        {
            warn!("Shutdown hook '{}' registered twice; replacing it", name);
            if let Err(e) = self.world.unregister_system(previous) {
                warn!("Failed to unregister replaced hook '{}': {:?}", name, e);
            }
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub fn start(&mut self) {
        if self.running {
            warn!("Engine already running");
            return;
        }
        self.running = true;
        self.last_frame = Some(Instant::now());
        info!("Engine started");
    }

    /// Stop driving frames. A frame in progress always completes.
    pub fn stop(&mut self) {
        if self.running {
            info!("Engine stopped");
        }
        self.running = false;
        self.last_frame = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Driver tick: while running, step by the wall-clock time elapsed since
    /// the previous tick. Returns whether the engine is still running.
    pub fn frame(&mut self, input: &dyn InputSource) -> bool {
        if !self.running {
            return false;
        }
        let now = Instant::now();
        let dt = self
            .last_frame
            .replace(now)
            .map_or(0.0, |prev| now.duration_since(prev).as_secs_f32() * 1000.0);
        self.step(dt, input);
        self.running
    }

    /// Run exactly one frame of `dt_ms` milliseconds, running or not.
    pub fn step(&mut self, dt_ms: f32, input: &dyn InputSource) {
        update_world_time(&mut self.world, dt_ms);
        update_input_state(&mut self.world, input);

        let entities = self.world.resource::<EntityRegistry>().entities().to_vec();
        self.world
            .insert_resource(FrameSnapshot::from_entities(entities));

        let background = self.world.resource::<EngineConfig>().background_color.clone();
        self.world
            .non_send_resource_mut::<Surface>()
            .0
            .clear(&background);

        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
        self.forget_despawned();

        let refreshed = self
            .world
            .resource_mut::<FrameStats>()
            .record(dt_ms.max(0.0));
        if refreshed && self.world.resource::<EngineConfig>().debug {
            let stats = *self.world.resource::<FrameStats>();
            info!(
                "frame {}: {} fps, {} entities, {} systems",
                stats.frame_count,
                stats.fps,
                self.world.resource::<EntityRegistry>().len(),
                self.system_count
            );
        }

        if self.world.resource_mut::<EngineControl>().take_stop_request() {
            debug!("Stop requested by a system");
            self.stop();
        }
    }

    /// Drop registry entries whose entity a system despawned through
    /// `Commands` during the frame.
    fn forget_despawned(&mut self) {
        let dead: Vec<Entity> = self
            .world
            .resource::<EntityRegistry>()
            .entities()
            .iter()
            .copied()
            .filter(|e| self.world.get_entity(*e).is_err())
            .collect();
        if dead.is_empty() {
            return;
        }
        let dropped = self.world.resource_mut::<EntityRegistry>().forget(&dead);
        debug!("Forgot {} entities despawned during the frame", dropped);
    }

    /// Stop, run shutdown hooks and destroy every entity.
    pub fn shutdown(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.stop();

        let hooks = self.world.resource_mut::<SystemsStore>().drain_ordered();
        for (name, id) in hooks {
            debug!("Running shutdown hook '{}'", name);
            if let Err(e) = self.world.run_system(id) {
                warn!("Shutdown hook '{}' failed: {:?}", name, e);
            }
        }

        let entities = self.world.resource_mut::<EntityRegistry>().drain();
        let count = entities.len();
        for entity in entities {
            self.world.despawn(entity);
        }
        self.world.resource_mut::<CollisionReport>().clear();
        info!("Engine shut down, {} entities destroyed", count);
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    /// Create an entity under `id`. An existing entity with the same id is
    /// destroyed and replaced.
    pub fn create_entity(&mut self, id: impl Into<String>) -> EntityHandle<'_> {
        let id = id.into();
        if let Some(old) = self.world.resource::<EntityRegistry>().get(&id) {
            warn!("Entity '{}' already exists; replacing it", id);
            if self.world.get_entity(old).is_ok() {
                self.world.despawn(old);
            }
        }
        let entity = self
            .world
            .spawn((EntityId(id.clone()), Tags::default()))
            .id();
        self.world
            .resource_mut::<EntityRegistry>()
            .insert(id, entity);
        EntityHandle::new(self.world.entity_mut(entity))
    }

    /// Destroy `id` and all its components. Returns whether it existed.
    pub fn destroy_entity(&mut self, id: &str) -> bool {
        let Some(entity) = self.world.resource_mut::<EntityRegistry>().remove(id) else {
            return false;
        };
        self.world.despawn(entity)
    }

    pub fn get_entity(&self, id: &str) -> Option<EntityView<'_>> {
        let entity = self.world.resource::<EntityRegistry>().get(id)?;
        self.world.get_entity(entity).ok().map(EntityView::new)
    }

    pub fn get_entity_mut(&mut self, id: &str) -> Option<EntityHandle<'_>> {
        let entity = self.world.resource::<EntityRegistry>().get(id)?;
        self.world.get_entity_mut(entity).ok().map(EntityHandle::new)
    }

    pub fn has_entity(&self, id: &str) -> bool {
        self.world.resource::<EntityRegistry>().contains(id)
    }

    /// Ids of entities carrying `tag`, in creation order.
    pub fn entities_with_tag(&self, tag: &str) -> Vec<&str> {
        self.world
            .resource::<EntityRegistry>()
            .entities()
            .iter()
            .filter(|e| self.world.get::<Tags>(**e).is_some_and(|t| t.contains(tag)))
            .filter_map(|e| self.world.get::<EntityId>(*e).map(EntityId::as_str))
            .collect()
    }

    /// Ids of every entity, in creation order.
    pub fn all_entities(&self) -> Vec<&str> {
        self.world
            .resource::<EntityRegistry>()
            .entities()
            .iter()
            .filter_map(|e| self.world.get::<EntityId>(*e).map(EntityId::as_str))
            .collect()
    }

    pub fn entity_count(&self) -> usize {
        self.world.resource::<EntityRegistry>().len()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &EngineConfig {
        self.world.resource::<EngineConfig>()
    }

    /// Change gravity for subsequent frames.
    pub fn set_gravity(&mut self, gravity: f32) {
        self.world.resource_mut::<EngineConfig>().gravity = gravity;
    }

    pub fn frame_stats(&self) -> FrameStats {
        *self.world.resource::<FrameStats>()
    }

    /// Contacts detected during the last frame.
    pub fn collisions(&self) -> &CollisionReport {
        self.world.resource::<CollisionReport>()
    }

    pub fn time(&self) -> &WorldTime {
        self.world.resource::<WorldTime>()
    }

    pub fn input(&self) -> &InputState {
        self.world.resource::<InputState>()
    }

    /// Direct access to the ECS world, for custom systems' setup.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.teardown();
    }
}
