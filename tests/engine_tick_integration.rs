//! Engine tick integration tests: the full movement → physics → collision →
//! animation → render pipeline driven through `Engine::step`, plus individual
//! systems driven through a `Schedule`.

use std::cell::RefCell;
use std::rc::Rc;

use bevy_ecs::prelude::*;
use glam::Vec2;

use plinthengine::components::physics::{Collider, Physics};
use plinthengine::components::playercontroller::PlayerController;
use plinthengine::components::sprite::{Sprite, SpriteAnimation};
use plinthengine::components::transform::Transform;
use plinthengine::engine::Engine;
use plinthengine::resources::collisionreport::CollisionReport;
use plinthengine::resources::engineconfig::EngineConfig;
use plinthengine::resources::input::{Action, HeldActions, NoInput};
use plinthengine::resources::snapshot::FrameSnapshot;
use plinthengine::resources::surface::{DrawRect, DrawSurface};
use plinthengine::resources::worldtime::WorldTime;
use plinthengine::systems::collision::collision_system;
use plinthengine::systems::physics::physics_system;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Default)]
struct Recorded {
    clears: Vec<String>,
    rects: Vec<DrawRect>,
}

/// Surface that records every call for later inspection.
#[derive(Clone, Default)]
struct RecordingSurface(Rc<RefCell<Recorded>>);

impl DrawSurface for RecordingSurface {
    fn viewport(&self) -> (u32, u32) {
        (800, 600)
    }

    fn clear(&mut self, color: &str) {
        let mut rec = self.0.borrow_mut();
        rec.clears.push(color.to_string());
        rec.rects.clear();
    }

    fn draw_rect(&mut self, rect: &DrawRect) {
        self.0.borrow_mut().rects.push(rect.clone());
    }
}

fn make_engine() -> (Engine, RecordingSurface) {
    let surface = RecordingSurface::default();
    let mut engine = Engine::new(EngineConfig::new(), surface.clone()).unwrap();
    engine.register_default_systems();
    (engine, surface)
}

fn spawn_ground(engine: &mut Engine) {
    engine
        .create_entity("ground")
        .add_component(Transform::new(0.0, 100.0))
        .add_component(Physics::fixed(Collider::rect(200.0, 20.0)))
        .add_tag("solid");
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(EngineConfig::new());
    world.insert_resource(CollisionReport::default());
    world
}

fn tick(world: &mut World, entities: Vec<Entity>) {
    world.insert_resource(FrameSnapshot::from_entities(entities));
    let mut schedule = Schedule::default();
    schedule.add_systems((physics_system, collision_system).chain());
    schedule.run(world);
}

// ==================== PIPELINE ====================

#[test]
fn body_falls_and_lands_on_ground() {
    let (mut engine, _surface) = make_engine();
    spawn_ground(&mut engine);
    engine
        .create_entity("crate")
        .add_component(Transform::new(50.0, 40.0))
        .add_component(Physics::dynamic(Collider::rect(32.0, 32.0)));

    for _ in 0..120 {
        engine.step(16.0, &NoInput);
    }

    let crate_entity = engine.get_entity("crate").unwrap();
    let t = crate_entity.get_component::<Transform>().unwrap();
    let p = crate_entity.get_component::<Physics>().unwrap();
    assert!(approx_eq(t.position.y, 68.0), "resting y = {}", t.position.y);
    assert!(p.is_grounded);
    assert!(p.velocity.y.abs() < EPSILON);

    let ground = engine.get_entity("ground").unwrap();
    assert_eq!(
        ground.get_component::<Transform>().unwrap().position,
        Vec2::new(0.0, 100.0)
    );
}

#[test]
fn player_walks_and_jumps_from_ground() {
    let (mut engine, _surface) = make_engine();
    spawn_ground(&mut engine);
    engine
        .create_entity("player")
        .add_component(Transform::new(50.0, 68.0))
        .add_component(Physics::dynamic(Collider::rect(32.0, 32.0)))
        .add_component(PlayerController::default())
        .add_tag("player");

    // Settle on the ground first so the player is grounded.
    engine.step(16.0, &NoInput);
    assert!(
        engine
            .get_entity("player")
            .unwrap()
            .get_component::<Physics>()
            .unwrap()
            .is_grounded
    );

    engine.step(16.0, &HeldActions::new().with(Action::Right));
    let x_after_walk = {
        let player = engine.get_entity("player").unwrap();
        let p = player.get_component::<Physics>().unwrap();
        assert!(p.velocity.x > 0.0);
        player.get_component::<Transform>().unwrap().position.x
    };
    assert!(x_after_walk > 50.0);

    engine.step(16.0, &HeldActions::new().with(Action::Jump));
    let player = engine.get_entity("player").unwrap();
    let p = player.get_component::<Physics>().unwrap();
    assert!(p.velocity.y < 0.0);
    assert!(!p.is_grounded);
    assert!(player.get_component::<Transform>().unwrap().position.y < 68.0);
}

#[test]
fn trigger_contacts_are_reported_but_not_resolved() {
    let (mut engine, _surface) = make_engine();
    engine.set_gravity(0.0);
    engine
        .create_entity("player")
        .add_component(Transform::new(0.0, 0.0))
        .add_component(Physics::dynamic(Collider::rect(32.0, 32.0)));
    engine
        .create_entity("coin")
        .add_component(Transform::new(8.0, 8.0))
        .add_component(Physics::dynamic(Collider::rect(16.0, 16.0).as_trigger()));

    engine.step(16.0, &NoInput);

    let player = engine.get_entity("player").unwrap().entity();
    let contacts: Vec<_> = engine.collisions().involving(player).copied().collect();
    assert_eq!(contacts.len(), 1);
    assert!(contacts[0].is_trigger);
    assert_eq!(contacts[0].overlap, Vec2::new(16.0, 16.0));
    assert_eq!(
        engine
            .get_entity("coin")
            .unwrap()
            .get_component::<Transform>()
            .unwrap()
            .position,
        Vec2::new(8.0, 8.0)
    );
}

#[test]
fn animation_advances_with_frame_delta() {
    let (mut engine, _surface) = make_engine();
    let mut sprite = Sprite::colored("#ffffff", 8.0, 8.0).with_animation(SpriteAnimation::new(
        "spin",
        vec![0, 1, 2],
        100.0,
        true,
    ));
    sprite.play("spin");
    engine.create_entity("spinner").add_component(sprite);

    engine.step(250.0, &NoInput);
    {
        let s = engine
            .get_entity("spinner")
            .unwrap()
            .get_component::<Sprite>()
            .unwrap();
        assert_eq!(s.current_frame, 2);
        assert!(approx_eq(s.frame_time, 50.0));
    }

    engine.step(100.0, &NoInput);
    let s = engine
        .get_entity("spinner")
        .unwrap()
        .get_component::<Sprite>()
        .unwrap();
    assert_eq!(s.current_frame, 0);
}

#[test]
fn render_clears_then_draws_in_z_order() {
    let (mut engine, surface) = make_engine();
    engine
        .create_entity("front")
        .add_component(Transform::new(0.0, 0.0).with_z_index(10))
        .add_component(Sprite::colored("#ff0000", 10.0, 10.0));
    engine
        .create_entity("back")
        .add_component(Transform::new(0.0, 0.0).with_z_index(-1))
        .add_component(Sprite::colored("asset:tree", 10.0, 10.0));
    engine
        .create_entity("invisible")
        .add_component(Transform::new(0.0, 0.0))
        .add_component_with::<Sprite>(|s| s.opacity = 0.0);

    engine.step(16.0, &NoInput);

    let rec = surface.0.borrow();
    assert_eq!(rec.clears, vec!["#000000".to_string()]);
    let fills: Vec<&str> = rec.rects.iter().map(|r| r.fill.as_str()).collect();
    assert_eq!(fills, vec!["#ff00ff", "#ff0000"]);
}

#[derive(Component)]
struct Doomed;

fn hide_doomed(mut commands: Commands, query: Query<Entity, With<Doomed>>) {
    for entity in query.iter() {
        commands.entity(entity).insert(Sprite {
            opacity: 0.0,
            ..Sprite::default()
        });
    }
}

#[test]
fn commands_apply_after_the_whole_frame() {
    let surface = RecordingSurface::default();
    let mut engine = Engine::new(EngineConfig::new(), surface.clone()).unwrap();
    engine.register_system(hide_doomed);
    engine.register_default_systems();

    let entity = engine
        .create_entity("ghost")
        .add_component(Transform::default())
        .add_component(Sprite::default())
        .entity();
    engine.world_mut().entity_mut(entity).insert(Doomed);

    engine.step(16.0, &NoInput);
    assert_eq!(surface.0.borrow().rects.len(), 1);

    engine.step(16.0, &NoInput);
    assert!(surface.0.borrow().rects.is_empty());
}

#[test]
fn stopped_engine_ignores_driver_ticks() {
    let (mut engine, surface) = make_engine();
    assert!(!engine.frame(&NoInput));
    assert!(surface.0.borrow().clears.is_empty());

    engine.start();
    assert!(engine.frame(&NoInput));
    assert_eq!(surface.0.borrow().clears.len(), 1);

    engine.stop();
    assert!(!engine.frame(&NoInput));
    assert_eq!(surface.0.borrow().clears.len(), 1);
}

// ==================== SYSTEMS VIA SCHEDULE ====================

#[test]
fn static_bodies_never_move() {
    let mut world = make_world(16.0);
    let wall = world
        .spawn((
            Transform::new(10.0, 10.0),
            Physics::fixed(Collider::rect(50.0, 50.0)).with_velocity(3.0, 3.0),
        ))
        .id();
    let ball = world
        .spawn((
            Transform::new(20.0, 20.0),
            Physics::dynamic(Collider::rect(10.0, 10.0)),
        ))
        .id();

    for _ in 0..10 {
        tick(&mut world, vec![wall, ball]);
    }

    assert_eq!(
        world.get::<Transform>(wall).unwrap().position,
        Vec2::new(10.0, 10.0)
    );
    assert_eq!(
        world.get::<Physics>(wall).unwrap().velocity,
        Vec2::new(3.0, 3.0)
    );
}

#[test]
fn bouncy_ball_rebounds_off_floor() {
    let mut world = make_world(16.0);
    let floor = world
        .spawn((
            Transform::new(0.0, 100.0),
            Physics::fixed(Collider::rect(200.0, 20.0)),
        ))
        .id();
    let ball = world
        .spawn((
            Transform::new(50.0, 60.0),
            Physics::dynamic(Collider::rect(10.0, 10.0)).with_bounciness(0.5),
        ))
        .id();

    let mut rebounded = false;
    for _ in 0..60 {
        tick(&mut world, vec![floor, ball]);
        if world.get::<Physics>(ball).unwrap().velocity.y < 0.0 {
            rebounded = true;
            break;
        }
    }
    assert!(rebounded);
    assert!(world.get::<Transform>(ball).unwrap().position.y <= 90.0 + EPSILON);
}

#[test]
fn sliding_body_stops_without_reversing() {
    let mut world = make_world(16.0);
    let floor = world
        .spawn((
            Transform::new(-1000.0, 100.0),
            Physics::fixed(Collider::rect(4000.0, 20.0)),
        ))
        .id();
    let slider = world
        .spawn((
            Transform::new(0.0, 68.0),
            Physics::dynamic(Collider::rect(32.0, 32.0)).with_velocity(300.0, 0.0),
        ))
        .id();

    let mut last_vx = 300.0;
    for _ in 0..200 {
        tick(&mut world, vec![floor, slider]);
        let vx = world.get::<Physics>(slider).unwrap().velocity.x;
        assert!(vx >= 0.0);
        assert!(vx <= last_vx);
        last_vx = vx;
    }
    assert_eq!(last_vx, 0.0);
}
