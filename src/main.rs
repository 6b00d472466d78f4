use std::path::PathBuf;
use std::time::Duration;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};

use plinthengine::components::collectible::Collectible;
use plinthengine::components::tags::EntityId;
use plinthengine::components::transform::Transform;
use plinthengine::components::trigger::{Trigger, TriggerKind};
use plinthengine::engine::Engine;
use plinthengine::error::Result;
use plinthengine::resources::engineconfig::EngineConfig;
use plinthengine::resources::input::{Action, HeldActions};
use plinthengine::resources::surface::LogSurface;
use plinthengine::scene::Scene;

const DEMO_SCENE: &str = include_str!("../assets/scenes/demo.json");

/// Plinth Engine 2D
#[derive(Parser)]
#[command(
    version,
    about = "Headless 2D platformer simulation driven by a scripted input timeline."
)]
struct Cli {
    /// INI configuration file. Missing files fall back to defaults.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON scene to load instead of the built-in demo scene.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 300)]
    frames: u64,

    /// Pace frames with the wall clock instead of fixed steps.
    #[arg(long)]
    realtime: bool,
}

/// Held actions for `frame` of the demo run: idle, walk right, jump onto the
/// ledge, double jump, dash.
fn scripted_input(frame: u64) -> HeldActions {
    let mut held = HeldActions::new();
    if (30..240).contains(&frame) {
        held.press(Action::Right);
    }
    if (90..96).contains(&frame) || (120..124).contains(&frame) {
        held.press(Action::Jump);
    }
    if (180..183).contains(&frame) {
        held.press(Action::Dash);
    }
    held
}

fn log_remaining_pickups(query: Query<(&EntityId, &Collectible)>) {
    let remaining: Vec<&str> = query
        .iter()
        .filter(|(_, c)| !c.is_collected)
        .map(|(id, _)| id.as_str())
        .collect();
    info!("Uncollected pickups at shutdown: {:?}", remaining);
}

/// Gameplay glue: collect pickups and react to triggers the player touched
/// this frame. Returns `true` when the player reached a goal.
fn handle_player_contacts(engine: &mut Engine) -> bool {
    let Some((player, player_tags)) = engine.get_entity("player").map(|p| {
        let tags: Vec<String> = p.tags().into_iter().map(str::to_string).collect();
        (p.entity(), tags)
    }) else {
        return false;
    };
    let touched: Vec<String> = engine
        .collisions()
        .involving(player)
        .filter_map(|contact| contact.other(player))
        .filter_map(|other| engine.world().get::<EntityId>(other))
        .map(|id| id.as_str().to_string())
        .collect();

    let mut reached_goal = false;
    for id in touched {
        let Some(mut entity) = engine.get_entity_mut(&id) else {
            continue;
        };
        if let Some(mut coin) = entity.get_component_mut::<Collectible>() {
            if !coin.is_collected {
                coin.is_collected = true;
                info!("Collected '{}' worth {}", id, coin.value);
            }
        }
        if let Some(mut trigger) = entity.get_component_mut::<Trigger>() {
            if trigger.accepts(player_tags.iter().map(String::as_str)) {
                trigger.is_activated = true;
                info!("Trigger '{}' fired ({})", id, trigger.event_name);
                reached_goal |= trigger.kind == TriggerKind::Goal;
            }
        }
    }
    reached_goal
}

fn run(cli: Cli) -> Result<()> {
    let mut config = EngineConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default configuration", e);
    }
    let frame_budget = config.frame_budget_ms();

    let mut engine = Engine::new(config, LogSurface::new())?;
    engine.register_default_systems();
    engine.on_shutdown("log_remaining_pickups", log_remaining_pickups);

    let scene = match &cli.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::from_json(DEMO_SCENE)?,
    };
    scene.spawn_into(&mut engine);
    info!("Spawned {} entities", engine.entity_count());

    engine.start();
    for frame in 0..cli.frames {
        let input = scripted_input(frame);
        if cli.realtime {
            if !engine.frame(&input) {
                break;
            }
            std::thread::sleep(Duration::from_secs_f32(frame_budget / 1000.0));
        } else {
            engine.step(frame_budget, &input);
            if !engine.is_running() {
                break;
            }
        }
        if handle_player_contacts(&mut engine) {
            info!("Goal reached on frame {}", frame);
            engine.stop();
            break;
        }
    }

    if let Some(player) = engine.get_entity("player") {
        if let Some(t) = player.get_component::<Transform>() {
            info!(
                "Player ended at ({:.1}, {:.1})",
                t.position.x, t.position.y
            );
        }
    }
    let stats = engine.frame_stats();
    info!("Simulated {} frames ({} fps)", stats.frame_count, stats.fps);
    engine.shutdown();
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
