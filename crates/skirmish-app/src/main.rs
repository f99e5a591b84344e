//! Headless arena runner: ticks a world, drives one demo player, and logs
//! the population once a second.
//!
//! Usage: `skirmish [config.json] [seconds]`. The config path may also come
//! from `SKIRMISH_CONFIG`. Without a duration the arena runs until killed.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::info;

use skirmish_app::game_loop::spawn_game_loop;
use skirmish_core::config::SimConfig;
use skirmish_core::enums::EntityType;

fn main() -> anyhow::Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("SKIRMISH_CONFIG").map(PathBuf::from));
    let run_for = args
        .next()
        .map(|secs| secs.parse::<u64>().map(Duration::from_secs))
        .transpose()
        .context("run duration must be a whole number of seconds")?;

    let config = match &config_path {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };

    let arena = spawn_game_loop(&config).context("starting the game loop")?;
    let mut pilot = arena.spawn_player()?;
    info!("demo player {pilot} spawned");
    arena.send_input(&pilot, r#"{"commands":[{"m":"setVelocity","v":0.6}]}"#)?;

    let started = Instant::now();
    let mut heading = 0.0_f64;
    loop {
        std::thread::sleep(Duration::from_secs(1));
        if run_for.is_some_and(|limit| started.elapsed() >= limit) {
            break;
        }

        let gone = arena.lock()?.world().player_with_id(&pilot).is_none();
        if gone {
            pilot = arena.spawn_player()?;
            info!("demo player respawned as {pilot}");
        }

        heading += 0.5;
        let input = format!(
            r#"{{"commands":[{{"m":"setRotation","v":{heading}}},{{"m":"setVelocity","v":0.6}}]}}"#
        );
        arena.send_input(&pilot, &input)?;

        if let Some(snapshot) = arena.latest_snapshot()? {
            info!(
                "tick {} ({:.0} fps): {} players, {} tanks, {} towers, {} bullets, {} power-ups",
                snapshot.stats.tick,
                snapshot.stats.fps,
                snapshot.count_of(EntityType::Player),
                snapshot.count_of(EntityType::Tank),
                snapshot.count_of(EntityType::Tower),
                snapshot.count_of(EntityType::Bullet),
                snapshot.count_of(EntityType::SpeedPowerUp),
            );
        }
    }

    arena.shutdown().context("stopping the game loop")?;
    Ok(())
}
