#[cfg(test)]
mod tests {
    use crate::commands::{PlayerCommand, PlayerInput};
    use crate::components::{AutoMove, Health, Sensing};
    use crate::config::SimConfig;
    use crate::constants::*;
    use crate::enums::EntityType;
    use crate::state::{EntityView, WorldSnapshot};
    use crate::types::{Entity, TickStats};

    #[test]
    fn test_player_input_drops_unknown_verbs() {
        let input = PlayerInput::from_json(
            r#"{"commands":[{"m":"setVelocity","v":0.5},{"m":"jump","v":1},{"m":"respawn"}]}"#,
        )
        .unwrap();
        let commands: Vec<_> = input.commands().collect();
        assert_eq!(
            commands,
            vec![
                PlayerCommand::SetVelocity { fraction: 0.5 },
                PlayerCommand::Respawn
            ]
        );
    }

    #[test]
    fn test_player_input_stops_at_respawn() {
        let input = PlayerInput::from_json(
            r#"{"commands":[{"m":"setRotation","v":0.5},{"m":"respawn"},{"m":"setRotation","v":1.5},{"m":"respawn"}]}"#,
        )
        .unwrap();
        let commands: Vec<_> = input.commands().collect();
        assert_eq!(
            commands,
            vec![
                PlayerCommand::SetRotation { direction: 0.5 },
                PlayerCommand::Respawn
            ]
        );
    }

    #[test]
    fn test_player_input_malformed_is_error() {
        assert!(PlayerInput::from_json("{not json").is_err());
        // A body without commands is valid and does nothing.
        let empty = PlayerInput::from_json("{}").unwrap();
        assert_eq!(empty.commands().count(), 0);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let config = SimConfig::from_json(r#"{"seed": 7, "width": 400.0}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.width, 400.0);
        assert_eq!(config.height, WORLD_HEIGHT);
        assert_eq!(config.initial_towers, INITIAL_TOWERS);
        assert_eq!(config.tick_period().as_millis(), TICK_PERIOD_MS as u128);
    }

    #[test]
    fn test_config_zero_period_is_clamped() {
        let config = SimConfig {
            tick_period_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_period().as_millis(), 1);
    }

    #[test]
    fn test_health_removal_rules() {
        let mut bullet = Health::aging(1.0);
        assert!(!bullet.is_removable());
        bullet.dead = true;
        assert!(bullet.is_removable(), "non-decaying dead entity goes at once");

        let mut player = Health::decaying(10.0);
        player.dead = true;
        assert!(!player.is_removable(), "decaying entity lingers");
        player.decayed = true;
        assert!(player.is_removable());
    }

    #[test]
    fn test_auto_move_target_activates() {
        let mut auto_move = AutoMove::default();
        assert!(!auto_move.active);
        auto_move.set_target_direction(1.5);
        assert!(auto_move.active);
        assert_eq!(auto_move.target_direction, 1.5);
    }

    #[test]
    fn test_sensing_ranges_per_type() {
        let sensing = Sensing::new().with_range(EntityType::Player, TANK_SENSING_RANGE);
        assert_eq!(sensing.range_for(EntityType::Player), Some(TANK_SENSING_RANGE));
        assert_eq!(sensing.range_for(EntityType::Tower), None);
    }

    #[test]
    fn test_tick_stats_rate_uses_measured_delta() {
        let mut stats = TickStats::default();
        stats.record(0.03);
        stats.record(0.05);
        assert_eq!(stats.tick, 2);
        assert!((stats.elapsed_secs - 0.08).abs() < 1e-12);
        assert!((stats.fps - 20.0).abs() < 1e-9);

        stats.record(0.0);
        assert_eq!(stats.fps, 0.0);
    }

    #[test]
    fn test_snapshot_counts_and_serializes() {
        let view = |index, entity_type| EntityView {
            entity: Entity::new(index, 0),
            entity_type,
            x: 1.0,
            y: 2.0,
            direction: 0.0,
            width: 10.0,
            height: 10.0,
            dead: false,
        };
        let snapshot = WorldSnapshot {
            entities: vec![
                view(0, EntityType::Tower),
                view(1, EntityType::Tower),
                view(2, EntityType::Player),
            ],
            ..Default::default()
        };
        assert_eq!(snapshot.count_of(EntityType::Tower), 2);
        assert_eq!(snapshot.count_of(EntityType::Tank), 0);

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"Tower\""));
    }

    #[test]
    fn test_entity_type_names() {
        assert_eq!(EntityType::TankShelter.to_string(), "tankShelter");
        assert_eq!(EntityType::ALL.len(), 6);
    }
}
