#[cfg(test)]
mod tests {
    use crate::color::ShipColor;
    use crate::commands::PlayerCommand;
    use crate::components::EnemyLook;
    use crate::enums::*;
    use crate::events::{Appearance, PresentationEvent, UiEvent, VisualHandle};
    use crate::state::{EnemyView, GameStateSnapshot, ShipView};
    use crate::types::{Position, SimTime};

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::Idle, GamePhase::Active, GamePhase::GameOver];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_visual_mode_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&VisualMode::Enhanced).unwrap(),
            "\"enhanced\""
        );
        let back: VisualMode = serde_json::from_str("\"baseline\"").unwrap();
        assert_eq!(back, VisualMode::Baseline);
    }

    #[test]
    fn test_visual_mode_from_str() {
        assert_eq!("Enhanced".parse::<VisualMode>(), Ok(VisualMode::Enhanced));
        assert_eq!("baseline".parse::<VisualMode>(), Ok(VisualMode::Baseline));
        assert_eq!(
            "ultra".parse::<VisualMode>(),
            Err(VisualModeParseError("ultra".to_string()))
        );
        let err = "ultra".parse::<VisualMode>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown visual mode \"ultra\", expected baseline or enhanced"
        );
    }

    #[test]
    fn test_dodecahedron_box_is_smaller() {
        assert_eq!(EnemyShape::Icosahedron.half_extent(), 1.0);
        assert_eq!(EnemyShape::Octahedron.half_extent(), 1.0);
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        let dodeca = EnemyShape::Dodecahedron.half_extent();
        assert!((dodeca - phi / 3f64.sqrt()).abs() < 1e-12);
        assert!(dodeca < 1.0);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_key_name("a"), Some(Key::MoveLeft));
        assert_eq!(Key::from_key_name("A"), Some(Key::MoveLeft));
        assert_eq!(Key::from_key_name("d"), Some(Key::MoveRight));
        assert_eq!(Key::from_key_name(" "), Some(Key::Fire));
        assert_eq!(Key::from_key_name("Space"), Some(Key::Fire));
    }

    #[test]
    fn test_key_events_become_commands() {
        assert_eq!(
            PlayerCommand::from_key_event(" ", true),
            Some(PlayerCommand::KeyDown { key: Key::Fire })
        );
        assert_eq!(
            PlayerCommand::from_key_event("D", false),
            Some(PlayerCommand::KeyUp { key: Key::MoveRight })
        );
        assert_eq!(PlayerCommand::from_key_event("ArrowUp", true), None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        for name in ["w", "s", "Enter", "ArrowLeft", ""] {
            assert_eq!(Key::from_key_name(name), None, "{name:?} should not map");
        }
    }

    #[test]
    fn test_layout_visibility() {
        let start = ScreenLayout::Start.visibility();
        assert!(start.start_screen && start.overlay && !start.game_over_screen);

        let playing = ScreenLayout::Playing.visibility();
        assert!(!playing.start_screen && !playing.overlay && !playing.game_over_screen);

        let over = ScreenLayout::GameOver.visibility();
        assert!(!over.start_screen && over.overlay && over.game_over_screen);
    }

    #[test]
    fn test_player_command_serde_tagged() {
        let commands = vec![
            PlayerCommand::KeyDown { key: Key::Fire },
            PlayerCommand::KeyUp { key: Key::MoveLeft },
            PlayerCommand::SetShipColor {
                color: ShipColor::from_rgb(0xff00ff),
            },
            PlayerCommand::SetVisualMode {
                mode: VisualMode::Enhanced,
            },
            PlayerCommand::StartGame,
            PlayerCommand::RestartGame,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            assert!(json.contains("\"type\""), "missing tag in {json}");
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_command_from_frontend_json() {
        let cmd: PlayerCommand =
            serde_json::from_str(r##"{"type":"SetShipColor","color":"#ff0000"}"##).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::SetShipColor {
                color: ShipColor::from_rgb(0xff0000)
            }
        );

        let bad = serde_json::from_str::<PlayerCommand>(r#"{"type":"SetShipColor","color":"red"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_events_serde() {
        let events = vec![
            PresentationEvent::Spawned {
                handle: VisualHandle(7),
                kind: EntityKind::Enemy,
                appearance: Appearance::Enemy {
                    look: Some(EnemyLook {
                        shape: EnemyShape::Octahedron,
                        scale: 1.1,
                        hue: 120.0,
                        emissive_hue: 300.0,
                    }),
                },
                position: Position::new(1.0, 0.0, -70.0),
            },
            PresentationEvent::Despawned {
                handle: VisualHandle(7),
            },
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<PresentationEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, back);

        let ui = UiEvent::GameOver {
            final_score: 12,
            high_score: 30,
            new_record: false,
        };
        let json = serde_json::to_string(&ui).unwrap();
        assert!(json.contains("\"GameOver\""));
    }

    #[test]
    fn test_default_snapshot_is_idle() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.phase, GamePhase::Idle);
        assert!(snap.ship.is_none());
        assert!(snap.bullets.is_empty());
        assert!(snap.enemies.is_empty());
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snap = GameStateSnapshot {
            time: SimTime { tick: 42 },
            phase: GamePhase::Active,
            visual_mode: VisualMode::Enhanced,
            ship: Some(ShipView {
                handle: VisualHandle(0),
                position: Position::new(-3.0, 0.0, 8.0),
            }),
            bullets: Vec::new(),
            enemies: vec![EnemyView {
                handle: VisualHandle(3),
                position: Position::new(2.0, 0.0, -40.0),
                speed: 0.25,
                look: None,
                spin: None,
            }],
            score: 5,
            high_score: 9,
            starfield_offset: 3.4,
            presentation_events: Vec::new(),
            ui_events: vec![UiEvent::ScoreChanged { score: 5 }],
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
