use fruit_catch::platform::{Controls, Key, ManualClock};
use fruit_catch::renderer::HeadlessRenderer;
use fruit_catch::sim::{GamePhase, GameSession, Viewport, layout_blades};
use fruit_catch::{FrameLoop, FrameStatus, Settings};
use glam::Vec2;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn session_with(settings: Settings, seed: u64) -> GameSession {
    GameSession::new(Viewport::new(800.0, 600.0), settings, seed).unwrap()
}

#[test]
fn test_fall_squish_game_over() {
    let mut session = session_with(Settings::default(), 2024);
    // Drop straight down in the left lane, platform parked on the right
    session.platform.x = 650.0;
    session.fruit.pos = Vec2::new(200.0, 0.0);
    session.fruit.vel = Vec2::new(0.0, 4.0);

    let clock = ManualClock::new(1_000.0);
    let mut frames = FrameLoop::new(session, HeadlessRenderer::new(), &clock);
    let controls = Controls::new();

    let mut squish_frame = None;
    let mut last_ordinal = 0;
    let mut streaks_seen = 0;
    for n in 1..=1000u32 {
        let status = frames.frame(&controls.intent());
        let phase = frames.session().phase;
        let drawn = frames.renderer();
        if matches!(phase, GamePhase::Playing) {
            assert_eq!(drawn.last_fragment_count, 0);
        } else {
            assert_eq!(drawn.last_fragment_count, 20);
        }
        streaks_seen += drawn.last_streak_count;
        assert!(phase.ordinal() >= last_ordinal, "phase went backwards");
        last_ordinal = phase.ordinal();

        if squish_frame.is_none() && matches!(phase, GamePhase::Squished { .. }) {
            squish_frame = Some(n);
            if let GamePhase::Squished { deadline_ms } = phase {
                let expected = 1_000.0 + (n - 1) as f64 * FRAME_MS + 1000.0;
                assert!((deadline_ms - expected).abs() < 1e-6);
            }
        }
        if status == FrameStatus::Stopped {
            break;
        }
        clock.advance(FRAME_MS);
    }

    let squish_frame = squish_frame.expect("fruit was never squished");
    assert_eq!(squish_frame, 134);
    assert_eq!(frames.session().fragments.len(), 20);
    assert_eq!(frames.session().score, 0);
    assert!(frames.is_stopped());
    assert_eq!(frames.renderer().game_over_screens, 1);
    assert!(streaks_seen > 0, "no streaks were drawn while squished");

    // Squished for one second of frames, then the flip frame
    let squished_frames = frames.renderer().frames - squish_frame as u64;
    assert!((60..=61).contains(&squished_frames), "{squished_frames}");
}

#[test]
fn test_blade_layout_for_800px() {
    let blades = layout_blades(Viewport::new(800.0, 600.0), &Settings::default());
    let centres: Vec<f32> = blades.iter().map(|b| b.pos.x).collect();
    let expected: Vec<f32> = (0..20).map(|i| i as f32 * 40.0 + 20.0).collect();
    assert_eq!(centres, expected);
}

#[test]
fn test_held_key_pins_platform_to_edge() {
    let mut session = session_with(Settings::default(), 5);
    session.fruit.pos = Vec2::new(380.0, 0.0);
    session.fruit.vel = Vec2::new(0.0, 0.5);

    let clock = ManualClock::new(0.0);
    let mut frames = FrameLoop::new(session, HeadlessRenderer::new(), &clock);
    let mut controls = Controls::new();
    controls.key_down(Key::Left, false);

    for _ in 0..60 {
        frames.frame(&controls.intent());
        clock.advance(FRAME_MS);
        let x = frames.session().platform.x;
        assert!((0.0..=650.0).contains(&x));
    }
    assert_eq!(frames.session().platform.x, 0.0);

    controls.key_up(Key::Left);
    controls.key_down(Key::Right, false);
    for _ in 0..100 {
        frames.frame(&controls.intent());
        clock.advance(FRAME_MS);
    }
    assert_eq!(frames.session().platform.x, 650.0);
}

#[test]
fn test_catch_scores_through_frame_loop() {
    let settings = Settings::from_json(r#"{"catch_cooldown_ticks": 10}"#).unwrap();
    let mut session = session_with(settings, 31);
    // Already sunk 5px into the platform and still descending
    session.fruit.pos = Vec2::new(session.platform.x + 55.0, 495.0);
    session.fruit.vel = Vec2::new(0.0, 10.0);

    let clock = ManualClock::new(0.0);
    let mut frames = FrameLoop::new(session, HeadlessRenderer::new(), &clock);
    let controls = Controls::new();

    frames.frame(&controls.intent());
    assert_eq!(frames.session().score, 1);
    assert_eq!(frames.renderer().last_score, Some(1));
    assert!((frames.session().fruit.vel.y - (-11.0)).abs() < 1e-4);

    // Still overlapping (bottom at 534), but the cooldown keeps it from scoring again
    clock.advance(FRAME_MS);
    frames.frame(&controls.intent());
    assert!(frames.session().fruit.bounds().bottom() > 530.0);
    assert_eq!(frames.session().score, 1);
    assert_eq!(frames.session().phase, GamePhase::Playing);
}
