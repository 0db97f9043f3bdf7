use glam::Vec2;
use pong_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Started(MatchConfig),
    Ended(Side, Score),
    Halted,
}

#[derive(Clone, Default)]
struct RecordingListener {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl MatchListener for RecordingListener {
    fn on_match_start(&mut self, config: &MatchConfig) {
        self.notices.borrow_mut().push(Notice::Started(*config));
    }

    fn on_match_end(&mut self, winner: Side, score: Score) {
        self.notices.borrow_mut().push(Notice::Ended(winner, score));
    }

    fn on_halt(&mut self, _error: &TickError) {
        self.notices.borrow_mut().push(Notice::Halted);
    }
}

/// Keeps every rendered frame
#[derive(Default)]
struct FrameLog {
    frames: Vec<(Snapshot, Events)>,
}

impl RenderSurface for FrameLog {
    fn draw(&mut self, view: &Snapshot, events: &Events) {
        self.frames.push((*view, events.clone()));
    }
}

fn two_player() -> MatchConfig {
    MatchConfig::new(Difficulty::Easy, Mode::Multiplayer)
}

fn place_ball(driver: &mut FrameDriver, pos: Vec2, vel: Vec2) {
    let state = driver.state_mut();
    let entity = state.ball_entity();
    *state.world.get::<&mut Ball>(entity).unwrap() = Ball::new(pos, vel);
}

fn place_paddle(driver: &mut FrameDriver, side: Side, y: f32) {
    let state = driver.state_mut();
    let entity = state.paddle_entity(side);
    state.world.get::<&mut Paddle>(entity).unwrap().y = y;
}

fn run_to_stop(driver: &mut FrameDriver, surface: &mut FrameLog, max_ticks: usize) -> usize {
    for n in 1..=max_ticks {
        if driver.tick(surface).unwrap() == NextFrame::Stop {
            return n;
        }
    }
    max_ticks
}

#[test]
fn test_left_paddle_returns_ball_on_overlap() {
    let mut driver = FrameDriver::new(Config::new(), Box::new(SilentListener), 1).unwrap();
    let mut surface = FrameLog::default();
    driver.start(two_player());
    place_paddle(&mut driver, Side::Left, 160.0);
    place_ball(&mut driver, Vec2::new(9.0, 170.0), Vec2::new(-2.5, 2.5));

    driver.tick(&mut surface).unwrap();

    let ball = driver.state().ball().unwrap();
    assert_eq!(ball.vel.x, 2.5);
    assert_eq!(driver.state().score, Score::new());
}

#[test]
fn test_left_miss_scores_for_right_and_recenters() {
    let mut driver = FrameDriver::new(Config::new(), Box::new(SilentListener), 1).unwrap();
    let mut surface = FrameLog::default();
    driver.start(two_player());
    place_paddle(&mut driver, Side::Left, 0.0);
    place_ball(&mut driver, Vec2::new(9.0, 170.0), Vec2::new(-2.5, 2.5));

    driver.tick(&mut surface).unwrap();

    let ball = driver.state().ball().unwrap();
    assert_eq!(driver.state().score, Score { left: 0, right: 1 });
    assert_eq!(ball.pos, Vec2::new(300.0, 200.0));
    assert!(surface.frames[0].1.right_scored);
}

#[test]
fn test_idle_two_player_match_runs_to_completion() {
    let listener = RecordingListener::default();
    let notices = listener.notices.clone();
    let mut driver = FrameDriver::new(Config::new(), Box::new(listener), 1).unwrap();
    let mut surface = FrameLog::default();

    driver.start(two_player());
    let ticks = run_to_stop(&mut driver, &mut surface, 10_000);

    // Untouched paddles at the center: the ball always meets the left paddle
    // and always misses the right one.
    assert_eq!(ticks, 580);
    assert_eq!(driver.phase(), Phase::Finished);
    assert_eq!(driver.winner(), Some(Side::Left));
    assert_eq!(driver.state().score, Score { left: 5, right: 0 });
    assert_eq!(surface.frames.len(), 580);
    assert_eq!(
        *notices.borrow(),
        vec![
            Notice::Started(two_player()),
            Notice::Ended(Side::Left, Score { left: 5, right: 0 }),
        ]
    );
}

#[test]
fn test_finished_match_is_frozen() {
    let listener = RecordingListener::default();
    let notices = listener.notices.clone();
    let mut driver = FrameDriver::new(Config::new(), Box::new(listener), 1).unwrap();
    let mut surface = FrameLog::default();

    driver.start(two_player());
    run_to_stop(&mut driver, &mut surface, 10_000);
    let final_view = driver.state().snapshot().unwrap();
    let frames = surface.frames.len();

    for _ in 0..10 {
        assert_eq!(driver.tick(&mut surface).unwrap(), NextFrame::Stop);
    }
    driver.handle_key("s", KeyEdge::Press).unwrap();

    assert_eq!(driver.state().snapshot().unwrap(), final_view);
    assert_eq!(surface.frames.len(), frames);
    let ends = notices
        .borrow()
        .iter()
        .filter(|n| matches!(n, Notice::Ended(..)))
        .count();
    assert_eq!(ends, 1, "match end is reported exactly once");
}

#[test]
fn test_scores_never_pass_threshold() {
    let mut driver = FrameDriver::new(Config::new(), Box::new(SilentListener), 5).unwrap();
    let mut surface = FrameLog::default();
    driver.start(two_player());
    run_to_stop(&mut driver, &mut surface, 10_000);

    for (view, _) in &surface.frames {
        assert!(view.score.left <= 5 && view.score.right <= 5);
    }
    let finished = surface
        .frames
        .iter()
        .filter(|(view, _)| view.phase == Phase::Finished)
        .count();
    assert_eq!(finished, 1);
}

#[test]
fn test_paddles_stay_on_surface_under_random_input() {
    let mut driver = FrameDriver::new(Config::new(), Box::new(SilentListener), 11).unwrap();
    let mut surface = FrameLog::default();
    let mut keys = GameRng::new(99);
    let names = ["ArrowUp", "ArrowDown", "w", "s"];

    driver.start(two_player());
    for _ in 0..5_000 {
        let pick = (keys.sample() * names.len() as f32) as usize % names.len();
        let edge = if keys.sample() < 0.7 {
            KeyEdge::Press
        } else {
            KeyEdge::Release
        };
        driver.handle_key(names[pick], edge).unwrap();
        if driver.tick(&mut surface).unwrap() == NextFrame::Stop {
            driver.start(two_player());
        }
    }

    let max_y = Config::new().paddle_max_y();
    for (view, _) in &surface.frames {
        for side in [Side::Left, Side::Right] {
            let y = view.paddle(side).y;
            assert!((0.0..=max_y).contains(&y), "{side} paddle at {y}");
        }
    }
}

#[test]
fn test_vertical_speed_flips_only_on_wall_contact() {
    let mut driver = FrameDriver::new(Config::new(), Box::new(SilentListener), 3).unwrap();
    let mut surface = FrameLog::default();
    driver.start(two_player());
    let mut previous = driver.state().snapshot().unwrap();

    run_to_stop(&mut driver, &mut surface, 10_000);

    let mut wall_hits = 0;
    for (view, events) in &surface.frames {
        let flipped = view.ball.vel.y == -previous.ball.vel.y;
        assert_eq!(flipped, events.ball_hit_wall);
        if events.ball_hit_wall {
            wall_hits += 1;
        }
        previous = *view;
    }
    assert!(wall_hits > 0);
}

#[test]
fn test_computer_paddle_rests_while_ball_heads_away() {
    let mut driver = FrameDriver::new(Config::new(), Box::new(SilentListener), 21).unwrap();
    let mut surface = FrameLog::default();
    driver.start(MatchConfig::new(Difficulty::Hard, Mode::SinglePlayer));
    let mut previous = driver.state().snapshot().unwrap();

    run_to_stop(&mut driver, &mut surface, 3_000);

    let mut moved = false;
    for (view, _) in &surface.frames {
        if previous.ball.vel.x < 0.0 {
            assert_eq!(view.right.vy, 0.0);
        }
        moved |= view.right.vy != 0.0;
        previous = *view;
    }
    assert!(moved, "computer paddle reacts at least once");
}

#[test]
fn test_reset_after_match_returns_to_idle() {
    let mut driver = FrameDriver::new(Config::new(), Box::new(SilentListener), 1).unwrap();
    let mut surface = FrameLog::default();
    driver.start(two_player());
    run_to_stop(&mut driver, &mut surface, 10_000);

    driver.reset();
    let idle = driver.state().snapshot().unwrap();
    driver.reset();

    assert_eq!(driver.state().snapshot().unwrap(), idle);
    assert_eq!(idle.phase, Phase::Idle);
    assert_eq!(idle.score, Score::new());
    assert_eq!(driver.winner(), None);
    assert_eq!(driver.tick(&mut surface).unwrap(), NextFrame::Stop);
}

#[test]
fn test_halt_is_reported_to_listener() {
    let listener = RecordingListener::default();
    let notices = listener.notices.clone();
    let mut driver = FrameDriver::new(Config::new(), Box::new(listener), 1).unwrap();
    let mut surface = FrameLog::default();
    driver.start(two_player());
    place_ball(&mut driver, Vec2::new(300.0, f32::INFINITY), Vec2::new(2.5, 2.5));

    assert!(driver.tick(&mut surface).is_err());
    assert_eq!(notices.borrow().last(), Some(&Notice::Halted));

    // A new match clears the halt
    driver.start(two_player());
    assert_eq!(driver.tick(&mut surface).unwrap(), NextFrame::Schedule);
}
