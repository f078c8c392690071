//! Per-tick state machine: physics, collision checks and round flow

use glam::Vec2;

use super::ball::Ball;
use super::state::{GameEvent, GamePhase, GameState, MESSAGE_BOWLED, MESSAGE_HIT_WICKET};
use crate::highscores::HighScore;

/// Input sampled by the driver for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in screen coordinates
    pub pointer: Vec2,
    /// Primary button held; the bat is dragged while held
    pub primary_held: bool,
    /// Restart request (game-over screen)
    pub reset: bool,
    /// Confirm the entered name
    pub confirm: bool,
    /// Delete the last entered character
    pub backspace: bool,
    /// Characters typed this tick (name entry)
    pub text: String,
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Playing => tick_playing(state, input),
        GamePhase::GameOver => tick_game_over(state, input),
        GamePhase::NameInput => tick_name_input(state, input),
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput) {
    state
        .bat
        .update(input.pointer, input.primary_held, state.stumps.position());

    if state.spawn_timer.tick() {
        let ball = Ball::spawn(
            &mut state.rng,
            state.config.screen_width,
            state.config.screen_height,
        );
        state.events.push(GameEvent::BallSpawned {
            position: ball.position(),
            velocity: ball.velocity(),
        });
        state.balls.push(ball);
    } else if state.stumps.hit_by_bat(&state.bat) {
        state.stumps.fall();
        state.events.push(GameEvent::HitWicket { score: state.score });
        end_round(state, MESSAGE_HIT_WICKET);
        return;
    }

    if update_balls(state) {
        state.events.push(GameEvent::Bowled { score: state.score });
        end_round(state, MESSAGE_BOWLED);
    }
}

/// Advance every live ball and run its collision checks; returns true when
/// one of them bowled the stumps.
///
/// Removal happens after the loop (`retain`) so the collection is never
/// mutated mid-traversal.
fn update_balls(state: &mut GameState) -> bool {
    let GameState {
        config,
        bat,
        balls,
        stumps,
        score,
        events,
        rng,
        ..
    } = state;

    let mut bowled = false;
    for ball in balls.iter_mut() {
        ball.update(config.screen_width, config.screen_height);

        if !ball.is_active() {
            events.push(GameEvent::BallLost);
            continue;
        }

        // The bat test wins over the stumps test for the same tick
        if let Some(zone) = bat.check_ball_collision(ball) {
            if ball.hit(bat, zone, rng) {
                *score += 1;
                events.push(GameEvent::BallHit { score: *score });
            }
            continue;
        }

        if stumps.hit_by_ball(ball) {
            stumps.fall();
            bowled = true;
            // Once bowled, no further collisions matter this tick
            break;
        }
    }

    balls.retain(|ball| ball.is_active());
    bowled
}

fn end_round(state: &mut GameState, message: &str) {
    state.user_message = message.to_owned();
    state.phase = if state.is_new_high_score() {
        state.name_input.clear();
        GamePhase::NameInput
    } else {
        GamePhase::GameOver
    };
}

fn tick_game_over(state: &mut GameState, input: &TickInput) {
    if input.reset {
        state.reset();
    }
}

fn tick_name_input(state: &mut GameState, input: &TickInput) {
    state.name_input.push_str(&input.text);
    if input.backspace {
        state.name_input.pop();
    }

    if input.confirm {
        let name = sanitize_name(&state.name_input);
        state.high_score = HighScore {
            score: state.score,
            name: name.clone(),
        };
        state.events.push(GameEvent::HighScoreRecorded {
            score: state.score,
            name,
        });
        state.phase = GamePhase::GameOver;
    }
}

/// Keep only printable characters; an empty result becomes a placeholder
pub fn sanitize_name(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| !c.is_control()).collect();
    if cleaned.is_empty() {
        "Anonymous".to_owned()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::SimConfig;

    const SCREEN_W: f32 = 800.0;
    const SCREEN_H: f32 = 600.0;

    fn test_state() -> GameState {
        let config = SimConfig {
            screen_width: SCREEN_W,
            screen_height: SCREEN_H,
            ball_spawn_secs: 1,
        };
        GameState::new(config, HighScore::default(), 42)
    }

    /// Pointer that holds the bat at its starting angle (-60 degrees)
    fn steady_pointer() -> TickInput {
        TickInput {
            pointer: Vec2::new(BAT_START_X + 173.2, BAT_START_Y + 100.0),
            ..TickInput::default()
        }
    }

    #[test]
    fn test_spawn_timer_releases_one_ball() {
        let mut state = test_state();
        let input = steady_pointer();
        for _ in 0..TICKS_PER_SECOND - 1 {
            tick(&mut state, &input);
        }
        assert!(state.balls.is_empty());
        tick(&mut state, &input);
        assert_eq!(state.balls.len(), 1);
        assert!(
            state
                .take_events()
                .iter()
                .any(|e| matches!(e, GameEvent::BallSpawned { .. }))
        );
    }

    #[test]
    fn test_bat_contact_scores_once() {
        let mut state = test_state();
        // Park a slow ball on the bat's hitting line (bat angle -60
        // degrees, blade pointing right and down from the pivot)
        let blade_mid = Vec2::new(BAT_START_X, BAT_START_Y)
            + Vec2::new(0.866, 0.5) * (BAT_HEIGHT * 0.5)
            - Vec2::splat(BALL_SIZE / 2.0);
        state.balls.push(Ball::new(blade_mid, Vec2::ZERO));

        let input = steady_pointer();
        tick(&mut state, &input);

        assert_eq!(state.score, 1);
        assert_eq!(state.balls.len(), 1);
        assert!(state.balls[0].is_hit());
        // Deflected away with lift
        assert!(state.balls[0].velocity().y < 0.0);
        assert!(
            state
                .take_events()
                .contains(&GameEvent::BallHit { score: 1 })
        );

        // Still overlapping next tick, but a struck ball never scores again
        tick(&mut state, &input);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_bowled_ends_the_round() {
        let mut state = test_state();
        let stumps_pos = state.stumps.position();
        state.balls.push(Ball::new(stumps_pos, Vec2::ZERO));

        tick(&mut state, &steady_pointer());

        assert!(state.stumps.is_fallen());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.user_message, MESSAGE_BOWLED);
        assert!(
            state
                .take_events()
                .contains(&GameEvent::Bowled { score: 0 })
        );
    }

    #[test]
    fn test_bowled_with_new_best_asks_for_name() {
        let mut state = test_state();
        state.score = 3;
        state
            .balls
            .push(Ball::new(state.stumps.position(), Vec2::ZERO));

        tick(&mut state, &steady_pointer());

        assert_eq!(state.phase, GamePhase::NameInput);
        assert_eq!(state.user_message, MESSAGE_BOWLED);
    }

    #[test]
    fn test_hit_wicket_by_dragged_bat() {
        let mut state = test_state();
        let stumps_pos = state.stumps.position();

        // Grab the bat at its pivot, then drag it onto the stumps
        let mut input = steady_pointer();
        input.primary_held = true;
        input.pointer = state.bat.position();
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);

        input.pointer = stumps_pos + Vec2::new(10.0, 10.0);
        tick(&mut state, &input);

        assert!(state.stumps.is_fallen());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.user_message, MESSAGE_HIT_WICKET);
    }

    #[test]
    fn test_off_screen_balls_are_removed() {
        let mut state = test_state();
        state
            .balls
            .push(Ball::new(Vec2::new(-100.0, 300.0), Vec2::new(-10.0, 0.0)));

        tick(&mut state, &steady_pointer());

        assert!(state.balls.is_empty());
        assert!(state.take_events().contains(&GameEvent::BallLost));
    }

    #[test]
    fn test_reset_restores_fresh_round() {
        let mut state = test_state();
        state.score = 4;
        state
            .balls
            .push(Ball::new(state.stumps.position(), Vec2::ZERO));
        // End the round without a new best so we land on GameOver directly
        state.high_score = HighScore {
            score: 10,
            name: "Viv".to_owned(),
        };
        tick(&mut state, &steady_pointer());
        assert_eq!(state.phase, GamePhase::GameOver);

        let input = TickInput {
            reset: true,
            ..steady_pointer()
        };
        tick(&mut state, &input);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.balls.is_empty());
        assert!(!state.stumps.is_fallen());
        assert!(state.user_message.is_empty());
        // The best-score record survives the reset
        assert_eq!(state.high_score.score, 10);
        assert!(state.take_events().contains(&GameEvent::GameReset));
    }

    #[test]
    fn test_name_entry_sanitizes_and_records() {
        let mut state = test_state();
        state.score = 3;
        state
            .balls
            .push(Ball::new(state.stumps.position(), Vec2::ZERO));
        tick(&mut state, &steady_pointer());
        assert_eq!(state.phase, GamePhase::NameInput);
        state.take_events();

        let mut input = steady_pointer();
        input.text = "Sa\u{7}chin".to_owned();
        tick(&mut state, &input);

        input.text = "x".to_owned();
        tick(&mut state, &input);
        input.text.clear();
        input.backspace = true;
        tick(&mut state, &input);
        input.backspace = false;

        input.confirm = true;
        tick(&mut state, &input);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score.score, 3);
        assert_eq!(state.high_score.name, "Sachin");
        assert!(state.take_events().contains(&GameEvent::HighScoreRecorded {
            score: 3,
            name: "Sachin".to_owned(),
        }));
    }

    #[test]
    fn test_empty_name_becomes_placeholder() {
        assert_eq!(sanitize_name(""), "Anonymous");
        assert_eq!(sanitize_name("\u{1}\u{2}"), "Anonymous");
        assert_eq!(sanitize_name("Don"), "Don");
    }
}
