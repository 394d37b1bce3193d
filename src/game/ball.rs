use std::ops::Range;

use rand::Rng;
use tracing::debug;

use super::events::GameEvent;
use super::paddle::Paddle;
use super::state::{MatchState, Side};
use super::vector::normalize;

/// Integer range direction components are drawn from before normalizing.
/// Sampling integers keeps the exact-zero draw possible, so it is handled.
const DIRECTION_RANGE: i32 = 1000;

/// What the ball hit this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    PaddleLeftHit,
    PaddleRightHit,
    BoundaryHit,
}

impl Collision {
    pub fn paddle(side: Side) -> Self {
        match side {
            Side::Left => Collision::PaddleLeftHit,
            Side::Right => Collision::PaddleRightHit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    /// Distance covered per frame, whatever the direction
    pub base_speed: f32,
    pub start_x: f32,
    pub start_y: f32,
}

impl Ball {
    /// Create a ball resting at its start position. Call [`Ball::launch`] to serve.
    pub fn new(start_x: f32, start_y: f32, radius: f32, base_speed: f32) -> Self {
        Self {
            x: start_x,
            y: start_y,
            vx: 0.0,
            vy: 0.0,
            radius,
            base_speed,
            start_x,
            start_y,
        }
    }

    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    /// Whether the ball is travelling toward `side`'s goal line
    pub fn moving_toward(&self, side: Side) -> bool {
        match side {
            Side::Left => self.vx < 0.0,
            Side::Right => self.vx > 0.0,
        }
    }

    /// Serve in a uniformly random direction at base speed
    pub fn launch<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.redirect(rng, -DIRECTION_RANGE..DIRECTION_RANGE);
    }

    /// Pick a random direction whose x component is drawn from `x_range`
    fn redirect<R: Rng + ?Sized>(&mut self, rng: &mut R, x_range: Range<i32>) {
        loop {
            let x = rng.gen_range(x_range.clone());
            let y = rng.gen_range(-DIRECTION_RANGE..DIRECTION_RANGE);

            match normalize([x as f32, y as f32]) {
                // A purely vertical ball never reaches a paddle
                Ok([dx, _]) if dx == 0.0 => debug!(y, "sampled a vertical direction, resampling"),
                Ok([dx, dy]) => {
                    self.vx = dx * self.base_speed;
                    self.vy = dy * self.base_speed;
                    return;
                }
                Err(err) => debug!(%err, "sampled a zero direction, resampling"),
            }
        }
    }

    /// Fixed per-frame displacement
    pub fn update_position(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    pub fn collide<R: Rng + ?Sized>(&mut self, collision: Collision, rng: &mut R) -> GameEvent {
        match collision {
            Collision::PaddleLeftHit => self.redirect(rng, 1..DIRECTION_RANGE),
            Collision::PaddleRightHit => self.redirect(rng, -DIRECTION_RANGE..-1),
            Collision::BoundaryHit => self.vy = -self.vy,
        }

        GameEvent::HitSound
    }

    /// `side` failed to return the ball: score it, re-serve from the start position
    pub fn lose_round<R: Rng + ?Sized>(
        &mut self,
        side: Side,
        score: &mut MatchState,
        rng: &mut R,
    ) -> [GameEvent; 2] {
        score.record_loss(side);
        self.x = self.start_x;
        self.y = self.start_y;
        self.launch(rng);

        let cue = match side {
            Side::Left => GameEvent::LoseSound,
            Side::Right => GameEvent::WinSound,
        };
        [GameEvent::PointScored(side), cue]
    }

    // The hit window is deliberately larger than the drawn shapes: the ball
    // extends radius/2 horizontally and radius*2 vertically from (x, y).

    fn horizontally_aligned(&self, paddle: &Paddle) -> bool {
        self.x <= paddle.right() && self.x + self.radius / 2.0 >= paddle.x
    }

    fn within_hit_window(&self, paddle: &Paddle) -> bool {
        self.y < paddle.bottom() && self.y + self.radius * 2.0 > paddle.y
    }

    fn outside_field(&self, field_height: f32) -> bool {
        self.y < 0.0 || self.y + self.radius * 2.0 > field_height
    }

    /// Resolve this frame's collisions.
    ///
    /// Paddles are checked left then right. A paddle the ball has reached but
    /// missed loses the round, and a scored round ends collision handling for
    /// the frame (the ball is already back at its start position).
    pub fn detect_collisions<R: Rng + ?Sized>(
        &mut self,
        paddles: &[Paddle; 2],
        field_height: f32,
        score: &mut MatchState,
        rng: &mut R,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();

        for (side, paddle) in Side::ALL.into_iter().zip(paddles) {
            if !self.horizontally_aligned(paddle) {
                continue;
            }

            if self.within_hit_window(paddle) {
                events.push(self.collide(Collision::paddle(side), rng));
            } else {
                events.extend(self.lose_round(side, score, rng));
                return events;
            }
        }

        if self.outside_field(field_height) {
            events.push(self.collide(Collision::BoundaryHit, rng));
        }

        events
    }

    /// One frame: resolve collisions, then move with the resulting velocity
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        paddles: &[Paddle; 2],
        field_height: f32,
        score: &mut MatchState,
        rng: &mut R,
    ) -> Vec<GameEvent> {
        let events = self.detect_collisions(paddles, field_height, score, rng);
        self.update_position();
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FIELD_WIDTH: f32 = 800.0;
    const FIELD_HEIGHT: f32 = 600.0;

    fn paddles() -> [Paddle; 2] {
        [
            Paddle::new(50.0, 200.0, 20.0, 200.0, 5.0),
            Paddle::new(FIELD_WIDTH - 60.0, 200.0, 20.0, 200.0, 5.0),
        ]
    }

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        let mut ball = Ball::new(FIELD_WIDTH / 2.0 - 10.0, FIELD_HEIGHT / 2.0 - 10.0, 10.0, 6.0);
        ball.x = x;
        ball.y = y;
        ball.vx = vx;
        ball.vy = vy;
        ball
    }

    /// Step until the first frame that produces events
    fn run_until_event(
        ball: &mut Ball,
        score: &mut MatchState,
        rng: &mut StdRng,
    ) -> Vec<GameEvent> {
        let paddles = paddles();
        for _ in 0..200 {
            let events = ball.update(&paddles, FIELD_HEIGHT, score, rng);
            if !events.is_empty() {
                return events;
            }
        }
        panic!("no collision within 200 frames");
    }

    #[test]
    fn test_new_ball_is_at_rest() {
        let ball = Ball::new(390.0, 290.0, 10.0, 6.0);
        assert_eq!((ball.x, ball.y), (390.0, 290.0));
        assert_eq!(ball.speed(), 0.0);
    }

    #[test]
    fn test_launch_speed_is_base_speed() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ball = Ball::new(390.0, 290.0, 10.0, 6.0);
        for _ in 0..500 {
            ball.launch(&mut rng);
            assert!((ball.speed() - 6.0).abs() < 1e-4, "speed {}", ball.speed());
            assert!(ball.vx != 0.0 || ball.vy != 0.0);
        }
    }

    #[test]
    fn test_launch_never_serves_vertically() {
        // Draws map to x = 0 first, then y = 500, then x = -1000, y = -500
        let mut rng = StepRng::new(1 << 31, 1 << 30);
        let mut ball = Ball::new(390.0, 290.0, 10.0, 6.0);
        ball.launch(&mut rng);
        assert!(ball.vx != 0.0);
        assert!((ball.speed() - 6.0).abs() < 1e-4);

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2000 {
            ball.launch(&mut rng);
            assert!(ball.vx != 0.0);
        }
    }

    #[test]
    fn test_paddle_hits_send_ball_back_into_field() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut ball = ball_at(60.0, 300.0, -6.0, 0.0);

        for _ in 0..500 {
            assert_eq!(ball.collide(Collision::PaddleLeftHit, &mut rng), GameEvent::HitSound);
            assert!(ball.vx > 0.0);
            assert!((ball.speed() - 6.0).abs() < 1e-4);

            ball.collide(Collision::PaddleRightHit, &mut rng);
            assert!(ball.vx < 0.0);
            assert!((ball.speed() - 6.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_boundary_hit_inverts_vertical_velocity() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ball = ball_at(400.0, -1.0, 3.0, -4.0);

        assert_eq!(ball.collide(Collision::BoundaryHit, &mut rng), GameEvent::HitSound);
        assert_eq!(ball.vy, 4.0);
        assert_eq!(ball.vx, 3.0);
    }

    #[test]
    fn test_update_integrates_after_collisions() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut score = MatchState::new();
        let mut ball = ball_at(400.0, 300.0, 2.5, -1.5);

        let events = ball.update(&paddles(), FIELD_HEIGHT, &mut score, &mut rng);
        assert!(events.is_empty());
        assert_eq!((ball.x, ball.y), (402.5, 298.5));
    }

    #[test]
    fn test_ball_returned_by_left_paddle() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut score = MatchState::new();
        let mut ball = ball_at(400.0, 300.0, -6.0, 0.0);

        let events = run_until_event(&mut ball, &mut score, &mut rng);

        assert_eq!(events, vec![GameEvent::HitSound]);
        assert!(ball.vx > 0.0);
        assert_eq!(score.points(), [0, 0]);
    }

    #[test]
    fn test_ball_missed_by_left_paddle_scores_for_right() {
        for y in [100.0, 500.0] {
            let mut rng = StdRng::seed_from_u64(42);
            let mut score = MatchState::new();
            let mut ball = ball_at(400.0, y, -6.0, 0.0);

            let events = run_until_event(&mut ball, &mut score, &mut rng);

            assert_eq!(
                events,
                vec![GameEvent::PointScored(Side::Left), GameEvent::LoseSound]
            );
            assert_eq!(score.points(), [1, 0]);
            assert_eq!(score.points_for(Side::Right), 1);
            // Re-served from the start, then moved once at base speed
            assert!((ball.x - (ball.start_x + ball.vx)).abs() < 1e-4);
            assert!((ball.y - (ball.start_y + ball.vy)).abs() < 1e-4);
            assert!((ball.speed() - 6.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_extended_hit_window_edges() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = paddles();

        // Ball box spans y..y+20 against paddle 200..400
        for (y, hit) in [(181.0, true), (180.0, false), (399.0, true), (400.0, false)] {
            let mut score = MatchState::new();
            let mut ball = ball_at(60.0, y, -6.0, 0.0);
            let events = ball.detect_collisions(&p, FIELD_HEIGHT, &mut score, &mut rng);
            assert_eq!(events.first() == Some(&GameEvent::HitSound), hit, "y = {}", y);
        }

        // Horizontal reach is only radius/2 past the ball's x
        let mut score = MatchState::new();
        let mut ball = ball_at(44.0, 300.0, -6.0, 0.0);
        assert!(ball
            .detect_collisions(&p, FIELD_HEIGHT, &mut score, &mut rng)
            .is_empty());
        let mut ball = ball_at(45.0, 300.0, -6.0, 0.0);
        assert_eq!(
            ball.detect_collisions(&p, FIELD_HEIGHT, &mut score, &mut rng),
            vec![GameEvent::HitSound]
        );
    }

    #[test]
    fn test_losses_accumulate_per_side() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut score = MatchState::new();
        let mut ball = ball_at(400.0, 300.0, 0.0, 0.0);

        assert_eq!(score.points(), [0, 0]);
        let events = ball.lose_round(Side::Left, &mut score, &mut rng);
        assert_eq!(events, [GameEvent::PointScored(Side::Left), GameEvent::LoseSound]);
        assert_eq!(score.points(), [1, 0]);

        let events = ball.lose_round(Side::Right, &mut score, &mut rng);
        assert_eq!(events, [GameEvent::PointScored(Side::Right), GameEvent::WinSound]);
        assert_eq!(score.points(), [1, 1]);
        assert_eq!((ball.x, ball.y), (ball.start_x, ball.start_y));
    }

    #[test]
    fn test_right_paddle_miss_scores_for_left() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut score = MatchState::new();
        let mut ball = ball_at(400.0, 50.0, 6.0, 0.0);

        let events = run_until_event(&mut ball, &mut score, &mut rng);

        assert_eq!(
            events,
            vec![GameEvent::PointScored(Side::Right), GameEvent::WinSound]
        );
        assert_eq!(score.points(), [0, 1]);
        assert_eq!(score.points_for(Side::Left), 1);
    }

    #[test]
    fn test_wall_bounce() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut score = MatchState::new();

        let mut ball = ball_at(400.0, -2.0, 3.0, -4.0);
        let events = ball.detect_collisions(&paddles(), FIELD_HEIGHT, &mut score, &mut rng);
        assert_eq!(events, vec![GameEvent::HitSound]);
        assert_eq!(ball.vy, 4.0);

        // Bottom edge uses the ball's full extended height
        let mut ball = ball_at(400.0, 581.0, 3.0, 4.0);
        let events = ball.detect_collisions(&paddles(), FIELD_HEIGHT, &mut score, &mut rng);
        assert_eq!(events, vec![GameEvent::HitSound]);
        assert_eq!(ball.vy, -4.0);
    }

    #[test]
    fn test_scored_point_suppresses_wall_bounce() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut score = MatchState::new();
        // Above the top wall and level with the left paddle, which sits lower
        let mut ball = ball_at(60.0, -5.0, -6.0, -1.0);

        let events = ball.detect_collisions(&paddles(), FIELD_HEIGHT, &mut score, &mut rng);

        assert_eq!(
            events,
            vec![GameEvent::PointScored(Side::Left), GameEvent::LoseSound]
        );
        assert!(!events.contains(&GameEvent::HitSound));
    }

    #[test]
    fn test_paddle_and_wall_can_fire_in_one_frame() {
        let mut rng = StdRng::seed_from_u64(29);
        let mut score = MatchState::new();
        let mut p = paddles();
        p[0].y = 0.0;
        let mut ball = ball_at(60.0, -3.0, -6.0, -2.0);

        let events = ball.detect_collisions(&p, FIELD_HEIGHT, &mut score, &mut rng);

        assert_eq!(events, vec![GameEvent::HitSound, GameEvent::HitSound]);
        assert!(ball.vx > 0.0);
        assert_eq!(score.points(), [0, 0]);
    }

    #[test]
    fn test_moving_toward() {
        let ball = ball_at(400.0, 300.0, 6.0, 0.0);
        assert!(ball.moving_toward(Side::Right));
        assert!(!ball.moving_toward(Side::Left));

        let ball = ball_at(400.0, 300.0, 0.0, 6.0);
        assert!(!ball.moving_toward(Side::Right));
        assert!(!ball.moving_toward(Side::Left));
    }
}
