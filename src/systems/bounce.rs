use std::ops::Deref;

use amethyst::{
    core::{Transform, SystemDesc},
    derive::SystemDesc,
    ecs::prelude::{Join, ReadStorage, System, SystemData, World, WriteStorage},
};

use amethyst::{
    assets::AssetStorage,
    audio::{output::Output, Source},
    ecs::{Read, ReadExpect},
};

use crate::audio::Sounds;
use crate::config::arena::ArenaConfig;
use crate::pong::{Ball, Edge, EdgeSide, Paddle, Side};

#[derive(SystemDesc)]
pub struct BounceSystem;

impl <'s> System<'s> for BounceSystem {
    type SystemData = (
        ReadStorage<'s, Paddle>,
        ReadStorage<'s, Edge>,
        WriteStorage<'s, Ball>,
        ReadStorage<'s, Transform>,
        Read<'s, ArenaConfig>,
        Read<'s, AssetStorage<Source>>,
        ReadExpect<'s, Sounds>,
        Option<Read<'s, Output>>
    );

    fn run(&mut self, (paddles, edges, mut balls, transforms, arena, source_storage, sounds, output): Self::SystemData) {
        for (ball, transform) in (&mut balls, &transforms).join() {
            let ball_x = transform.translation().x;
            let ball_y = transform.translation().y;
            let half = ball.size / 2.0;

            for (paddle, paddle_transform) in (&paddles, &transforms).join() {
                let paddle_x = paddle_transform.translation().x;
                let paddle_y = paddle_transform.translation().y;

                if point_in_rect(ball_x, ball_y, paddle_x, paddle_y, paddle.width / 2.0 + half, paddle.height / 2.0 + half)
                    && (ball.velocity.x > 0.0 && paddle.side == Side::Right
                        || ball.velocity.x < 0.0 && paddle.side == Side::Left)
                {
                    // the paddle is immovable, so the ball takes the full
                    // reflection; the vertical component is steered by how
                    // far off the paddle center it struck
                    ball.velocity.x = -ball.velocity.x;
                    ball.velocity.y = deflection(ball_y, paddle_y);
                    sounds.play_bounce_sound(&*source_storage, output.as_ref().map(|s| s.deref()));
                }
            }

            for (edge, edge_transform) in (&edges, &transforms).join() {
                match edge.side {
                    EdgeSide::Top | EdgeSide::Bottom => (),
                    EdgeSide::Goal(_) => continue,
                }
                let edge_x = edge_transform.translation().x;
                let edge_y = edge_transform.translation().y;

                if point_in_rect(ball_x, ball_y, edge_x, edge_y, edge.width / 2.0 + half, edge.height / 2.0 + half)
                    && (edge_y - ball_y) * ball.velocity.y > 0.0
                {
                    ball.velocity.y = -ball.velocity.y * ball.bounce.y;
                    sounds.play_bounce_sound(&*source_storage, output.as_ref().map(|s| s.deref()));
                }
            }

            if ball.collide_world_bounds {
                if ball_x < half && ball.velocity.x < 0.0
                    || ball_x > arena.width - half && ball.velocity.x > 0.0
                {
                    ball.velocity.x = -ball.velocity.x * ball.bounce.x;
                    sounds.play_bounce_sound(&*source_storage, output.as_ref().map(|s| s.deref()));
                }
                if ball_y < half && ball.velocity.y < 0.0
                    || ball_y > arena.height - half && ball.velocity.y > 0.0
                {
                    ball.velocity.y = -ball.velocity.y * ball.bounce.y;
                    sounds.play_bounce_sound(&*source_storage, output.as_ref().map(|s| s.deref()));
                }
            }
        }
    }
}

pub(crate) fn point_in_rect(p_x: f32, p_y: f32, rect_x: f32, rect_y: f32, h_tolerance: f32, v_tolerance: f32) -> bool {
    (p_x - rect_x).abs() <= h_tolerance
        && (p_y - rect_y).abs() <= v_tolerance
}

/// The vertical send-off after a paddle hit: twice the vertical offset
/// between the ball and paddle reference points at collision time.
pub(crate) fn deflection(ball_y: f32, paddle_y: f32) -> f32 {
    (ball_y - paddle_y) * 2.0
}

#[cfg(test)]
mod tests {
    use super::{deflection, point_in_rect};

    #[test]
    fn deflection_doubles_the_vertical_offset() {
        assert_eq!(deflection(320.0, 300.0), 40.0);
        assert_eq!(deflection(290.0, 300.0), -20.0);
        assert_eq!(deflection(300.0, 300.0), 0.0);
    }

    #[test]
    fn overlap_tolerances_are_inclusive() {
        assert!(point_in_rect(110.0, 300.0, 100.0, 300.0, 10.0, 40.0));
        assert!(point_in_rect(95.0, 340.0, 100.0, 300.0, 10.0, 40.0));
        assert!(!point_in_rect(111.0, 300.0, 100.0, 300.0, 10.0, 40.0));
        assert!(!point_in_rect(100.0, 341.0, 100.0, 300.0, 10.0, 40.0));
    }
}
