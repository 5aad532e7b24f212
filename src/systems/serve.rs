use std::ops::Deref;

use amethyst::{
    assets::AssetStorage,
    audio::{output::Output, Source},
    ecs::prelude::{Join, Read, ReadExpect, System, WriteStorage},
    input::{InputHandler, StringBindings},
};

use crate::audio::Sounds;
use crate::pong::{Ball, LastPoint, SERVE_SPEED};

#[derive(Default)]
pub struct ServeSystem {
    held: bool,
}

impl<'s> System<'s> for ServeSystem {
    type SystemData = (
        WriteStorage<'s, Ball>,
        Read<'s, InputHandler<StringBindings>>,
        Read<'s, LastPoint>,
        Read<'s, AssetStorage<Source>>,
        ReadExpect<'s, Sounds>,
        Option<Read<'s, Output>>,
    );

    fn run(&mut self, (mut balls, input, last_point, source_storage, sounds, output): Self::SystemData) {
        let down = input.action_is_down("serve").unwrap_or(false);

        // fire on the key-down edge only, so holding space does not relaunch
        // the ball the instant a point is scored
        if down && !self.held {
            for ball in (&mut balls).join() {
                if let Some(velocity_x) = serve_velocity(ball.velocity.x, &last_point) {
                    ball.velocity.x = velocity_x;
                    sounds.play_serve_sound(&*source_storage, output.as_ref().map(|s| s.deref()));
                }
            }
        }
        self.held = down;
    }
}

/// A stopped ball relaunches away from the last-struck goal; a moving ball
/// ignores the serve key.
pub(crate) fn serve_velocity(current_x: f32, last_point: &LastPoint) -> Option<f32> {
    if current_x == 0.0 {
        Some(SERVE_SPEED * last_point.serve_direction())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::serve_velocity;
    use crate::pong::{LastPoint, Side, SERVE_SPEED};

    #[test]
    fn opening_serve_goes_right() {
        assert_eq!(serve_velocity(0.0, &LastPoint::default()), Some(SERVE_SPEED));
    }

    #[test]
    fn serve_goes_away_from_the_last_goal() {
        let right = LastPoint { side: Some(Side::Right) };
        assert_eq!(serve_velocity(0.0, &right), Some(-SERVE_SPEED));

        let left = LastPoint { side: Some(Side::Left) };
        assert_eq!(serve_velocity(0.0, &left), Some(SERVE_SPEED));
    }

    #[test]
    fn serving_a_moving_ball_is_a_no_op() {
        let right = LastPoint { side: Some(Side::Right) };
        assert_eq!(serve_velocity(250.0, &right), None);
        assert_eq!(serve_velocity(-250.0, &right), None);
    }
}
