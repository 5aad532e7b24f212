use amethyst::core::{Transform, SystemDesc};
use amethyst::derive::SystemDesc;
use amethyst::ecs::{Join, Read, ReadStorage, System, SystemData, World, WriteStorage};
use amethyst::input::{InputHandler, StringBindings};

use crate::pong::{Paddle, Side, Walls, PADDLE_STEP, WALL_MARGIN};

#[derive(SystemDesc)]
pub struct PaddleSystem;

impl<'s> System<'s> for PaddleSystem {
    type SystemData = (
        WriteStorage<'s, Transform>,
        ReadStorage<'s, Paddle>,
        Read<'s, InputHandler<StringBindings>>,
        Read<'s, Walls>,
    );

    fn run(&mut self, (mut transforms, paddles, input, walls): Self::SystemData) {
        for (paddle, transform) in (&paddles, &mut transforms).join() {
            let movement = match paddle.side {
                Side::Left => input.axis_value("left_paddle"),
                Side::Right => input.axis_value("right_paddle"),
            };

            if let Some(direction) = movement {
                if direction != 0.0 {
                    let paddle_y = transform.translation().y;
                    transform.set_translation_y(step_paddle(
                        paddle_y,
                        paddle.height / 2.0,
                        direction as f32,
                        &walls,
                    ));
                }
            }
        }
    }
}

/// One movement step: 8 units toward the pressed direction, suppressed once
/// the paddle edge reaches the margin line 10 units off the near wall center.
pub(crate) fn step_paddle(y: f32, half_height: f32, direction: f32, walls: &Walls) -> f32 {
    if direction > 0.0 {
        if y + half_height >= *walls.top_y() - WALL_MARGIN {
            return y;
        }
        y + PADDLE_STEP
    } else if direction < 0.0 {
        if y - half_height <= *walls.bottom_y() + WALL_MARGIN {
            return y;
        }
        y - PADDLE_STEP
    } else {
        y
    }
}

#[cfg(test)]
mod tests {
    use super::step_paddle;
    use crate::pong::{Walls, PADDLE_HEIGHT, PADDLE_STEP};

    #[test]
    fn step_moves_exactly_eight_units() {
        let walls = Walls::new(510.0, 90.0);
        assert_eq!(step_paddle(300.0, PADDLE_HEIGHT / 2.0, 1.0, &walls), 300.0 + PADDLE_STEP);
        assert_eq!(step_paddle(300.0, PADDLE_HEIGHT / 2.0, -1.0, &walls), 300.0 - PADDLE_STEP);
    }

    #[test]
    fn zero_axis_holds_position() {
        // both keys down cancel out to a zero axis
        let walls = Walls::new(510.0, 90.0);
        assert_eq!(step_paddle(300.0, PADDLE_HEIGHT / 2.0, 0.0, &walls), 300.0);
    }

    #[test]
    fn step_is_suppressed_at_the_wall_margin() {
        // walls at 510 and 90 put the margin lines for the paddle edges
        // at 500 and 100
        let walls = Walls::new(510.0, 90.0);

        let at_top = 500.0 - PADDLE_HEIGHT / 2.0;
        assert_eq!(step_paddle(at_top, PADDLE_HEIGHT / 2.0, 1.0, &walls), at_top);

        let at_bottom = 100.0 + PADDLE_HEIGHT / 2.0;
        assert_eq!(step_paddle(at_bottom, PADDLE_HEIGHT / 2.0, -1.0, &walls), at_bottom);

        // one unit shy of the margin still steps
        assert_eq!(
            step_paddle(at_top - 1.0, PADDLE_HEIGHT / 2.0, 1.0, &walls),
            at_top - 1.0 + PADDLE_STEP
        );
    }
}
