use std::ops::Deref;

use amethyst::{
    core::math::Vector2,
    core::transform::Transform,
    core::SystemDesc,
    derive::SystemDesc,
    ecs::prelude::{Join, ReadExpect, ReadStorage, System, SystemData, World, Write, WriteStorage},
    ui::UiText,
};

use amethyst::{
    assets::AssetStorage,
    audio::{output::Output, Source},
    ecs::Read,
};
use num_traits::identities::Zero;

use crate::audio::Sounds;
use crate::config::arena::ArenaConfig;
use crate::pong::{reset_position, Ball, Edge, LastPoint, ScoreBoard, ScoreText, Side};
use crate::systems::bounce::point_in_rect;

#[derive(SystemDesc)]
pub struct GoalSystem;

impl <'s> System<'s> for GoalSystem {
    type SystemData = (
        WriteStorage<'s, Ball>,
        WriteStorage<'s, Transform>,
        ReadStorage<'s, Edge>,
        WriteStorage<'s, UiText>,
        Write<'s, LastPoint>,
        Write<'s, ScoreBoard>,
        ReadExpect<'s, ScoreText>,
        Read<'s, ArenaConfig>,
        Read<'s, AssetStorage<Source>>,
        ReadExpect<'s, Sounds>,
        Option<Read<'s, Output>>
    );

    fn run(&mut self, (mut balls, mut transforms, edges, mut ui_texts, mut last_point, mut score_board, score_text, arena, source_storage, sounds, output): Self::SystemData) {
        let goals: Vec<(Side, f32, f32, f32, f32)> = (&edges, &transforms)
            .join()
            .filter_map(|(edge, transform)| {
                edge.goal_side().map(|side| {
                    (
                        side,
                        transform.translation().x,
                        transform.translation().y,
                        edge.width,
                        edge.height,
                    )
                })
            })
            .collect();

        for (ball, transform) in (&mut balls, &mut transforms).join() {
            let half = ball.size / 2.0;
            let ball_x = transform.translation().x;
            let ball_y = transform.translation().y;

            let struck = goals.iter().find(|&&(_, goal_x, goal_y, width, height)| {
                point_in_rect(ball_x, ball_y, goal_x, goal_y, width / 2.0 + half, height / 2.0 + half)
            });

            if let Some(&(side, ..)) = struck {
                last_point.side = Some(side);

                let scorer = side.opposite();
                match scorer {
                    Side::Left => {
                        score_board.score_left = (score_board.score_left + 1).min(999);
                        if let Some(text) = ui_texts.get_mut(score_text.p1_score) {
                            text.text = score_board.score_left.to_string();
                        }
                    }
                    Side::Right => {
                        score_board.score_right = (score_board.score_right + 1).min(999);
                        if let Some(text) = ui_texts.get_mut(score_text.p2_score) {
                            text.text = score_board.score_right.to_string();
                        }
                    }
                }
                println!("point to the {} paddle", scorer);

                let (x, y) = reset_position(&arena, half);
                transform.set_translation_x(x);
                transform.set_translation_y(y);
                ball.velocity = Vector2::zero();
                sounds.play_score_sound(&*source_storage, output.as_ref().map(|s| s.deref()));
            }
        }
    }
}
