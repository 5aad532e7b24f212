use amethyst::{
  core::{transform::TransformBundle, frame_limiter::FrameRateLimitStrategy},
  prelude::*,
  renderer::{
    plugins::{RenderFlat2D, RenderToWindow},
    types::DefaultBackend,
    RenderingBundle,
  },
  utils::application_root_dir,
  input::{InputBundle, StringBindings},
  audio::AudioBundle,
  config::Config,
};

use amethyst::ui::{RenderUi, UiBundle};
use crate::pong::Pong;
use crate::config::arena::ArenaConfig;
use crate::systems::{PaddleSystem, ServeSystem, MoveSystem, BounceSystem, GoalSystem};

mod audio;
mod pong;
mod systems;
mod config;

fn main() -> amethyst::Result<()> {
  amethyst::start_logger(Default::default());

  let app_root = application_root_dir()?;
  let display_config_path = app_root.join("config").join("display.ron");

  let bindings_path = app_root.join("config").join("bindings.ron");
  let input_bundle = InputBundle::<StringBindings>::new()
    .with_bindings_from_file(bindings_path)?;

  let arena_path = app_root.join("config").join("arena.ron");
  let arena_config = ArenaConfig::load(&arena_path)?;

  let game_data = GameDataBuilder::default()
    .with_bundle(input_bundle)?
    .with_bundle(TransformBundle::new())?
    .with_bundle(AudioBundle::default())?
    .with_bundle(UiBundle::<StringBindings>::new())?
    .with(PaddleSystem, "paddle_system", &["input_system"])
    .with(ServeSystem::default(), "serve_system", &["input_system"])
    .with(MoveSystem, "move_system", &["paddle_system", "serve_system"])
    .with(BounceSystem, "bounce_system", &["move_system"])
    .with(GoalSystem, "goal_system", &["bounce_system"])
    .with_bundle(
      RenderingBundle::<DefaultBackend>::new()
        .with_plugin(
          RenderToWindow::from_config_path(display_config_path)?
            .with_clear([0.0, 0.0, 0.0, 1.0]),
        )
        .with_plugin(RenderFlat2D::default())
        .with_plugin(RenderUi::default()),
    )?
    ;
  let assets_dir = app_root.join("assets");
  let mut game : Application<_> = ApplicationBuilder::new(assets_dir, Pong::default())
    ?.with_resource(arena_config)
    .with_frame_limit(FrameRateLimitStrategy::Yield, 60)
    .build(game_data)?;
  game.run();
  Ok(())
}
