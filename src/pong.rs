use amethyst::{
    assets::{AssetStorage, Handle, Loader},
    core::math::{Vector2, Vector3},
    core::transform::Transform,
    ecs::prelude::{Component, DenseVecStorage, Entity, Join, ReadStorage},
    input::{is_close_requested, is_key_down},
    prelude::*,
    renderer::{
        loaders::load_from_srgba,
        palette::Srgba,
        resources::Tint,
        Camera, Sprite, SpriteRender, SpriteSheet, Texture, Transparent,
    },
    ui::{Anchor, LineMode, TtfFormat, UiText, UiTransform},
    winit,
};
use derive_more::Display;
use getset::Getters;

use crate::audio::initialize_sound;
use crate::config::arena::ArenaConfig;

pub const BALL_SIZE: f32 = 16.0;
pub const BALL_MASS: f32 = 10.0;
pub const SERVE_SPEED: f32 = 250.0;

pub const PADDLE_WIDTH: f32 = 8.0;
pub const PADDLE_HEIGHT: f32 = 75.0;
pub const PADDLE_STEP: f32 = 8.0;

pub const WALL_SIZE: f32 = 10.0;
pub const WALL_MARGIN: f32 = 10.0;

pub const DIVIDER_WIDTH: f32 = 8.0;
pub const DIVIDER_COUNT: usize = 8;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Display)]
pub enum Side {
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "right")]
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

pub struct Paddle {
    pub width: f32,
    pub height: f32,
    pub side: Side,
}

impl Paddle {
    fn new(side: Side) -> Self {
        Paddle {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            side,
        }
    }
}

impl Component for Paddle {
    type Storage = DenseVecStorage<Self>;
}

pub struct Ball {
    pub velocity: Vector2<f32>,
    pub size: f32,
    pub mass: f32,
    pub bounce: Vector2<f32>,
    pub collide_world_bounds: bool,
}

impl Ball {
    fn new() -> Self {
        Ball {
            velocity: Vector2::new(SERVE_SPEED, 0.0),
            size: BALL_SIZE,
            mass: BALL_MASS,
            bounce: Vector2::new(1.0, 1.0),
            collide_world_bounds: true,
        }
    }
}

impl Component for Ball {
    type Storage = DenseVecStorage<Self>;
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum EdgeSide {
    Top,
    Bottom,
    Goal(Side),
}

pub struct Edge {
    pub side: EdgeSide,
    pub width: f32,
    pub height: f32,
}

impl Edge {
    pub fn goal_side(&self) -> Option<Side> {
        match self.side {
            EdgeSide::Goal(side) => Some(side),
            _ => None,
        }
    }
}

impl Component for Edge {
    type Storage = DenseVecStorage<Self>;
}

/// Which goal edge the ball last crossed. `None` until the first point, in
/// which case the opening serve goes toward the right paddle.
#[derive(Default)]
pub struct LastPoint {
    pub side: Option<Side>,
}

impl LastPoint {
    pub fn serve_direction(&self) -> f32 {
        match self.side {
            Some(Side::Right) => -1.0,
            _ => 1.0,
        }
    }
}

#[derive(Default)]
pub struct ScoreBoard {
    pub score_left: u32,
    pub score_right: u32,
}

pub struct ScoreText {
    pub p1_score: Entity,
    pub p2_score: Entity,
}

#[derive(Getters, Clone, Copy, Debug)]
pub struct Walls {
    #[get = "pub"]
    top_y: f32,
    #[get = "pub"]
    bottom_y: f32,
}

impl Walls {
    pub fn new(top_y: f32, bottom_y: f32) -> Self {
        Walls { top_y, bottom_y }
    }

    fn from_arena(arena: &ArenaConfig) -> Self {
        Walls::new(arena.center_y() * 1.7, arena.center_y() * 0.3)
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::from_arena(&ArenaConfig::default())
    }
}

#[derive(Default)]
pub struct Pong;

impl SimpleState for Pong {
    fn on_start(&mut self, data: StateData<GameData>) {
        let world = data.world;
        let arena = (*world.read_resource::<ArenaConfig>()).clone();

        world.register::<Tint>();
        world.register::<Transparent>();
        let sprite_sheet_handle = load_sprite_sheet(world);

        initialize_camera(world, &arena);
        initialize_ball(world, sprite_sheet_handle.clone(), &arena);
        initialize_edges(world, sprite_sheet_handle.clone(), &arena);
        initialize_paddles(world, sprite_sheet_handle, &arena);
        initialize_scoreboard(world);
        initialize_sound(world);
        verify_court(world);
    }

    fn handle_event(
        &mut self,
        _data: StateData<'_, GameData<'_, '_>>,
        event: StateEvent,
    ) -> SimpleTrans {
        if let StateEvent::Window(ref event) = event {
            if is_close_requested(&event) || is_key_down(&event, winit::VirtualKeyCode::Escape) {
                Trans::Quit
            } else {
                Trans::None
            }
        } else {
            Trans::None
        }
    }
}

fn initialize_camera(world: &mut World, arena: &ArenaConfig) {
    let mut transform = Transform::default();
    transform.set_translation_xyz(arena.center_x(), arena.center_y(), 1.0);

    world
        .create_entity()
        .with(Camera::standard_2d(arena.width, arena.height))
        .with(transform)
        .build();
}

fn initialize_ball(world: &mut World, sprite_sheet_handle: Handle<SpriteSheet>, arena: &ArenaConfig) {
    let mut transform = Transform::default();
    transform.set_translation_xyz(arena.center_x(), arena.center_y(), 0.0);
    transform.set_scale(Vector3::new(BALL_SIZE, BALL_SIZE, 1.0));

    let sprite_render = SpriteRender {
        sprite_sheet: sprite_sheet_handle,
        sprite_number: 0,
    };

    world
        .create_entity()
        .with(Ball::new())
        .with(transform)
        .with(sprite_render)
        .with(Tint(Srgba::new(0.996, 0.996, 0.996, 1.0)))
        .build();
}

fn initialize_paddles(world: &mut World, sprite_sheet_handle: Handle<SpriteSheet>, arena: &ArenaConfig) {
    let sprite_render = SpriteRender {
        sprite_sheet: sprite_sheet_handle,
        sprite_number: 0,
    };

    for &side in &[Side::Left, Side::Right] {
        let pos_x = match side {
            Side::Left => arena.center_x() * 0.25,
            Side::Right => arena.center_x() * 0.25 + arena.width * 0.75,
        };

        let mut transform = Transform::default();
        transform.set_translation_xyz(pos_x, arena.center_y(), 0.0);
        transform.set_scale(Vector3::new(PADDLE_WIDTH, PADDLE_HEIGHT, 1.0));

        world
            .create_entity()
            .with(Paddle::new(side))
            .with(transform)
            .with(sprite_render.clone())
            .with(Tint(Srgba::new(0.89, 0.89, 0.89, 1.0)))
            .build();
    }
}

fn initialize_edges(world: &mut World, sprite_sheet_handle: Handle<SpriteSheet>, arena: &ArenaConfig) {
    let walls = Walls::from_arena(arena);
    let sprite_render = SpriteRender {
        sprite_sheet: sprite_sheet_handle,
        sprite_number: 0,
    };

    for &(side, y) in &[(EdgeSide::Top, *walls.top_y()), (EdgeSide::Bottom, *walls.bottom_y())] {
        let mut transform = Transform::default();
        transform.set_translation_xyz(arena.center_x(), y, 0.0);
        transform.set_scale(Vector3::new(arena.width * 0.75, WALL_SIZE, 1.0));

        world
            .create_entity()
            .with(Edge {
                side,
                width: arena.width * 0.75,
                height: WALL_SIZE,
            })
            .with(transform)
            .with(sprite_render.clone())
            .with(Tint(Srgba::new(0.996, 0.996, 0.996, 1.0)))
            .build();
    }

    // goal edges carry no sprite; only their bodies matter
    for &(side, x) in &[
        (Side::Left, WALL_SIZE / 2.0),
        (Side::Right, arena.width - WALL_SIZE / 2.0),
    ] {
        let mut transform = Transform::default();
        transform.set_translation_xyz(x, arena.center_y(), 0.0);

        world
            .create_entity()
            .with(Edge {
                side: EdgeSide::Goal(side),
                width: WALL_SIZE,
                height: arena.height,
            })
            .with(transform)
            .build();
    }

    for (y, height) in divider_layout(*walls.top_y(), *walls.bottom_y()) {
        let mut transform = Transform::default();
        transform.set_translation_xyz(arena.center_x(), y, -0.1);
        transform.set_scale(Vector3::new(DIVIDER_WIDTH, height, 1.0));

        world
            .create_entity()
            .with(transform)
            .with(sprite_render.clone())
            .with(Transparent)
            .with(Tint(Srgba::new(0.996, 0.996, 0.996, 0.5)))
            .build();
    }

    world.insert(walls);
}

/// Center positions and height of the eight divider segments, walking down
/// from the top wall with a segment-sized gap between consecutive segments.
pub fn divider_layout(top_wall_y: f32, bottom_wall_y: f32) -> Vec<(f32, f32)> {
    let height = (top_wall_y - bottom_wall_y) / 16.0;
    (0..DIVIDER_COUNT)
        .map(|i| (top_wall_y - height - i as f32 * height * 2.0, height))
        .collect()
}

/// Where the ball goes after a point: arena center nudged by half the ball's
/// bounding box.
pub fn reset_position(arena: &ArenaConfig, half_size: f32) -> (f32, f32) {
    (arena.center_x() - half_size, arena.center_y() - half_size)
}

fn load_sprite_sheet(world: &mut World) -> Handle<SpriteSheet> {
    // every shape on the court is this 1x1 white sprite, scaled by its
    // transform and tinted per entity
    let texture_handle = {
        let loader = world.read_resource::<Loader>();
        let texture_storage = world.read_resource::<AssetStorage<Texture>>();
        loader.load_from_data(
            load_from_srgba(Srgba::new(1.0, 1.0, 1.0, 1.0)).into(),
            (),
            &texture_storage,
        )
    };

    let sheet = SpriteSheet {
        texture: texture_handle,
        sprites: vec![Sprite::from_pixel_values(
            1, 1, 1, 1, 0, 0, [0.0, 0.0], false, false,
        )],
    };

    let loader = world.read_resource::<Loader>();
    let sheet_storage = world.read_resource::<AssetStorage<SpriteSheet>>();
    loader.load_from_data(sheet, (), &sheet_storage)
}

fn initialize_scoreboard(world: &mut World) {
    let font = world.read_resource::<Loader>().load(
        "font/square.ttf",
        TtfFormat,
        (),
        &world.read_resource(),
    );

    let p1_transform = UiTransform::new(
        "P1".to_owned(), Anchor::TopMiddle, Anchor::TopMiddle,
        -50., -50., 1., 200., 50.,
    );

    let p2_transform = UiTransform::new(
        "P2".to_owned(), Anchor::TopMiddle, Anchor::TopMiddle,
        50., -50., 1., 200., 50.,
    );

    let p1_score = world
        .create_entity()
        .with(p1_transform)
        .with(UiText::new(font.clone(), "0".to_owned(), [1., 1., 1., 1.], 50., LineMode::Single, Anchor::Middle))
        .build();

    let p2_score = world
        .create_entity()
        .with(p2_transform)
        .with(UiText::new(font, "0".to_owned(), [1., 1., 1., 1.], 50., LineMode::Single, Anchor::Middle))
        .build();

    world.insert(ScoreText { p1_score, p2_score });
}

// broken setup is an impossible state, not a recoverable error
fn verify_court(world: &mut World) {
    world.exec(
        |(balls, paddles, edges): (
            ReadStorage<Ball>,
            ReadStorage<Paddle>,
            ReadStorage<Edge>,
        )| {
            assert_eq!((&balls).join().count(), 1, "court must field exactly one ball");
            assert_eq!((&paddles).join().count(), 2, "court must field exactly two paddles");
            assert_eq!((&edges).join().count(), 4, "court must field exactly four edges");

            let goals: Vec<Side> = (&edges).join().filter_map(Edge::goal_side).collect();
            assert_eq!(goals.len(), 2, "court must field exactly two goals");
            assert!(
                goals.contains(&Side::Left) && goals.contains(&Side::Right),
                "goals must sit on distinct sides"
            );
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_spawns_with_the_arcade_body_properties() {
        let ball = Ball::new();
        assert_eq!(ball.velocity.x, SERVE_SPEED);
        assert_eq!(ball.velocity.y, 0.0);
        assert_eq!(ball.size, 16.0);
        assert_eq!(ball.mass, 10.0);
        assert_eq!(ball.bounce, Vector2::new(1.0, 1.0));
        assert!(ball.collide_world_bounds);
    }

    #[test]
    fn serve_direction_points_away_from_the_last_goal() {
        let mut last = LastPoint::default();
        assert_eq!(last.serve_direction(), 1.0);

        last.side = Some(Side::Right);
        assert_eq!(last.serve_direction(), -1.0);

        last.side = Some(Side::Left);
        assert_eq!(last.serve_direction(), 1.0);
    }

    #[test]
    fn top_and_bottom_edges_are_not_goals() {
        let top = Edge { side: EdgeSide::Top, width: 600.0, height: WALL_SIZE };
        let bottom = Edge { side: EdgeSide::Bottom, width: 600.0, height: WALL_SIZE };
        let goal = Edge { side: EdgeSide::Goal(Side::Right), width: WALL_SIZE, height: 600.0 };

        assert_eq!(top.goal_side(), None);
        assert_eq!(bottom.goal_side(), None);
        assert_eq!(goal.goal_side(), Some(Side::Right));
    }

    #[test]
    fn reset_recenters_by_half_the_ball_size() {
        let arena = ArenaConfig::default();
        assert_eq!(reset_position(&arena, BALL_SIZE / 2.0), (392.0, 292.0));
    }

    #[test]
    fn divider_segments_keep_the_double_stride_pattern() {
        let layout = divider_layout(510.0, 90.0);
        assert_eq!(layout.len(), DIVIDER_COUNT);

        let height: f32 = (510.0 - 90.0) / 16.0;
        for (i, &(y, h)) in layout.iter().enumerate() {
            assert_eq!(h, height);
            assert_eq!(y, 510.0 - height - i as f32 * height * 2.0);
            // every segment stays strictly between the walls
            assert!(y + h / 2.0 < 510.0);
            assert!(y - h / 2.0 > 90.0);
        }
    }
}
