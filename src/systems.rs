pub use self::paddle::PaddleSystem;
pub use self::serve::ServeSystem;
pub use self::mov::MoveSystem;
pub use self::bounce::BounceSystem;
pub use self::goal::GoalSystem;

mod paddle;
mod serve;
mod mov;
mod bounce;
mod goal;
