//! Bodies the sandbox simulates, their construction configs, and the
//! per-tick input snapshot fed to player bodies.

pub mod ball;
pub mod capsule;
pub mod input;
pub mod scene;
pub mod wall;

pub use ball::{Ball, BallConfig, BallDebug, MIN_BALL_RADIUS, STANDARD_GRAVITY};
pub use capsule::{Capsule, CapsuleConfig};
pub use input::{InputState, ROTATION_INPUT_STEP};
pub use scene::{SceneConfig, SceneError};
pub use wall::{Wall, WallConfig, WALL_ANGULAR_DAMPING};
