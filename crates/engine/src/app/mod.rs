mod input;
mod loop_runner;
mod rendering;
mod scene;

pub use input::InputAction;
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use rendering::{Renderer, Viewport};
pub use scene::{Frame, InputSnapshot, RectPx, Scene};
