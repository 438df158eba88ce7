use super::input::{ActionStates, InputAction};

/// One-tick view of buffered input: movement actions carry held state,
/// digit keys carry a single-tick pressed edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    actions: ActionStates,
    digit1_pressed: bool,
    digit2_pressed: bool,
    digit3_pressed: bool,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        quit_requested: bool,
        actions: ActionStates,
        digit1_pressed: bool,
        digit2_pressed: bool,
        digit3_pressed: bool,
    ) -> Self {
        Self {
            quit_requested,
            actions,
            digit1_pressed,
            digit2_pressed,
            digit3_pressed,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn digit1_pressed(&self) -> bool {
        self.digit1_pressed
    }

    pub fn digit2_pressed(&self) -> bool {
        self.digit2_pressed
    }

    pub fn digit3_pressed(&self) -> bool {
        self.digit3_pressed
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_digit1_pressed(mut self, pressed: bool) -> Self {
        self.digit1_pressed = pressed;
        self
    }

    pub fn with_digit2_pressed(mut self, pressed: bool) -> Self {
        self.digit2_pressed = pressed;
        self
    }

    pub fn with_digit3_pressed(mut self, pressed: bool) -> Self {
        self.digit3_pressed = pressed;
        self
    }
}

/// Axis-aligned filled rectangle in window pixel coordinates; the origin is
/// the top-left corner of the window, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectPx {
    pub x_px: i32,
    pub y_px: i32,
    pub width_px: u32,
    pub height_px: u32,
    pub color: [u8; 4],
}

/// Everything the renderer needs for one presented frame. Scenes rebuild the
/// rect list each frame; the buffer itself is reused by the loop.
#[derive(Debug, Clone)]
pub struct Frame {
    clear_color: [u8; 4],
    rects: Vec<RectPx>,
}

impl Frame {
    pub fn new(clear_color: [u8; 4]) -> Self {
        Self {
            clear_color,
            rects: Vec::new(),
        }
    }

    pub fn clear_color(&self) -> [u8; 4] {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, clear_color: [u8; 4]) {
        self.clear_color = clear_color;
    }

    pub fn push_rect(&mut self, rect: RectPx) {
        self.rects.push(rect);
    }

    pub fn rects(&self) -> &[RectPx] {
        &self.rects
    }

    pub fn reset(&mut self) {
        self.rects.clear();
    }
}

pub trait Scene {
    fn load(&mut self);
    fn update(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot);
    fn compose_frame(&self, frame: &mut Frame);
    fn debug_title(&self) -> Option<String> {
        None
    }
}
