use crate::camera::CameraMovement;
use crate::traits::{Button, Controller};

/// Scroll step added to the speed multiplier per scrolled line
pub const SCROLL_SPEED_STEP: f32 = 0.1;
/// Slowest allowed speed multiplier
pub const MIN_SPEED_MULTIPLIER: f32 = 0.1;
/// Fastest allowed speed multiplier
pub const MAX_SPEED_MULTIPLIER: f32 = 5.0;

/// Speed multiplier limits and scroll step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLimits {
    pub scroll_step: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self {
            scroll_step: SCROLL_SPEED_STEP,
            min: MIN_SPEED_MULTIPLIER,
            max: MAX_SPEED_MULTIPLIER,
        }
    }
}

/// Mouse and scroll tracking for one viewport.
///
/// Cursor offsets are relative to the previous sample. The very first sample
/// only records the position.
#[derive(Debug, Clone)]
pub struct InputState {
    last_cursor: (f32, f32),
    first_mouse_sample: bool,
    speed_multiplier: f32,
    limits: SpeedLimits,
}

impl InputState {
    /// Start with the cursor assumed at `initial_cursor`, usually the window centre
    pub fn new(initial_cursor: (f32, f32), limits: SpeedLimits) -> Self {
        Self {
            last_cursor: initial_cursor,
            first_mouse_sample: true,
            speed_multiplier: 1.0_f32.clamp(limits.min, limits.max),
            limits,
        }
    }

    /// Record a cursor position and return the `(x, y)` offset to turn by.
    ///
    /// Y is inverted: screen space grows downward, pitch grows upward.
    pub fn cursor_moved(&mut self, x: f32, y: f32) -> (f32, f32) {
        if self.first_mouse_sample {
            self.last_cursor = (x, y);
            self.first_mouse_sample = false;
        }

        let (last_x, last_y) = self.last_cursor;
        self.last_cursor = (x, y);
        (x - last_x, last_y - y)
    }

    /// Move the tracked cursor by a relative delta and return the offset to turn by.
    ///
    /// Goes through [`InputState::cursor_moved`], so a re-armed first sample
    /// still yields no rotation.
    pub fn cursor_moved_by(&mut self, dx: f32, dy: f32) -> (f32, f32) {
        let (x, y) = self.last_cursor;
        self.cursor_moved(x + dx, y + dy)
    }

    /// Adjust the speed multiplier by a scroll delta in lines
    pub fn scrolled(&mut self, y_offset: f32) -> f32 {
        self.speed_multiplier = (self.speed_multiplier + y_offset * self.limits.scroll_step)
            .clamp(self.limits.min, self.limits.max);
        self.speed_multiplier
    }

    /// Treat the next cursor sample as the first one again
    pub fn reset_cursor(&mut self) {
        self.first_mouse_sample = true;
    }

    pub fn last_cursor(&self) -> (f32, f32) {
        self.last_cursor
    }

    pub fn is_first_mouse_sample(&self) -> bool {
        self.first_mouse_sample
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }
}

/// Fires once per press of a held key
#[derive(Debug, Clone, Copy, Default)]
pub struct PressEdge {
    was_down: bool,
}

impl PressEdge {
    /// Feed the current key state; true only on the up-to-down transition
    pub fn update(&mut self, is_down: bool) -> bool {
        let pressed = is_down && !self.was_down;
        self.was_down = is_down;
        pressed
    }
}

/// Commands derived from one keyboard poll
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyboardCommands {
    pub movements: Vec<CameraMovement>,
    pub toggle_projection: bool,
    pub close_requested: bool,
}

/// Camera movement bound to each movement key
const MOVEMENT_BINDINGS: [(Button, CameraMovement); 6] = [
    (Button::KeyW, CameraMovement::Forward),
    (Button::KeyS, CameraMovement::Backward),
    (Button::KeyA, CameraMovement::Left),
    (Button::KeyD, CameraMovement::Right),
    (Button::KeyQ, CameraMovement::Up),
    (Button::KeyE, CameraMovement::Down),
];

/// Keyboard poll - reads key state once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardPoll {
    projection_toggle: PressEdge,
}

impl KeyboardPoll {
    pub fn poll(&mut self, controller: &impl Controller) -> KeyboardCommands {
        let movements = MOVEMENT_BINDINGS
            .iter()
            .filter(|(button, _)| controller.is_down(*button))
            .map(|(_, movement)| *movement)
            .collect();

        KeyboardCommands {
            movements,
            toggle_projection: self.projection_toggle.update(controller.is_down(Button::KeyO)),
            close_requested: controller.is_down(Button::Escape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }
    }

    fn state() -> InputState {
        InputState::new((500.0, 400.0), SpeedLimits::default())
    }

    #[test]
    fn first_cursor_sample_yields_no_offset() {
        let mut input = state();
        assert_eq!(input.cursor_moved(12.0, 730.0), (0.0, 0.0));
        assert_eq!(input.last_cursor(), (12.0, 730.0));
        assert!(!input.is_first_mouse_sample());
    }

    #[test]
    fn cursor_offset_inverts_y() {
        let mut input = state();
        input.cursor_moved(100.0, 100.0);

        assert_eq!(input.cursor_moved(110.0, 90.0), (10.0, 10.0));
        assert_eq!(input.cursor_moved(105.0, 95.0), (-5.0, -5.0));
    }

    #[test]
    fn reset_cursor_rearms_first_sample() {
        let mut input = state();
        input.cursor_moved(100.0, 100.0);
        input.reset_cursor();

        assert_eq!(input.cursor_moved(900.0, 20.0), (0.0, 0.0));
    }

    #[test]
    fn relative_motion_is_unbounded_and_skips_first_sample() {
        let mut input = state();
        assert_eq!(input.cursor_moved_by(40.0, 40.0), (0.0, 0.0));

        // Far past any window edge
        let mut total = 0.0;
        for _ in 0..100 {
            let (x, y) = input.cursor_moved_by(50.0, -10.0);
            assert_eq!(y, 10.0);
            total += x;
        }
        assert_eq!(total, 5000.0);
    }

    #[test]
    fn scroll_adjusts_and_clamps_speed() {
        let mut input = state();
        assert_eq!(input.speed_multiplier(), 1.0);

        let faster = input.scrolled(2.0);
        assert!((faster - 1.2).abs() < 1e-6);

        assert_eq!(input.scrolled(1000.0), MAX_SPEED_MULTIPLIER);
        assert_eq!(input.scrolled(-1000.0), MIN_SPEED_MULTIPLIER);
    }

    #[test]
    fn press_edge_fires_once_per_press() {
        let mut edge = PressEdge::default();
        assert!(edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }

    #[test]
    fn poll_maps_keys_to_commands() {
        let mut poll = KeyboardPoll::default();
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::KeyD, Button::KeyQ, Button::Escape],
        };

        let commands = poll.poll(&controller);
        assert_eq!(
            commands.movements,
            vec![CameraMovement::Forward, CameraMovement::Right, CameraMovement::Up]
        );
        assert!(commands.close_requested);
        assert!(!commands.toggle_projection);
    }

    #[test]
    fn held_o_toggles_once() {
        let mut poll = KeyboardPoll::default();
        let held = MockController {
            pressed: vec![Button::KeyO],
        };
        let released = MockController { pressed: vec![] };

        assert!(poll.poll(&held).toggle_projection);
        assert!(!poll.poll(&held).toggle_projection);
        assert!(!poll.poll(&released).toggle_projection);
        assert!(poll.poll(&held).toggle_projection);
    }
}
