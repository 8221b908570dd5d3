/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyO,
    Escape,
}

impl Button {
    /// Every button the viewport polls, in poll order
    pub const ALL: [Button; 8] = [
        Button::KeyW,
        Button::KeyA,
        Button::KeyS,
        Button::KeyD,
        Button::KeyQ,
        Button::KeyE,
        Button::KeyO,
        Button::Escape,
    ];
}

/// Controller - synchronous key state queries
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_button_variants_unique() {
        let set: HashSet<_> = Button::ALL.iter().collect();
        assert_eq!(set.len(), Button::ALL.len());
    }

    #[test]
    fn test_button_debug() {
        assert_eq!(format!("{:?}", Button::KeyO), "KeyO");
        assert_eq!(format!("{:?}", Button::Escape), "Escape");
    }
}
