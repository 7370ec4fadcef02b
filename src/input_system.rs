use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// High-level actions the player can trigger.
///
/// Decouples raw SDL2 events from game logic: the input system produces
/// actions, the game loop applies them to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the active square one sector to the left.
    MoveLeft,
    /// Move the active square one sector to the right.
    MoveRight,
    /// Close the window and end the session.
    Quit,
}

/// InputSystem translates SDL2 events into GameActions.
///
/// Polled once per frame; all pending events are drained and converted.
/// Events with no mapping are ignored.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drain pending SDL2 events and return the actions they map to.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(GameAction::Quit);
                }
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(action) = Self::map_key(key) {
                        actions.push(action);
                    }
                }
                _ => {
                    // Other event types carry no game meaning
                }
            }
        }

        actions
    }

    /// Map a pressed key to an action, if any.
    fn map_key(key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::Left => Some(GameAction::MoveLeft),
            Keycode::Right => Some(GameAction::MoveRight),
            Keycode::Escape => Some(GameAction::Quit),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_moves() {
        assert_eq!(InputSystem::map_key(Keycode::Left), Some(GameAction::MoveLeft));
        assert_eq!(InputSystem::map_key(Keycode::Right), Some(GameAction::MoveRight));
    }

    #[test]
    fn test_escape_maps_to_quit() {
        assert_eq!(InputSystem::map_key(Keycode::Escape), Some(GameAction::Quit));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(InputSystem::map_key(Keycode::Space), None);
        assert_eq!(InputSystem::map_key(Keycode::W), None);
        assert_eq!(InputSystem::map_key(Keycode::Up), None);
        assert_eq!(InputSystem::map_key(Keycode::Down), None);
    }

    #[test]
    fn test_actions_are_distinct() {
        assert_ne!(GameAction::MoveLeft, GameAction::MoveRight);
        assert_ne!(GameAction::MoveLeft, GameAction::Quit);
    }
}
