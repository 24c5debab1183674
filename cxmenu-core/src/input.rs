/// Every key press the menu cares about resolves to an Input.
/// The state machine never sees raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    /// Leave the action menu, or clear the pending jump target
    Back,
    MoveUp,
    MoveDown,
    /// A digit towards a numeric jump target
    Digit(char),
    /// Confirm a jump, open the action menu, or run an action
    Confirm,
    Refresh,
}
