//! Core reducer and action traits for screen state.

/// Trait for screen actions.
///
/// Actions describe a single user intent against one screen's state
/// (a keystroke in the search box, a tab selection, a cart click).
pub trait Action: Clone + std::fmt::Debug {
    /// Returns the action type name, used for logging.
    fn action_type(&self) -> &'static str;
}

/// Trait for screen state driven by actions.
///
/// Each screen owns exactly one state value and mutates it only through
/// [`Reducer::apply`]. Reducers are:
/// - pure and deterministic: the same state and action always yield the same new state
/// - total: applying an action never fails
/// - free of side effects: notifications belong to the caller
pub trait Reducer: Default + Sized {
    /// The type of actions this state consumes.
    type Action: Action;

    /// Applies an action, updating the state in place.
    fn apply(&mut self, action: Self::Action);

    /// Applies multiple actions in sequence.
    fn apply_all(&mut self, actions: impl IntoIterator<Item = Self::Action>) {
        for action in actions {
            self.apply(action);
        }
    }

    /// Functional form of [`Reducer::apply`]: `(state, action) -> state`.
    fn reduce(mut self, action: Self::Action) -> Self {
        self.apply(action);
        self
    }
}
