//! State transitions - FSM transition logic
//!
//! Implements the state machine that handles event-driven state transitions.

use super::events::SessionEvent;
use super::states::SessionState;

/// Represents a state transition result.
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: SessionState,
    /// The state after the transition.
    pub to: SessionState,
    /// The event that triggered the transition.
    pub event: SessionEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine for managing session lifecycle transitions.
#[derive(Debug, Clone)]
pub struct StateMachine {
    /// Current state.
    current_state: SessionState,
    /// Transition history (limited).
    history: Vec<StateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine in Empty state.
    pub fn new() -> Self {
        Self::with_state(SessionState::Empty)
    }

    /// Create a state machine with a specific initial state.
    pub fn with_state(state: SessionState) -> Self {
        Self {
            current_state: state,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &SessionState {
        &self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Handle an event and transition to a new state.
    pub fn handle_event(&mut self, event: SessionEvent) -> StateTransition {
        let old_state = self.current_state.clone();
        let new_state = Self::compute_next_state(&old_state, &event);
        let changed = old_state != new_state;

        if changed {
            log::debug!("session state {:?} -> {:?} on {:?}", old_state, new_state, event);
        }

        self.current_state = new_state.clone();

        let transition = StateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        };

        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    /// Compute the next state given current state and event.
    fn compute_next_state(state: &SessionState, event: &SessionEvent) -> SessionState {
        use SessionEvent::*;
        use SessionState::*;

        match (state, event) {
            // ========== Upload Lifecycle ==========
            (Empty, UploadStarted) => Uploading,
            (Ready, UploadStarted) => Uploading,
            (Failed { .. }, UploadStarted) => Uploading,

            (Uploading, UploadSucceeded) => Ready,
            (Uploading, UploadFailed { error }) => Failed {
                error_message: error.clone(),
                failed_at: chrono::Utc::now().to_rfc3339(),
            },

            // ========== Chat (lifecycle unchanged) ==========
            (Ready, QuerySubmitted) => Ready,
            (Ready, QueryAnswered) => Ready,
            (Ready, QueryFailed { .. }) => Ready,

            // ========== Default: No transition ==========
            _ => state.clone(),
        }
    }

    /// Check if an event would change the state without executing it.
    pub fn can_transition(&self, event: &SessionEvent) -> bool {
        let next = Self::compute_next_state(&self.current_state, event);
        next != self.current_state
    }

    /// Reset to Empty state.
    pub fn reset(&mut self) {
        self.current_state = SessionState::Empty;
    }
}
