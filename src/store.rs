use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::models::limits::Limits;

pub const RECEIVED_CLOUD_LIMITS: &str = "RECEIVED_CLOUD_LIMITS";

#[derive(Debug, Clone, PartialEq)]
pub enum CloudAction {
    ReceivedCloudLimits(Limits),
}

impl CloudAction {
    pub fn tag(&self) -> &'static str {
        match self {
            CloudAction::ReceivedCloudLimits(_) => RECEIVED_CLOUD_LIMITS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CloudState {
    pub limits: Limits,
    pub limits_loaded: bool,
}

pub fn reduce(state: &CloudState, action: CloudAction) -> CloudState {
    match action {
        CloudAction::ReceivedCloudLimits(limits) => CloudState {
            limits,
            limits_loaded: true,
        },
    }
}

/// Receives actions published by the cloud workflows.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: CloudAction);
}

/// Process-wide cloud state. Actions are applied one at a time through
/// [`reduce`].
#[derive(Debug, Default)]
pub struct CloudStore {
    state: RwLock<CloudState>,
}

impl CloudStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CloudState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Dispatch for CloudStore {
    fn dispatch(&self, action: CloudAction) {
        log::debug!("Dispatching {}", action.tag());
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = reduce(&state, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::limits::MessagesLimits;

    fn limits(history: i64) -> Limits {
        Limits {
            messages: Some(MessagesLimits {
                history: Some(history),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn starts_without_limits() {
        let store = CloudStore::new();
        assert_eq!(store.state(), CloudState::default());
        assert!(!store.state().limits_loaded);
    }

    #[test]
    fn received_limits_overwrite_previous_ones() {
        let store = CloudStore::new();
        store.dispatch(CloudAction::ReceivedCloudLimits(limits(10_000)));
        store.dispatch(CloudAction::ReceivedCloudLimits(limits(500)));

        let state = store.state();
        assert!(state.limits_loaded);
        assert_eq!(state.limits, limits(500));
    }

    #[test]
    fn action_tag_is_stable() {
        let action = CloudAction::ReceivedCloudLimits(Limits::default());
        assert_eq!(action.tag(), "RECEIVED_CLOUD_LIMITS");
    }
}
