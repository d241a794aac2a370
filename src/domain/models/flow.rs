/// Lifecycle of one submission-style flow. Exactly one of the success and
/// failure messages exists at any time, and `Submitting` blocks
/// re-submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl FlowState {
    pub fn is_submitting(&self) -> bool {
        return *self == FlowState::Submitting;
    }

    pub fn success_message(&self) -> Option<&str> {
        if let FlowState::Succeeded(message) = self {
            return Some(message);
        }

        return None;
    }

    pub fn error_message(&self) -> Option<&str> {
        if let FlowState::Failed(message) = self {
            return Some(message);
        }

        return None;
    }
}
