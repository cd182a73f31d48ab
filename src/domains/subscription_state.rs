use crate::domains::SubscriptionResult;

/// What the subscription form shows. The form's owner holds this value;
/// the submitter itself keeps no state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubscriptionState {
    #[default]
    Idle,
    Pending,
    Success,
    Failure(String),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InvalidTransition {
    #[error("A subscription is already in flight")]
    AlreadyPending,
    #[error("The subscription already succeeded")]
    AlreadySubscribed,
}

impl SubscriptionState {
    /// Whether the form should still be offered.
    pub fn accepts_submission(&self) -> bool {
        matches!(self, Self::Idle | Self::Failure(_))
    }

    /// Moves to `Pending`. Allowed from `Idle` and after a failure.
    pub fn begin(&self) -> Result<Self, InvalidTransition> {
        match self {
            Self::Idle | Self::Failure(_) => Ok(Self::Pending),
            Self::Pending => Err(InvalidTransition::AlreadyPending),
            Self::Success => Err(InvalidTransition::AlreadySubscribed),
        }
    }

    /// Settles a pending submission.
    pub fn resolve(self, result: SubscriptionResult) -> Self {
        match (self, result) {
            (Self::Pending, SubscriptionResult::Success) => Self::Success,
            (Self::Pending, SubscriptionResult::Failure { message }) => Self::Failure(message),
            // Only a pending form has anything to settle.
            (state, _) => state,
        }
    }
}
