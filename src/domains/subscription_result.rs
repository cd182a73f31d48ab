/// Shown whenever the mailing-list service could not be reached or replied
/// with something we could not read.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while subscribing. Please try again later.";

const MARKUP_MARKER: &str = " <";

/// Outcome of a single submission. Built once, rendered, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionResult {
    Success,
    Failure { message: String },
}

impl SubscriptionResult {
    /// A rejection reported by the mailing-list service.
    pub fn rejected(remote_message: &str) -> Self {
        Self::Failure {
            message: strip_markup(remote_message).to_owned(),
        }
    }

    /// No usable reply from the mailing-list service.
    pub fn unreachable() -> Self {
        Self::Failure {
            message: GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Cuts a remote message at the first `" <"`, dropping any trailing markup
/// the service appends to its human readable reason.
pub fn strip_markup(message: &str) -> &str {
    match message.find(MARKUP_MARKER) {
        Some(index) => &message[..index],
        None => message,
    }
}
