/// The address a visitor typed into the subscription form.
///
/// Nothing is validated here: empty or malformed addresses are forwarded
/// as-is and the mailing-list service decides what to accept.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct SubscriptionRequest {
    pub email: String,
}

impl SubscriptionRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}
