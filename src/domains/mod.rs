mod subscription_request;
mod subscription_result;
mod subscription_state;

pub use subscription_request::SubscriptionRequest;
pub use subscription_result::{strip_markup, SubscriptionResult};
pub use subscription_state::{InvalidTransition, SubscriptionState};
