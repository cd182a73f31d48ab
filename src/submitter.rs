use crate::domains::{SubscriptionRequest, SubscriptionResult};
use crate::mailing_list_client::{MailingListClient, SubscribeStatus};

/// Forwards an address to the mailing list and maps the reply onto a
/// [`SubscriptionResult`]. Holds no state between calls.
///
/// There is no retry and no way to cancel a submission once it is sent.
pub struct SubscriptionSubmitter {
    mailing_list_client: MailingListClient,
}

impl SubscriptionSubmitter {
    pub fn new(mailing_list_client: MailingListClient) -> Self {
        Self { mailing_list_client }
    }

    #[tracing::instrument(
        name = "Submitting a newsletter subscription",
        skip(self),
        fields(subscriber_email = %email)
    )]
    pub async fn submit(&self, email: &str) -> SubscriptionResult {
        let request = SubscriptionRequest::new(email);

        match self.mailing_list_client.subscribe(&request).await {
            Ok(response) => {
                tracing::info!("{:?}: {}", response.result, response.msg);

                match response.result {
                    SubscribeStatus::Success => SubscriptionResult::Success,
                    SubscribeStatus::Error => SubscriptionResult::rejected(&response.msg),
                }
            }
            Err(err) => {
                tracing::error!(error.cause_chain = ?err, "Failed to submit the subscription");

                SubscriptionResult::unreachable()
            }
        }
    }
}
