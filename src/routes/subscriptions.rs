use actix_web::{web, HttpResponse};
use actix_web::http::header::ContentType;
use crate::domains::{SubscriptionRequest, SubscriptionState};
use crate::submitter::SubscriptionSubmitter;
use crate::utils::e500;

/// Every outcome is rendered as a page: failures bring the form back with
/// the reason, success replaces it with a thank-you note.
#[tracing::instrument(
    name = "Handling a subscription form",
    skip(form, submitter),
    fields(subscriber_email = %form.email)
)]
pub async fn subscribe(
    form: web::Form<SubscriptionRequest>,
    submitter: web::Data<SubscriptionSubmitter>,
) -> Result<HttpResponse, actix_web::Error> {
    let pending = SubscriptionState::default().begin().map_err(e500)?;

    let result = submitter.submit(&form.email).await;
    let state = pending.resolve(result);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(subscription_page_html(&state)))
}

pub fn subscription_page_html(state: &SubscriptionState) -> String {
    let error_html = match state {
        SubscriptionState::Failure(message) => format!(
            r#"<p class="subscribe-error"><i>{}</i></p>"#,
            htmlescape::encode_minimal(message)
        ),
        _ => String::new(),
    };

    let content = match state {
        SubscriptionState::Success => {
            r#"<p class="subscribe-thanks">Thanks for subscribing!</p>"#.to_string()
        }
        // A pending form is still shown, with its button disabled.
        state => subscribe_form_html(&error_html, !state.accepts_submission()),
    };

    format!(
        r#"<!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta http-equiv="content-type" content="text/html; charset=utf-8">
                    <title>Newsletter</title>
                </head>
                <body>
                    {content}
                </body>
            </html>"#
    )
}

fn subscribe_form_html(error_html: &str, pending: bool) -> String {
    let disabled = if pending { " disabled" } else { "" };

    format!(
        r#"{error_html}
                    <form action="/subscriptions" method="post" class="subscribe-email-form">
                        <input
                            type="email"
                            placeholder="email"
                            name="email"
                            class="emailText"
                        >
                        <button type="submit" class="emailButton"{disabled}>Subscribe</button>
                    </form>"#
    )
}
