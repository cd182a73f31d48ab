use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::spawn_app;

fn reply(result: &str, msg: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": result, "msg": msg }))
}

#[tokio::test]
async fn subscribe_thanks_the_visitor_when_the_list_accepts() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/subscribe"))
        .and(method("POST"))
        .and(body_json(serde_json::json!({ "email": "ursula_le_guin@gmail.com" })))
        .respond_with(reply("success", "ok"))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    // Act
    let response = app
        .post_subscriptions("email=ursula_le_guin%40gmail.com".into())
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Thanks for subscribing!"));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn subscribe_shows_the_trimmed_rejection_and_the_form_again() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(reply("error", "Invalid email <span>x</span>"))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    let response = app.post_subscriptions("email=bad".into()).await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("<i>Invalid email</i>"));
    assert!(!html.contains("&lt;span"));
    assert!(html.contains("<form"));
}

#[tokio::test]
async fn subscribe_passes_empty_and_malformed_emails_to_the_list() {
    let app = spawn_app().await;

    let test_cases = vec![("email=", ""), ("email=not-an-email", "not-an-email")];

    for (body, email) in test_cases {
        Mock::given(body_json(serde_json::json!({ "email": email })))
            .respond_with(reply("error", "Please enter a value"))
            .expect(1)
            .mount(&app.mailing_list_server)
            .await;

        let response = app.post_subscriptions(body.into()).await;

        assert_eq!(
            200,
            response.status().as_u16(),
            "The API did not render the form when the payload was {}.",
            body
        );
        assert!(response.text().await.unwrap().contains("Please enter a value"));
    }
}

#[tokio::test]
async fn subscribe_returns_a_400_when_the_email_field_is_missing() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(reply("success", "ok"))
        .expect(0)
        .mount(&app.mailing_list_server)
        .await;

    let response = app.post_subscriptions("name=le%20guin".into()).await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn subscribe_survives_a_broken_mailing_list() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    let response = app.post_subscriptions("email=ursula%40example.com".into()).await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Something went wrong while subscribing"));
    assert!(html.contains("<form"));
}

#[tokio::test]
async fn resubmitting_after_a_failure_reaches_the_list_again() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(reply("error", "Too many subscribe attempts"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;
    Mock::given(any())
        .respond_with(reply("success", "ok"))
        .expect(1)
        .mount(&app.mailing_list_server)
        .await;

    let first = app.post_subscriptions("email=ursula%40example.com".into()).await;
    assert!(first.text().await.unwrap().contains("Too many subscribe attempts"));

    let second = app.post_subscriptions("email=ursula%40example.com".into()).await;
    assert!(second.text().await.unwrap().contains("Thanks for subscribing!"));
}
