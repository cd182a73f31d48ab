use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use crate::domains::SubscriptionState;
use crate::routes::subscription_page_html;

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(subscription_page_html(&SubscriptionState::Idle))
}
