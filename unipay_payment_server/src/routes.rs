//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! The gateway posts its callbacks as `application/x-www-form-urlencoded` bodies, and browser redirects may arrive as
//! either a form post or a query string. The handlers read the raw body (or query) and let `unipay_tools` decode it,
//! so that a missing or mislabelled content type degrades into a failed verification rather than a rejected request.
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use log::*;
use unipay_tools::{Notification, ReturnHandler, UnipayConfig};

use crate::{
    data_objects::{CheckoutRequest, CheckoutResponse, JsonResponse, ReturnResult},
    errors::ServerError,
};

#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

/// Builds the signed form a customer's browser should submit to the gateway.
#[post("/unipay/checkout")]
pub async fn checkout(
    body: web::Json<CheckoutRequest>,
    config: web::Data<UnipayConfig>,
) -> Result<HttpResponse, ServerError> {
    let request = body.into_inner();
    let order_id = request.order_id.clone();
    if order_id.trim().is_empty() {
        return Err(ServerError::InvalidRequestBody("order_id is required".into()));
    }
    debug!("💳️ Building payment request for order [{order_id}]");
    let builder = request.into_request_builder(&config)?;
    let response = CheckoutResponse { url: config.service_url().to_string(), fields: builder.render_fields() };
    info!("💳️ Payment request for order [{order_id}] signed. Posting to {}", response.url);
    Ok(HttpResponse::Ok().json(response))
}

/// Server-to-server callback from the gateway.
#[post("/unipay/notify")]
pub async fn notify(body: String, config: web::Data<UnipayConfig>) -> HttpResponse {
    trace!("📨️ Received gateway callback");
    let notification = Notification::from_post(&body, &config.secret);
    // Always reply in the 200 range. A failed verification is reported in the body.
    let result = if notification.acknowledge() {
        info!(
            "📨️ Payment event: order [{}] transaction [{}] is {}. {}",
            notification.invoice(),
            notification.transaction_id(),
            notification.status(),
            notification.gateway_message()
        );
        JsonResponse::success(notification.status())
    } else {
        warn!(
            "📨️ Payment event: rejected callback claiming order [{}]. {}",
            notification.invoice(),
            notification.message()
        );
        JsonResponse::failure(notification.message())
    };
    HttpResponse::Ok().json(result)
}

/// Browser redirect, posted as a form.
#[post("/unipay/return/{order_id}")]
pub async fn return_post(path: web::Path<String>, body: String, config: web::Data<UnipayConfig>) -> HttpResponse {
    resolve_return(path.into_inner(), &body, &config)
}

/// Browser redirect, carried in the query string.
#[get("/unipay/return/{order_id}")]
pub async fn return_get(req: HttpRequest, path: web::Path<String>, config: web::Data<UnipayConfig>) -> HttpResponse {
    resolve_return(path.into_inner(), req.query_string(), &config)
}

fn resolve_return(order_id: String, payload: &str, config: &UnipayConfig) -> HttpResponse {
    trace!("🔙️ Browser returned for order [{order_id}]");
    let ret = ReturnHandler::from_post(payload, order_id, &config.secret);
    let result = ReturnResult::from(&ret);
    if result.verified {
        info!("🔙️ Order [{}] returned with status {}", result.order_id, result.status);
    } else {
        warn!("🔙️ Order [{}] returned with an unverified payload. {}", result.order_id, result.message);
    }
    HttpResponse::Ok().json(result)
}
