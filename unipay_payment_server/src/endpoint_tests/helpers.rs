use actix_web::{
    http::{header::ContentType, StatusCode},
    test,
    test::TestRequest,
    App,
};
use log::debug;
use unipay_tools::{sign, GatewayMode, Secret, UnipayConfig};

use crate::server::configure_with;

pub const MERCHANT_ID: &str = "M1";
pub const SECRET: &str = "s3cr3t";

pub fn test_config() -> UnipayConfig {
    UnipayConfig::new(GatewayMode::Test, MERCHANT_ID, Secret::from(SECRET))
}

/// A `transresponse` document whose checksum was computed over `signed_res_code` rather than `res_code`. Pass the same
/// value for both to get an authentic document.
pub fn transresponse(order_id: &str, res_code: &str, signed_res_code: &str, message: &str) -> String {
    let checksum = sign(&[format!("{order_id}{MERCHANT_ID}U9001{signed_res_code}{message}")], &Secret::from(SECRET));
    format!(
        "<response><resCode>{res_code}</resCode><UnipayId>U9001</UnipayId><orderId>{order_id}</orderId>\
         <merchantId>{MERCHANT_ID}</merchantId><procCode>PC1</procCode><checkSum>{checksum}</checkSum>\
         <resmsg>{message}</resmsg></response>"
    )
}

pub fn form_body(xml: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new()).append_pair("transresponse", xml).finish()
}

pub async fn send(req: TestRequest, config: UnipayConfig) -> (StatusCode, String) {
    let app = test::init_service(App::new().configure(configure_with(config))).await;
    debug!("Making request");
    let res = test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (status, String::from_utf8_lossy(&body).into_owned())
}

pub async fn post_form(path: &str, body: String) -> (StatusCode, String) {
    let req = TestRequest::post().uri(path).insert_header(ContentType::form_url_encoded()).set_payload(body);
    send(req, test_config()).await
}

pub async fn post_json(path: &str, body: serde_json::Value, config: UnipayConfig) -> (StatusCode, String) {
    let req = TestRequest::post().uri(path).set_json(body);
    send(req, config).await
}

pub async fn get_request(path: &str) -> (StatusCode, String) {
    send(TestRequest::get().uri(path), test_config()).await
}
