use cucumber::{given, then, when};
use unipay_tools::{
    mapping::OUTBOUND_CHECKSUM_FIELDS,
    sign,
    PaymentOutcome,
    RequestBuilder,
    RequestOptions,
    ReturnHandler,
    Verifiable,
};

use crate::cucumber::GatewayWorld;

#[given(expr = "the merchant {string} with checksum secret {string}")]
fn merchant(world: &mut GatewayWorld, merchant_id: String, secret: String) {
    world.configure(merchant_id, secret);
}

#[when(expr = "the gateway reports order {string} with response code {string} and message {string}")]
fn gateway_reports(world: &mut GatewayWorld, order_id: String, res_code: String, message: String) {
    world.payload = Some(world.signed_payload(&order_id, &res_code, &message));
}

#[when(expr = "the gateway reports order {string} with response code {string}")]
fn gateway_reports_default_message(world: &mut GatewayWorld, order_id: String, res_code: String) {
    world.payload = Some(world.signed_payload(&order_id, &res_code, "Transaction Processed"));
}

#[when(expr = "the response code is changed to {string} in transit")]
fn tamper_response_code(world: &mut GatewayWorld, res_code: String) {
    let payload = world.payload().to_string();
    let start = payload.find("<resCode>").expect("payload has no resCode") + "<resCode>".len();
    let end = payload.find("</resCode>").expect("payload has no resCode");
    let tampered = format!("{}{res_code}{}", &payload[..start], &payload[end..]);
    world.payload = Some(tampered);
}

#[when(expr = "the browser returns for order {string}")]
fn browser_returns(world: &mut GatewayWorld, order_id: String) {
    let ret = ReturnHandler::new(world.payload(), order_id, &world.secret);
    world.returned = Some(ret);
}

#[when(expr = "I build a payment request for order {string} of {string} INR")]
fn build_request(world: &mut GatewayWorld, order_id: String, amount: String) {
    let options = RequestOptions { amount: Some(amount), secret: world.secret.clone(), ..Default::default() };
    world.request = Some(RequestBuilder::new(order_id, &world.merchant_id, options));
}

#[then("the notification is authentic")]
fn notification_authentic(world: &mut GatewayWorld) {
    let notification = world.notification();
    assert!(notification.acknowledge(), "Notification was rejected: {}", notification.message());
}

#[then("the notification is rejected")]
fn notification_rejected(world: &mut GatewayWorld) {
    let notification = world.notification();
    assert!(!notification.acknowledge(), "Notification should have been rejected");
    assert!(!world.returned().is_verified());
}

#[then(expr = "the notification status is {string}")]
fn notification_status(world: &mut GatewayWorld, status: String) {
    assert_eq!(world.notification().status().to_string(), status);
}

#[then(expr = "the return status is {string}")]
fn return_status(world: &mut GatewayWorld, status: String) {
    assert_eq!(world.returned().status().to_string(), status);
}

#[then("the return reports success")]
fn return_success(world: &mut GatewayWorld) {
    assert!(world.returned().success());
}

#[then("the return does not report success")]
fn return_failure(world: &mut GatewayWorld) {
    assert!(!world.returned().success());
    assert_ne!(world.returned().status(), PaymentOutcome::Completed);
}

#[then(expr = "the return message is {string}")]
fn return_message(world: &mut GatewayWorld, message: String) {
    assert_eq!(world.returned().message(), message);
}

#[then(expr = "the submitted {string} field is {string}")]
fn submitted_field(world: &mut GatewayWorld, name: String, value: String) {
    let fields = world.request().render_fields();
    assert_eq!(fields.get(&name), Some(value.as_str()));
}

#[then("recomputing the checksum from the submitted fields reproduces the submitted checksum")]
fn recompute_checksum(world: &mut GatewayWorld) {
    let fields = world.request().render_fields();
    let recomputed = sign(&fields.values_for(&OUTBOUND_CHECKSUM_FIELDS), &world.secret);
    assert_eq!(fields.get("chksum"), Some(recomputed.as_str()));
}
