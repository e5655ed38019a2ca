use actix_web::http::StatusCode;
use serde_json::{json, Value};

use super::helpers::{form_body, get_request, post_form, transresponse};

#[actix_web::test]
async fn authentic_callback_is_acknowledged() {
    let _ = env_logger::try_init().ok();
    let body = form_body(&transresponse("A100", "00", "00", "Transaction Successful"));
    let (status, body) = post_form("/unipay/notify", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"success": true, "message": "Completed"}));
}

#[actix_web::test]
async fn declined_callback_is_acknowledged_as_failed() {
    let _ = env_logger::try_init().ok();
    let body = form_body(&transresponse("A100", "05", "05", "Declined"));
    let (status, body) = post_form("/unipay/notify", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"success": true, "message": "Failed"}));
}

#[actix_web::test]
async fn tampered_callback_is_rejected() {
    let _ = env_logger::try_init().ok();
    let body = form_body(&transresponse("A100", "00", "05", "Declined"));
    let (status, body) = post_form("/unipay/notify", body).await;
    // Callbacks are always answered in the 200 range
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"success": false, "message": "Return checksum not matching the data provided"})
    );
}

#[actix_web::test]
async fn empty_callback_is_rejected() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_form("/unipay/notify", String::new()).await;
    assert_eq!(status, StatusCode::OK);
    let body = serde_json::from_str::<Value>(&body).unwrap();
    assert_eq!(body["success"], json!(false));
}

#[actix_web::test]
async fn return_for_expected_order() {
    let _ = env_logger::try_init().ok();
    let body = form_body(&transresponse("A100", "00", "00", "Transaction Successful"));
    let (status, body) = post_form("/unipay/return/A100", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({
            "order_id": "A100",
            "status": "Completed",
            "success": true,
            "verified": true,
            "message": "Transaction Successful"
        })
    );
}

#[actix_web::test]
async fn return_for_another_order() {
    let _ = env_logger::try_init().ok();
    let body = form_body(&transresponse("A999", "00", "00", "Transaction Successful"));
    let (status, body) = post_form("/unipay/return/A100", body).await;
    assert_eq!(status, StatusCode::OK);
    let body = serde_json::from_str::<Value>(&body).unwrap();
    assert_eq!(body["status"], json!("Mismatch"));
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["verified"], json!(true));
}

#[actix_web::test]
async fn tampered_return() {
    let _ = env_logger::try_init().ok();
    let body = form_body(&transresponse("A100", "00", "05", "Declined"));
    let (status, body) = post_form("/unipay/return/A100", body).await;
    assert_eq!(status, StatusCode::OK);
    let body = serde_json::from_str::<Value>(&body).unwrap();
    assert_eq!(body["verified"], json!(false));
    assert_eq!(body["message"], json!("Return checksum not matching the data provided"));
}

#[actix_web::test]
async fn return_via_query_string() {
    let _ = env_logger::try_init().ok();
    let query = form_body(&transresponse("A100", "05", "05", "Declined"));
    let (status, body) = get_request(&format!("/unipay/return/A100?{query}")).await;
    assert_eq!(status, StatusCode::OK);
    let body = serde_json::from_str::<Value>(&body).unwrap();
    assert_eq!(body["status"], json!("Failed"));
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["verified"], json!(true));
    assert_eq!(body["message"], json!("Declined"));
}
