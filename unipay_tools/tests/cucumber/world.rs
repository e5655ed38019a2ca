use cucumber::World;
use unipay_tools::{sign, ChecksumSecret, Notification, RequestBuilder, ReturnHandler, Secret};

#[derive(Debug, Default, World)]
pub struct GatewayWorld {
    pub merchant_id: String,
    pub secret: ChecksumSecret,
    pub transaction_id: String,
    pub payload: Option<String>,
    pub returned: Option<ReturnHandler>,
    pub request: Option<RequestBuilder>,
}

impl GatewayWorld {
    pub fn configure(&mut self, merchant_id: String, secret: String) {
        self.merchant_id = merchant_id;
        self.secret = Secret::new(secret);
        self.transaction_id = "U9001".to_string();
    }

    /// A `transresponse` document signed the way the gateway signs its callbacks.
    pub fn signed_payload(&self, order_id: &str, res_code: &str, message: &str) -> String {
        let concatenated = format!("{order_id}{}{}{res_code}{message}", self.merchant_id, self.transaction_id);
        let checksum = sign(&[concatenated], &self.secret);
        format!(
            "<response><resCode>{res_code}</resCode><UnipayId>{}</UnipayId><orderId>{order_id}</orderId><merchantId>{}\
             </merchantId><procCode>PC1</procCode><checkSum>{checksum}</checkSum><resmsg>{message}</resmsg></response>",
            self.transaction_id, self.merchant_id
        )
    }

    pub fn payload(&self) -> &str {
        self.payload.as_deref().expect("No gateway payload has been received")
    }

    pub fn notification(&self) -> Notification {
        Notification::new(self.payload(), &self.secret)
    }

    pub fn returned(&self) -> &ReturnHandler {
        self.returned.as_ref().expect("The browser has not returned yet")
    }

    pub fn request(&self) -> &RequestBuilder {
        self.request.as_ref().expect("No payment request has been built")
    }
}
