use upg_common::Paise;

use crate::UnipayError;

/// The gateway expects amounts as rupees with exactly two decimal places, e.g. `"100.50"`.
pub fn parse_unipay_amount(amount: &str) -> Result<Paise, UnipayError> {
    amount.parse::<Paise>().map_err(|e| UnipayError::InvalidAmount(e.to_string()))
}

/// Normalizes a caller-supplied amount (`"100"`, `"100.5"`) into the gateway's wire format.
pub fn unipay_amount(amount: &str) -> Result<String, UnipayError> {
    let paise = parse_unipay_amount(amount)?;
    if paise.value() <= 0 {
        return Err(UnipayError::InvalidAmount(format!("{amount} is not a positive amount")));
    }
    Ok(paise.to_string())
}
