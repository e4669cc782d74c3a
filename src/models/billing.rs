use serde::{Deserialize, Serialize};

use crate::services::country;

/// Card and address details collected by the payment form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub address2: String,
    pub city: String,
    pub state: String,
    /// Full country name as shown in the country selector, e.g. "Canada".
    pub country: String,
    pub postal_code: String,
    /// Tokenized card reference (`tok_...` or `pm_...`).
    pub card: String,
}

/// Setup intent created by the billing backend. Used once and discarded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StripeSetupIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardSetupRequest {
    pub payment_method: PaymentMethodDetails,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentMethodDetails {
    pub card: String,
    pub billing_details: CardBillingDetails,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardBillingDetails {
    pub name: String,
    pub address: Address,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    /// ISO 3166-1 alpha-2 code, `None` when the country name is not recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub postal_code: String,
}

impl From<&BillingDetails> for CardSetupRequest {
    fn from(details: &BillingDetails) -> Self {
        let country = country::get_code(&details.country).map(str::to_owned);
        if country.is_none() {
            log::debug!("No country code for {:?}, submitting without one", details.country);
        }

        Self {
            payment_method: PaymentMethodDetails {
                card: details.card.clone(),
                billing_details: CardBillingDetails {
                    name: details.name.clone(),
                    address: Address {
                        line1: details.address.clone(),
                        line2: details.address2.clone(),
                        city: details.city.clone(),
                        state: details.state.clone(),
                        country,
                        postal_code: details.postal_code.clone(),
                    },
                },
            },
        }
    }
}

/// Setup intent statuses reported by the payment processor.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SetupIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    Canceled,
    Succeeded,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConfirmedSetup {
    pub id: String,
    pub status: SetupIntentStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ProcessorError {
    pub message: Option<String>,
    pub code: Option<String>,
    pub decline_code: Option<String>,
}

/// Outcome of a card setup confirmation.
///
/// `Succeeded` only means the processor answered with a setup intent; its
/// `status` still decides whether the card was actually set up.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationResult {
    Succeeded(ConfirmedSetup),
    Failed(Option<ProcessorError>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(country: &str) -> BillingDetails {
        BillingDetails {
            name: "Jane Doe".to_string(),
            address: "1 Main St".to_string(),
            address2: "Suite 4".to_string(),
            city: "Toronto".to_string(),
            state: "ON".to_string(),
            country: country.to_string(),
            postal_code: "M5V 2T6".to_string(),
            card: "tok_visa".to_string(),
        }
    }

    #[test]
    fn maps_billing_details_into_card_setup_request() {
        let request = CardSetupRequest::from(&details("Canada"));
        let billing = &request.payment_method.billing_details;

        assert_eq!(request.payment_method.card, "tok_visa");
        assert_eq!(billing.name, "Jane Doe");
        assert_eq!(billing.address.line1, "1 Main St");
        assert_eq!(billing.address.line2, "Suite 4");
        assert_eq!(billing.address.country.as_deref(), Some("CA"));
        assert_eq!(billing.address.postal_code, "M5V 2T6");
    }

    #[test]
    fn unknown_country_is_left_out() {
        let request = CardSetupRequest::from(&details("Atlantis"));
        assert_eq!(request.payment_method.billing_details.address.country, None);

        let json = serde_json::to_value(&request).unwrap();
        assert!(json["payment_method"]["billing_details"]["address"]
            .get("country")
            .is_none());
    }

    #[test]
    fn billing_details_use_camel_case_fields() {
        let parsed: BillingDetails = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "address": "1 Main St",
            "city": "Austin",
            "state": "TX",
            "country": "United States of America",
            "postalCode": "73301",
            "card": "tok_visa"
        }))
        .unwrap();

        assert_eq!(parsed.postal_code, "73301");
        assert_eq!(parsed.address2, "");
    }

    #[test]
    fn unrecognized_status_is_kept_as_unknown() {
        let setup: ConfirmedSetup =
            serde_json::from_str(r#"{"id":"seti_1","status":"requires_review"}"#).unwrap();
        assert_eq!(setup.status, SetupIntentStatus::Unknown);
    }
}
