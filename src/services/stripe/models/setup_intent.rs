use serde::{Deserialize, Serialize};

use crate::models::billing::{CardSetupRequest, SetupIntentStatus};

/// Form posted to `/v1/setup_intents/{id}/confirm`.
#[derive(Serialize, Debug)]
pub struct ConfirmSetupIntentForm<'a> {
    pub client_secret: &'a str,
    pub payment_method_data: PaymentMethodData<'a>,
}

#[derive(Serialize, Debug)]
pub struct PaymentMethodData<'a> {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub card: CardToken<'a>,
    pub billing_details: BillingDetails<'a>,
}

#[derive(Serialize, Debug)]
pub struct CardToken<'a> {
    pub token: &'a str,
}

#[derive(Serialize, Debug)]
pub struct BillingDetails<'a> {
    pub name: &'a str,
    pub address: Address<'a>,
}

#[derive(Serialize, Debug)]
pub struct Address<'a> {
    pub line1: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    pub line2: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<&'a str>,
    pub postal_code: &'a str,
}

impl<'a> ConfirmSetupIntentForm<'a> {
    pub fn new(client_secret: &'a str, request: &'a CardSetupRequest) -> Self {
        let payment_method = &request.payment_method;
        let billing = &payment_method.billing_details;

        Self {
            client_secret,
            payment_method_data: PaymentMethodData {
                type_: "card",
                card: CardToken {
                    token: &payment_method.card,
                },
                billing_details: BillingDetails {
                    name: &billing.name,
                    address: Address {
                        line1: &billing.address.line1,
                        line2: &billing.address.line2,
                        city: &billing.address.city,
                        state: &billing.address.state,
                        country: billing.address.country.as_deref(),
                        postal_code: &billing.address.postal_code,
                    },
                },
            },
        }
    }
}

fn is_blank(value: &&str) -> bool {
    value.is_empty()
}

/// The parts of a setup intent response the confirmation flow reads.
#[derive(Deserialize, Debug)]
pub struct SetupIntentResponse {
    pub id: String,
    pub status: SetupIntentStatus,
}
