use futures::future::{BoxFuture, FutureExt};

use crate::models::billing::{
    CardSetupRequest, ConfirmationResult, ConfirmedSetup, SetupIntentStatus,
};
use crate::services::payment::interface::CardSetupOperations;

pub const MOCK_SETUP_INTENT_ID: &str = "testid";

/// Development-mode confirmer. Accepts every card without contacting Stripe.
pub struct MockCardSetup;

static MOCK_CARD_SETUP: MockCardSetup = MockCardSetup;

impl CardSetupOperations for MockCardSetup {
    fn confirm_card_setup<'a>(
        &'a self,
        _client_secret: &'a str,
        _request: &'a CardSetupRequest,
    ) -> BoxFuture<'a, Option<ConfirmationResult>> {
        log::info!("Mock mode: skipping card setup confirmation");
        async {
            Some(ConfirmationResult::Succeeded(ConfirmedSetup {
                id: MOCK_SETUP_INTENT_ID.to_string(),
                status: SetupIntentStatus::Succeeded,
            }))
        }
        .boxed()
    }
}

/// Picks the confirmer for the current mode.
pub fn get_confirm_card_setup(
    is_dev_mode: bool,
    confirmer: &dyn CardSetupOperations,
) -> &dyn CardSetupOperations {
    if is_dev_mode {
        &MOCK_CARD_SETUP
    } else {
        confirmer
    }
}
