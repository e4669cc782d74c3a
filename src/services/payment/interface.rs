use futures::future::BoxFuture;

use crate::models::billing::{CardSetupRequest, ConfirmationResult};

/// Confirms a card setup with the payment processor.
///
/// Returns `None` when the processor gave no answer at all.
pub trait CardSetupOperations: Send + Sync {
    fn confirm_card_setup<'a>(
        &'a self,
        client_secret: &'a str,
        request: &'a CardSetupRequest,
    ) -> BoxFuture<'a, Option<ConfirmationResult>>;
}
