use crate::models::billing::{BillingDetails, CardSetupRequest, ConfirmationResult, SetupIntentStatus};
use crate::services::payment::interface::CardSetupOperations;
use crate::services::stripe::mock::get_confirm_card_setup;
use crate::store::{CloudAction, Dispatch};

use super::interface::{CloudError, CloudOperations};

/// Adds a card as the workspace's payment method.
///
/// A failure to create the setup intent is returned as `Err`. Every later
/// failure (processor error, missing or unsuccessful setup intent, failed
/// server confirmation) is `Ok(false)`.
pub async fn complete_stripe_add_payment_method(
    cloud: &dyn CloudOperations,
    stripe: &dyn CardSetupOperations,
    billing_details: &BillingDetails,
    is_dev_mode: bool,
) -> Result<bool, CloudError> {
    let payment_setup_intent = cloud.create_payment_method().await?;

    let confirm_card_setup = get_confirm_card_setup(is_dev_mode, stripe);
    let request = CardSetupRequest::from(billing_details);
    let result = confirm_card_setup
        .confirm_card_setup(&payment_setup_intent.client_secret, &request)
        .await;

    let Some(result) = result else {
        log::warn!("Card setup confirmation returned no result");
        return Ok(false);
    };

    let setup_intent = match result {
        ConfirmationResult::Succeeded(setup_intent) => setup_intent,
        ConfirmationResult::Failed(error) => {
            log::warn!("Card setup failed: {:?}", error);
            return Ok(false);
        }
    };

    if setup_intent.status != SetupIntentStatus::Succeeded {
        log::warn!(
            "Setup intent {} ended in status {:?}",
            setup_intent.id,
            setup_intent.status
        );
        return Ok(false);
    }

    if let Err(err) = cloud.confirm_payment_method(&setup_intent.id).await {
        // The card is set up with the processor but not attached server-side.
        log::warn!(
            "Server confirmation of setup intent {} failed: {}",
            setup_intent.id,
            err
        );
        return Ok(false);
    }

    Ok(true)
}

pub async fn subscribe_cloud_subscription(
    cloud: &dyn CloudOperations,
    product_id: &str,
) -> Result<(), CloudError> {
    cloud.subscribe_cloud_product(product_id).await?;
    log::info!("Subscribed to cloud product {}", product_id);
    Ok(())
}

/// Fetches the plan's usage limits and publishes them to the store.
pub async fn get_cloud_limits(
    cloud: &dyn CloudOperations,
    store: &dyn Dispatch,
) -> Result<(), CloudError> {
    if let Some(limits) = cloud.get_cloud_limits().await? {
        store.dispatch(CloudAction::ReceivedCloudLimits(limits));
    }
    Ok(())
}
