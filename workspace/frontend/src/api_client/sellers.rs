use cropdash_common::{FetchError, SellersSummary, SELLERS_ENDPOINT};
use crate::api_client;

pub async fn get_best_worst_sellers() -> Result<SellersSummary, FetchError> {
    log::trace!("Fetching best and worst sellers");
    let result = api_client::get::<SellersSummary>(SELLERS_ENDPOINT, &[]).await;

    if result.is_ok() {
        log::info!("Successfully fetched sellers summary");
    }

    result
}
