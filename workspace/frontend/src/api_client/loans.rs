use common::LoanRecord;

use crate::api_client;

/// Fetches every loan for the signed-in borrower.
///
/// Amount fields are lenient on the wire: a record with a malformed
/// `loan_amount` or `emi_amount` loads with a zero amount instead of failing
/// the whole page.
pub async fn get_loans() -> Result<Vec<LoanRecord>, String> {
    log::trace!("Fetching loans");
    let result = api_client::get::<Vec<LoanRecord>>("/loans").await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch loans: {}", e);
    } else {
        log::info!("Successfully fetched loans");
    }

    result
}
