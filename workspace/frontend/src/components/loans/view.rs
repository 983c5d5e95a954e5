use yew::prelude::*;

use crate::api_client::loans::get_loans;
use crate::components::common::error::ErrorDisplay;
use crate::components::common::loading::Loading;
use crate::hooks::{use_fetch_with_refetch, FetchState};

use super::table::LoanTable;

#[function_component(Loans)]
pub fn loans() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(|| async { get_loans().await });

    let on_retry = {
        let refetch = refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    match &*fetch_state {
        FetchState::Loading => html! {
            <Loading text="Loading loans..." />
        },
        FetchState::Error(error) => html! {
            <ErrorDisplay message={error.clone()} on_retry={Some(on_retry)} />
        },
        FetchState::Success(loans) => html! {
            <LoanTable loans={loans.clone()} />
        },
    }
}
