use yew::prelude::*;

use crate::api_client::loans::get_loans;
use crate::components::common::error::ErrorDisplay;
use crate::components::common::loading::Loading;
use crate::components::loans::LoanAnalytics;
use crate::hooks::{use_fetch_with_refetch, FetchState};

use super::stats::Stats;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
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
        FetchState::Success(loans) => {
            let as_of = chrono::Local::now().format("%d %b %Y").to_string();
            html! {
                <>
                    <Stats loans={loans.clone()} />
                    <div class="mt-6">
                        <LoanAnalytics loans={loans.clone()} />
                    </div>
                    <div class="text-xs text-gray-400 text-right mt-2">
                        {format!("As of {}", as_of)}
                    </div>
                </>
            }
        }
    }
}
