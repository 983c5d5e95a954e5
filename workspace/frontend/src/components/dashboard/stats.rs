use common::{aggregate_by_type, format_inr, LoanRecord};
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::i18n::use_translations;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub loans: Vec<LoanRecord>,
}

#[function_component(Stats)]
pub fn stats(props: &Props) -> Html {
    let translations = use_translations();

    let active_count = props.loans.iter().filter(|l| l.is_active()).count();
    let monthly_emi: Decimal = props.loans.iter().map(|l| l.emi_amount).sum();
    let type_count = aggregate_by_type(&props.loans).len();

    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{translations.total_loans()}</div>
                    <div class="stat-value text-primary">{props.loans.len()}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{translations.active_loans()}</div>
                    <div class="stat-value text-success">{active_count}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{translations.monthly_emi()}</div>
                    <div class="stat-value">{format_inr(&monthly_emi)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{translations.types()}</div>
                    <div class="stat-value">{type_count}</div>
                </div>
            </div>
        </div>
    }
}
