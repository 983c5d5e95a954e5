use common::{format_inr, LoanRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub loans: Vec<LoanRecord>,
}

#[function_component(LoanTable)]
pub fn loan_table(props: &Props) -> Html {
    if props.loans.is_empty() {
        return html! {
            <div class="text-center py-8 text-gray-500">
                {"No loans to display"}
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Type"}</th>
                        <th class="text-right">{"Amount"}</th>
                        <th class="text-right">{"EMI"}</th>
                        <th>{"Status"}</th>
                        <th>{"Started"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.loans.iter().map(|loan| {
                        let status_badge = if loan.is_active() { "badge-success" } else { "badge-ghost" };
                        let started = loan
                            .start_date
                            .map(|d| d.format("%d %b %Y").to_string())
                            .unwrap_or_else(|| "—".to_string());

                        html! {
                            <tr key={loan.id} class="hover">
                                <td class="font-medium">{&loan.loan_type}</td>
                                <td class="font-mono text-right">{format_inr(&loan.loan_amount)}</td>
                                <td class="font-mono text-right">{format_inr(&loan.emi_amount)}</td>
                                <td>
                                    <span class={classes!("badge", "badge-sm", status_badge)}>{&loan.status}</span>
                                </td>
                                <td class="whitespace-nowrap">{started}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
