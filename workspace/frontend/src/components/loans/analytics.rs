use common::{aggregate_by_type, build_emi_series, format_inr, to_series, LoanRecord};
use rust_decimal::prelude::ToPrimitive;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::i18n::use_translations;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Slice colors for the distribution pie, cycled by index.
const CHART_COLORS: [&str; 5] = ["#10B981", "#14B8A6", "#0EA5E9", "#8B5CF6", "#EC4899"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnalyticsTab {
    Distribution,
    Emi,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub loans: Vec<LoanRecord>,
}

/// Card with two chart views over the `loans` input: total amount per loan
/// type as a pie, and each loan's EMI as a bar. Both series are recomputed
/// from the props on every draw; an empty input draws an empty chart.
#[function_component(LoanAnalytics)]
pub fn loan_analytics(props: &Props) -> Html {
    let translations = use_translations();
    let active_tab = use_state(|| AnalyticsTab::Distribution);
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with((props.loans.clone(), *active_tab), move |(loans, tab)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    match tab {
                        AnalyticsTab::Distribution => draw_distribution(&div_id, loans),
                        AnalyticsTab::Emi => draw_emi_timeline(&div_id, loans),
                    }
                }
            }
            || ()
        });
    }

    let select_tab = |tab: AnalyticsTab| {
        let active_tab = active_tab.clone();
        Callback::from(move |_| active_tab.set(tab))
    };

    let tab_class = |tab: AnalyticsTab| {
        if *active_tab == tab {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    let caption = match *active_tab {
        AnalyticsTab::Distribution => translations.amount_dist(),
        AnalyticsTab::Emi => translations.timeline(),
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{translations.title()}</h2>
                <div class="tabs tabs-boxed w-fit" role="tablist">
                    <a
                        class={tab_class(AnalyticsTab::Distribution)}
                        onclick={select_tab(AnalyticsTab::Distribution)}
                    >
                        {translations.distribution()}
                    </a>
                    <a
                        class={tab_class(AnalyticsTab::Emi)}
                        onclick={select_tab(AnalyticsTab::Emi)}
                    >
                        {translations.monthly_emi()}
                    </a>
                </div>
                <div ref={chart_ref} id="chart-loan-analytics" class="chart-container" style="height: 300px;"></div>
                <p class="text-sm text-gray-500">{caption}</p>
            </div>
        </div>
    }
}

fn draw_distribution(div_id: &str, loans: &[LoanRecord]) {
    let series = to_series(&aggregate_by_type(loans));

    let labels: Vec<&str> = series.iter().map(|p| p.name.as_str()).collect();
    let values: Vec<f64> = series
        .iter()
        .map(|p| p.value.to_f64().unwrap_or(0.0))
        .collect();
    let slice_text: Vec<String> = series
        .iter()
        .map(|p| format!("{}: {}", p.name, format_inr(&p.value)))
        .collect();
    let colors: Vec<&str> = (0..series.len())
        .map(|i| CHART_COLORS[i % CHART_COLORS.len()])
        .collect();

    let data = serde_json::json!([{
        "type": "pie",
        "labels": labels,
        "values": values,
        "text": slice_text,
        "textinfo": "text",
        "hoverinfo": "text",
        "marker": {"colors": colors}
    }]);

    let layout = serde_json::json!({
        "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "showlegend": false
    });

    draw(div_id, &data, &layout);
}

fn draw_emi_timeline(div_id: &str, loans: &[LoanRecord]) {
    let series = build_emi_series(loans);

    let names: Vec<&str> = series.iter().map(|p| p.name.as_str()).collect();
    let amounts: Vec<f64> = series
        .iter()
        .map(|p| p.amount.to_f64().unwrap_or(0.0))
        .collect();
    let hover_text: Vec<String> = series
        .iter()
        .map(|p| format!("{}: {}", p.name, format_inr(&p.amount)))
        .collect();

    let data = serde_json::json!([{
        "type": "bar",
        "x": names,
        "y": amounts,
        "text": hover_text,
        "hoverinfo": "text",
        "marker": {"color": "#8884d8"}
    }]);

    let layout = serde_json::json!({
        "margin": {"t": 10, "r": 10, "l": 60, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": "#eee", "tickprefix": "₹"}
    });

    draw(div_id, &data, &layout);
}

fn draw(div_id: &str, data: &serde_json::Value, layout: &serde_json::Value) {
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    newPlot(
        div_id,
        serde_wasm_bindgen::to_value(data).unwrap(),
        serde_wasm_bindgen::to_value(layout).unwrap(),
        serde_wasm_bindgen::to_value(&config).unwrap(),
    );
}
