use common::Language;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_language;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let language_ctx = use_language();

    let on_language_change = {
        let set_language = language_ctx.set_language.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(language) = Language::from_code(&target.value()) {
                    set_language.emit(language);
                }
            }
        })
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-2 gap-4">
                <div class="flex items-center gap-2">
                    <div class="w-8 h-8 rounded-lg bg-primary flex items-center justify-center text-primary-content">
                        <i class="fas fa-hand-holding-usd"></i>
                    </div>
                    <span class="text-xl font-bold tracking-tight">{"LoanRust"}</span>
                </div>
                <h1 class="text-lg font-semibold text-gray-500" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                <ul class="menu menu-horizontal px-1 hidden md:flex">
                    <li><Link<Route> to={Route::Dashboard}><i class="fas fa-home w-4"></i> {"Dashboard"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Loans}><i class="fas fa-file-invoice w-4"></i> {"Loans"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Settings}><i class="fas fa-cog w-4"></i> {"Settings"}</Link<Route>></li>
                </ul>
                <select
                    class="select select-sm select-bordered"
                    id="language-select"
                    onchange={on_language_change}
                >
                    { for Language::ALL.iter().map(|language| html! {
                        <option value={language.code()} selected={*language == language_ctx.language}>
                            {language.display_name()}
                        </option>
                    })}
                </select>
            </div>
        </div>
    }
}
