use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::common::toast::ToastContext;
use crate::settings;

#[function_component(Settings)]
pub fn settings_view() -> Html {
    let current = settings::get_settings();
    let api_host = use_state(|| current.api_host.clone());
    let api_port = use_state(|| current.api_port.to_string());
    let api_path = use_state(|| current.api_path.clone());
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let on_host_input = {
        let api_host = api_host.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                api_host.set(input.value());
            }
        })
    };

    let on_port_input = {
        let api_port = api_port.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                api_port.set(input.value());
            }
        })
    };

    let on_path_input = {
        let api_path = api_path.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                api_path.set(input.value());
            }
        })
    };

    let on_save = {
        let api_host = api_host.clone();
        let api_port = api_port.clone();
        let api_path = api_path.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_| {
            let port = match api_port.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    toast_ctx.show_error(format!("'{}' is not a valid port", *api_port));
                    return;
                }
            };

            settings::update_settings(|s| {
                s.api_host = (*api_host).clone();
                s.api_port = port;
                s.api_path = (*api_path).clone();
            });

            match settings::get_settings().save_to_storage() {
                Ok(()) => {
                    log::info!("Settings saved");
                    toast_ctx.show_success("Settings saved".to_string());
                }
                Err(_) => {
                    toast_ctx.show_error("Could not persist settings".to_string());
                }
            }
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Connection Settings"}</h2>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"API Host"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={(*api_host).clone()}
                            oninput={on_host_input}
                        />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"API Port"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={(*api_port).clone()}
                            oninput={on_port_input}
                        />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"API Path Prefix"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={(*api_path).clone()}
                            oninput={on_path_input}
                        />
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
