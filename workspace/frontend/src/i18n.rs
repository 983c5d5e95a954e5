//! Language selection and on-demand label translation.
//!
//! `LanguageProvider` owns the active language and exposes it through
//! context; `use_translations` owns a component-local set of translated
//! dashboard labels and refetches it whenever the language changes.

use common::{Language, TranslationSet, DASHBOARD_LABELS};
use web_sys::window;
use yew::prelude::*;

use crate::api_client::translation;

const LANGUAGE_STORAGE_KEY: &str = "loanrust_language";

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state(load_stored_language);

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            log::info!("Switching dashboard language to '{}'", next.code());
            store_language(next);
            language.set(next);
        })
    };

    let context = LanguageContext {
        language: *language,
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            {props.children.clone()}
        </ContextProvider<LanguageContext>>
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().expect("LanguageProvider must wrap the app")
}

/// Translated dashboard labels for the active language.
///
/// Starts out empty, so every label falls back to its English default until
/// the first batch resolves. Each language change issues one batch request;
/// on success the whole set is replaced, on failure the previous labels stay
/// in place and the failure is only logged.
///
/// Responses are checked against a generation counter before they are
/// applied: the counter advances on every language change and on effect
/// cleanup, so a slow response for a previously selected language is
/// discarded instead of overwriting the current labels, and nothing writes
/// state after the consuming component is gone.
#[hook]
pub fn use_translations() -> TranslationSet {
    let LanguageContext { language, .. } = use_language();
    let translations = use_state(TranslationSet::default);
    let generation = use_mut_ref(|| 0u64);

    {
        let translations = translations.clone();
        let generation = generation.clone();
        use_effect_with(language, move |language| {
            let language = *language;
            let current = {
                let mut counter = generation.borrow_mut();
                *counter += 1;
                *counter
            };

            {
                let translations = translations.clone();
                let generation = generation.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match translation::translate_batch(&DASHBOARD_LABELS, language).await {
                        Ok(batch) => match TranslationSet::from_batch(batch) {
                            Ok(set) => {
                                if *generation.borrow() == current {
                                    translations.set(set);
                                } else {
                                    log::debug!(
                                        "Discarding stale translation response for '{}'",
                                        language.code()
                                    );
                                }
                            }
                            Err(err) => {
                                log::warn!(
                                    "Bad translation response for '{}', keeping previous labels: {}",
                                    language.code(),
                                    err
                                );
                            }
                        },
                        Err(err) => {
                            log::warn!(
                                "Translation fetch for '{}' failed, keeping previous labels: {}",
                                language.code(),
                                err
                            );
                        }
                    }
                });
            }

            move || {
                *generation.borrow_mut() += 1;
            }
        });
    }

    (*translations).clone()
}

fn load_stored_language() -> Language {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(code)) = storage.get_item(LANGUAGE_STORAGE_KEY) {
                if let Some(language) = Language::from_code(&code) {
                    return language;
                }
            }
        }
    }
    Language::default()
}

fn store_language(language: Language) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(LANGUAGE_STORAGE_KEY, language.code()).is_err() {
                log::warn!("Could not persist language selection");
            }
        }
    }
}
