use common::{Language, TranslateBatchRequest};

use crate::api_client;

/// Translates a batch of UI strings in one round trip. The service returns
/// the translated strings in the same order as the input; a response of any
/// other length is reported as an error so callers can keep their previous
/// labels.
pub async fn translate_batch(texts: &[&str], target_language: Language) -> Result<Vec<String>, String> {
    let request = TranslateBatchRequest {
        texts: texts.iter().map(|s| s.to_string()).collect(),
        target_language,
    };

    log::trace!(
        "Requesting {} label translations for '{}'",
        request.texts.len(),
        target_language.code()
    );
    let translated: Vec<String> = api_client::post("/translate/batch", &request).await?;

    if translated.len() != request.texts.len() {
        let error_msg = format!(
            "translation service returned {} strings for {} inputs",
            translated.len(),
            request.texts.len()
        );
        log::error!("POST /translate/batch - {}", error_msg);
        return Err(error_msg);
    }

    log::info!(
        "Translated {} labels to '{}'",
        translated.len(),
        target_language.code()
    );
    Ok(translated)
}
