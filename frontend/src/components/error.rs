use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

/// Flattens `details.errors` into display lines. The server sends either a
/// list of messages or an object keyed by field name.
pub fn detail_lines(error: &ApiError) -> Vec<String> {
    let Some(errors) = error.details.as_ref().and_then(|d| d.get("errors")) else {
        return Vec::new();
    };
    match errors {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Value::Object(fields) => fields
            .iter()
            .filter_map(|(field, msg)| msg.as_str().map(|msg| format!("{}: {}", field, msg)))
            .collect(),
        _ => Vec::new(),
    }
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let lines = error.get().map(|e| detail_lines(&e)).unwrap_or_default();
                    (!lines.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                        </ul>
                    })
                }}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validation(details: Value) -> ApiError {
        ApiError {
            error: "Invalid leave request".into(),
            code: "VALIDATION_ERROR".into(),
            details: Some(details),
        }
    }

    #[test]
    fn detail_lines_accepts_list_and_field_map() {
        let listed = validation(json!({ "errors": ["Approver is required"] }));
        assert_eq!(detail_lines(&listed), vec!["Approver is required"]);

        let mapped = validation(json!({ "errors": { "end_date": "Must follow start" } }));
        assert_eq!(detail_lines(&mapped), vec!["end_date: Must follow start"]);

        assert!(detail_lines(&ApiError::unknown("boom")).is_empty());
    }
}
