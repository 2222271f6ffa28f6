use leptos::*;

const LABEL_CLASS: &str = "block text-sm font-medium text-fg";
const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{} border-status-error-border", INPUT_CLASS)
    } else {
        INPUT_CLASS.to_string()
    }
}

#[component]
fn FieldLabel(id: &'static str, label: &'static str, required: bool) -> impl IntoView {
    view! {
        <label for=id class=LABEL_CLASS>
            {label}
            {required.then(|| view! { <span class="text-status-error-text">" *"</span> })}
        </label>
    }
}

#[component]
pub fn FieldError(error: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|msg| view! { <p class="mt-1 text-xs text-status-error-text">{msg}</p> })
    }
}

#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] placeholder: Option<&'static str>,
    value: Signal<String>,
    #[prop(optional, into)] error: Signal<Option<&'static str>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <FieldLabel id=id label=label required=required />
            <select
                id=id
                class=move || input_class(error.get().is_some())
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let selected = option_value == current;
                            view! {
                                <option value=option_value selected=selected>{option_label}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn DateField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] required: bool,
    value: Signal<String>,
    #[prop(optional, into)] error: Signal<Option<&'static str>>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <FieldLabel id=id label=label required=required />
            <input
                id=id
                type="date"
                class=move || input_class(error.get().is_some())
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] multiline: bool,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_default();
    let control = if multiline {
        view! {
            <textarea
                id=id
                rows=3
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                id=id
                type="text"
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        }
        .into_view()
    };
    view! {
        <div>
            <FieldLabel id=id label=label required=false />
            {control}
        </div>
    }
}

/// `SelectOption` tables as owned `(value, label)` pairs.
pub fn static_options(options: &[crate::options::SelectOption]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|opt| (opt.value.to_string(), opt.label.to_string()))
        .collect()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::options::LEAVE_TYPES;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn select_marks_required_and_renders_error() {
        let html = render_to_string(|| {
            view! {
                <SelectField
                    id="request_type"
                    label="Request Type"
                    required=true
                    options=Signal::derive(|| static_options(LEAVE_TYPES))
                    placeholder="Select type"
                    value=Signal::derive(|| "SICK".to_string())
                    error=Signal::derive(|| Some(crate::options::MSG_REQUIRED))
                    on_change=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Request Type"));
        assert!(html.contains(" *"));
        assert!(html.contains("Sick Leave"));
        assert!(html.contains("Select type"));
        assert!(html.contains(crate::options::MSG_REQUIRED));
        assert!(html.contains("border-status-error-border"));
    }

    #[test]
    fn date_field_without_error_stays_plain() {
        let html = render_to_string(|| {
            view! {
                <DateField
                    id="start_date"
                    label="Start Date"
                    value=Signal::derive(|| "2025-01-10".to_string())
                    on_input=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("type=\"date\""));
        assert!(!html.contains("border-status-error-border"));
    }
}
