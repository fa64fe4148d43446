use leptos::prelude::*;

/// Labelled input bound to a string signal
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// `name` attribute for the form data
    name: &'static str,
    /// Prefix making the element id unique when several forms share a page
    id_prefix: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "on")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = field_id(id_prefix, name);

    view! {
        <div class="space-y-1.5">
            <label class="label" for=id.clone()>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=id
                name=name
                type=input_type
                class="input-base"
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Labelled select with `(value, text)` options
#[component]
pub fn SelectField(
    /// Field label text
    label: &'static str,
    /// `name` attribute for the form data
    name: &'static str,
    /// Prefix making the element id unique when several forms share a page
    id_prefix: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = field_id(id_prefix, name);

    view! {
        <div class="space-y-1.5">
            <label class="label" for=id.clone()>{label}</label>
            <select
                id=id
                name=name
                class="select-base"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                {options.into_iter().map(|(val, text)| {
                    view! { <option value=val>{text}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

fn field_id(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_differ_per_form() {
        assert_eq!(field_id("modal", "userEmail"), "modal-userEmail");
        assert_ne!(field_id("modal", "plan"), field_id("widget", "plan"));
    }
}
