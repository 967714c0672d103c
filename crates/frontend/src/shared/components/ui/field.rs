use leptos::prelude::*;

/// Labelled text field for settings forms.
///
/// Read-only unless `editable` is set; the value is owned by the caller.
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] editable: Signal<bool>,
    /// "text" (default), "email", "password", "tel"
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let placeholder = move || placeholder.get().unwrap_or_default();

    let control = if multiline {
        view! {
            <textarea
                class="form__input form__input--multiline"
                rows=3
                prop:value=move || value.get()
                placeholder=placeholder
                disabled=move || !editable.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                class="form__input"
                type=input_type
                prop:value=move || value.get()
                placeholder=placeholder
                disabled=move || !editable.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {control}
        </div>
    }
}
