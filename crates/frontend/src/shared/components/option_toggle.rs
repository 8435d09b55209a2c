use leptos::prelude::*;

/// Row of mutually exclusive buttons with an optional hint underneath
#[component]
pub fn OptionToggle(
    /// Caption above the buttons
    #[prop(into)]
    label: String,
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
    /// Currently selected value
    #[prop(into)]
    selected: Signal<String>,
    /// Called with the value of the clicked option
    on_select: Callback<String>,
    /// Text under the buttons, usually describing the selection
    #[prop(into)]
    hint: Signal<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("panel toggle {}", additional_class())>
            <span class="panel__label">{label}</span>
            <div class="toggle__options">
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        let is_active = {
                            let value = value.clone();
                            move || selected.get() == value
                        };
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_active() {
                                        "toggle__option toggle__option--active"
                                    } else {
                                        "toggle__option"
                                    }
                                }
                                on:click=move |_| on_select.run(value.clone())
                            >
                                {text}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="panel__hint">{move || hint.get()}</div>
        </div>
    }
}
