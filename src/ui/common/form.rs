use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full h-12 px-3 bg-white border border-gray-300 rounded-lg \
                           text-gray-900 placeholder-gray-400 \
                           focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                           transition-colors";

/// Email address field with label
#[component]
pub fn EmailField(
    /// Input id, also used by the label
    #[prop(default = "email")]
    id: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="block text-sm font-medium text-gray-900">"Email address"</label>
            <input
                id=id
                name="email"
                type="email"
                autocomplete="email"
                placeholder="yourname@example.com"
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Password input with a show/hide toggle
///
/// The label row is passed in as children so callers can put a link next
/// to it.
#[component]
pub fn PasswordField(
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether the password is shown in clear text
    #[prop(into)]
    visible: Signal<bool>,
    /// Toggle visibility callback
    on_toggle_visibility: Callback<()>,
    /// Placeholder text
    #[prop(into)]
    placeholder: Signal<&'static str>,
    /// Autocomplete hint (current-password / new-password)
    #[prop(into)]
    autocomplete: Signal<&'static str>,
    /// Label row
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {children()}
            <div class="relative">
                <input
                    id="password"
                    name="password"
                    type=move || if visible.get() { "text" } else { "password" }
                    autocomplete=move || autocomplete.get()
                    placeholder=move || placeholder.get()
                    class=format!("{} pr-10", INPUT_CLASS)
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-500 hover:text-gray-900"
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| on_toggle_visibility.run(())
                >
                    {move || {
                        if visible.get() {
                            view! { <Icon name=icons::EYE_OFF class="w-[18px] h-[18px]" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="w-[18px] h-[18px]" /> }.into_any()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
