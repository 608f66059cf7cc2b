use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Inline spinner for buttons or text
#[component]
pub fn InlineSpinner(
    /// Size and colour classes
    #[prop(default = "h-4 w-4")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class="inline-flex" role="status">
            <span class="animate-spin inline-flex">
                <Icon name=icons::LOADER class=class />
            </span>
            <span class="sr-only">"Loading..."</span>
        </span>
    }
}
