use leptos::prelude::*;

use super::spinner::InlineSpinner;
use crate::ui::icon::{Icon, icons};

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500",
            ButtonVariant::Outline => {
                "border border-gray-300 bg-white text-gray-900 hover:bg-gray-50 focus:ring-gray-300"
            }
            ButtonVariant::Ghost => "bg-transparent text-gray-700 hover:bg-gray-100 focus:ring-gray-300",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "h-10 px-4 text-sm",
            ButtonSize::Large => "h-12 px-6 text-base",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let base = "inline-flex items-center justify-center rounded-lg font-medium transition-colors \
                focus:outline-none focus:ring-2 focus:ring-offset-2 \
                disabled:opacity-50 disabled:cursor-not-allowed";
    if extra.is_empty() {
        format!("{} {} {}", base, variant.class(), size.class())
    } else {
        format!("{} {} {} {}", base, variant.class(), size.class(), extra)
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Button content (text or elements)
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_classes(variant, size, class)
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Full-width form submit button with a loading state
#[component]
pub fn SubmitButton(
    /// Label when idle
    #[prop(into)]
    label: Signal<&'static str>,
    /// Label while the request is pending
    loading_label: &'static str,
    /// Whether a request is pending
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=button_classes(ButtonVariant::Primary, ButtonSize::Large, "w-full")
            disabled=move || loading.get()
            aria-busy=move || loading.get().to_string()
        >
            <Show
                when=move || loading.get()
                fallback=move || view! {
                    <span class="flex items-center">
                        {move || label.get()}
                        <Icon name=icons::ARROW_RIGHT class="ml-2 w-[18px] h-[18px]" />
                    </span>
                }
            >
                <span class="flex items-center">
                    <InlineSpinner class="-ml-1 mr-2 h-4 w-4 text-white" />
                    {loading_label}
                </span>
            </Show>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes_compose() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Large, "w-full");
        assert!(classes.contains("border-gray-300"));
        assert!(classes.contains("h-12"));
        assert!(classes.ends_with("w-full"));
    }

    #[test]
    fn test_button_classes_without_extra() {
        let classes = button_classes(ButtonVariant::Primary, ButtonSize::Medium, "");
        assert!(classes.contains("bg-blue-600"));
        assert!(!classes.ends_with(' '));
    }
}
