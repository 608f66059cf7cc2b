//! Password reset page
//!
//! Collects an email address, pretends to send reset instructions and then
//! swaps the form for a confirmation panel.

use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::{FormError, ResetFormState, ResetView, routes};
use crate::ui::common::{Button, ButtonVariant, EmailField, SubmitButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{BrandingPanel, LegalLinks};
use crate::ui::notifications::{ToastContext, use_toast_context};
use crate::ui::simulated::{SIMULATED_LATENCY_MS, simulated_request};

/// Password reset page component
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = use_toast_context();
    let form = RwSignal::new(ResetFormState::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(result) = form.try_update(ResetFormState::submit) else {
            return;
        };

        match result {
            Ok(_email) => {
                spawn_local(async move {
                    let outcome = simulated_request(SIMULATED_LATENCY_MS).await;
                    log!("simulated password reset request finished");
                    complete_reset(form, toasts, outcome);
                });
            }
            Err(err) if err.is_silent() => {}
            Err(err) => {
                toasts.notify(err.notification());
            }
        }
    };

    view! {
        <Title text="Reset password | Nuke Platform" />

        <div class="min-h-screen flex flex-col md:flex-row">
            <BrandingPanel message="Reset your password to regain access to your account." />

            <div class="flex-1 flex justify-center items-center p-4 sm:p-8 bg-white">
                <div class="w-full max-w-md">
                    <A
                        href=routes::AUTH
                        attr:class="inline-flex items-center text-sm text-blue-600 hover:underline mb-6"
                    >
                        <Icon name=icons::ARROW_LEFT class="mr-1 w-4 h-4" />
                        "Back to sign in"
                    </A>

                    <Show
                        when=move || form.with(ResetFormState::view) == ResetView::Form
                        fallback=move || view! { <ResetConfirmation form=form /> }
                    >
                        <h2 class="text-2xl font-semibold mb-2">"Forgot your password?"</h2>
                        <p class="text-gray-500 mb-6">
                            "No problem. Enter your email and we'll send you a reset link."
                        </p>

                        <form on:submit=on_submit class="space-y-6">
                            <EmailField
                                value=Signal::derive(move || form.with(|f| f.email.clone()))
                                on_input=Callback::new(move |value: String| form.update(|f| f.email = value))
                            />

                            <SubmitButton
                                label=Signal::stored("Send reset instructions")
                                loading_label="Sending..."
                                loading=Signal::derive(move || form.with(|f| f.loading))
                            />
                        </form>
                    </Show>

                    <div class="mt-12 text-center text-sm text-gray-500">
                        <LegalLinks />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Apply a finished request and raise its toast, even if the page is gone
fn complete_reset(
    form: RwSignal<ResetFormState>,
    toasts: ToastContext,
    outcome: Result<(), FormError>,
) {
    let notification = form
        .try_update(|f| f.finish(&outcome))
        .unwrap_or_else(|| ResetFormState::outcome_notification(&outcome));
    toasts.notify(notification);
}

/// "Check your inbox" panel shown after a successful request
#[component]
fn ResetConfirmation(form: RwSignal<ResetFormState>) -> impl IntoView {
    view! {
        <div class="text-center py-8">
            <div class="mx-auto mb-4 h-12 w-12 rounded-full bg-green-100 flex items-center justify-center">
                <Icon name=icons::CHECK class="h-6 w-6 text-green-600" />
            </div>
            <h3 class="text-xl font-medium mb-2">"Check your inbox"</h3>
            <p class="text-gray-500 mb-6">
                "We've sent a password reset link to "
                <strong>{move || form.with(|f| f.email.clone())}</strong>
                ". Please check your inbox (and spam folder) for instructions."
            </p>
            <Button
                variant=ButtonVariant::Outline
                class="mr-4"
                on_click=Callback::new(move |_| form.update(ResetFormState::try_different_email))
            >
                "Try a different email"
            </Button>
            <A
                href=routes::AUTH
                attr:class="inline-flex items-center justify-center h-10 px-4 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 transition-colors"
            >
                "Return to sign in"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::provide_toast_context;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_completion_shows_confirmation() {
        let root = Owner::new();
        root.set();
        let toasts = root.with(provide_toast_context);
        let form = RwSignal::new(ResetFormState {
            email: "owner@example.com".to_string(),
            ..Default::default()
        });
        form.try_update(|f| f.submit()).unwrap().unwrap();

        complete_reset(form, toasts, Ok(()));

        assert_eq!(form.with_untracked(ResetFormState::view), ResetView::Confirmation);
        assert_eq!(toasts.items()[0].notification.title, "Reset email sent");
    }

    #[test]
    fn test_toast_survives_leaving_the_page() {
        let root = Owner::new();
        root.set();
        let toasts = root.with(provide_toast_context);

        let page = root.child();
        let form = page.with(|| {
            RwSignal::new(ResetFormState {
                email: "owner@example.com".to_string(),
                ..Default::default()
            })
        });
        form.try_update(|f| f.submit()).unwrap().unwrap();

        page.cleanup();
        complete_reset(form, toasts, Ok(()));

        let items = toasts.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].notification.title, "Reset email sent");
    }
}
