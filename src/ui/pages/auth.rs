//! Sign-in / sign-up page
//!
//! One screen with two modes. Submitting runs a simulated request and
//! reports the result through a toast; nobody is actually signed in.

use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::{
    AuthFormState, AuthMode, AuthProvider, FormError, Submission, guest_notification, routes,
};
use crate::ui::common::{
    Button, ButtonSize, ButtonVariant, EmailField, PasswordField, SubmitButton,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{BrandingPanel, LegalLinks};
use crate::ui::notifications::{ToastContext, use_toast_context};
use crate::ui::simulated::{SIMULATED_LATENCY_MS, simulated_request};

/// Sign-in / sign-up page component
#[component]
pub fn AuthPage() -> impl IntoView {
    let toasts = use_toast_context();
    let form = RwSignal::new(AuthFormState::new());

    let mode = Memo::new(move |_| form.with(|f| f.mode));
    let loading = Signal::derive(move || form.with(|f| f.loading));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(result) = form.try_update(AuthFormState::submit) else {
            return;
        };

        match result {
            Ok(submission) => {
                spawn_local(async move {
                    let outcome = simulated_request(SIMULATED_LATENCY_MS).await;
                    log!("simulated {} request finished", submission.mode.as_str());
                    complete_submission(form, toasts, &submission, outcome);
                });
            }
            Err(err) if err.is_silent() => {}
            Err(err) => {
                toasts.notify(err.notification());
            }
        }
    };

    let on_guest = Callback::new(move |_| {
        toasts.notify(guest_notification());
    });

    view! {
        <Title text=move || format!("{} | Nuke Platform", mode.get().tab_label()) />

        <div class="flex min-h-screen flex-col md:flex-row">
            <BrandingPanel
                message="Everything you need to manage your vehicle in one place."
                full=true
            />

            <div class="flex-1 flex justify-center items-center p-4 sm:p-8 bg-white">
                <div class="w-full max-w-md">
                    <ModeTabs form=form />

                    <h2 class="text-2xl font-semibold mb-6">{move || mode.get().heading()}</h2>

                    <form on:submit=on_submit class="space-y-6">
                        <EmailField
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=Callback::new(move |value: String| form.update(|f| f.email = value))
                        />

                        <div class="space-y-2">
                            <PasswordField
                                value=Signal::derive(move || form.with(|f| f.password.clone()))
                                on_input=Callback::new(move |value: String| form.update(|f| f.password = value))
                                visible=Signal::derive(move || form.with(|f| f.show_password))
                                on_toggle_visibility=Callback::new(move |_| form.update(AuthFormState::toggle_password_visibility))
                                placeholder=Signal::derive(move || mode.get().password_placeholder())
                                autocomplete=Signal::derive(move || mode.get().password_autocomplete())
                            >
                                <div class="flex justify-between items-center">
                                    <label for="password" class="block text-sm font-medium text-gray-900">"Password"</label>
                                    <Show when=move || form.with(AuthFormState::shows_forgot_password)>
                                        <A href=routes::FORGOT_PASSWORD attr:class="text-sm text-blue-600 hover:underline">
                                            "Forgot password?"
                                        </A>
                                    </Show>
                                </div>
                            </PasswordField>

                            <Show when=move || form.with(AuthFormState::shows_strength)>
                                <PasswordStrengthHint form=form />
                            </Show>
                        </div>

                        <SubmitButton
                            label=Signal::derive(move || mode.get().submit_label())
                            loading_label="Processing..."
                            loading=loading
                        />
                    </form>

                    <div class="mt-8">
                        <div class="relative flex items-center">
                            <div class="flex-grow border-t border-gray-200"></div>
                            <span class="flex-shrink mx-4 text-gray-500 text-sm">"or continue with"</span>
                            <div class="flex-grow border-t border-gray-200"></div>
                        </div>

                        <div class="grid grid-cols-2 gap-4 mt-4">
                            {AuthProvider::ALL
                                .into_iter()
                                .map(|provider| view! { <ProviderButton provider=provider /> })
                                .collect_view()}
                        </div>

                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Large
                            class="w-full mt-4"
                            on_click=on_guest
                        >
                            "Continue as Guest"
                        </Button>
                    </div>

                    <div class="mt-8 text-center text-sm text-gray-500">
                        <div class="mb-2">
                            {move || mode.get().switch_prompt()}
                            <button
                                type="button"
                                class="text-blue-600 hover:underline"
                                on:click=move |_| form.update(AuthFormState::toggle_mode)
                            >
                                {move || mode.get().switch_action()}
                            </button>
                        </div>
                        <LegalLinks />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Apply a finished request and raise its toast.
///
/// The form signal is gone if the user left the page while waiting; the
/// toast is raised anyway.
fn complete_submission(
    form: RwSignal<AuthFormState>,
    toasts: ToastContext,
    submission: &Submission,
    outcome: Result<(), FormError>,
) {
    let notification = form
        .try_update(|f| f.finish(submission, &outcome))
        .unwrap_or_else(|| submission.outcome_notification(&outcome));
    toasts.notify(notification);
}

/// Sign In / Create Account tab strip
#[component]
fn ModeTabs(form: RwSignal<AuthFormState>) -> impl IntoView {
    let tab = move |tab_mode: AuthMode| {
        let is_active = move || form.with(|f| f.mode == tab_mode);
        view! {
            <button
                type="button"
                role="tab"
                class="pb-2 px-4 text-lg font-medium"
                class=("text-blue-600", is_active)
                class=("border-b-2", is_active)
                class=("border-blue-600", is_active)
                class=("text-gray-500", move || !is_active())
                aria-selected=move || is_active().to_string()
                on:click=move |_| form.update(|f| f.select_mode(tab_mode))
            >
                {tab_mode.tab_label()}
            </button>
        }
    };

    view! {
        <div class="flex mb-8 border-b" role="tablist">
            {tab(AuthMode::SignIn)}
            {tab(AuthMode::SignUp)}
        </div>
    }
}

/// "Password strength: ..." line under the password field
#[component]
fn PasswordStrengthHint(form: RwSignal<AuthFormState>) -> impl IntoView {
    let strength = Memo::new(move |_| form.with(AuthFormState::password_strength));

    view! {
        <div class=move || format!("text-sm mt-1 {}", strength.get().color_class())>
            "Password strength: "
            {move || strength.get().label()}
        </div>
    }
}

/// Third-party sign-in button; these providers are not connected
#[component]
fn ProviderButton(provider: AuthProvider) -> impl IntoView {
    let icon = match provider {
        AuthProvider::GitHub => icons::GITHUB,
        AuthProvider::Google => icons::GOOGLE,
    };

    view! {
        <Button
            variant=ButtonVariant::Outline
            size=ButtonSize::Large
        >
            <Icon name=icon class="mr-2 w-[18px] h-[18px]" />
            {provider.label()}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::provide_toast_context;
    use leptos::reactive::owner::Owner;

    fn filled(mode: AuthMode) -> AuthFormState {
        AuthFormState {
            mode,
            email: "driver@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_completion_updates_mounted_form() {
        let root = Owner::new();
        root.set();
        let toasts = root.with(provide_toast_context);
        let form = RwSignal::new(filled(AuthMode::SignIn));
        let submission = form.try_update(|f| f.submit()).unwrap().unwrap();

        complete_submission(form, toasts, &submission, Ok(()));

        assert!(!form.get_untracked().loading);
        let items = toasts.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].notification.title, "Signed in successfully");
    }

    #[test]
    fn test_toast_survives_leaving_the_page() {
        let root = Owner::new();
        root.set();
        let toasts = root.with(provide_toast_context);

        let page = root.child();
        let form = page.with(|| RwSignal::new(filled(AuthMode::SignUp)));
        let submission = form.try_update(|f| f.submit()).unwrap().unwrap();

        // navigating away disposes the page's signals
        page.cleanup();
        assert!(form.try_get_untracked().is_none());

        complete_submission(form, toasts, &submission, Ok(()));

        let items = toasts.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].notification.title, "Account created");
    }
}
