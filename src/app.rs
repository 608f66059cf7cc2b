use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::routes::InfoTopic;
use crate::ui::pages::{AuthPage, ForgotPasswordPage, InfoPage, LandingPage, NotFoundPage};
use crate::ui::{NotificationsContainer, provide_toast_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Toasts raised by any page end up in the container below
    provide_toast_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/nuke-platform.css"/>

        // default title, pages override it
        <Title text="Nuke Platform"/>

        <Router>
            <main class="min-h-screen bg-white text-gray-900">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/auth") view=AuthPage/>
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
                    <Route path=path!("/terms") view=|| view! { <InfoPage topic=InfoTopic::Terms/> }/>
                    <Route path=path!("/privacy") view=|| view! { <InfoPage topic=InfoTopic::Privacy/> }/>
                    <Route path=path!("/support") view=|| view! { <InfoPage topic=InfoTopic::Support/> }/>
                </Routes>
            </main>
        </Router>

        <NotificationsContainer/>
    }
}
