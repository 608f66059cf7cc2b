//! Landing page component
//!
//! Entry point of the site with links into the auth screen.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::routes;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PRODUCT_TAGLINE;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="Nuke Platform" />
        <Meta
            name="description"
            content="Nuke is the complete vehicle management platform: everything you need to manage your vehicle in one place."
        />

        <div class="min-h-screen flex flex-col items-center justify-center p-4">
            <div class="max-w-3xl text-center">
                <h1 class="text-4xl font-bold mb-6">"Welcome to Nuke Platform"</h1>
                <p class="text-xl mb-10">{PRODUCT_TAGLINE}</p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <A
                        href=routes::AUTH
                        attr:class="inline-flex items-center justify-center h-12 px-6 rounded-lg bg-blue-600 text-white font-medium hover:bg-blue-700 transition-colors"
                    >
                        "Sign In"
                        <Icon name=icons::ARROW_RIGHT class="ml-2 w-[18px] h-[18px]" />
                    </A>
                    <A
                        href=routes::AUTH
                        attr:class="inline-flex items-center justify-center h-12 px-6 rounded-lg border border-gray-300 bg-white text-gray-900 font-medium hover:bg-gray-50 transition-colors"
                    >
                        "Explore as Guest"
                    </A>
                </div>
            </div>
        </div>
    }
}
