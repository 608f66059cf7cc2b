//! Layout pieces shared by the auth and password reset screens

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routes::InfoTopic;

/// Product name shown in headings and titles
pub const BRAND: &str = "NUKE";
pub const PRODUCT_TAGLINE: &str = "The Complete Vehicle Management Platform";

/// Gradient panel on the left (top on mobile) of the auth screens
#[component]
pub fn BrandingPanel(
    /// Line under the main heading
    message: &'static str,
    /// Show the social proof line and decoration
    #[prop(default = false)]
    full: bool,
) -> impl IntoView {
    view! {
        <div class="brand-gradient text-white p-8 flex flex-col justify-center items-center md:w-2/5">
            <div class="max-w-md mx-auto text-center">
                <div class="mb-6 text-4xl font-bold">{BRAND}</div>
                <h1 class="text-3xl font-bold mb-6">{PRODUCT_TAGLINE}</h1>
                <p class="text-xl mb-8">{message}</p>
                {full.then(|| view! {
                    <div class="text-sm opacity-80">
                        "Joined by 12,000+ vehicle owners & businesses"
                    </div>
                    <div class="mt-12 hidden md:block" aria-hidden="true">
                        <div class="h-32 w-32 mx-auto bg-white/10 rounded-full"></div>
                    </div>
                })}
            </div>
        </div>
    }
}

/// Terms · Privacy · Help footer links
#[component]
pub fn LegalLinks() -> impl IntoView {
    let links = InfoTopic::FOOTER
        .into_iter()
        .enumerate()
        .map(|(i, topic)| {
            view! {
                {(i > 0).then_some(" · ")}
                <A href=topic.path() attr:class="hover:underline">{topic.link_label()}</A>
            }
        })
        .collect_view();

    view! { <div>{links}</div> }
}
