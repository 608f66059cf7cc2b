//! Static footer destinations (terms, privacy, help)

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::routes::{self, InfoTopic};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::LegalLinks;

#[component]
pub fn InfoPage(topic: InfoTopic) -> impl IntoView {
    view! {
        <Title text=format!("{} | Nuke Platform", topic.title()) />

        <div class="min-h-screen flex flex-col items-center p-4 sm:p-8">
            <article class="w-full max-w-2xl">
                <A
                    href=routes::AUTH
                    attr:class="inline-flex items-center text-sm text-blue-600 hover:underline mb-6"
                >
                    <Icon name=icons::ARROW_LEFT class="mr-1 w-4 h-4" />
                    "Back to sign in"
                </A>

                <h1 class="text-3xl font-bold mb-6">{topic.title()}</h1>
                {topic
                    .paragraphs()
                    .iter()
                    .map(|text| view! { <p class="text-gray-600 mb-4">{*text}</p> })
                    .collect_view()}

                <div class="mt-12 text-center text-sm text-gray-500">
                    <LegalLinks />
                </div>
            </article>
        </div>
    }
}
