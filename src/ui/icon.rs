use leptos::prelude::*;

/// Inline stroke icon (24x24 viewBox)
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icons::paths(name)
                .iter()
                .copied()
                .map(|d| view! { <path d=d /> })
                .collect_view()}
        </svg>
    }
}

/// Named icons and their path data
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const EYE: &str = "eye";
    pub const EYE_OFF: &str = "eye-off";
    pub const GITHUB: &str = "github";
    pub const GOOGLE: &str = "google";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const LOADER: &str = "loader";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const INFO: &str = "info";
    pub const DOCUMENT_TEXT: &str = "document-text";

    pub fn paths(name: &str) -> &'static [&'static str] {
        match name {
            ARROW_RIGHT => &["M5 12h14", "M12 5l7 7-7 7"],
            ARROW_LEFT => &["M19 12H5", "M12 19l-7-7 7-7"],
            EYE => &[
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z",
                "M12 9a3 3 0 100 6 3 3 0 000-6z",
            ],
            EYE_OFF => &[
                "M9.88 9.88a3 3 0 104.24 4.24",
                "M10.73 5.08A10.4 10.4 0 0112 5c7 0 10 7 10 7a13.2 13.2 0 01-1.67 2.68",
                "M6.61 6.61A13.5 13.5 0 002 12s3 7 10 7a9.7 9.7 0 005.39-1.61",
                "M2 2l20 20",
            ],
            GITHUB => &[
                "M15 22v-4a4.8 4.8 0 00-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 004 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            GOOGLE => &["M12 2a10 10 0 100 20 10 10 0 000-20z", "M8 12h8", "M12 8v8"],
            CHECK => &["M5 13l4 4L19 7"],
            X => &["M6 18L18 6", "M6 6l12 12"],
            LOADER => &["M21 12a9 9 0 11-6.22-8.56"],
            ALERT_CIRCLE => &["M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"],
            CHECK_CIRCLE => &["M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"],
            INFO => &["M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"],
            DOCUMENT_TEXT => &[
                "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.59a1 1 0 01.7.29l5.42 5.42a1 1 0 01.29.7V19a2 2 0 01-2 2z",
            ],
            _ => &[],
        }
    }
}
