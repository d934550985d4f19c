//! Input component for text fields.

use leptos::prelude::*;

/// Single-line text input component.
///
/// The input is presentational: it owns no value of its own. A parent makes
/// it a controlled field by passing an Alpine binding name via `model`
/// (emitted as `x-model`) and, optionally, a keydown expression (emitted as
/// `x-on:keydown`).
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         input_type="text"
///         placeholder="Ask FinBud anything about finance..."
///         model="message"
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, email, password, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Alpine state binding emitted as `x-model`.
    #[prop(optional)]
    model: Option<&'static str>,
    /// Alpine expression evaluated on keydown.
    #[prop(optional)]
    on_keydown: Option<&'static str>,
    /// Accessible label when no visible label is present.
    #[prop(optional)]
    aria_label: Option<&'static str>,
) -> impl IntoView {
    let base_classes = "flex h-11 w-full rounded-lg border border-gray-200 bg-white px-4 py-2 \
                        text-sm text-gray-900 placeholder:text-gray-400 \
                        focus-visible:outline-none focus-visible:ring-2 \
                        focus-visible:ring-[#6D28D9] focus-visible:ring-offset-2";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <input
            type=input_type
            class=classes
            placeholder=placeholder
            autocomplete="off"
            aria-label=aria_label
            x-model=model
            x-on:keydown=on_keydown
        />
    }
}
