//! Card component for panel surfaces.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card class="bg-white/90">
///         <CardContent>
///             <p>"Content goes here"</p>
///         </CardContent>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-xl border border-gray-200 bg-white text-gray-900 shadow-sm {}",
        class
    );

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("p-6 {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
