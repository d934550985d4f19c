//! Button component with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (brand purple).
    #[default]
    Primary,
    /// Outline button.
    Outline,
    /// Subtle ghost button.
    Ghost,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-[#6D28D9] text-white shadow-sm hover:bg-[#5B21B6]",
            Self::Outline => "border border-gray-300 bg-transparent text-gray-700 hover:bg-gray-50",
            Self::Ghost => "bg-transparent text-gray-700 hover:bg-gray-100",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
    /// Icon-only button.
    Icon,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-12 px-6 text-base",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// ShadCN-style button component.
///
/// Interaction wiring is forwarded to the parent: an Alpine expression passed
/// via `on_click` is emitted as an `x-on:click` directive on the element.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Outline size=ButtonSize::Md>
///         "Login"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Accessible label for icon-only buttons.
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Alpine expression evaluated on click.
    #[prop(optional)]
    on_click: Option<&'static str>,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 rounded-lg font-medium \
                        transition-colors duration-200 focus-visible:outline-none \
                        focus-visible:ring-2 focus-visible:ring-[#6D28D9] \
                        focus-visible:ring-offset-2";

    let classes = format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    );

    view! {
        <button type="button" class=classes aria-label=aria_label x-on:click=on_click>
            {children()}
        </button>
    }
}
