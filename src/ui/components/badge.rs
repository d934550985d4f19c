//! Badge component for labels and tags.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Soft brand-tinted badge.
    #[default]
    Default,
    /// Outline badge.
    Outline,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-purple-100 text-[#6D28D9]",
            Self::Outline => "border border-gray-200 bg-white/80 text-gray-600",
        }
    }
}

/// Badge component for displaying short labels.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Outline>"Budget Planning"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center gap-1.5 rounded-full px-3 py-1 text-xs \
                        font-medium transition-colors";

    let classes = format!("{} {} {}", base_classes, variant.classes(), class);

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert!(BadgeVariant::Default.classes().contains("bg-purple-100"));
        assert!(BadgeVariant::Outline.classes().contains("border"));
    }
}
