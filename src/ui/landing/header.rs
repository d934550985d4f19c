//! Fixed navigation header.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonSize, ButtonVariant, MenuIcon, WalletIcon};

/// Navigation labels, in display order.
pub const MENU_ITEMS: [&str; 4] = ["Overview", "Agents", "Insights", "Pricing"];

/// In-page anchor for a menu label (`"Overview"` -> `"#overview"`).
#[must_use]
pub fn menu_anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

/// Fixed top navigation bar with logo, menu links and auth actions.
///
/// Stateless: the menu items and both auth buttons are hard-coded, and no
/// behavior is attached to any of them.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur-md border-b border-gray-200/50 shadow-soft animate-slide-down">
            <nav class="container mx-auto px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-2 cursor-pointer">
                        <WalletIcon class="h-6 w-6 text-[#6D28D9]" />
                        <span class="text-xl font-bold bg-gradient-to-r from-[#6D28D9] to-[#9333EA] bg-clip-text text-transparent">
                            "FinBud"
                        </span>
                    </div>

                    <div class="hidden md:flex items-center gap-8">
                        {MENU_ITEMS
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=menu_anchor(item)
                                        class="text-sm font-medium text-gray-700 hover:text-[#6D28D9] transition-colors duration-200"
                                    >
                                        {item}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center gap-3">
                        <Button
                            variant=ButtonVariant::Outline
                            class="hidden sm:flex hover:border-[#6D28D9] hover:text-[#6D28D9]"
                        >
                            "Login"
                        </Button>
                        <Button variant=ButtonVariant::Primary class="hidden sm:flex">
                            "Sign Up"
                        </Button>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            class="md:hidden"
                            aria_label="Open menu"
                        >
                            <MenuIcon class="h-5 w-5" />
                        </Button>
                    </div>
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_anchor_lowercases_label() {
        assert_eq!(menu_anchor("Overview"), "#overview");
        assert_eq!(menu_anchor("Pricing"), "#pricing");
    }

    #[test]
    fn test_menu_items_order() {
        assert_eq!(MENU_ITEMS, ["Overview", "Agents", "Insights", "Pricing"]);
    }

    #[test]
    fn test_header_renders_all_menu_links_in_order() {
        let html = view! { <Header/> }.to_html();

        let mut last = 0;
        for item in MENU_ITEMS {
            let anchor = format!("href=\"{}\"", menu_anchor(item));
            let pos = html.find(&anchor).unwrap_or_else(|| {
                panic!("missing menu anchor for {item}");
            });
            assert!(pos > last, "menu link {item} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_header_renders_brand_and_auth_actions() {
        let html = view! { <Header/> }.to_html();

        assert!(html.contains("FinBud"));
        assert!(html.contains("Login"));
        assert!(html.contains("Sign Up"));
    }
}
