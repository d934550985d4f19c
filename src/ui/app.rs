//! Main application component and page rendering.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonVariant};
use crate::ui::landing::{ChatPanel, Footer, Header, Hero};

/// Document shell shared by every rendered page.
///
/// Tailwind and Alpine load from pinned CDN builds; the entrance animations
/// live in the first-party stylesheet under `/static`.
#[component]
fn Shell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="FinBud is your AI-powered financial assistant for markets, budgets and risk."/>

                <title>{title}</title>

                <script src="https://cdn.tailwindcss.com"></script>
                <script defer src="https://cdn.jsdelivr.net/npm/alpinejs@3.15.0/dist/cdn.min.js"></script>

                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen text-gray-900 antialiased">
                {children()}
            </body>
        </html>
    }
}

/// Main application component.
///
/// Composes the landing page top to bottom: header, hero, chat panel, footer.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Shell title="FinBud - AI Financial Assistant">
            <div class="min-h-screen bg-gradient-to-br from-white via-purple-50/30 to-blue-50/30">
                <Header/>
                <main>
                    <Hero/>
                    <ChatPanel/>
                </main>
                <Footer/>
            </div>
        </Shell>
    }
}

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Shell title="FinBud - Page Not Found">
            <div class="min-h-screen bg-gradient-to-br from-white via-purple-50/30 to-blue-50/30 flex flex-col items-center justify-center">
                <h1 class="text-4xl font-bold mb-4">"404"</h1>
                <p class="text-gray-500 mb-6">"Page not found"</p>
                <a href="/">
                    <Button variant=ButtonVariant::Primary>
                        "Go Home"
                    </Button>
                </a>
            </div>
        </Shell>
    }
}

/// Renders the landing page as a complete HTML document.
pub fn render_landing() -> String {
    view! { <App/> }.to_html()
}

/// Renders the 404 page as a complete HTML document.
pub fn render_not_found() -> String {
    view! { <NotFoundPage/> }.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_compose_in_order() {
        let html = render_landing();

        let header = html.find("<header").unwrap();
        let hero = html.find("id=\"overview\"").unwrap();
        let panel = html.find("id=\"try-finbud\"").unwrap();
        let footer = html.find("<footer").unwrap();

        assert!(header < hero);
        assert!(hero < panel);
        assert!(panel < footer);

        // Each section appears exactly once
        assert_eq!(html.matches("<header").count(), 1);
        assert_eq!(html.matches("id=\"overview\"").count(), 1);
        assert_eq!(html.matches("id=\"try-finbud\"").count(), 1);
        assert_eq!(html.matches("<footer").count(), 1);
    }

    #[test]
    fn test_document_shell() {
        let html = render_landing();

        assert!(html.to_lowercase().starts_with("<!doctype html>"));
        assert!(html.contains("https://cdn.tailwindcss.com"));
        assert!(html.contains("alpinejs@3.15.0"));
        assert!(html.contains("/static/app.css"));
    }

    #[test]
    fn test_not_found_page() {
        let html = render_not_found();

        assert!(html.contains("404"));
        assert!(html.contains("Page not found"));
        assert!(html.contains("href=\"/\""));
    }
}
