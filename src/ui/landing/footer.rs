//! Page footer with the copyright line and legal links.

use leptos::prelude::*;

pub const COPYRIGHT: &str = "© FinBud 2025. All rights reserved.";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 bg-white/50 py-8 px-4 sm:px-6 lg:px-8 mt-20 animate-fade anim-delay-1200">
            <div class="container mx-auto max-w-6xl">
                <div class="flex flex-col sm:flex-row items-center justify-between gap-4">
                    <p class="text-sm text-gray-600">{COPYRIGHT}</p>
                    <div class="flex items-center gap-6">
                        <a
                            href="#terms"
                            class="text-sm text-gray-600 hover:text-[#6D28D9] transition-colors duration-200"
                        >
                            "Terms"
                        </a>
                        <span class="text-gray-300">"|"</span>
                        <a
                            href="#privacy"
                            class="text-sm text-gray-600 hover:text-[#6D28D9] transition-colors duration-200"
                        >
                            "Privacy"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
