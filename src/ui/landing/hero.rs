//! Hero section with the product introduction.

use leptos::prelude::*;

use crate::ui::components::{Badge, Button, ButtonSize, ButtonVariant, SparklesIcon};

/// Static introductory section. Carries the `overview` anchor targeted by the
/// first menu item.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="overview" class="pt-32 pb-10 px-4 sm:px-6 lg:px-8 animate-rise anim-delay-200">
            <div class="container mx-auto max-w-3xl text-center">
                <Badge class="mb-6">
                    <SparklesIcon class="h-3.5 w-3.5" />
                    "AI-powered financial guidance"
                </Badge>

                <h1 class="text-4xl sm:text-5xl font-bold tracking-tight text-gray-900">
                    "Make smarter money moves with "
                    <span class="bg-gradient-to-r from-[#6D28D9] to-[#9333EA] bg-clip-text text-transparent">
                        "FinBud"
                    </span>
                </h1>

                <p class="mt-6 text-lg leading-relaxed text-gray-600">
                    "Your personal AI financial assistant. Ask about markets, budgets
                    and risk in plain language and get clear, useful answers in
                    seconds."
                </p>

                <div class="mt-8 flex flex-col sm:flex-row items-center justify-center gap-3">
                    <a href="#pricing">
                        <Button variant=ButtonVariant::Primary size=ButtonSize::Lg>
                            "Get Started"
                        </Button>
                    </a>
                    <a href="#try-finbud">
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Lg>
                            "Ask FinBud"
                        </Button>
                    </a>
                </div>
            </div>
        </section>
    }
}
