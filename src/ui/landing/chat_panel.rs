//! Chat panel: the single interactive element on the page.
//!
//! The panel owns one piece of client state, the draft message. Alpine keeps
//! the input controlled through `x-model`, and both submit gestures (Enter in
//! the input, clicking the send button) reset the draft to the empty string.
//! Nothing is transmitted anywhere.

use leptos::prelude::*;

use crate::ui::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, Input, SendIcon,
};

/// Placeholder shown in the empty input.
pub const PLACEHOLDER: &str = "Ask FinBud anything about finance...";

/// Suggested prompts rendered as presentational chips below the input.
pub const QUICK_TOPICS: [&str; 4] = [
    "Portfolio Analysis",
    "Stock Prediction",
    "Budget Planning",
    "Risk Assessment",
];

// Alpine wiring for the draft state. The scope lives on the panel root so the
// input and the send button share it.
const DRAFT_SCOPE: &str = "{ message: '' }";
const CLEAR_ON_ENTER: &str = "if ($event.key === 'Enter') message = ''";
const CLEAR_ON_SEND: &str = "message = ''";

#[component]
pub fn ChatPanel() -> impl IntoView {
    view! {
        <section id="try-finbud" class="py-6 px-4 sm:px-6 lg:px-8 animate-rise anim-delay-800">
            <div class="container mx-auto max-w-3xl">
                <Card class="bg-white/90 backdrop-blur-sm border-gray-200 shadow-glass">
                    <CardContent class="sm:p-8">
                        <div x-data=DRAFT_SCOPE class="flex items-center gap-3">
                            <Input
                                placeholder=PLACEHOLDER
                                class="flex-1 bg-white/80"
                                model="message"
                                on_keydown=CLEAR_ON_ENTER
                                aria_label="Chat message"
                            />
                            <Button
                                variant=ButtonVariant::Primary
                                size=ButtonSize::Icon
                                class="shrink-0 bg-gradient-to-r from-[#6D28D9] to-[#9333EA] hover:opacity-90"
                                aria_label="Send message"
                                on_click=CLEAR_ON_SEND
                            >
                                <SendIcon class="h-5 w-5" />
                            </Button>
                        </div>

                        <div class="mt-4 flex flex-wrap items-center justify-center gap-2">
                            {QUICK_TOPICS
                                .into_iter()
                                .map(|topic| {
                                    view! {
                                        <Badge variant=BadgeVariant::Outline>{topic}</Badge>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </CardContent>
                </Card>
            </div>
        </section>
    }
}
