use leptos::prelude::*;
use leptos_meta::Title;

use crate::cv::CV;

use super::certificates::Certificates;
use super::contact::ContactSection;
use super::profile::{About, Experience, Projects, Skills};
use super::quote::QuoteModal;

const STATS: &[(&str, &str, &str)] = &[
    ("🚀", "6+", "Apps Live"),
    ("⚡", "10x", "Faster Dev"),
    ("🎓", "8+", "Certificates"),
    ("✨", "100%", "On Time"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let (quote_open, set_quote_open) = signal(false);

    view! {
        <Title text="Portfolio" />
        <div class="w-full page-content">
            <section id="hero" class="flex flex-col items-center text-center gap-6 mt-12">
                <div class="inline-flex items-center gap-2 px-4 py-1 rounded-full border border-green/30 bg-green/10 text-green text-sm">
                    <span class="w-2 h-2 rounded-full bg-green"></span>
                    "Available for Hire"
                </div>
                <h1 class="text-4xl lg:text-5xl font-bold">
                    "Ship Your App " <span class="text-purple">"in Days, Not Months"</span>
                </h1>
                <p class="text-lg text-muted">
                    "Vibe Coding Expert | AI-Powered Development | React Native Specialist"
                </p>
                <p class="text-base max-w-2xl">{CV.personal.tagline}</p>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 w-full max-w-3xl">
                    {STATS
                        .iter()
                        .map(|(icon, number, label)| {
                            view! {
                                <div class="p-4 rounded-lg bg-brightBlack/30 border border-muted/30">
                                    <div class="text-2xl">{*icon}</div>
                                    <div class="text-2xl font-bold">{*number}</div>
                                    <div class="text-sm text-muted">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-col sm:flex-row gap-4">
                    <button
                        class="px-6 py-3 rounded-md font-medium bg-purple/20 hover:bg-purple/30 text-purple border border-purple/30 transition-all duration-200"
                        on:click=move |_| set_quote_open.set(true)
                    >
                        "🚀 Start Your Project"
                    </button>
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-md font-medium bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 transition-all duration-200"
                    >
                        "💬 Let's Talk"
                    </a>
                </div>
            </section>
            <About />
            <Skills />
            <Projects />
            <Experience />
            <Certificates />
            <ContactSection />
        </div>
        <QuoteModal is_open=quote_open on_close=move |_| set_quote_open.set(false) />
    }
}
