use leptos::{ev, prelude::*};

use crate::contact::{QuoteField, QuoteForm, SubmissionTiming};

use super::contact::StatusBanner;
use super::overlay::Overlay;
use super::submit::FormHandle;

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-muted bg-background text-foreground placeholder-muted focus:outline-none focus:ring-2 focus:ring-purple disabled:opacity-50";

const CATEGORIES: &[(&str, &str)] = &[
    ("E-Commerce / Shopping", "🛒 E-Commerce / Shopping"),
    ("Social Media / Community", "👥 Social Media / Community"),
    ("Education / Learning", "📚 Education / Learning"),
    ("Health & Fitness", "💪 Health & Fitness"),
    ("Entertainment / Media", "🎬 Entertainment / Media"),
    ("Business / Productivity", "💼 Business / Productivity"),
    ("Food & Restaurant", "🍔 Food & Restaurant"),
    ("Travel & Tourism", "✈️ Travel & Tourism"),
    ("Finance / Fintech", "💰 Finance / Fintech"),
    ("Other", "🔧 Other"),
];

const APP_TYPES: &[&str] = &[
    "Native Mobile App (React Native)",
    "Progressive Web App (PWA)",
    "TWA (Trusted Web Activity)",
    "Web Application",
];

const PLATFORMS: &[&str] = &["iOS App Store", "Google Play Store", "Web Hosting"];

const DESIGN_PREFERENCES: &[&str] = &[
    "I have a Figma design",
    "I need design from scratch",
    "I have reference apps",
    "Simple/Minimal design",
];

const AUTHENTICATION: &[&str] = &[
    "Email/Password",
    "Social Login (Google, Apple, etc.)",
    "Phone Number (OTP)",
    "No authentication needed",
];

const BACKENDS: &[&str] = &[
    "Firebase/Supabase",
    "Custom Backend",
    "No backend needed",
    "Not sure yet",
];

const PAYMENT_OPTIONS: &[(&str, &str)] = &[
    ("Yes, needed", "Yes, needed"),
    ("No, not needed", "No, not needed"),
    ("Maybe later", "Maybe later"),
];

const PUSH_OPTIONS: &[(&str, &str)] = &[
    ("Yes, needed", "Yes, needed"),
    ("No, not needed", "No, not needed"),
];

const TIMELINES: &[(&str, &str)] = &[
    ("ASAP (1-3 days)", "⚡ ASAP (1-3 days)"),
    ("1 week", "📅 1 week"),
    ("2-4 weeks", "📆 2-4 weeks"),
    ("Flexible", "🕐 Flexible"),
];

const BUDGETS: &[(&str, &str)] = &[
    ("Under $500", "💵 Under $500"),
    ("$500 - $1,000", "💰 $500 - $1,000"),
    ("$1,000 - $3,000", "💸 $1,000 - $3,000"),
    ("$3,000 - $5,000", "💎 $3,000 - $5,000"),
    ("$5,000+", "🏆 $5,000+"),
    ("Not sure / Need estimate", "❓ Not sure / Need estimate"),
];

fn scalar(form: FormHandle<QuoteForm>, field: QuoteField) -> String {
    form.controller
        .with(|c| c.form().get(field).unwrap_or_default().to_string())
}

#[component]
fn TextInput(
    form: FormHandle<QuoteForm>,
    field: QuoteField,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = field.name();
    view! {
        <div class="flex-1 mb-4">
            <label for=id class="block mb-1 font-medium">
                {label}
            </label>
            <input
                type=kind
                id=id
                name=id
                class=INPUT_CLASS
                placeholder=placeholder
                required=required
                prop:value=move || scalar(form, field)
                on:input=move |ev| form.set_field(field.name(), event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn TextArea(
    form: FormHandle<QuoteForm>,
    field: QuoteField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = field.name();
    view! {
        <div class="mb-4">
            <label for=id class="block mb-1 font-medium">
                {label}
            </label>
            <textarea
                id=id
                name=id
                rows="4"
                class=INPUT_CLASS
                placeholder=placeholder
                required=required
                prop:value=move || scalar(form, field)
                on:input=move |ev| form.set_field(field.name(), event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
fn SelectInput(
    form: FormHandle<QuoteForm>,
    field: QuoteField,
    label: &'static str,
    prompt: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let id = field.name();
    view! {
        <div class="flex-1 mb-4">
            <label for=id class="block mb-1 font-medium">
                {label}
            </label>
            <select
                id=id
                name=id
                class=INPUT_CLASS
                required
                prop:value=move || scalar(form, field)
                on:change=move |ev| form.set_field(field.name(), event_target_value(&ev))
            >
                <option value="">{prompt}</option>
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value={*value}>{*text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn RadioGroup(
    form: FormHandle<QuoteForm>,
    field: QuoteField,
    label: &'static str,
    options: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <span class="block mb-1 font-medium">{label}</span>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-2">
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <label class="flex items-center gap-2 p-2 rounded-md border border-muted/30 cursor-pointer">
                                <input
                                    type="radio"
                                    name={field.name()}
                                    value=option
                                    required
                                    prop:checked=move || {
                                        form.controller.with(|c| c.form().get(field) == Some(option))
                                    }
                                    on:change=move |_| form.set_field(field.name(), option.to_string())
                                />
                                <span>{option}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PlatformChecklist(form: FormHandle<QuoteForm>) -> impl IntoView {
    let field = QuoteField::Platforms;
    view! {
        <div class="mb-4">
            <span class="block mb-1 font-medium">"Publishing Platforms *"</span>
            <div class="flex flex-wrap gap-2">
                {PLATFORMS
                    .iter()
                    .map(|platform| {
                        let platform = *platform;
                        view! {
                            <label class="flex items-center gap-2 p-2 rounded-md border border-muted/30 cursor-pointer">
                                <input
                                    type="checkbox"
                                    name={field.name()}
                                    value=platform
                                    prop:checked=move || {
                                        form.controller.with(|c| c.form().has_platform(platform))
                                    }
                                    on:change=move |ev| {
                                        form.toggle_list_field(
                                            field.name(),
                                            platform,
                                            event_target_checked(&ev),
                                        )
                                    }
                                />
                                <span>{platform}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="mb-6 pb-2 border-b border-muted/30">
            <h3 class="text-lg font-bold mb-4 text-purple">{title}</h3>
            {children()}
        </div>
    }
}

/// Quote questionnaire overlay. Only mounted while `is_open`, so closing discards its state.
#[component]
pub fn QuoteModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <QuoteDialog on_close />
        </Show>
    }
}

#[component]
fn QuoteDialog(on_close: Callback<()>) -> impl IntoView {
    let form = FormHandle::<QuoteForm>::new(SubmissionTiming::QUOTE, Some(on_close));
    let status = Signal::derive(move || form.status());

    view! {
        <Overlay on_close>
            <div class="mb-6 text-center">
                <h2 class="text-2xl font-bold">"🚀 Start Your Project"</h2>
                <p class="text-muted">
                    "Fill out this form to get a detailed quote for your app project"
                </p>
            </div>
            <form on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                form.submit();
            }>
                <fieldset prop:disabled=move || form.is_submitting()>
                    <Section title="📋 Basic Information">
                        <div class="flex flex-col sm:flex-row gap-4">
                            <TextInput
                                form
                                field=QuoteField::FullName
                                label="Full Name *"
                                kind="text"
                                placeholder="John Doe"
                                required=true
                            />
                            <TextInput
                                form
                                field=QuoteField::Email
                                label="Email *"
                                kind="email"
                                placeholder="john@example.com"
                                required=true
                            />
                        </div>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <TextInput
                                form
                                field=QuoteField::Phone
                                label="Phone Number"
                                kind="tel"
                                placeholder="+1 (555) 000-0000"
                            />
                            <TextInput
                                form
                                field=QuoteField::Company
                                label="Company Name"
                                kind="text"
                                placeholder="Your Company Inc."
                            />
                        </div>
                    </Section>
                    <Section title="💡 Project Details">
                        <SelectInput
                            form
                            field=QuoteField::AppCategory
                            label="App Category *"
                            prompt="Select a category"
                            options=CATEGORIES
                        />
                        <RadioGroup
                            form
                            field=QuoteField::AppType
                            label="App Type *"
                            options=APP_TYPES
                        />
                        <PlatformChecklist form />
                    </Section>
                    <Section title="🎨 Design & Features">
                        <RadioGroup
                            form
                            field=QuoteField::DesignPreference
                            label="Design Preference *"
                            options=DESIGN_PREFERENCES
                        />
                        <TextArea
                            form
                            field=QuoteField::KeyFeatures
                            label="Key Features *"
                            placeholder="List the main features you need (e.g., user profiles, chat, maps...)"
                            required=true
                        />
                        <RadioGroup
                            form
                            field=QuoteField::Authentication
                            label="User Authentication *"
                            options=AUTHENTICATION
                        />
                    </Section>
                    <Section title="⚙️ Technical Requirements">
                        <RadioGroup
                            form
                            field=QuoteField::Backend
                            label="Backend/Database *"
                            options=BACKENDS
                        />
                        <div class="flex flex-col sm:flex-row gap-4">
                            <SelectInput
                                form
                                field=QuoteField::PaymentIntegration
                                label="Payment Integration *"
                                prompt="Select option"
                                options=PAYMENT_OPTIONS
                            />
                            <SelectInput
                                form
                                field=QuoteField::PushNotifications
                                label="Push Notifications *"
                                prompt="Select option"
                                options=PUSH_OPTIONS
                            />
                        </div>
                    </Section>
                    <Section title="📅 Timeline & Budget">
                        <div class="flex flex-col sm:flex-row gap-4">
                            <SelectInput
                                form
                                field=QuoteField::Timeline
                                label="Desired Timeline *"
                                prompt="Select timeline"
                                options=TIMELINES
                            />
                            <SelectInput
                                form
                                field=QuoteField::Budget
                                label="Budget Range *"
                                prompt="Select budget range"
                                options=BUDGETS
                            />
                        </div>
                        <TextArea
                            form
                            field=QuoteField::AdditionalDetails
                            label="Additional Details"
                            placeholder="Any other information, special requirements, or questions you have..."
                        />
                    </Section>
                    <StatusBanner
                        status
                        success="✅ Quote request sent successfully! I'll get back to you within 24 hours."
                        error="❌ Failed to send request. Please try again or email me directly."
                    />
                    <button
                        type="submit"
                        class="w-full px-6 py-3 bg-purple/20 hover:bg-purple/30 text-purple rounded-md border border-purple/30 font-medium transition-all duration-200 disabled:opacity-50"
                    >
                        {move || {
                            if form.is_submitting() { "⏳ Sending..." } else { "🚀 Get Your Quote" }
                        }}
                    </button>
                </fieldset>
            </form>
        </Overlay>
    }
}
