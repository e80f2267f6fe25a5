use leptos::{ev::SubmitEvent, prelude::*};

use crate::contact::{ContactField, ContactForm, SubmissionStatus, SubmissionTiming};
use crate::cv::CV;

use super::profile::SocialLinks;
use super::submit::FormHandle;

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-muted bg-background text-foreground placeholder-muted focus:outline-none focus:ring-2 focus:ring-cyan disabled:opacity-50";

/// Success / error banner shared by both forms.
#[component]
pub fn StatusBanner(
    #[prop(into)] status: Signal<SubmissionStatus>,
    success: &'static str,
    error: &'static str,
) -> impl IntoView {
    move || match status.get() {
        SubmissionStatus::Success => Some(view! {
            <div class="p-4 mb-4 rounded-md border border-green/30 bg-green/10 text-green">
                {success}
            </div>
        }
        .into_any()),
        SubmissionStatus::Error => Some(view! {
            <div class="p-4 mb-4 rounded-md border border-red/30 bg-red/10 text-red">
                {error}
            </div>
        }
        .into_any()),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
    }
}

#[component]
fn ContactInput(
    form: FormHandle<ContactForm>,
    field: ContactField,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = field.name();
    view! {
        <div class="mb-4">
            <label for=id class="block mb-1 font-medium">
                {label}
            </label>
            <input
                type=kind
                id=id
                name=id
                class=INPUT_CLASS
                placeholder=placeholder
                required
                prop:value=move || form.controller.with(|c| c.form().get(field).to_string())
                on:input=move |ev| form.set_field(field.name(), event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn InfoItem(icon: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center gap-x-3">
            <i class=icon></i>
            <div>
                <div class="text-sm text-muted">{label}</div>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    let personal = CV.personal;
    view! {
        <div class="flex flex-col gap-4 bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
            <h3 class="font-bold text-lg">"Contact Information"</h3>
            <InfoItem icon="extra-email" label="Email">
                <a href={format!("mailto:{}", personal.email)} class="hover:underline">
                    {personal.email}
                </a>
            </InfoItem>
            <InfoItem icon="extra-location" label="Location">
                <div>{personal.location}</div>
            </InfoItem>
            {personal
                .phone
                .map(|phone| {
                    view! {
                        <InfoItem icon="extra-phone" label="Phone">
                            <a href={format!("tel:{}", phone.replace(' ', ""))} class="hover:underline">
                                {phone}
                            </a>
                        </InfoItem>
                    }
                })}
            <div class="mt-auto">
                <h4 class="mb-2 font-medium">"Connect With Me"</h4>
                <SocialLinks size="text-xl" />
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = FormHandle::<ContactForm>::new(SubmissionTiming::CONTACT, None);
    let status = Signal::derive(move || form.status());

    view! {
        <section id="contact" class="w-full max-w-5xl mx-auto my-12">
            <h2 class="text-2xl font-bold text-center mb-2">"Get In Touch"</h2>
            <p class="text-center text-muted mb-8">
                "Let's work together! Feel free to reach out for collaborations or just a friendly chat."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <ContactDetails />
                <form
                    class="md:col-span-2 bg-brightBlack/30 p-6 rounded-lg border border-muted/30"
                    on:submit=move |ev: SubmitEvent| {
                        ev.prevent_default();
                        form.submit();
                    }
                >
                    <StatusBanner
                        status
                        success="✅ Message sent successfully! I'll get back to you soon."
                        error="❌ Failed to send message. Please try again or email me directly."
                    />
                    <fieldset prop:disabled=move || form.is_submitting()>
                        <ContactInput
                            form
                            field=ContactField::Name
                            label="Name"
                            kind="text"
                            placeholder="Your Name"
                        />
                        <ContactInput
                            form
                            field=ContactField::Email
                            label="Email"
                            kind="email"
                            placeholder="your.email@example.com"
                        />
                        <ContactInput
                            form
                            field=ContactField::Subject
                            label="Subject"
                            kind="text"
                            placeholder="Project Inquiry"
                        />
                        <div class="mb-4">
                            <label for="message" class="block mb-1 font-medium">
                                "Message"
                            </label>
                            <textarea
                                id="message"
                                name={ContactField::Message.name()}
                                rows="5"
                                class=INPUT_CLASS
                                placeholder="Your message here..."
                                required
                                prop:value=move || {
                                    form.controller.with(|c| c.form().message.clone())
                                }
                                on:input=move |ev| {
                                    form.set_field(ContactField::Message.name(), event_target_value(&ev))
                                }
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full px-6 py-3 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 font-medium transition-all duration-200 disabled:opacity-50"
                        >
                            {move || {
                                if form.is_submitting() { "Sending... ⏳" } else { "Send Message 🚀" }
                            }}
                        </button>
                    </fieldset>
                </form>
            </div>
        </section>
    }
}
