use leptos::prelude::*;

use crate::cv::{Certificate, CV};

use super::overlay::Overlay;

#[component]
fn CertificateCard(cert: Certificate, on_open: Callback<Certificate>) -> impl IntoView {
    view! {
        <button
            class="flex flex-col text-left rounded-lg overflow-hidden bg-brightBlack/30 border border-muted/30 hover:border-purple/50 transition-all duration-200"
            on:click=move |_| on_open.run(cert)
        >
            <div class="relative w-full aspect-video bg-brightBlack/50">
                <img
                    src=cert.image
                    alt=cert.title
                    loading="lazy"
                    class="w-full h-full object-cover"
                />
                <div class="absolute inset-0 flex items-center justify-center opacity-0 hover:opacity-100 bg-black/50 transition-opacity">
                    "🔍 View Certificate"
                </div>
            </div>
            <div class="p-4 space-y-1">
                <h3 class="font-bold">{cert.title}</h3>
                <p class="text-sm">"🏛️ " {cert.issuer}</p>
                <p class="text-sm text-muted">"📅 " {cert.date}</p>
            </div>
        </button>
    }
}

#[component]
fn CertificateViewer(cert: Certificate, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Overlay on_close width="max-w-4xl">
            <h3 class="text-xl font-bold pr-8">{cert.title}</h3>
            <p>"🏛️ " {cert.issuer}</p>
            <p class="text-muted mb-4">"📅 " {cert.date}</p>
            <div class="w-full">
                <img src=cert.image alt=cert.title class="w-full h-auto rounded-md" />
            </div>
            {cert
                .credential_url
                .map(|url| {
                    view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-block mt-4 text-cyan hover:underline"
                        >
                            "🔗 Verify Credential"
                        </a>
                    }
                })}
        </Overlay>
    }
}

#[component]
pub fn Certificates() -> impl IntoView {
    // one certificate at most; the viewer is unmounted (and scroll unlocked) when cleared
    let selected = RwSignal::new(None::<Certificate>);
    let on_open = Callback::new(move |cert: Certificate| selected.set(Some(cert)));
    let on_close = Callback::new(move |_: ()| selected.set(None));

    view! {
        <section id="certificates" class="w-full max-w-5xl mx-auto my-12">
            <h2 class="text-2xl font-bold my-6 text-center">"Certificates"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                {CV
                    .certificates
                    .iter()
                    .map(|cert| view! { <CertificateCard cert={*cert} on_open /> })
                    .collect_view()}
            </div>
            {move || {
                selected.get().map(|cert| view! { <CertificateViewer cert on_close /> })
            }}
        </section>
    }
}
