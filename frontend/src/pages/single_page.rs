use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navigation::{Navigation, Section};
use crate::components::toast::{ToastQueue, Toaster};
use crate::pages::sections::{
    use_scroll_to_top, AboutPreview, AboutSection, ContactCards, CtaStrip, HeroSection,
    MeetingScheduler, PackagesSection, ShowcaseSection, StatsSection,
};

/// Every section on one scrolling page, with the meeting scheduler in place
/// of the WhatsApp form.
#[function_component(SinglePage)]
pub fn single_page() -> Html {
    use_scroll_to_top();
    let toasts = use_reducer(ToastQueue::default);

    html! {
        <div class="page">
            <Navigation single_page={true} />
            <div id={Section::Home.id()}>
                <HeroSection single_page={true} />
                <AboutPreview />
                <StatsSection />
                <CtaStrip single_page={true} />
            </div>
            <ShowcaseSection single_page={true} />
            <PackagesSection single_page={true} />
            <AboutSection single_page={true} />
            <section id={Section::Contact.id()} class="band band-card page-section">
                <div class="section-heading">
                    <h1>{"Let's Create Something "}<span class="accent">{"Cinematic"}</span></h1>
                    <p class="lead">
                        {"Ready to showcase your property like never before? Get in touch with us today."}
                    </p>
                </div>
                <div class="contact-grid">
                    <ContactCards />
                    <MeetingScheduler toasts={toasts.clone()} />
                </div>
            </section>
            <Footer />
            <Toaster queue={toasts} />
        </div>
    }
}
