use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::components::toast::{ToastQueue, Toaster};
use crate::pages::sections::{use_scroll_to_top, ContactCards, WhatsAppForm};

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();
    let toasts = use_reducer(ToastQueue::default);

    html! {
        <div class="page page-offset">
            <Navigation />
            <section class="band page-section">
                <div class="section-heading">
                    <h1>{"Let's Create Something "}<span class="accent">{"Cinematic"}</span></h1>
                    <p class="lead">
                        {"Ready to showcase your property like never before? Get in touch with us today."}
                    </p>
                </div>
                <div class="contact-grid">
                    <ContactCards />
                    <WhatsAppForm toasts={toasts.clone()} />
                </div>
            </section>
            <Footer />
            <Toaster queue={toasts} />
        </div>
    }
}
