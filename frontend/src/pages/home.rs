use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::pages::sections::{use_scroll_to_top, AboutPreview, CtaStrip, HeroSection, StatsSection};

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page">
            <Navigation />
            <HeroSection />
            <AboutPreview />
            <StatsSection />
            <CtaStrip />
            <Footer />
        </div>
    }
}
