use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::pages::sections::{use_scroll_to_top, AboutSection};

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page page-offset">
            <Navigation />
            <AboutSection />
            <Footer />
        </div>
    }
}
