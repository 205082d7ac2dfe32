use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::pages::sections::{use_scroll_to_top, ShowcaseSection};

#[function_component(Showcase)]
pub fn showcase() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page page-offset">
            <Navigation />
            <ShowcaseSection />
            <Footer />
        </div>
    }
}
