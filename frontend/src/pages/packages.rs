use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::pages::sections::{use_scroll_to_top, PackagesSection};

#[function_component(Packages)]
pub fn packages() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page page-offset">
            <Navigation />
            <PackagesSection />
            <Footer />
        </div>
    }
}
