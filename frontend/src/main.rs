use yew::prelude::*;
use yew_router::prelude::*;
mod carousel;
mod components {
    pub mod footer;
    pub mod navigation;
    pub mod toast;
    pub mod video_player;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod packages;
    pub mod sections;
    pub mod showcase;
    pub mod single_page;
}
mod utils {
    pub mod api;
}
mod config;
mod content;
mod leads;
use pages::{
    about::About, contact::Contact, home::Home, packages::Packages, showcase::Showcase,
    single_page::SinglePage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/showcase")]
    Showcase,
    #[at("/packages")]
    Packages,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/one-page")]
    OnePage,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    log::debug!("Rendering route {:?}", route);
    match route {
        Route::Home => html! { <Home /> },
        Route::Showcase => html! { <Showcase /> },
        Route::Packages => html! { <Packages /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        Route::OnePage => html! { <SinglePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p class="muted">{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="btn btn-hero">{"Return to Home"}</Link<Route>>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    yew::Renderer::<App>::new().render();
}
