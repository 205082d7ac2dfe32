use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content;
use crate::Route;

/// Page sections shared by both site variants.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    Showcase,
    Packages,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Showcase,
        Section::Packages,
        Section::About,
        Section::Contact,
    ];

    /// Element id of the section in the single-page layout.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Showcase => "showcase",
            Section::Packages => "packages",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Showcase => "Showcase",
            Section::Packages => "Packages",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Section::Home => Route::Home,
            Section::Showcase => Route::Showcase,
            Section::Packages => Route::Packages,
            Section::About => Route::About,
            Section::Contact => Route::Contact,
        }
    }

    pub fn for_route(route: &Route) -> Option<Section> {
        match route {
            Route::Home => Some(Section::Home),
            Route::Showcase => Some(Section::Showcase),
            Route::Packages => Some(Section::Packages),
            Route::About => Some(Section::About),
            Route::Contact => Some(Section::Contact),
            Route::OnePage | Route::NotFound => None,
        }
    }
}

/// Line below the fixed header that decides which section is current.
pub const SCROLL_SPY_OFFSET: f64 = 100.0;
/// Height of the fixed header; scrolled-to sections land just below it.
pub const HEADER_OFFSET: f64 = 80.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

/// First section whose `[top, top + height)` contains `scroll_y + 100`.
/// `None` between sections; the caller keeps the previous answer then.
pub fn section_at(scroll_y: f64, sections: &[SectionBounds]) -> Option<Section> {
    let probe = scroll_y + SCROLL_SPY_OFFSET;
    sections
        .iter()
        .find(|b| probe >= b.top && probe < b.top + b.height)
        .map(|b| b.section)
}

pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - HEADER_OFFSET).max(0.0)
}

fn section_element(section: Section) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn measure_sections() -> Vec<SectionBounds> {
    Section::ALL
        .iter()
        .filter_map(|&section| {
            let el = section_element(section)?;
            Some(SectionBounds {
                section,
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

/// Smooth scrolling comes from `scroll-behavior: smooth` on the root element.
pub fn scroll_to_section(section: Section) {
    let (Some(window), Some(el)) = (web_sys::window(), section_element(section)) else {
        return;
    };
    window.scroll_to_with_x_and_y(0.0, scroll_target(el.offset_top() as f64));
}

const NAV_CSS: &str = r#"
    .site-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: rgba(10, 10, 10, 0.8);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid var(--border);
    }
    .site-nav-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
        height: 80px;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .site-nav-logo img { height: 48px; width: auto; }
    .site-nav-links { display: none; gap: 2rem; }
    .site-nav-link {
        position: relative;
        font-size: 0.875rem;
        font-weight: 500;
        color: var(--foreground);
        text-decoration: none;
        transition: color 0.3s;
    }
    .site-nav-link:hover, .site-nav-link.active { color: var(--primary); }
    .site-nav-link::after {
        content: "";
        position: absolute;
        left: 0;
        bottom: -4px;
        width: 0;
        height: 2px;
        background: var(--primary);
        transition: width 0.5s ease-out;
    }
    .site-nav-link:hover::after, .site-nav-link.active::after { width: 100%; }
    .site-nav-toggle {
        background: none;
        border: none;
        color: var(--foreground);
        font-size: 1.5rem;
        cursor: pointer;
    }
    .site-nav-mobile {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding: 1rem;
        border-top: 1px solid var(--border);
    }
    @media (min-width: 768px) {
        .site-nav-links { display: flex; }
        .site-nav-toggle, .site-nav-mobile { display: none; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    /// Anchor links with scroll-spy instead of router links.
    #[prop_or_default]
    pub single_page: bool,
}

#[function_component]
pub fn Navigation(props: &NavigationProps) -> Html {
    let is_open = use_state(|| false);
    let spied = use_state_eq(|| Section::Home);
    let route = use_route::<Route>();

    // Scroll-spy, single-page only
    {
        let spied = spied.clone();
        use_effect_with_deps(
            move |single_page| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if *single_page => {
                        let callback = Closure::<dyn Fn()>::new({
                            let spied = spied.clone();
                            move || {
                                let scroll_y = web_sys::window().and_then(|w| w.scroll_y().ok());
                                if let Some(next) = scroll_y.and_then(|y| section_at(y, &measure_sections())) {
                                    spied.set(next);
                                }
                            }
                        });
                        if let Err(e) = window
                            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        {
                            log::warn!("Could not attach scroll-spy: {:?}", e);
                        }
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            props.single_page,
        );
    }

    let active = if props.single_page {
        Some(*spied)
    } else {
        route.as_ref().and_then(Section::for_route)
    };

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let link = |section: Section, mobile: bool| -> Html {
        let class = classes!(
            "site-nav-link",
            mobile.then_some("mobile"),
            (active == Some(section)).then_some("active"),
        );
        if props.single_page {
            let is_open = is_open.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                is_open.set(false);
                scroll_to_section(section);
            });
            html! {
                <a href={format!("#{}", section.id())} {class} {onclick}>{ section.label() }</a>
            }
        } else {
            let is_open = is_open.clone();
            let onclick = Callback::from(move |_: MouseEvent| is_open.set(false));
            html! {
                <span {onclick}>
                    <Link<Route> to={section.route()} classes={class}>{ section.label() }</Link<Route>>
                </span>
            }
        }
    };

    let logo_click = {
        let single_page = props.single_page;
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            is_open.set(false);
            if single_page {
                e.prevent_default();
                scroll_to_section(Section::Home);
            }
        })
    };

    html! {
        <nav class="site-nav">
            <style>{NAV_CSS}</style>
            <div class="site-nav-inner">
                if props.single_page {
                    <a href="#home" class="site-nav-logo" onclick={logo_click}>
                        <img src={content::LOGO_SRC} alt="Framestate Studios" />
                    </a>
                } else {
                    <span onclick={logo_click}>
                        <Link<Route> to={Route::Home} classes="site-nav-logo">
                            <img src={content::LOGO_SRC} alt="Framestate Studios" />
                        </Link<Route>>
                    </span>
                }

                <div class="site-nav-links">
                    { for Section::ALL.iter().map(|&s| link(s, false)) }
                </div>

                <button class="site-nav-toggle" aria-label="Toggle menu" onclick={toggle}>
                    <i class={if *is_open { "fas fa-times" } else { "fas fa-bars" }}></i>
                </button>
            </div>

            if *is_open {
                <div class="site-nav-mobile">
                    { for Section::ALL.iter().map(|&s| link(s, true)) }
                </div>
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds { section: Section::Home, top: 0.0, height: 900.0 },
            SectionBounds { section: Section::Showcase, top: 900.0, height: 700.0 },
            // gap between 1600 and 1700
            SectionBounds { section: Section::Packages, top: 1700.0, height: 800.0 },
        ]
    }

    #[test]
    fn probe_sits_one_hundred_below_the_scroll_position() {
        assert_eq!(section_at(0.0, &layout()), Some(Section::Home));
        assert_eq!(section_at(799.0, &layout()), Some(Section::Home));
        assert_eq!(section_at(800.0, &layout()), Some(Section::Showcase));
        assert_eq!(section_at(1650.0, &layout()), Some(Section::Packages));
    }

    #[test]
    fn gaps_and_overscroll_match_nothing() {
        assert_eq!(section_at(1550.0, &layout()), None);
        assert_eq!(section_at(5000.0, &layout()), None);
        assert_eq!(section_at(0.0, &[]), None);
    }

    #[test]
    fn scroll_target_clears_the_header() {
        assert_eq!(scroll_target(900.0), 820.0);
        assert_eq!(scroll_target(30.0), 0.0);
    }

    #[test]
    fn sections_map_to_routes_and_back() {
        for section in Section::ALL {
            assert_eq!(Section::for_route(&section.route()), Some(section));
        }
        assert_eq!(Section::for_route(&Route::OnePage), None);
    }
}
