use yew::prelude::*;
use yew_router::prelude::*;

use crate::content;
use crate::Route;

const FOOTER_CSS: &str = r#"
    .site-footer {
        background: var(--card);
        border-top: 1px solid var(--border);
        padding: 3rem 1rem;
    }
    .site-footer-grid {
        max-width: 80rem;
        margin: 0 auto 2rem;
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    .site-footer h3 { color: var(--foreground); margin-bottom: 1rem; }
    .site-footer a {
        display: block;
        color: var(--muted-foreground);
        font-size: 0.875rem;
        text-decoration: none;
        margin-bottom: 0.5rem;
        transition: color 0.2s;
    }
    .site-footer a:hover { color: var(--primary); }
    .site-footer .socials { display: flex; gap: 1rem; padding-top: 0.5rem; }
    .site-footer .socials a { font-size: 1.25rem; }
    .site-footer-bottom {
        border-top: 1px solid var(--border);
        padding-top: 2rem;
        text-align: center;
        color: var(--muted-foreground);
        font-size: 0.875rem;
    }
    @media (min-width: 768px) {
        .site-footer-grid { grid-template-columns: repeat(3, 1fr); }
    }
"#;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="site-footer-grid">
                <div>
                    <img src={content::LOGO_SRC} alt={content::STUDIO_NAME} height="48" />
                    <p class="muted">{content::TAGLINE}</p>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <Link<Route> to={Route::Showcase}>{"Our Work"}</Link<Route>>
                    <Link<Route> to={Route::Packages}>{"Packages"}</Link<Route>>
                    <Link<Route> to={Route::About}>{"About Us"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>

                <div>
                    <h3>{"Get in Touch"}</h3>
                    <a href={content::PHONE_HREF}>
                        <i class="fas fa-phone"></i>{format!(" {}", content::PHONE_DISPLAY)}
                    </a>
                    <a href={format!("mailto:{}", content::EMAIL)}>
                        <i class="fas fa-envelope"></i>{format!(" {}", content::EMAIL)}
                    </a>
                    <div class="socials">
                        <a href={content::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                            <i class="fab fa-instagram"></i>
                        </a>
                        <a href={content::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            <i class="fab fa-linkedin"></i>
                        </a>
                        <a href={content::YOUTUBE_URL} target="_blank" rel="noopener noreferrer" aria-label="YouTube">
                            <i class="fab fa-youtube"></i>
                        </a>
                    </div>
                </div>
            </div>

            <div class="site-footer-bottom">
                <p>{format!("© {} {} - All Rights Reserved", year, content::STUDIO_NAME)}</p>
            </div>
        </footer>
    }
}
