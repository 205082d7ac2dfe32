//! Building blocks shared by the multi-page routes and the single-page layout.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::carousel::VideoCylinderCarousel;
use crate::components::navigation::{scroll_to_section, Section};
use crate::components::toast::{ToastAction, ToastQueue};
use crate::content;
use crate::leads::{self, ContactForm, FormError, MeetingForm};
use crate::Route;

#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    pub to: Section,
    #[prop_or_default]
    pub single_page: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Router link on the multi-page site, in-page scroll on the single page.
#[function_component]
pub fn SectionLink(props: &SectionLinkProps) -> Html {
    if props.single_page {
        let to = props.to;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(to);
        });
        html! {
            <a href={format!("#{}", to.id())} class={props.class.clone()} {onclick}>
                { for props.children.iter() }
            </a>
        }
    } else {
        html! {
            <Link<Route> to={props.to.route()} classes={props.class.clone()}>
                { for props.children.iter() }
            </Link<Route>>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct VariantProps {
    #[prop_or_default]
    pub single_page: bool,
}

#[function_component]
pub fn HeroSection(props: &VariantProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    {"We make properties look like "}<span class="accent">{"films"}</span>
                </h1>
                <p class="hero-subtitle">{"Because you sell what you show."}</p>
                <div class="hero-actions">
                    <SectionLink to={Section::Showcase} single_page={props.single_page} class="btn btn-hero">
                        <i class="fas fa-video"></i>{" View Our Work"}
                    </SectionLink>
                    <SectionLink to={Section::Contact} single_page={props.single_page} class="btn btn-outline">
                        {"Book a Shoot"}
                    </SectionLink>
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutPreview)]
pub fn about_preview() -> Html {
    html! {
        <section class="band band-card">
            <div class="narrow centered">
                <h2>{"Cinematic Visuals That Sell"}</h2>
                <p class="lead">
                    {"Framestate Studios creates cinematic visuals that help real estate brands sell faster \
                      and stand out online. We combine professional video production, storytelling, and \
                      clean editing to showcase properties in a way that attracts genuine buyers."}
                </p>
            </div>
        </section>
    }
}

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    html! {
        <section class="band">
            <div class="stats-grid">
                { for content::STATS.iter().map(|stat| html! {
                    <div class="stat-card">
                        <div class="icon-badge"><i class={stat.icon}></i></div>
                        <h3 class="stat-value">{stat.value}</h3>
                        <p class="muted">{stat.label}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component]
pub fn CtaStrip(props: &VariantProps) -> Html {
    html! {
        <section class="band band-gold centered">
            <h2>{"Let's bring your property to life"}</h2>
            <SectionLink to={Section::Contact} single_page={props.single_page} class="btn btn-hero">
                {"Book a Call"}
            </SectionLink>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionShellProps {
    /// Element id for scroll-spy; only set in the single-page layout.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
fn SectionShell(props: &SectionShellProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("band", "page-section", props.class.clone())}>
            { for props.children.iter() }
        </section>
    }
}

fn anchor(single_page: bool, section: Section) -> Option<AttrValue> {
    single_page.then(|| AttrValue::from(section.id()))
}

#[function_component]
pub fn ShowcaseSection(props: &VariantProps) -> Html {
    let items = use_memo(|_| content::showcase_items(), ());

    html! {
        <SectionShell id={anchor(props.single_page, Section::Showcase)}>
            <div class="section-heading">
                <h1>{"Our Work"}</h1>
                <p class="lead">{"Where Stories Sell Homes"}</p>
            </div>

            <VideoCylinderCarousel items={(*items).clone()} />

            <div class="panel centered behind-the-scenes">
                <h2>{"Behind the Scenes"}</h2>
                <p class="muted">{"Follow us on social media to see how we create cinematic magic"}</p>
                <div class="hero-actions">
                    <a href={content::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="btn btn-hero">
                        {"View on Instagram"}
                    </a>
                    <a href={content::YOUTUBE_URL} target="_blank" rel="noopener noreferrer" class="btn btn-outline">
                        {"Watch on YouTube"}
                    </a>
                </div>
            </div>
        </SectionShell>
    }
}

#[function_component]
pub fn PackagesSection(props: &VariantProps) -> Html {
    let cards = content::PACKAGES.iter().map(|pkg| {
        html! {
            <div class={classes!("package-card", pkg.popular.then_some("popular"))}>
                if pkg.popular {
                    <span class="package-badge">{"Most Popular"}</span>
                }
                <div class="centered">
                    <div class="package-icon">{pkg.icon}</div>
                    <h3>{pkg.name}</h3>
                    <p class="muted">{pkg.description}</p>
                    <p class="package-price">{pkg.price}</p>
                </div>
                <ul class="package-features">
                    { for pkg.features.iter().map(|feature| html! {
                        <li><i class="fas fa-check"></i><span>{*feature}</span></li>
                    }) }
                </ul>
                <SectionLink
                    to={Section::Contact}
                    single_page={props.single_page}
                    class={classes!("btn", "btn-block", if pkg.popular { "btn-hero" } else { "btn-outline" })}
                >
                    {"Choose This Package"}
                </SectionLink>
            </div>
        }
    });

    html! {
        <SectionShell id={anchor(props.single_page, Section::Packages)} class="band-card">
            <div class="section-heading">
                <h1>{"Choose Your Cinematic Experience"}</h1>
                <p class="lead">
                    {"Select the package that fits your property and vision. Every project is tailored to \
                      showcase your space at its absolute best."}
                </p>
            </div>
            <div class="packages-grid">{ for cards }</div>
            <div class="panel centered">
                <h2>{"Not sure which fits your property?"}</h2>
                <p class="muted">
                    {"Let's plan your shoot together. We'll help you choose the perfect package and \
                      customize it to match your vision."}
                </p>
                <SectionLink to={Section::Contact} single_page={props.single_page} class="btn btn-hero">
                    {"Book a Consultation Call"}
                </SectionLink>
            </div>
        </SectionShell>
    }
}

#[function_component]
pub fn AboutSection(props: &VariantProps) -> Html {
    html! {
        <SectionShell id={anchor(props.single_page, Section::About)}>
            <div class="narrow">
                <h1 class="centered">
                    {"Cinematic storytelling for the "}<span class="accent">{"real estate world"}</span>
                </h1>
                <img class="about-image" src={content::BEHIND_SCENES_SRC} alt="Behind the scenes at Framestate Studios" />

                <p class="lead">
                    <strong>{content::STUDIO_NAME}</strong>
                    {" is a creative production house specializing in real estate cinematography. We're not just \
                      another video production company. We're storytellers who understand that selling a \
                      property is about selling a dream, a lifestyle, an emotion."}
                </p>
                <p class="lead">
                    {"We combine cinematic visuals, clean edits, and compelling storytelling to help properties \
                      sell faster and attract genuine buyers. Every frame is carefully crafted, every transition \
                      purposefully designed, and every second optimized to showcase your property in its best light."}
                </p>
                <p class="lead">
                    {"Our approach is simple yet powerful: "}
                    <span class="accent">{"we don't just create videos, we create results"}</span>
                    {". Whether it's a luxury villa, a modern apartment, or a heritage property, we bring the same \
                      level of cinematic excellence that you'd expect from a feature film."}
                </p>

                <blockquote>
                    {"\"In real estate, first impressions happen online. We make sure yours is unforgettable.\""}
                </blockquote>

                <h2>{"Our Process"}</h2>
                <div class="process-grid">
                    { for content::PROCESS.iter().map(|step| html! {
                        <div class="panel">
                            <div class="process-number">{step.number}</div>
                            <h3>{step.title}</h3>
                            <p class="muted">{step.body}</p>
                        </div>
                    }) }
                </div>

                <h2>{"Why Choose Us?"}</h2>
                <ul class="why-list">
                    { for content::WHY_CHOOSE_US.iter().map(|(title, body)| html! {
                        <li>
                            <span class="accent">{"✓"}</span>
                            <span class="muted"><strong>{*title}</strong>{format!(" {}", body)}</span>
                        </li>
                    }) }
                </ul>
            </div>
        </SectionShell>
    }
}

#[function_component(ContactCards)]
pub fn contact_cards() -> Html {
    html! {
        <div>
            <h2>{"Get in Touch"}</h2>
            <p class="muted">
                {"We're here to help bring your vision to life. Reach out to discuss your project, \
                  get a quote, or schedule a consultation."}
            </p>
            <div class="contact-cards">
                <a class="contact-card" href={content::PHONE_HREF}>
                    <div class="icon-badge"><i class="fas fa-phone"></i></div>
                    <div>
                        <p class="muted small">{"Call Us"}</p>
                        <p class="strong">{content::PHONE_DISPLAY}</p>
                    </div>
                </a>
                <a class="contact-card" href={format!("mailto:{}", content::EMAIL)}>
                    <div class="icon-badge"><i class="fas fa-envelope"></i></div>
                    <div>
                        <p class="muted small">{"Email Us"}</p>
                        <p class="strong">{content::EMAIL}</p>
                    </div>
                </a>
                <a
                    class="contact-card"
                    href={format!("https://wa.me/{}", content::WHATSAPP_NUMBER)}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <div class="icon-badge"><i class="fab fa-whatsapp"></i></div>
                    <div>
                        <p class="muted small">{"WhatsApp"}</p>
                        <p class="strong">{"Chat with us instantly"}</p>
                    </div>
                </a>
            </div>
            <div class="panel band-gold response-note">
                <h3>{"Quick Response Time"}</h3>
                <p class="small">{content::RESPONSE_TIME_NOTE}</p>
            </div>
        </div>
    }
}

fn missing_information(err: FormError) -> ToastAction {
    ToastAction::error("Missing Information", err.to_string())
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub toasts: UseReducerHandle<ToastQueue>,
}

/// Contact page form. Nothing is sent to the backend; the lead is handed to
/// WhatsApp with the message prefilled.
#[function_component]
pub fn WhatsAppForm(props: &LeadFormProps) -> Html {
    let form = use_state(ContactForm::default);

    let onsubmit = {
        let form = form.clone();
        let toasts = props.toasts.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                toasts.dispatch(missing_information(err));
                return;
            }
            let url = form.whatsapp_url(content::WHATSAPP_NUMBER);
            let opened = web_sys::window().map(|w| w.open_with_url_and_target(&url, "_blank"));
            if let Some(Err(e)) = opened {
                log::error!("Could not open WhatsApp: {:?}", e);
            }
            toasts.dispatch(ToastAction::info(
                "Opening WhatsApp",
                "You'll be redirected to WhatsApp to complete your message.",
            ));
            form.set(ContactForm::default());
        })
    };

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };
    let on_name = update(|f, v| f.name = v);
    let on_email = update(|f, v| f.email = v);
    let on_phone = update(|f, v| f.phone = v);
    let on_message = update(|f, v| f.message = v);

    html! {
        <div>
            <h2>{"Send a Message"}</h2>
            <form class="lead-form" {onsubmit}>
                <label for="contact-name">{"Name *"}</label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Your full name"
                    value={form.name.clone()}
                    oninput={move |e: InputEvent| on_name(e.target_unchecked_into::<HtmlInputElement>().value())}
                />
                <label for="contact-email">{"Email *"}</label>
                <input
                    id="contact-email"
                    type="email"
                    placeholder="your@email.com"
                    value={form.email.clone()}
                    oninput={move |e: InputEvent| on_email(e.target_unchecked_into::<HtmlInputElement>().value())}
                />
                <label for="contact-phone">{"Phone Number"}</label>
                <input
                    id="contact-phone"
                    type="tel"
                    placeholder="+91 XXXXX XXXXX"
                    value={form.phone.clone()}
                    oninput={move |e: InputEvent| on_phone(e.target_unchecked_into::<HtmlInputElement>().value())}
                />
                <label for="contact-message">{"Message *"}</label>
                <textarea
                    id="contact-message"
                    rows="6"
                    placeholder="Tell us about your project..."
                    value={form.message.clone()}
                    oninput={move |e: InputEvent| on_message(e.target_unchecked_into::<HtmlTextAreaElement>().value())}
                />
                <button type="submit" class="btn btn-hero btn-block">
                    <i class="fas fa-paper-plane"></i>{" Send Message via WhatsApp"}
                </button>
                <p class="muted small centered">
                    {"By submitting this form, you'll be redirected to WhatsApp to complete your message."}
                </p>
            </form>
        </div>
    }
}

/// Single-page scheduler. The backend mails the meeting link.
#[function_component]
pub fn MeetingScheduler(props: &LeadFormProps) -> Html {
    let form = use_state(MeetingForm::default);
    let submitting = use_state(|| false);

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let toasts = props.toasts.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if let Err(err) = form.validate() {
                toasts.dispatch(missing_information(err));
                return;
            }
            submitting.set(true);
            let request = (*form).clone();
            let form = form.clone();
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match leads::request_meeting(&request).await {
                    Ok(_) => {
                        toasts.dispatch(ToastAction::info(
                            "Meeting Scheduled! 🎉",
                            "A meeting link has been sent to your email!",
                        ));
                        form.set(MeetingForm::default());
                    }
                    Err(e) => {
                        log::error!("Error scheduling meeting: {}", e);
                        toasts.dispatch(ToastAction::error(
                            "Error",
                            "Failed to schedule meeting. Please try again.",
                        ));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let update = |apply: fn(&mut MeetingForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };
    let on_name = update(|f, v| f.name = v);
    let on_email = update(|f, v| f.email = v);
    let on_slot = update(|f, v| f.time_slot = v);

    html! {
        <div>
            <h2>{"Schedule a 15-Minute Meeting"}</h2>
            <p class="muted">
                {"Book a quick consultation call to discuss your project. We'll send you the meeting link via email."}
            </p>
            <form class="lead-form" {onsubmit}>
                <label for="meeting-name">{"Name *"}</label>
                <input
                    id="meeting-name"
                    type="text"
                    placeholder="Your full name"
                    value={form.name.clone()}
                    oninput={move |e: InputEvent| on_name(e.target_unchecked_into::<HtmlInputElement>().value())}
                />
                <label for="meeting-email">{"Email *"}</label>
                <input
                    id="meeting-email"
                    type="email"
                    placeholder="your@email.com"
                    value={form.email.clone()}
                    oninput={move |e: InputEvent| on_email(e.target_unchecked_into::<HtmlInputElement>().value())}
                />
                <label for="meeting-slot">{"Preferred Time Slot *"}</label>
                <select
                    id="meeting-slot"
                    onchange={move |e: Event| on_slot(e.target_unchecked_into::<HtmlSelectElement>().value())}
                >
                    <option value="" selected={form.time_slot.is_empty()}>{"Select a time slot"}</option>
                    { for content::TIME_SLOTS.iter().map(|slot| html! {
                        <option value={*slot} selected={form.time_slot == *slot}>{*slot}</option>
                    }) }
                </select>

                <div class="panel next-steps">
                    <p class="small"><strong>{"What happens next?"}</strong></p>
                    <p class="muted small">
                        {"After submitting, we'll email you the meeting link for your chosen slot."}
                    </p>
                </div>

                <button type="submit" class="btn btn-hero btn-block" disabled={*submitting}>
                    <i class="fas fa-paper-plane"></i>
                    { if *submitting { " Scheduling..." } else { " Schedule Meeting" } }
                </button>
            </form>
        </div>
    }
}
