use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

mod config;
mod i18n;
mod components {
    pub mod copy_button;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use i18n::Lang;
use pages::home::{self, Home};

const NAV_SCROLL_THRESHOLD: f64 = 100.0;

pub fn is_past_nav_threshold(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

pub fn header_background(past_threshold: bool) -> &'static str {
    if past_threshold {
        "rgba(255, 255, 255, 0.98)"
    } else {
        "rgba(255, 255, 255, 0.95)"
    }
}

pub fn scroll_to_section(section_id: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(section_id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

pub fn scroll_link(section_id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(section_id);
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub lang: Lang,
    pub on_toggle_lang: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let scroll_callback = Closure::wrap(Box::new({
                    let is_scrolled = is_scrolled.clone();
                    move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(scroll_y) = win.scroll_y() {
                                is_scrolled.set(is_past_nav_threshold(scroll_y));
                            }
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial check so a restored scroll position is styled
                // before the first scroll event.
                if let Ok(scroll_y) = window.scroll_y() {
                    is_scrolled.set(is_past_nav_threshold(scroll_y));
                }

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let open_github = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = window() {
            let _ = window.open_with_url_and_target(config::github_url(), "_blank");
        }
    });

    let header_style = format!("background: {};", header_background(*is_scrolled));
    let lang = props.lang;

    html! {
        <header style={header_style}>
            <nav class="nav-content">
                <a class="nav-logo" href={format!("#{}", home::SECTION_INTRO)}
                    onclick={scroll_link(home::SECTION_INTRO)}>
                    { config::site_name() }
                </a>
                <div class="nav-links">
                    <a class="nav-link" href={format!("#{}", home::SECTION_INTRO)}
                        onclick={scroll_link(home::SECTION_INTRO)}>
                        { i18n::lang_text(lang, "Inicio", "Home") }
                    </a>
                    <a class="nav-link" href={format!("#{}", home::SECTION_FEATURES)}
                        onclick={scroll_link(home::SECTION_FEATURES)}>
                        { i18n::lang_text(lang, "Características", "Features") }
                    </a>
                    <a class="nav-link" href={format!("#{}", home::SECTION_DOWNLOAD)}
                        onclick={scroll_link(home::SECTION_DOWNLOAD)}>
                        { i18n::lang_text(lang, "Descargar", "Download") }
                    </a>
                    <button class="lang-toggle" title="Español / English"
                        onclick={props.on_toggle_lang.clone()}>
                        { lang.toggled().code().to_uppercase() }
                    </button>
                    <a id="githubBtn" class="github-button" href={config::github_url()}
                        onclick={open_github}>
                        {"GitHub"}
                    </a>
                </div>
            </nav>
        </header>
    }
}

fn apply_body_fade_in() {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let style = body.style();
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transition", "opacity 0.5s ease");
    }
}

// The shell renders the body at opacity 0. The app can mount before or
// after the load event fires, so check readyState first.
fn fade_in_body_on_load() {
    if let Some(document) = window().and_then(|w| w.document()) {
        if document.ready_state() == "complete" {
            apply_body_fade_in();
            return;
        }
    }
    if let Some(window) = window() {
        let load_callback = Closure::wrap(Box::new(apply_body_fade_in) as Box<dyn FnMut()>);
        let _ = window
            .add_event_listener_with_callback("load", load_callback.as_ref().unchecked_ref());
        // The listener stays registered for the page lifetime.
        load_callback.forget();
    }
}

#[function_component]
fn App() -> Html {
    let lang = use_state(Lang::load);

    {
        use_effect_with_deps(
            move |_| {
                fade_in_body_on_load();
                || ()
            },
            (),
        );
    }

    let on_toggle_lang = {
        let lang = lang.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*lang).toggled();
            next.store();
            lang.set(next);
            info!("Language switched to {}", next.code());
        })
    };

    html! {
        <>
            <Nav lang={*lang} on_toggle_lang={on_toggle_lang} />
            <Home lang={*lang} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_threshold_is_strictly_greater_than() {
        assert!(!is_past_nav_threshold(0.0));
        assert!(!is_past_nav_threshold(100.0));
        assert!(is_past_nav_threshold(100.1));
        assert!(is_past_nav_threshold(650.0));
    }

    #[test]
    fn header_background_changes_across_the_threshold() {
        assert_eq!(header_background(false), "rgba(255, 255, 255, 0.95)");
        assert_eq!(header_background(true), "rgba(255, 255, 255, 0.98)");
    }
}
