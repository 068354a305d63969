use web_sys::js_sys;
use yew::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::components::reveal::Reveal;
use crate::config;
use crate::i18n::{lang_text, Lang};
use crate::scroll_link;

pub const SECTION_INTRO: &str = "inicio";
pub const SECTION_FEATURES: &str = "caracteristicas";
pub const SECTION_DOWNLOAD: &str = "descargar";

struct Feature {
    icon: &'static str,
    title_es: &'static str,
    title_en: &'static str,
    text_es: &'static str,
    text_en: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🕹️",
        title_es: "Acción clásica de plataformas",
        title_en: "Classic platform action",
        text_es: "Esquiva barriles rodantes, sube escaleras y llega a la cima de cada nivel.",
        text_en: "Dodge rolling barrels, climb ladders and reach the top of every level.",
    },
    Feature {
        icon: "🧠",
        title_es: "Enemigos con IA adaptativa",
        title_en: "Adaptive AI enemies",
        text_es: "Los enemigos aprenden de tus movimientos con Q-learning y búsqueda de caminos.",
        text_en: "Enemies learn from your moves with Q-learning and pathfinding.",
    },
    Feature {
        icon: "🏆",
        title_es: "Clasificación en línea",
        title_en: "Online leaderboard",
        text_es: "Compite por la mejor puntuación en una tabla global sincronizada.",
        text_en: "Chase the top score on a synced global scoreboard.",
    },
    Feature {
        icon: "💾",
        title_es: "Guardado de partidas",
        title_en: "Save your progress",
        text_es: "Continúa donde lo dejaste con varias ranuras de guardado.",
        text_en: "Pick up where you left off with multiple save slots.",
    },
    Feature {
        icon: "🛍️",
        title_es: "Tienda y personalización",
        title_en: "Shop and customization",
        text_es: "Desbloquea colores y mejoras con las monedas que recolectes.",
        text_en: "Unlock colors and upgrades with the coins you collect.",
    },
    Feature {
        icon: "🎵",
        title_es: "Sonido retro",
        title_en: "Retro sound",
        text_es: "Música chiptune y efectos de sala recreativa de los años ochenta.",
        text_en: "Chiptune music and eighties arcade-hall effects.",
    },
];

struct DownloadTarget {
    icon: &'static str,
    platform: &'static str,
    note_es: &'static str,
    note_en: &'static str,
}

const DOWNLOADS: &[DownloadTarget] = &[
    DownloadTarget {
        icon: "🪟",
        platform: "Windows",
        note_es: "Ejecutable autónomo, sin instalación.",
        note_en: "Standalone executable, no install needed.",
    },
    DownloadTarget {
        icon: "🐧",
        platform: "Linux",
        note_es: "Binario único para distribuciones de 64 bits.",
        note_en: "Single binary for 64-bit distributions.",
    },
    DownloadTarget {
        icon: "🍎",
        platform: "macOS",
        note_es: "Aplicación empaquetada, lista para abrir.",
        note_en: "Bundled application, ready to open.",
    },
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub lang: Lang,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let lang = props.lang;

    html! {
        <main class="landing-page">
            { hero(lang) }
            { features(lang) }
            { download(lang) }
            { footer(lang) }
        </main>
    }
}

fn hero(lang: Lang) -> Html {
    html! {
        <section id={SECTION_INTRO} class="hero">
            <h1 class="hero-title">{ config::site_name() }</h1>
            <p class="hero-subtitle">
                { lang_text(
                    lang,
                    "El arcade de plataformas de toda la vida, reconstruido con enemigos \
                     inteligentes y puntuaciones en línea.",
                    "The platform arcade you grew up with, rebuilt with smart enemies \
                     and online scores.",
                ) }
            </p>
            <div class="hero-buttons">
                <button class="hero-cta" onclick={scroll_link(SECTION_DOWNLOAD)}>
                    { lang_text(lang, "Descargar ahora", "Download now") }
                </button>
                <button class="hero-cta secondary" onclick={scroll_link(SECTION_FEATURES)}>
                    { lang_text(lang, "Ver características", "See the features") }
                </button>
            </div>
        </section>
    }
}

fn features(lang: Lang) -> Html {
    html! {
        <section id={SECTION_FEATURES} class="features">
            <h2>{ lang_text(lang, "Características", "Features") }</h2>
            <div class="features-grid">
                { for FEATURES.iter().map(|feature| feature_card(lang, feature)) }
            </div>
        </section>
    }
}

fn feature_card(lang: Lang, feature: &Feature) -> Html {
    html! {
        <Reveal class="feature-card">
            <span class="feature-icon">{ feature.icon }</span>
            <h3>{ lang_text(lang, feature.title_es, feature.title_en) }</h3>
            <p>{ lang_text(lang, feature.text_es, feature.text_en) }</p>
        </Reveal>
    }
}

fn download(lang: Lang) -> Html {
    html! {
        <section id={SECTION_DOWNLOAD} class="download">
            <h2>{ lang_text(lang, "Descargar", "Download") }</h2>
            <div class="download-grid">
                { for DOWNLOADS.iter().map(|target| download_card(lang, target)) }
            </div>
            <div class="source-box">
                <h3>{ lang_text(lang, "O clona el código fuente", "Or clone the source") }</h3>
                <code class="clone-command">{ config::clone_command() }</code>
                <CopyButton lang={lang} />
            </div>
        </section>
    }
}

fn download_card(lang: Lang, target: &DownloadTarget) -> Html {
    html! {
        <Reveal class="download-card">
            <span class="download-icon">{ target.icon }</span>
            <h3>{ target.platform }</h3>
            <p>{ lang_text(lang, target.note_es, target.note_en) }</p>
            <a
                class="download-link"
                href={config::releases_url()}
                target="_blank"
                rel="noopener noreferrer"
            >
                { lang_text(lang, "Descargar", "Download") }
            </a>
        </Reveal>
    }
}

fn footer(lang: Lang) -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <p>{ format!("© {} {}", year, config::site_name()) }</p>
            <p class="footer-note">
                { lang_text(
                    lang,
                    "Hecho con cariño para las salas recreativas clásicas.",
                    "Made with love for classic arcade halls.",
                ) }
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_distinct() {
        assert_ne!(SECTION_INTRO, SECTION_FEATURES);
        assert_ne!(SECTION_FEATURES, SECTION_DOWNLOAD);
        assert_ne!(SECTION_INTRO, SECTION_DOWNLOAD);
    }

    #[test]
    fn there_are_cards_to_observe() {
        assert!(!FEATURES.is_empty());
        assert!(!DOWNLOADS.is_empty());
    }

    #[test]
    fn every_card_has_both_language_variants() {
        for feature in FEATURES {
            assert!(!feature.title_es.is_empty() && !feature.title_en.is_empty());
            assert!(!feature.text_es.is_empty() && !feature.text_en.is_empty());
        }
        for target in DOWNLOADS {
            assert!(!target.note_es.is_empty() && !target.note_en.is_empty());
        }
    }
}
