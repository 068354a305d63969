use web_sys::window;
use yew::prelude::*;

pub const STORAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Es,
    En,
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Es
    }
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "es" => Some(Lang::Es),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }

    pub fn load() -> Self {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
            .flatten()
            .and_then(|value| Lang::from_code(&value))
            .unwrap_or_default()
    }

    pub fn store(self) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
            let _ = storage.set_item(STORAGE_KEY, self.code());
        }
    }
}

pub fn display_style(tag: Lang, current: Lang) -> &'static str {
    if tag == current {
        "display: inline;"
    } else {
        "display: none;"
    }
}

// Both variants are always in the DOM; the current language decides which
// span is visible.
pub fn lang_text(current: Lang, es: &'static str, en: &'static str) -> Html {
    html! {
        <>
            <span data-lang="es" style={display_style(Lang::Es, current)}>{ es }</span>
            <span data-lang="en" style={display_style(Lang::En, current)}>{ en }</span>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_round_trips() {
        for lang in [Lang::Es, Lang::En] {
            assert_eq!(lang.toggled().toggled(), lang);
        }
        assert_eq!(Lang::Es.toggled(), Lang::En);
        assert_eq!(Lang::En.toggled(), Lang::Es);
    }

    #[test]
    fn codes_match_the_markup_contract() {
        assert_eq!(STORAGE_KEY, "language");
        assert_eq!(Lang::Es.code(), "es");
        assert_eq!(Lang::En.code(), "en");
    }

    #[test]
    fn parses_stored_codes() {
        assert_eq!(Lang::from_code("es"), Some(Lang::Es));
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("EN"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn default_is_spanish() {
        assert_eq!(Lang::default(), Lang::Es);
    }

    #[test]
    fn tagged_text_is_visible_iff_language_matches() {
        for tag in [Lang::Es, Lang::En] {
            for current in [Lang::Es, Lang::En] {
                let style = display_style(tag, current);
                if tag == current {
                    assert_eq!(style, "display: inline;");
                } else {
                    assert_eq!(style, "display: none;");
                }
            }
        }
    }
}
