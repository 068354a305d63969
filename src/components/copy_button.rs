use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::i18n::{lang_text, Lang};

const FEEDBACK_MS: u32 = 2_000;

fn feedback_style(copied: bool) -> &'static str {
    if copied {
        "background: #4CAF50;"
    } else {
        ""
    }
}

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub lang: Lang,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);

    let onclick = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            spawn_local(async move {
                if let Some(window) = window() {
                    let promise = window
                        .navigator()
                        .clipboard()
                        .write_text(config::clone_command());
                    if JsFuture::from(promise).await.is_ok() {
                        copied.set(true);
                        // A second click can queue another revert while this
                        // one is pending; the earliest revert wins.
                        TimeoutFuture::new(FEEDBACK_MS).await;
                        copied.set(false);
                    }
                }
            });
        })
    };

    html! {
        <button class="copy-button" style={feedback_style(*copied)} {onclick}>
            {
                if *copied {
                    html! { { config::copy_confirmation() } }
                } else {
                    lang_text(props.lang, "Copiar comando", "Copy command")
                }
            }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_reverts_after_two_seconds() {
        assert_eq!(FEEDBACK_MS, 2_000);
    }

    #[test]
    fn confirmation_recolors_the_button_and_restores_it() {
        assert_eq!(feedback_style(true), "background: #4CAF50;");
        assert_eq!(feedback_style(false), "");
    }
}
