use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const REVEAL_THRESHOLD: f64 = 0.1;

// Bottom edge pulled up so cards reveal a little before the viewport bottom.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

const HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;";
const REVEALED_STYLE: &str =
    "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;";

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper that slides its content into place once it crosses into view
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, _observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() {
                                visible.set(true);
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
                options.set_root_margin(REVEAL_ROOT_MARGIN);

                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .unwrap();

                if let Some(element) = node.cast::<Element>() {
                    observer.observe(&element);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    let style = if *visible { REVEALED_STYLE } else { HIDDEN_STYLE };

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_cards_start_transparent_and_offset() {
        assert!(HIDDEN_STYLE.contains("opacity: 0;"));
        assert!(HIDDEN_STYLE.contains("translateY(30px)"));
    }

    #[test]
    fn revealed_cards_are_opaque_with_no_offset() {
        assert!(REVEALED_STYLE.contains("opacity: 1;"));
        assert!(REVEALED_STYLE.contains("translateY(0)"));
    }

    #[test]
    fn both_states_keep_the_transition_so_the_flip_animates() {
        for style in [HIDDEN_STYLE, REVEALED_STYLE] {
            assert!(style.contains("transition: opacity 0.6s ease, transform 0.6s ease"));
        }
    }

    #[test]
    fn observer_configuration_is_sane() {
        assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
        assert!(REVEAL_ROOT_MARGIN.ends_with("-50px 0px"));
    }
}
