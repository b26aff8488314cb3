use log::warn;
use shared::WheelConfig;
use web_sys::{window, HtmlButtonElement, HtmlElement};
use yew::prelude::*;

use crate::components::{RevealedGallery, StatsPanel};
use crate::dom::{bind_spin_handler, RESULT_REGION_ID, SPIN_BUTTON_ID};
use crate::styles;

#[derive(Properties, PartialEq, Default)]
pub struct WheelPageProps {
    #[prop_or_default]
    pub config: WheelConfig,
}

#[function_component(WheelPage)]
pub fn wheel_page(props: &WheelPageProps) -> Html {
    // Apply wheel CSS
    {
        use_effect_with((), move |_| {
            let style_element = window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let head = document.head()?;
                    let style = document.create_element("style").ok()?;
                    style.set_text_content(Some(styles::WHEEL_CSS));
                    head.append_child(&style).ok()?;
                    Some(style)
                });

            move || {
                if let Some(style) = style_element {
                    style.remove();
                }
            }
        });
    }

    let trigger_ref = use_node_ref();
    let display_ref = use_node_ref();
    let wheel_ref = use_node_ref();

    // Bind the spin handler once the markup is mounted
    {
        let trigger_ref = trigger_ref.clone();
        let display_ref = display_ref.clone();
        let wheel_ref = wheel_ref.clone();

        use_effect_with(props.config.clone(), move |config| {
            let binding = match (display_ref.cast::<HtmlElement>(), wheel_ref.cast::<HtmlElement>()) {
                (Some(display), Some(wheel)) => bind_spin_handler(
                    trigger_ref.cast::<HtmlButtonElement>(),
                    display,
                    wheel,
                    config.clone(),
                ),
                _ => {
                    warn!("Wheel markup not mounted, spin handler not bound");
                    None
                }
            };
            move || drop(binding)
        });
    }

    html! {
        <div class={styles::CONTAINER}>
            <h1 class={styles::TEXT_H1}>
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"Аниме-колесо фортуны"}</span>
            </h1>
            <div class={styles::CARD}>
                <div class="wheel-pointer"></div>
                <div class="wheel" ref={wheel_ref}></div>
                <div class="flex justify-center mt-8">
                    <div class="w-full max-w-[300px]">
                        <button id={SPIN_BUTTON_ID} class={styles::BUTTON_SPIN} ref={trigger_ref}>
                            {"Крутить колесо"}
                        </button>
                    </div>
                </div>
                <div id={RESULT_REGION_ID} class={styles::RESULT_REGION} ref={display_ref}></div>
                <StatsPanel endpoint={props.config.stats_endpoint.clone()} />
                <RevealedGallery
                    endpoint={props.config.revealed_endpoint.clone()}
                    complete_endpoint={props.config.complete_endpoint.clone()}
                />
            </div>
        </div>
    }
}
