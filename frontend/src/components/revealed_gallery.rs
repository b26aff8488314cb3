use yew::prelude::*;

use crate::hooks::use_revealed_options;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct RevealedGalleryProps {
    pub endpoint: String,
    pub complete_endpoint: String,
}

/// Options the player has uncovered so far, each with a "done" action.
#[function_component(RevealedGallery)]
pub fn revealed_gallery(props: &RevealedGalleryProps) -> Html {
    let revealed = use_revealed_options(props.endpoint.clone(), props.complete_endpoint.clone());

    let Some(options) = revealed.options else {
        return html! {};
    };

    html! {
        <div class={classes!(styles::GALLERY, revealed.loading.then_some("opacity-60"))}>
            <h3 class={styles::TEXT_H3}>{"Открытые задания"}</h3>
            if options.is_empty() {
                <p class={styles::TEXT_SMALL}>{"Пока ничего не открыто"}</p>
            } else {
                <ul class="space-y-2">
                    { for options.iter().map(|option| {
                        let onclick = {
                            let complete = revealed.complete.clone();
                            let id = option.id;
                            Callback::from(move |_: MouseEvent| complete.emit(id))
                        };
                        let done = option.is_completed();

                        html! {
                            <li
                                key={option.id.to_string()}
                                class={styles::GALLERY_ITEM}
                                style={format!("border-left-color: {}", option.accent_color())}
                            >
                                <span class={classes!("text-sm", done.then_some("line-through opacity-60"))}>
                                    {option.title()}
                                </span>
                                if done {
                                    <span class={styles::STATS_VALUE}>{"✓"}</span>
                                } else {
                                    <button class={styles::BUTTON_COMPLETE} {onclick}>{"Выполнено"}</button>
                                }
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
