use futures::FutureExt;
use log::{debug, warn};
use shared::{apply_completion, complete_path, WheelOption};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{complete_option, fetch_revealed};
use crate::dom::dispatch_option_completed;
use crate::hooks::use_reloaded;

pub struct RevealedOptions {
    pub loading: bool,
    pub options: Option<Vec<WheelOption>>,
    /// Marks the option with this id completed on the server.
    pub complete: Callback<i64>,
}

#[hook]
pub fn use_revealed_options(endpoint: String, complete_endpoint: String) -> RevealedOptions {
    let revealed = use_reloaded("revealed options", endpoint, |endpoint| {
        fetch_revealed(endpoint).boxed_local()
    });

    let complete = {
        let revealed = revealed.clone();
        Callback::from(move |id: i64| {
            let revealed = revealed.clone();
            let path = complete_path(&complete_endpoint, id);
            spawn_local(async move {
                match complete_option(path).await {
                    Ok(updated) => {
                        debug!("Option {} completed", updated.id);
                        revealed.update(|options| apply_completion(options, updated));
                        dispatch_option_completed(id);
                    }
                    Err(e) => warn!("Failed to complete option {}: {}", id, e),
                }
            });
        })
    };

    RevealedOptions {
        loading: revealed.loading,
        options: revealed.value,
        complete,
    }
}
