use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gloo::events::EventListener;
use log::warn;
use shared::{ReloadTracker, SpinError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::dom::REFRESH_EVENTS;

pub type Loader<T> = fn(String) -> LocalBoxFuture<'static, Result<T, SpinError>>;

/// Server data that reloads after every spin or completed option.
#[derive(Clone)]
pub struct Reloaded<T> {
    pub loading: bool,
    pub value: Option<T>,
    tracker: Rc<RefCell<ReloadTracker<T>>>,
    rerender: UseForceUpdateHandle,
}

impl<T> Reloaded<T> {
    /// Edits the loaded value in place; a no-op before the first load.
    pub fn update(&self, edit: impl FnOnce(&mut T)) {
        self.tracker.borrow_mut().update(edit);
        self.rerender.force_update();
    }
}

#[hook]
pub fn use_reloaded<T>(what: &'static str, endpoint: String, load: Loader<T>) -> Reloaded<T>
where
    T: Clone + 'static,
{
    let tracker = use_mut_ref(ReloadTracker::<T>::default);
    let rerender = use_force_update();

    {
        let tracker = tracker.clone();
        let rerender = rerender.clone();

        use_effect_with(endpoint, move |endpoint| {
            let endpoint = endpoint.clone();
            let reload = Rc::new(move || {
                let generation = tracker.borrow_mut().begin();
                rerender.force_update();

                let tracker = tracker.clone();
                let rerender = rerender.clone();
                let request = load(endpoint.clone());
                spawn_local(async move {
                    let outcome = request.await;
                    if let Err(e) = &outcome {
                        warn!("Failed to load {}: {}", what, e);
                    }
                    // Older generations are dropped so out-of-order replies never win
                    if tracker.borrow_mut().finish(generation, outcome) {
                        rerender.force_update();
                    }
                });
            });

            reload();

            let listeners: Vec<EventListener> = web_sys::window()
                .map(|window| {
                    REFRESH_EVENTS
                        .iter()
                        .map(|event| {
                            let reload = reload.clone();
                            EventListener::new(&window, *event, move |_event| reload())
                        })
                        .collect()
                })
                .unwrap_or_default();

            move || drop(listeners)
        });
    }

    let (loading, value) = {
        let current = tracker.borrow();
        (current.is_loading(), current.value().cloned())
    };

    Reloaded {
        loading,
        value,
        tracker,
        rerender,
    }
}
