use std::rc::Rc;

use async_trait::async_trait;
use gloo::events::EventListener;
use gloo_timers::future::TimeoutFuture;
use log::{debug, error, warn};
use shared::constants::{ERROR_CLASS, RESULT_CARD_CLASS};
use shared::{
    Delay, DisplayContent, DisplayRegion, ResultCard, SpinHandler, SpinResult, TriggerControl,
    WheelConfig, WheelElement,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, CustomEvent, CustomEventInit, Document, HtmlButtonElement, HtmlElement};

use crate::api::HttpSpinSource;
use crate::config::read_wheel_config;

pub const SPIN_BUTTON_ID: &str = "spinBtn";
pub const RESULT_REGION_ID: &str = "result";
pub const WHEEL_SELECTOR: &str = ".wheel";

/// Fired on `window` after every revealed result; `detail` is the result text.
pub const WHEEL_SPUN_EVENT: &str = "wheelSpun";

/// Fired on `window` after an option was marked completed; `detail` is its id.
pub const OPTION_COMPLETED_EVENT: &str = "optionCompleted";

/// Window events after which server-side counters are stale.
pub const REFRESH_EVENTS: [&str; 2] = [WHEEL_SPUN_EVENT, OPTION_COMPLETED_EVENT];

pub struct DomTrigger(HtmlButtonElement);

impl TriggerControl for DomTrigger {
    fn is_disabled(&self) -> bool {
        self.0.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }
}

pub struct DomWheel(HtmlElement);

impl DomWheel {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.0.style().set_property(property, value) {
            warn!("Failed to set wheel {}: {:?}", property, e);
        }
    }
}

impl WheelElement for DomWheel {
    fn set_transition(&self, transition: &str) {
        self.set_style("transition", transition);
    }

    fn set_transform(&self, transform: &str) {
        self.set_style("transform", transform);
    }
}

/// Renders into the result region with DOM nodes, so server strings are
/// always inserted as text.
pub struct DomDisplay(HtmlElement);

impl DisplayRegion for DomDisplay {
    fn show(&self, content: &DisplayContent) {
        if let Err(e) = self.render(content) {
            error!("Failed to render result region: {:?}", e);
        }
    }
}

impl DomDisplay {
    fn render(&self, content: &DisplayContent) -> Result<(), JsValue> {
        let document = self
            .0
            .owner_document()
            .ok_or_else(|| JsValue::from_str("result region is detached"))?;

        match content {
            DisplayContent::Progress => {
                self.0.set_text_content(content.message());
            }
            DisplayContent::Error => {
                let div = document.create_element("div")?;
                div.set_class_name(ERROR_CLASS);
                div.set_text_content(content.message());
                self.replace_with(&div)?;
            }
            DisplayContent::Card(card) => {
                let div = render_card(&document, card)?;
                self.replace_with(&div)?;
            }
        }
        Ok(())
    }

    fn replace_with(&self, node: &web_sys::Node) -> Result<(), JsValue> {
        self.0.set_text_content(None);
        self.0.append_child(node)?;
        Ok(())
    }
}

fn render_card(document: &Document, card: &ResultCard) -> Result<HtmlElement, JsValue> {
    let div: HtmlElement = document.create_element("div")?.dyn_into()?;
    div.set_class_name(RESULT_CARD_CLASS);
    div.style().set_property("border-color", &card.accent_color)?;

    let heading = document.create_element("h3")?;
    heading.set_text_content(Some(card.heading));
    div.append_child(&heading)?;

    for line in &card.lines {
        let p = document.create_element("p")?;
        match line.label {
            Some(label) => {
                let strong = document.create_element("strong")?;
                strong.set_text_content(Some(label));
                p.append_child(&strong)?;
                p.append_child(&document.create_text_node(&format!(" {}", line.value)))?;
            }
            None => p.set_text_content(Some(&line.value)),
        }
        div.append_child(&p)?;
    }

    Ok(div)
}

pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

fn dispatch_window_event(name: &str, detail: &JsValue) {
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        event_init.set_detail(detail);
        match CustomEvent::new_with_event_init_dict(name, &event_init) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(e) => warn!("Failed to create {} event: {:?}", name, e),
        }
    }
}

pub fn dispatch_spin_event(result: &SpinResult) {
    dispatch_window_event(WHEEL_SPUN_EVENT, &JsValue::from_str(&result.text));
}

pub fn dispatch_option_completed(id: i64) {
    dispatch_window_event(OPTION_COMPLETED_EVENT, &JsValue::from_f64(id as f64));
}

/// A live click binding. Dropping it detaches the listener.
pub struct SpinBinding {
    listener: EventListener,
}

impl SpinBinding {
    /// Keeps the listener attached for the lifetime of the page.
    pub fn forget(self) {
        self.listener.forget();
    }
}

/// Binds a spin handler to the three widget elements. Nothing is attached
/// when the trigger is missing.
pub fn bind_spin_handler(
    trigger: Option<HtmlButtonElement>,
    display: HtmlElement,
    wheel: HtmlElement,
    config: WheelConfig,
) -> Option<SpinBinding> {
    let Some(button) = trigger else {
        debug!("No spin button found, wheel stays inert");
        return None;
    };

    let source = HttpSpinSource::new(&config.spin_endpoint);
    let handler = SpinHandler::bind(
        Some(Box::new(DomTrigger(button.clone()))),
        Box::new(DomDisplay(display)),
        Box::new(DomWheel(wheel)),
        Box::new(source),
        Box::new(TimerDelay),
        config,
    )?
    .on_reveal(dispatch_spin_event);
    let handler = Rc::new(handler);

    let listener = EventListener::new(&button, "click", move |_event| {
        let handler = handler.clone();
        spawn_local(async move {
            handler.spin().await;
        });
    });

    Some(SpinBinding { listener })
}

/// Binds to markup the page already ships: `#spinBtn`, `#result` and `.wheel`.
pub fn attach_to_document(document: &Document) -> Option<SpinBinding> {
    let button = document
        .get_element_by_id(SPIN_BUTTON_ID)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())?;

    let display = document
        .get_element_by_id(RESULT_REGION_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let wheel = document
        .query_selector(WHEEL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    match (display, wheel) {
        (Some(display), Some(wheel)) => {
            let config = read_wheel_config(&button);
            bind_spin_handler(Some(button), display, wheel, config)
        }
        _ => {
            warn!("Spin button present but #{} or {} is missing", RESULT_REGION_ID, WHEEL_SELECTOR);
            None
        }
    }
}
