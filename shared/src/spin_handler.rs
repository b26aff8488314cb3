use async_trait::async_trait;
use futures::future::{select, Either};
use log::{debug, error};

use crate::config::WheelConfig;
use crate::display::{DisplayContent, ResultCard};
use crate::error::SpinError;
use crate::spin_result::SpinResult;

/// The button that starts a spin.
pub trait TriggerControl {
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
}

/// The region that shows progress, the result card or the error.
pub trait DisplayRegion {
    fn show(&self, content: &DisplayContent);
}

/// The element that is rotated while the wheel spins.
pub trait WheelElement {
    fn set_transition(&self, transition: &str);
    fn set_transform(&self, transform: &str);
}

/// Where spin results come from.
#[async_trait(?Send)]
pub trait SpinSource {
    async fn spin(&self) -> Result<SpinResult, SpinError>;
}

#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, millis: u32);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinOutcome {
    /// The trigger was disabled, so nothing happened.
    Ignored,
    Revealed(SpinResult),
    Failed(SpinError),
}

type RevealObserver = Box<dyn Fn(&SpinResult)>;

pub struct SpinHandler {
    trigger: Box<dyn TriggerControl>,
    display: Box<dyn DisplayRegion>,
    wheel: Box<dyn WheelElement>,
    source: Box<dyn SpinSource>,
    delay: Box<dyn Delay>,
    config: WheelConfig,
    on_reveal: Option<RevealObserver>,
}

impl SpinHandler {
    /// Wires a handler to its collaborators. Returns `None` when there is no
    /// trigger to bind to.
    pub fn bind(
        trigger: Option<Box<dyn TriggerControl>>,
        display: Box<dyn DisplayRegion>,
        wheel: Box<dyn WheelElement>,
        source: Box<dyn SpinSource>,
        delay: Box<dyn Delay>,
        config: WheelConfig,
    ) -> Option<Self> {
        let trigger = trigger?;
        Some(Self {
            trigger,
            display,
            wheel,
            source,
            delay,
            config,
            on_reveal: None,
        })
    }

    pub fn on_reveal(mut self, observer: impl Fn(&SpinResult) + 'static) -> Self {
        self.on_reveal = Some(Box::new(observer));
        self
    }

    /// Runs one spin from click to reveal.
    ///
    /// Everything before the first await happens synchronously, so a second
    /// activation on the same event loop always sees the trigger disabled.
    /// The reveal timer runs concurrently with the request: the card appears
    /// once both the timer has elapsed and the result has arrived. Failures
    /// are shown as soon as they are known.
    pub async fn spin(&self) -> SpinOutcome {
        if self.trigger.is_disabled() {
            debug!("Spin ignored, trigger is disabled");
            return SpinOutcome::Ignored;
        }

        self.trigger.set_disabled(true);
        self.display.show(&DisplayContent::Progress);
        self.wheel.set_transition(&self.config.spin_transition());
        self.wheel.set_transform(&self.config.spin_transform());
        debug!("Spinning wheel, requesting {}", self.config.spin_endpoint);

        let request = self.source.spin();
        let timer = self.delay.sleep(self.config.reveal_delay_ms);

        let result = match select(request, timer).await {
            Either::Left((Ok(result), timer)) => {
                timer.await;
                Ok(result)
            }
            Either::Left((Err(err), _)) => Err(err),
            Either::Right(((), request)) => request.await,
        };

        match result {
            Ok(result) => {
                self.reveal(&result);
                SpinOutcome::Revealed(result)
            }
            Err(err) => {
                error!("Error: {}", err);
                self.display.show(&DisplayContent::Error);
                self.trigger.set_disabled(false);
                SpinOutcome::Failed(err)
            }
        }
    }

    fn reveal(&self, result: &SpinResult) {
        self.wheel.set_transition("none");
        self.wheel.set_transform(&self.config.reset_transform());
        self.display
            .show(&DisplayContent::Card(ResultCard::from_result(result)));
        self.trigger.set_disabled(false);
        debug!("Revealed spin result: {}", result.text);

        if let Some(observer) = &self.on_reveal {
            observer(result);
        }
    }
}
