use futures::FutureExt;
use shared::WheelStats;
use yew::prelude::*;

use crate::api::fetch_wheel_stats;
use crate::hooks::use_reloaded;

/// Loads wheel statistics on mount and again after every revealed spin.
/// A failed reload keeps the last good value.
#[hook]
pub fn use_wheel_stats(endpoint: String) -> (bool, Option<WheelStats>) {
    let stats = use_reloaded("wheel stats", endpoint, |endpoint| {
        fetch_wheel_stats(endpoint).boxed_local()
    });
    (stats.loading, stats.value)
}
