use yew::prelude::*;

use crate::hooks::use_wheel_stats;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub endpoint: String,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let (loading, stats) = use_wheel_stats(props.endpoint.clone());

    let Some(stats) = stats else {
        // Hidden until the first successful load
        return html! {};
    };

    html! {
        <div class={classes!(styles::STATS_PANEL, loading.then_some("opacity-60"))}>
            <div class="flex justify-between">
                <span class={styles::TEXT_SMALL}>{"Открыто"}</span>
                <span class={styles::STATS_VALUE}>{stats.revealed_label()}</span>
            </div>
            <div class="flex justify-between">
                <span class={styles::TEXT_SMALL}>{"Выполнено"}</span>
                <span class={styles::STATS_VALUE}>{stats.completed_label()}</span>
            </div>
        </div>
    }
}
