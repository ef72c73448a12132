mod charts;
mod kpis;

use crate::{context::DashboardState, error::SmallError};
use charts::{DashboardDailyTrend, DashboardRoomUsage};
use kpis::DashboardKpis;
use leptos::*;

#[component]
pub fn Dashboard(#[prop()] state: DashboardState) -> impl IntoView {
    let errors = state.errors;
    view! {
        <div class="flex flex-col gap-4">
            <Show when=move || !errors.get().is_empty() fallback=|| view! {}>
                <SmallError errors=errors/>
            </Show>
            <div class="grid grid-cols-4 justify-items-stretch gap-4">
                <DashboardKpis kpis=state.kpis/>
            </div>
            <div class="grid grid-cols-2 justify-items-stretch gap-4">
                <DashboardRoomUsage series=state.charts.room_usage/>
                <DashboardDailyTrend series=state.charts.daily_trend/>
            </div>
        </div>
    }
}
