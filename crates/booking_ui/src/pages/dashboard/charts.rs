use crate::{
    charts::{ChartPoint, ChartSeries},
    components::card::Card,
};
use leptos::*;
use leptos_chartistry::*;

#[component]
fn ChartLabels(#[prop(into)] points: Signal<Vec<ChartPoint>>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-x-6 text-sm text-gray-400">
            {move || points
                .get()
                .into_iter()
                .map(|p| view! { <div>{format!("{}: {}", p.x, p.label)}</div> })
                .collect_view()
            }
        </div>
    }
}

#[component]
pub fn DashboardRoomUsage(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    let name = series.get_untracked().name;
    let data = Signal::derive(move || series.get().points());
    let chart = Series::new(|p: &ChartPoint| p.x)
        .bar(Bar::new(|p: &ChartPoint| p.value).with_name(name));

    view! {
        <Card>
            <div id="roomChart" class="flex flex-col px-8 py-12">
                <div class="text-2xl">"Penggunaan Ruang"</div>
                <div class="text-gray-400 mb-8">"Jumlah booking per ruang"</div>
                <Chart
                    aspect_ratio=AspectRatio::from_outer_height(300.0, 1.6)
                    series=chart
                    data=data
                    left=TickLabels::aligned_floats()
                    bottom=Legend::end()
                    inner=[
                        AxisMarker::left_edge().into_inner(),
                        AxisMarker::bottom_edge().into_inner(),
                        YGridLine::default().into_inner(),
                    ]
                    tooltip=Tooltip::left_cursor()
                />
                <ChartLabels points=data/>
            </div>
        </Card>
    }
}

#[component]
pub fn DashboardDailyTrend(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    let name = series.get_untracked().name;
    let data = Signal::derive(move || series.get().points());
    let chart = Series::new(|p: &ChartPoint| p.x)
        .line(Line::new(|p: &ChartPoint| p.value).with_name(name));

    view! {
        <Card>
            <div id="trendChart" class="flex flex-col px-8 py-12">
                <div class="text-2xl">"Tren Pemesanan"</div>
                <div class="text-gray-400 mb-8">"Jumlah booking per hari"</div>
                <Chart
                    aspect_ratio=AspectRatio::from_outer_height(300.0, 1.6)
                    series=chart
                    data=data
                    left=TickLabels::aligned_floats()
                    bottom=Legend::end()
                    inner=[
                        AxisMarker::left_edge().into_inner(),
                        AxisMarker::bottom_edge().into_inner(),
                        YGridLine::default().into_inner(),
                    ]
                    tooltip=Tooltip::left_cursor()
                />
                <ChartLabels points=data/>
            </div>
        </Card>
    }
}
