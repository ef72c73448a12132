use crate::components::kpi::{Info, KpiInfo};
use booking_models::dtos::DashboardKpis as Kpis;
use leptos::*;

#[component]
pub fn DashboardKpis(#[prop(into)] kpis: Signal<Kpis>) -> impl IntoView {
    let rooms = Signal::derive(move || Info {
        id: "totalRooms",
        icon: "iconoir-home-simple-door",
        title: "Total Ruang",
        value: kpis.get().total_rooms.to_string(),
        footnote: "Ruang kelas dan laboratorium yang terdaftar",
    });

    let bookings = Signal::derive(move || Info {
        id: "totalBookings",
        icon: "iconoir-calendar",
        title: "Total Pemesanan",
        value: kpis.get().total_bookings.to_string(),
        footnote: "Seluruh pemesanan ruang yang tercatat",
    });

    let peak_hour = Signal::derive(move || Info {
        id: "peakHour",
        icon: "iconoir-clock",
        title: "Jam Sibuk",
        value: kpis.get().peak_hour,
        footnote: "Rentang waktu dengan pemesanan terbanyak",
    });

    let utilization = Signal::derive(move || Info {
        id: "utilization",
        icon: "iconoir-percentage-circle",
        title: "Utilisasi",
        value: kpis.get().utilization_label(),
        footnote: "Rasio pemesanan terhadap jumlah ruang",
    });

    view! {
        <KpiInfo info=rooms />
        <KpiInfo info=bookings />
        <KpiInfo info=peak_hour />
        <KpiInfo info=utilization />
    }
}
