use super::actions::BookingCancelButton;
use crate::{
    components::badge::BookingStatusBadge,
    rows::{booking_rows, BookingRow, ListContent},
};
use booking_models::dtos::Booking;
use leptos::*;

#[component]
fn BookingCard(#[prop()] row: BookingRow) -> impl IntoView {
    let BookingRow {
        id,
        title,
        schedule,
        user_name,
        purpose,
        status,
    } = row;

    view! {
        <div class="bg-slate-800 p-6 rounded-lg shadow flex justify-between items-center">
            <div class="flex flex-col gap-1">
                <h3 class="font-semibold">{title}</h3>
                <p class="text-sm text-gray-400">{schedule}</p>
                {user_name.map(|x| view! { <p class="text-sm text-gray-400">{x}</p> })}
                {purpose.map(|x| view! { <p class="text-sm text-gray-300 italic">{x}</p> })}
            </div>
            <div class="flex items-center gap-4">
                {status.map(|x| view! { <BookingStatusBadge status=x/> })}
                <BookingCancelButton id=id/>
            </div>
        </div>
    }
}

#[component]
pub fn BookingsList(#[prop(into)] bookings: Signal<Vec<Booking>>) -> impl IntoView {
    view! {
        <div id="bookingsList" class="flex flex-col gap-4">
            {move || match booking_rows(&bookings.get()) {
                ListContent::Empty(message) => view! {
                    <p class="text-gray-400">{message}</p>
                }.into_view(),
                ListContent::Rows(rows) => rows
                    .into_iter()
                    .map(|row| view! { <BookingCard row=row/> })
                    .collect_view(),
            }}
        </div>
    }
}
