mod actions;
mod list;

use crate::{components::card::Card, forms::FormKind, pages::modal::OpenFormButton};
use booking_models::dtos::Booking;
use leptos::*;
use list::BookingsList;

#[component]
pub fn Bookings(#[prop(into)] bookings: Signal<Vec<Booking>>) -> impl IntoView {
    view! {
        <Card class="min-h-full">
            <div class="flex flex-col px-8 py-12">
                <div class="flex items-center gap-x-4">
                    <div class="grow flex flex-col">
                        <div class="text-2xl">"Daftar Pemesanan"</div>
                        <div class="text-gray-400 mb-8">
                            "Pemesanan ruang beserta tanggal dan jam pemakaian"
                        </div>
                    </div>
                    <div class="w-48">
                        <OpenFormButton kind=FormKind::Booking/>
                    </div>
                </div>
                <BookingsList bookings=bookings/>
            </div>
        </Card>
    }
}
