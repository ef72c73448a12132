mod actions;
mod list;

use crate::{components::card::Card, forms::FormKind, pages::modal::OpenFormButton};
use booking_models::dtos::Room;
use leptos::*;
use list::RoomsList;

#[component]
pub fn Rooms(#[prop(into)] rooms: Signal<Vec<Room>>) -> impl IntoView {
    view! {
        <Card class="min-h-full">
            <div class="flex flex-col px-8 py-12">
                <div class="flex items-center gap-x-4">
                    <div class="grow flex flex-col">
                        <div class="text-2xl">"Daftar Ruang"</div>
                        <div class="text-gray-400 mb-8">
                            "Ruang kelas dan laboratorium yang dapat dipesan"
                        </div>
                    </div>
                    <div class="w-48">
                        <OpenFormButton kind=FormKind::Room/>
                    </div>
                </div>
                <RoomsList rooms=rooms/>
            </div>
        </Card>
    }
}
