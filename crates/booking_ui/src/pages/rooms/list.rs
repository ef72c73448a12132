use super::actions::{RoomDeleteButton, RoomEditButton};
use crate::{
    components::badge::Badge,
    rows::{room_rows, ListContent, RoomRow},
};
use booking_models::dtos::Room;
use leptos::*;

#[component]
fn RoomCard(#[prop()] row: RoomRow) -> impl IntoView {
    let capacity = row.capacity_line();
    let room_type = row.type_line();
    let active = row.active_label().map(|label| {
        let class = if row.active == Some(true) { "bg-emerald-600" } else { "bg-slate-600" };
        view! { <Badge class=class>{label}</Badge> }
    });
    let title = row.title.clone();
    let id = row.id.clone();
    view! {
        <div class="bg-slate-800 p-6 rounded-lg shadow flex flex-col">
            <div class="flex justify-between items-center gap-2">
                <h3 class="font-semibold">{title}</h3>
                {active}
            </div>
            <p class="text-sm text-gray-400 mt-2">{capacity}</p>
            <p class="text-sm text-gray-400">{room_type}</p>
            <div class="mt-4 flex gap-2">
                <RoomEditButton row=row/>
                <RoomDeleteButton id=id/>
            </div>
        </div>
    }
}

#[component]
pub fn RoomsList(#[prop(into)] rooms: Signal<Vec<Room>>) -> impl IntoView {
    view! {
        <div id="roomsList" class="grid grid-cols-3 gap-4">
            {move || match room_rows(&rooms.get()) {
                ListContent::Empty(message) => view! {
                    <p class="text-gray-400">{message}</p>
                }.into_view(),
                ListContent::Rows(rows) => rows
                    .into_iter()
                    .map(|row| view! { <RoomCard row=row/> })
                    .collect_view(),
            }}
        </div>
    }
}
