use crate::{
    components::button::{Button, ButtonMode},
    context::{use_app_dialog, RefreshDashboard},
    rows::{RoomRow, RowAction},
};
use leptos::{leptos_dom::logging, *};

#[component]
pub fn RoomEditButton(#[prop()] row: RoomRow) -> impl IntoView {
    let app_dialog = use_app_dialog();
    let message = row.edit_message();

    view! {
        <Button class="w-24" on:click=move |_| {
            let Some(dialog) = app_dialog else {
                return;
            };
            dialog.notice(message.clone());
        }>"Edit"</Button>
    }
}

/// Asks for confirmation and reloads. No delete request is sent.
#[component]
pub fn RoomDeleteButton(#[prop(into)] id: String) -> impl IntoView {
    let app_dialog = use_app_dialog();
    let refresh = use_context::<RefreshDashboard>();

    view! {
        <Button class="w-24" mode=ButtonMode::Danger on:click=move |_| {
            let Some(dialog) = app_dialog else {
                return;
            };
            let id = id.clone();
            dialog.confirm(
                RowAction::DeleteRoom.prompt().to_string(),
                Callback::new(move |_| {
                    let line = RowAction::DeleteRoom.confirmed(&id, || {
                        let _ = refresh.map(|x| x.set());
                    });
                    logging::console_log(&line);
                }),
            );
        }>"Hapus"</Button>
    }
}
