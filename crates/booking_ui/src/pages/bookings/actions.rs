use crate::{
    components::button::{Button, ButtonMode},
    context::{use_app_dialog, RefreshDashboard},
    rows::RowAction,
};
use leptos::{leptos_dom::logging, *};

/// Asks for confirmation and reloads. No cancel request is sent.
#[component]
pub fn BookingCancelButton(#[prop(into)] id: String) -> impl IntoView {
    let app_dialog = use_app_dialog();
    let refresh = use_context::<RefreshDashboard>();

    view! {
        <Button class="w-28" mode=ButtonMode::Danger on:click=move |_| {
            let Some(dialog) = app_dialog else {
                return;
            };
            let id = id.clone();
            dialog.confirm(
                RowAction::CancelBooking.prompt().to_string(),
                Callback::new(move |_| {
                    let line = RowAction::CancelBooking.confirmed(&id, || {
                        let _ = refresh.map(|x| x.set());
                    });
                    logging::console_log(&line);
                }),
            );
        }>"Batalkan"</Button>
    }
}
