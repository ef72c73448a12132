use crate::{
    components::{
        button::Button,
        card::Card,
        input::{Input, Select},
    },
    context::{use_app_dialog, FormModalState, RefreshDashboard},
    forms::{submit_form, FieldInput, FormField, FormKind, ModalState, SUBMIT_ACKNOWLEDGEMENT},
};
use booking_models::dtos::Room;
use leptos::{leptos_dom::logging, *};

#[component]
fn FormFieldInput(#[prop()] field: FormField) -> impl IntoView {
    let FormField { id, label, input } = field;
    let control = match input {
        FieldInput::Select(options) => view! { <Select id=id options=options/> }.into_view(),
        input => view! {
            <Input id=id input_type=input.input_type() placeholder=input.placeholder()/>
        }
        .into_view(),
    };

    view! {
        <div>
            <label class="block font-semibold mb-2" for=id>{label}</label>
            {control}
        </div>
    }
}

#[component]
pub fn OpenFormButton(#[prop()] kind: FormKind) -> impl IntoView {
    let modal = use_context::<FormModalState>();

    view! {
        <Button on:click=move |_| {
            let Some(FormModalState(modal)) = modal else {
                logging::console_error("Form modal state not found");
                return;
            };
            modal.update(|x| x.open(kind));
        }>{kind.title()}</Button>
    }
}

/// Fields of the open form. Only opening or closing a form rebuilds them, so a
/// reload of the rooms keeps what the user already typed.
fn open_form_fields(
    modal: RwSignal<ModalState>,
    rooms: Signal<Vec<Room>>,
) -> impl Fn() -> Option<Vec<FormField>> + Copy {
    move || modal.with(|x| x.kind()).map(|kind| kind.fields(&rooms.get_untracked()))
}

/// Shared modal of the room, booking and user forms. Submitting acknowledges,
/// closes and reloads the dashboard without sending anything to the backend.
#[component]
pub fn FormModal(
    #[prop()] modal: RwSignal<ModalState>,
    #[prop(into)] rooms: Signal<Vec<Room>>,
) -> impl IntoView {
    let app_dialog = use_app_dialog();
    let refresh = use_context::<RefreshDashboard>();
    let kind = move || modal.get().kind();
    let fields = open_form_fields(modal, rooms);

    view! {
        <div
            id="modal"
            class="fixed inset-0 bg-black/50 grid place-items-center"
            class:hidden=move || !modal.get().is_open()>
            <Card class="w-[500px]">
                <div class="flex flex-col px-8 py-12 gap-4">
                    <h2 id="modalTitle" class="text-2xl">
                        {move || kind().map(|x| x.title()).unwrap_or_default()}
                    </h2>
                    <form
                        id="modalForm"
                        class="flex flex-col gap-4"
                        data-type=move || kind().map(|x| x.as_str()).unwrap_or_default()
                        on:submit=move |ev: ev::SubmitEvent| {
                            ev.prevent_default();
                            let mut state = modal.get_untracked();
                            let submitted = submit_form(&mut state, || {
                                let _ = refresh.map(|x| x.set());
                            });
                            modal.set(state);
                            let Some(kind) = submitted else {
                                return;
                            };
                            logging::console_log(&format!("Form {kind} submitted"));
                            if let Some(dialog) = app_dialog {
                                dialog.notice(SUBMIT_ACKNOWLEDGEMENT.to_string());
                            }
                        }>
                        <div id="formFields" class="flex flex-col gap-4">
                            {move || fields().map(|fields| {
                                fields
                                    .into_iter()
                                    .map(|field| view! { <FormFieldInput field=field/> })
                                    .collect_view()
                            })}
                        </div>
                        <div class="flex items-stretch gap-x-4">
                            <Button button_type="submit">"Simpan"</Button>
                            <Button on:click=move |_| modal.update(|x| x.close())>"Batal"</Button>
                        </div>
                    </form>
                </div>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::open_form_fields;
    use crate::forms::{FieldInput, FormKind, ModalState};
    use booking_models::dtos::Room;
    use leptos::*;

    #[test]
    fn reloading_rooms_keeps_the_open_form() {
        let runtime = create_runtime();
        let rooms = create_rw_signal(Vec::<Room>::new());
        let modal = create_rw_signal(ModalState::default());
        let fields = open_form_fields(modal, rooms.into());
        let builds = create_rw_signal(0);
        create_render_effect(move |_| {
            let _ = fields();
            builds.update_untracked(|x| *x += 1);
        });
        assert_eq!(builds.get_untracked(), 1);

        modal.update(|x| x.open(FormKind::Booking));
        assert_eq!(builds.get_untracked(), 2);

        rooms.set(vec![Room {
            name: Some("Kelas A".to_string()),
            ..Default::default()
        }]);
        assert_eq!(builds.get_untracked(), 2);

        modal.update(|x| x.open(FormKind::Booking));
        assert_eq!(builds.get_untracked(), 3);
        let room_select = fields().map(|mut x| x.remove(0).input);
        assert_eq!(
            room_select,
            Some(FieldInput::Select(vec![
                "Pilih Ruang".to_string(),
                "Kelas A".to_string()
            ]))
        );

        runtime.dispose();
    }
}
