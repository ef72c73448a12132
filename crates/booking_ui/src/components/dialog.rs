use crate::components::{
    button::{Button, ButtonMode},
    card::Card,
};
use leptos::{html::Dialog, *};

/// Message with a single close button, used where a plain acknowledgement is enough.
#[component]
pub fn NoticeDialog(
    #[prop(into)] app_dialog: NodeRef<Dialog>,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <Card>
            <div class="flex flex-col px-8 py-12 gap-4 w-[500px] min-h-[250px]">
                <div class="grow">{message}</div>
                <Button on:click=move |_| {
                    let _ = app_dialog.get().map(|x| x.close());
                }>"OK"</Button>
            </div>
        </Card>
    }
}

#[component]
pub fn ConfirmDialog(
    #[prop(into)] app_dialog: NodeRef<Dialog>,
    #[prop(into)] message: String,
    #[prop()] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Card>
            <div class="flex flex-col px-8 py-12 gap-4 w-[500px] min-h-[250px]">
                <div class="grow">{message}</div>
                <div class="flex items-stretch gap-x-4">
                    <Button mode=ButtonMode::Danger on:click=move |_| {
                        let _ = app_dialog.get().map(|x| x.close());
                        on_confirm.call(());
                    }>"Ya"</Button>
                    <Button on:click=move |_| {
                        let _ = app_dialog.get().map(|x| x.close());
                    }>"Batal"</Button>
                </div>
            </div>
        </Card>
    }
}
