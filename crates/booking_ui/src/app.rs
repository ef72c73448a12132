use crate::{
    api,
    context::{AppDialog, AppDialogContent},
    pages::home::Home,
};
use leptos::{html::Dialog, *};

#[component]
pub fn App() -> impl IntoView {
    let app_dialog = create_node_ref::<Dialog>();
    let app_dialog_content: RwSignal<Option<View>> = create_rw_signal(None);

    provide_context(AppDialog(app_dialog));
    provide_context(AppDialogContent(app_dialog_content));

    let config = create_resource(|| (), |_| api::load_config());

    view! {
        <dialog _ref=app_dialog class="w-full h-full bg-transparent">
            <div class="h-full grid place-items-center">{move || app_dialog_content.get()}</div>
        </dialog>
        <div class="h-screen bg-slate-900 text-gray-200">
            <div class="h-screen flex bg-grid">
                {move || match config.get() {
                    Some(config) => view! { <Home config=config/> }.into_view(),
                    None => view! {
                        <div class="text-xl text-gray-400">"Loading..."</div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}
