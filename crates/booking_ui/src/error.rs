use crate::components::{button::Button, card::Card};
use leptos::{html::Dialog, *};

#[component]
pub fn Error(#[prop(into)] error: Signal<String>) -> impl IntoView {
    view! {
        <div class="text-red-500 text-center text-8xl">
            <i class="iconoir-cloud-xmark"></i>
        </div>
        <div class="text-center">"Terjadi kesalahan: " {move || error.get()}</div>
        <div class="text-center text-gray-400">"Silakan coba lagi nanti"</div>
    }
}

/// Banner listing the requests that failed during the last load.
#[component]
pub fn SmallError(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="flex items-center rounded-lg bg-red-500 p-2 gap-4">
            <div class="text-2xl">
                <i class="iconoir-cloud-xmark"></i>
            </div>
            <div class="flex flex-col">
                <div>"Gagal memuat sebagian data."</div>
                {move || errors
                    .get()
                    .into_iter()
                    .map(|e| view! { <div class="text-gray-200">{e}</div> })
                    .collect_view()
                }
            </div>
        </div>
    }
}

#[component]
pub fn ErrorDialog(
    #[prop(into)] dialog: NodeRef<Dialog>,
    #[prop(into)] error: Signal<String>,
) -> impl IntoView {
    view! {
        <Card class="flex flex-col gap-4 px-8 py-12 h-[600px] w-[500px]">
            <div class="grow">
                <Error error=error/>
            </div>
            <Button on:click=move |_| {
                let _ = dialog.get().map(|x| x.close());
            }>"Tutup"</Button>
        </Card>
    }
}
