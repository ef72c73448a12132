use leptos::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub value: String,
    pub footnote: &'static str,
}

#[component]
pub fn KpiInfo(#[prop(into)] info: Signal<Info>) -> impl IntoView {
    view! {
        <div class="bg-slate-700 rounded-xl px-8 py-12 flex flex-col">
            <div class="text-xl grid grid-cols-2 items-center">
                <div class="grow">{move || info.get().title}</div>
                <div class="justify-self-end text-5xl text-indigo-400">
                    <i class=move || info.get().icon />
                </div>
            </div>
            <div id=move || info.get().id class="my-4 text-6xl">
                {move || info.get().value}
            </div>
            <div class="text-gray-400">
                {move || info.get().footnote}
            </div>
        </div>
    }
}
