use crate::sections::{store_section, Section, SectionState};
use leptos::*;

#[component]
pub fn SidebarTop() -> impl IntoView {
    view! {
        <div class="bg-slate-800 flex flex-col items-center p-8">
            <div class="text-5xl text-indigo-500">
                <i class="iconoir-city"></i>
            </div>
            <div class="mt-4 text-xl font-semibold">"Booking Ruang"</div>
            <div class="text-sm text-gray-400">"Panel admin"</div>
        </div>
    }
}

/// Navigation control for one section.
#[component]
pub fn SidebarItem(
    #[prop()] section: Section,
    #[prop(into)] state: RwSignal<SectionState>,
) -> impl IntoView {
    let class = move || {
        let base = "py-4 px-8 hover:bg-slate-600 hover:cursor-pointer flex items-center text-left";
        if state.get().active() == section {
            format!("{base} bg-slate-600 sidebar-active")
        } else {
            base.to_string()
        }
    };
    view! {
        <button
            type="button"
            class=class
            on:click=move |_| {
                state.update(|x| x.select(section));
                store_section(section);
            }>
            <div class="text-2xl text-indigo-500">
                <i class=section.icon()></i>
            </div>
            <div class="ml-4">{section.label()}</div>
        </button>
    }
}

#[component]
pub fn Sidebar(children: Children) -> impl IntoView {
    view! {
        <aside class="bg-slate-700 w-64 shadow-md flex flex-col divide-y divide-slate-600">
            <SidebarTop/>
            <div class="grow flex flex-col divide-y divide-slate-600">{children()}</div>
        </aside>
    }
}
