use leptos::*;

#[component]
pub fn Input(
    #[prop()] id: &'static str,
    #[prop()] input_type: Option<&'static str>,
    #[prop()] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            id=id
            name=id
            type=input_type
            class="border border-slate-800 bg-slate-600 rounded p-2 min-h-[45px] w-full"
            placeholder=placeholder />
    }
}

#[component]
pub fn Select(#[prop()] id: &'static str, #[prop()] options: Vec<String>) -> impl IntoView {
    view! {
        <select
            id=id
            name=id
            class="border border-slate-800 bg-slate-600 rounded min-h-[45px] px-2 py-3 w-full">
            {options
                .into_iter()
                .map(|x| view! { <option>{x}</option> })
                .collect_view()
            }
        </select>
    }
}
