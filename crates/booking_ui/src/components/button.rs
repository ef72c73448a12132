use leptos::*;

#[derive(Default)]
pub enum ButtonMode {
    #[default]
    Default,
    Danger,
}

fn get_mode_classes(mode: ButtonMode) -> &'static str {
    match mode {
        ButtonMode::Default => "bg-indigo-600 hover:bg-indigo-700 focus:bg-indigo-700",
        ButtonMode::Danger => "bg-red-600 hover:bg-red-700 focus:bg-red-700",
    }
}

#[component]
pub fn Button(
    #[prop(optional)] mode: ButtonMode,
    #[prop(into, optional)] class: String,
    #[prop(optional)] button_type: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let mode = get_mode_classes(mode);
    let class = format!("h-[40px] w-full flex-none rounded-lg p-2 focus:outline-none {mode} {class}");
    let button_type = button_type.unwrap_or("button");
    view! {
        <button type=button_type class=class>
            {children()}
        </button>
    }
}
