use booking_models::dtos::BookingStatus;
use leptos::*;

#[component]
pub fn Badge(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = format!(
        "whitespace-nowrap rounded-full bg-indigo-700 px-3 py-1 text-indigo-100 w-fit {class}"
    );
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn BookingStatusBadge(#[prop()] status: BookingStatus) -> impl IntoView {
    let (icon, label, class) = match &status {
        BookingStatus::Pending => ("iconoir-clock", "Menunggu".to_string(), "bg-yellow-600"),
        BookingStatus::Approved => ("iconoir-check-circle", "Disetujui".to_string(), "bg-emerald-600"),
        BookingStatus::Rejected => ("iconoir-minus-circle", "Ditolak".to_string(), "bg-red-600"),
        BookingStatus::Other(x) => ("iconoir-help-circle", x.clone(), "bg-slate-800"),
    };

    let icon = format!("{icon} mr-2");

    view! {
        <Badge class=class>
            <div class="flex items-center">
                <i class=icon></i>
                {label}
            </div>
        </Badge>
    }
}
