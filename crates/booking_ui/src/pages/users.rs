use crate::{components::card::Card, forms::FormKind, pages::modal::OpenFormButton};
use booking_models::dtos::UserRole;
use leptos::*;

#[component]
pub fn Users() -> impl IntoView {
    let roles = UserRole::all()
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <Card class="min-h-full">
            <div class="flex flex-col px-8 py-12">
                <div class="flex items-center gap-x-4">
                    <div class="grow flex flex-col">
                        <div class="text-2xl">"Pengguna"</div>
                        <div class="text-gray-400 mb-8">
                            "Akun yang dapat membuat pemesanan. Peran: " {roles}
                        </div>
                    </div>
                    <div class="w-48">
                        <OpenFormButton kind=FormKind::User/>
                    </div>
                </div>
            </div>
        </Card>
    }
}
