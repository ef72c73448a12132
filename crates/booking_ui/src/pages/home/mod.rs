use crate::{
    api,
    charts::update_charts,
    components::sidebar::{Sidebar, SidebarItem},
    context::{DashboardState, FormModalState, RefreshDashboard},
    forms::ModalState,
    pages::{
        bookings::Bookings, dashboard::Dashboard, modal::FormModal, reports::Reports,
        rooms::Rooms, users::Users,
    },
    sections::{restore_section, stored_section, Section, SectionState},
};
use booking_config::BookingConfig;
use leptos::*;

#[component]
fn SectionPanel(
    #[prop()] section: Section,
    #[prop()] state: RwSignal<SectionState>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=section.id() class:hidden=move || !state.get().is_visible(section)>
            {children()}
        </section>
    }
}

/// Dashboard controller: loads rooms and bookings, keeps the derived state and
/// renders every section of the page.
#[component]
pub fn Home(#[prop()] config: BookingConfig) -> impl IntoView {
    let BookingConfig {
        api: api_config,
        dashboard,
    } = config;
    let peak_hour = dashboard.peak_hour;

    let refresh = RefreshDashboard(create_rw_signal(()));
    let state = DashboardState::new(&peak_hour);
    let modal = create_rw_signal(ModalState::default());
    let section = create_rw_signal(SectionState::new(restore_section(
        stored_section().as_deref(),
    )));

    provide_context(refresh);
    provide_context(FormModalState(modal));

    let fetch_config = api_config.clone();
    let data = create_local_resource(|| (), move |_| {
        api::load_dashboard(fetch_config.clone())
    });

    let _ = watch(move || refresh.get(), move |_, _, _| data.refetch(), false);

    create_effect(move |_| {
        let Some(data) = data.get() else {
            return;
        };
        state.kpis.set(data.kpis(&peak_hour));
        update_charts(&state.charts, &data.rooms);
        state.rooms.set(data.rooms);
        state.bookings.set(data.bookings);
        state.errors.set(data.errors);
    });

    view! {
        <div class="size-full flex">
            <div class="grow-0 flex self-stretch">
                <Sidebar>
                    {Section::all()
                        .into_iter()
                        .map(|x| view! { <SidebarItem section=x state=section/> })
                        .collect_view()
                    }
                </Sidebar>
            </div>
            <main class="grow overflow-auto p-4">
                <SectionPanel section=Section::Dashboard state=section>
                    <Dashboard state=state/>
                </SectionPanel>
                <SectionPanel section=Section::Rooms state=section>
                    <Rooms rooms=state.rooms/>
                </SectionPanel>
                <SectionPanel section=Section::Bookings state=section>
                    <Bookings bookings=state.bookings/>
                </SectionPanel>
                <SectionPanel section=Section::Users state=section>
                    <Users/>
                </SectionPanel>
                <SectionPanel section=Section::Reports state=section>
                    <Reports config=api_config/>
                </SectionPanel>
            </main>
            <FormModal modal=modal rooms=state.rooms/>
        </div>
    }
}
