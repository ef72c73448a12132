use crate::{
    charts::DashboardCharts,
    components::dialog::{ConfirmDialog, NoticeDialog},
    forms::ModalState,
};
use booking_models::dtos::{Booking, DashboardKpis, Room};
use leptos::{html::Dialog, leptos_dom::logging, *};

#[derive(Copy, Clone)]
pub struct AppDialog(pub NodeRef<Dialog>);

#[derive(Copy, Clone)]
pub struct AppDialogContent(pub RwSignal<Option<View>>);

/// Both halves of the application dialog, looked up once while a component is
/// created so that event handlers can open it later.
#[derive(Copy, Clone)]
pub struct AppDialogHandle {
    dialog: NodeRef<Dialog>,
    content: RwSignal<Option<View>>,
}

impl AppDialogHandle {
    pub fn node_ref(&self) -> NodeRef<Dialog> {
        self.dialog
    }

    pub fn show(&self, view: View) {
        self.content.set(Some(view));
        let _ = self.dialog.get().map(|x| x.show_modal());
    }

    pub fn notice(&self, message: String) {
        let dialog = self.dialog;
        self.show(view! { <NoticeDialog app_dialog=dialog message=message/> }.into_view());
    }

    pub fn confirm(&self, message: String, on_confirm: Callback<()>) {
        let dialog = self.dialog;
        self.show(
            view! { <ConfirmDialog app_dialog=dialog message=message on_confirm=on_confirm/> }
                .into_view(),
        );
    }
}

pub fn use_app_dialog() -> Option<AppDialogHandle> {
    let Some(AppDialog(dialog)) = use_context::<AppDialog>() else {
        logging::console_error("App dialog node ref not found");
        return None;
    };
    let Some(AppDialogContent(content)) = use_context::<AppDialogContent>() else {
        logging::console_error("App dialog content not found");
        return None;
    };
    Some(AppDialogHandle { dialog, content })
}

#[derive(Copy, Clone)]
pub struct RefreshDashboard(pub RwSignal<()>);

impl RefreshDashboard {
    pub fn get(&self) {
        self.0.get()
    }

    pub fn set(&self) {
        self.0.set(());
    }
}

#[derive(Copy, Clone)]
pub struct FormModalState(pub RwSignal<ModalState>);

/// Everything the dashboard renders from the last load.
#[derive(Copy, Clone)]
pub struct DashboardState {
    pub rooms: RwSignal<Vec<Room>>,
    pub bookings: RwSignal<Vec<Booking>>,
    pub kpis: RwSignal<DashboardKpis>,
    pub errors: RwSignal<Vec<String>>,
    pub charts: DashboardCharts,
}

impl DashboardState {
    pub fn new(peak_hour: &str) -> Self {
        Self {
            rooms: create_rw_signal(vec![]),
            bookings: create_rw_signal(vec![]),
            kpis: create_rw_signal(DashboardKpis::new(0, 0, peak_hour)),
            errors: create_rw_signal(vec![]),
            charts: DashboardCharts::new(),
        }
    }
}
