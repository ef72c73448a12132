use crate::{
    api,
    components::{button::Button, card::Card},
    context::use_app_dialog,
    error::ErrorDialog,
};
use anyhow::{anyhow, Result};
use booking_config::BookingApiConfig;
use booking_models::dtos::{MonthlyReportQueryParams, ReportFormat};
use chrono::{Datelike, Local, NaiveDate};
use leptos::{leptos_dom::logging, *};

pub const GENERATE_REPORT_MESSAGE: &str = "Generate report dari /api/reports/monthly";

pub fn report_params(date: NaiveDate, format: ReportFormat) -> MonthlyReportQueryParams {
    MonthlyReportQueryParams::new(date.year(), date.month(), format)
}

/// Opens the monthly report of the current month in a new tab. The response is
/// left to the browser.
fn open_report(config: &BookingApiConfig, format: ReportFormat) -> Result<()> {
    let params = report_params(Local::now().date_naive(), format);
    let url = api::monthly_report_url(config, &params)?;
    logging::console_log(&format!("Opening report {url}"));
    window()
        .open_with_url_and_target(&url, "_blank")
        .map_err(|_| anyhow!("unable to open {url}"))?;
    Ok(())
}

#[component]
pub fn Reports(#[prop()] config: BookingApiConfig) -> impl IntoView {
    let app_dialog = use_app_dialog();
    let config = store_value(config);

    view! {
        <Card class="min-h-full">
            <div class="flex flex-col px-8 py-12 gap-8">
                <div class="flex flex-col">
                    <div class="text-2xl">"Laporan"</div>
                    <div class="text-gray-400">
                        "Laporan bulanan pemakaian ruang untuk bulan berjalan"
                    </div>
                </div>
                <div class="w-64">
                    <Button on:click=move |_| {
                        let Some(dialog) = app_dialog else {
                            return;
                        };
                        dialog.notice(GENERATE_REPORT_MESSAGE.to_string());
                    }>"Generate Laporan"</Button>
                </div>
                <div class="flex gap-4">
                    {ReportFormat::all()
                        .into_iter()
                        .map(|report_format| view! {
                            <div class="w-64">
                                <Button on:click=move |_| {
                                    let Err(e) = config.with_value(|x| open_report(x, report_format)) else {
                                        return;
                                    };
                                    logging::console_error(&e.to_string());
                                    let Some(dialog) = app_dialog else {
                                        return;
                                    };
                                    let node = dialog.node_ref();
                                    let error = e.to_string();
                                    dialog.show(view! {
                                        <ErrorDialog dialog=node error=Signal::derive(move || error.clone())/>
                                    }.into_view());
                                }>{format!("Unduh {}", report_format.label())}</Button>
                            </div>
                        })
                        .collect_view()
                    }
                </div>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::report_params;
    use booking_models::dtos::ReportFormat;
    use chrono::NaiveDate;

    #[test]
    fn report_params_use_calendar_year_and_one_based_month() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let params = report_params(date, ReportFormat::Pdf);
        assert_eq!(params.year, 2024);
        assert_eq!(params.month, 1);
        assert_eq!(params.format, ReportFormat::Pdf);

        let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let params = report_params(date, ReportFormat::Excel);
        assert_eq!((params.year, params.month), (2023, 12));
    }
}
