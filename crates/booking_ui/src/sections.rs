use anyhow::{anyhow, Error, Result};
use booking_config::definitions::ACTIVE_SECTION_STORAGE_KEY;
use leptos::{leptos_dom::logging, window};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Dashboard,
    Rooms,
    Bookings,
    Users,
    Reports,
}

impl Section {
    pub fn all() -> [Self; 5] {
        [
            Self::Dashboard,
            Self::Rooms,
            Self::Bookings,
            Self::Users,
            Self::Reports,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Rooms => "rooms",
            Self::Bookings => "bookings",
            Self::Users => "users",
            Self::Reports => "reports",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Rooms => "Ruang",
            Self::Bookings => "Pemesanan",
            Self::Users => "Pengguna",
            Self::Reports => "Laporan",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Dashboard => "iconoir-presentation",
            Self::Rooms => "iconoir-home-simple-door",
            Self::Bookings => "iconoir-calendar",
            Self::Users => "iconoir-group",
            Self::Reports => "iconoir-page",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|x| x.id() == value)
            .ok_or_else(|| anyhow!("unknown section: {value}"))
    }
}

/// Tracks the single visible section of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionState {
    active: Section,
}

impl SectionState {
    pub fn new(active: Section) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn select(&mut self, section: Section) {
        self.active = section;
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.active == section
    }
}

pub fn restore_section(stored: Option<&str>) -> Section {
    stored.and_then(|x| x.parse().ok()).unwrap_or_default()
}

fn local_storage() -> Result<web_sys::Storage> {
    window()
        .local_storage()
        .map_err(|_| anyhow!("unable to find local storage"))?
        .ok_or_else(|| anyhow!("local storage not found"))
}

pub fn stored_section() -> Option<String> {
    local_storage()
        .and_then(|storage| {
            storage
                .get_item(ACTIVE_SECTION_STORAGE_KEY)
                .map_err(|_| anyhow!("unable to read the active section"))
        })
        .map_err(|e| logging::console_error(&e.to_string()))
        .ok()
        .flatten()
}

pub fn store_section(section: Section) {
    let res = local_storage().and_then(|storage| {
        storage
            .set_item(ACTIVE_SECTION_STORAGE_KEY, section.id())
            .map_err(|_| anyhow!("unable to store the active section"))
    });
    if let Err(e) = res {
        logging::console_error(&e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::{restore_section, Section, SectionState};

    #[test]
    fn selecting_a_section_shows_only_that_section() {
        let visible = |state: &SectionState| {
            Section::all()
                .into_iter()
                .filter(|x| state.is_visible(*x))
                .collect::<Vec<_>>()
        };

        let mut state = SectionState::default();
        assert_eq!(visible(&state), vec![Section::Dashboard]);

        for section in Section::all() {
            state.select(section);
            assert_eq!(state.active(), section);
            assert_eq!(visible(&state), vec![section]);
        }
    }

    #[test]
    fn section_ids_round_trip_through_parse() {
        for section in Section::all() {
            assert_eq!(section.id().parse::<Section>().unwrap(), section);
        }
        assert!("settings".parse::<Section>().is_err());
    }

    #[test]
    fn unknown_or_missing_stored_section_falls_back_to_dashboard() {
        assert_eq!(restore_section(None), Section::Dashboard);
        assert_eq!(restore_section(Some("settings")), Section::Dashboard);
        assert_eq!(restore_section(Some("reports")), Section::Reports);
    }
}
