use booking_models::dtos::{or_placeholder, Booking, BookingStatus, Room};

pub const NO_ROOMS: &str = "Tidak ada ruang";
pub const NO_BOOKINGS: &str = "Tidak ada pemesanan";
pub const DEFAULT_ROOM_NAME: &str = "Ruang";

/// What a list panel shows: either its placeholder message or one row per record.
#[derive(Debug, Clone, PartialEq)]
pub enum ListContent<T> {
    Empty(&'static str),
    Rows(Vec<T>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomRow {
    pub id: String,
    pub title: String,
    pub capacity: String,
    pub room_type: String,
    pub active: Option<bool>,
}

impl RoomRow {
    pub fn new(room: &Room) -> Self {
        Self {
            id: or_placeholder(room.id.as_ref()),
            title: room
                .name
                .clone()
                .filter(|x| !x.is_empty())
                .unwrap_or_else(|| DEFAULT_ROOM_NAME.to_string()),
            capacity: or_placeholder(room.capacity.as_ref()),
            room_type: or_placeholder(room.room_type.as_ref()),
            active: room.is_active,
        }
    }

    /// Availability label, only when the backend reports it.
    pub fn active_label(&self) -> Option<&'static str> {
        self.active.map(|x| if x { "Aktif" } else { "Nonaktif" })
    }

    pub fn capacity_line(&self) -> String {
        format!("Kapasitas: {} orang", self.capacity)
    }

    pub fn type_line(&self) -> String {
        format!("Tipe: {}", self.room_type)
    }

    pub fn edit_message(&self) -> String {
        format!("Edit Room #{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow {
    pub id: String,
    pub title: String,
    pub schedule: String,
    pub user_name: Option<String>,
    pub purpose: Option<String>,
    pub status: Option<BookingStatus>,
}

impl BookingRow {
    pub fn new(booking: &Booking) -> Self {
        Self {
            id: or_placeholder(booking.id.as_ref()),
            title: format!("Ruang #{}", or_placeholder(booking.room_id.as_ref())),
            schedule: format!(
                "📅 {} | ⏰ {} - {}",
                or_placeholder(booking.booking_date.as_ref()),
                or_placeholder(booking.start_time.as_ref()),
                or_placeholder(booking.end_time.as_ref()),
            ),
            user_name: booking.user_name.clone().filter(|x| !x.is_empty()),
            purpose: booking.purpose.clone().filter(|x| !x.is_empty()),
            status: booking.booking_status(),
        }
    }
}

/// Row actions guarded by a confirmation. Confirming only reloads the
/// dashboard, nothing is sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    DeleteRoom,
    CancelBooking,
}

impl RowAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::DeleteRoom => "Hapus?",
            Self::CancelBooking => "Batalkan?",
        }
    }

    /// Runs the confirmed action and returns its log line.
    pub fn confirmed(&self, id: &str, reload: impl FnOnce()) -> String {
        reload();
        match self {
            Self::DeleteRoom => format!("Delete of room #{id} confirmed"),
            Self::CancelBooking => format!("Cancellation of booking #{id} confirmed"),
        }
    }
}

pub fn room_rows(rooms: &[Room]) -> ListContent<RoomRow> {
    if rooms.is_empty() {
        return ListContent::Empty(NO_ROOMS);
    }
    ListContent::Rows(rooms.iter().map(RoomRow::new).collect())
}

pub fn booking_rows(bookings: &[Booking]) -> ListContent<BookingRow> {
    if bookings.is_empty() {
        return ListContent::Empty(NO_BOOKINGS);
    }
    ListContent::Rows(bookings.iter().map(BookingRow::new).collect())
}
