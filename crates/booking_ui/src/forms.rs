use crate::rows::DEFAULT_ROOM_NAME;
use booking_models::dtos::{or_placeholder, Room, UserRole, ROOM_TYPES};
use std::fmt::{self, Display, Formatter};

pub const SUBMIT_ACKNOWLEDGEMENT: &str =
    "Form submitted! Feature akan diimplementasikan di backend";
pub const ROOM_SELECT_PROMPT: &str = "Pilih Ruang";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Room,
    Booking,
    User,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Booking => "booking",
            Self::User => "user",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Room => "Tambah Ruang",
            Self::Booking => "Buat Pemesanan",
            Self::User => "Tambah Pengguna",
        }
    }

    /// Field set of the form. The booking form lists the currently loaded rooms.
    pub fn fields(&self, rooms: &[Room]) -> Vec<FormField> {
        match self {
            Self::Room => vec![
                FormField::new("roomName", "Nama Ruang", FieldInput::Text(Some("Kelas A101"))),
                FormField::new("roomCapacity", "Kapasitas", FieldInput::Number(Some("40"))),
                FormField::new(
                    "roomType",
                    "Tipe",
                    FieldInput::Select(ROOM_TYPES.iter().map(|x| x.to_string()).collect()),
                ),
            ],
            Self::Booking => vec![
                FormField::new("bookingRoom", "Ruang", FieldInput::Select(room_options(rooms))),
                FormField::new("bookingDate", "Tanggal", FieldInput::Date),
                FormField::new("bookingStart", "Jam Mulai", FieldInput::Time),
                FormField::new("bookingEnd", "Jam Selesai", FieldInput::Time),
            ],
            Self::User => vec![
                FormField::new("userName", "Nama", FieldInput::Text(Some("Nama"))),
                FormField::new("userEmail", "Email", FieldInput::Email(Some("email@example.com"))),
                FormField::new(
                    "userRole",
                    "Role",
                    FieldInput::Select(UserRole::all().iter().map(|x| x.to_string()).collect()),
                ),
            ],
        }
    }
}

impl Display for FormKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn room_options(rooms: &[Room]) -> Vec<String> {
    let mut options = vec![ROOM_SELECT_PROMPT.to_string()];
    options.extend(rooms.iter().map(|room| match room.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("{DEFAULT_ROOM_NAME} #{}", or_placeholder(room.id.as_ref())),
    }));
    options
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(Option<&'static str>),
    Number(Option<&'static str>),
    Email(Option<&'static str>),
    Date,
    Time,
    Select(Vec<String>),
}

impl FieldInput {
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::Text(_) => Some("text"),
            Self::Number(_) => Some("number"),
            Self::Email(_) => Some("email"),
            Self::Date => Some("date"),
            Self::Time => Some("time"),
            Self::Select(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Text(x) | Self::Number(x) | Self::Email(x) => *x,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub input: FieldInput,
}

impl FormField {
    pub fn new(id: &'static str, label: &'static str, input: FieldInput) -> Self {
        Self { id, label, input }
    }
}

/// State of the shared form modal. At most one form is open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    kind: Option<FormKind>,
}

impl ModalState {
    pub fn open(&mut self, kind: FormKind) {
        self.kind = Some(kind);
    }

    pub fn close(&mut self) {
        self.kind = None;
    }

    pub fn is_open(&self) -> bool {
        self.kind.is_some()
    }

    pub fn kind(&self) -> Option<FormKind> {
        self.kind
    }

    /// Closes the modal and returns the submitted form kind. Nothing is
    /// persisted, the caller acknowledges and reloads the dashboard.
    pub fn submit(&mut self) -> Option<FormKind> {
        self.kind.take()
    }
}

/// Submits the open form: closes the modal and reloads once. A closed modal
/// submits nothing and does not reload.
pub fn submit_form(modal: &mut ModalState, reload: impl FnOnce()) -> Option<FormKind> {
    let kind = modal.submit()?;
    reload();
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_models::dtos::RecordId;
    use std::cell::Cell;

    #[test]
    fn each_form_has_its_title_and_fields() {
        let ids = |kind: FormKind| {
            kind.fields(&[])
                .into_iter()
                .map(|x| x.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(FormKind::Room.title(), "Tambah Ruang");
        assert_eq!(ids(FormKind::Room), vec!["roomName", "roomCapacity", "roomType"]);
        assert_eq!(FormKind::Booking.title(), "Buat Pemesanan");
        assert_eq!(
            ids(FormKind::Booking),
            vec!["bookingRoom", "bookingDate", "bookingStart", "bookingEnd"]
        );
        assert_eq!(FormKind::User.title(), "Tambah Pengguna");
        assert_eq!(ids(FormKind::User), vec!["userName", "userEmail", "userRole"]);
    }

    #[test]
    fn select_fields_list_their_options() {
        let room_type = FormKind::Room.fields(&[]).remove(2);
        assert_eq!(
            room_type.input,
            FieldInput::Select(vec![
                "Kelas".to_string(),
                "Lab Komputer".to_string(),
                "Lab Teknik".to_string()
            ])
        );
        let role = FormKind::User.fields(&[]).remove(2);
        assert_eq!(
            role.input,
            FieldInput::Select(vec![
                "dosen".to_string(),
                "mahasiswa".to_string(),
                "staff".to_string()
            ])
        );
    }

    #[test]
    fn booking_room_select_lists_loaded_rooms_after_prompt() {
        let rooms = vec![
            Room {
                id: Some(RecordId::Number(1)),
                name: Some("Kelas A".to_string()),
                ..Default::default()
            },
            Room {
                id: Some(RecordId::Number(2)),
                ..Default::default()
            },
        ];
        let field = FormKind::Booking.fields(&rooms).remove(0);
        assert_eq!(
            field.input,
            FieldInput::Select(vec![
                "Pilih Ruang".to_string(),
                "Kelas A".to_string(),
                "Ruang #2".to_string()
            ])
        );
    }

    #[test]
    fn inputs_expose_type_and_placeholder() {
        let fields = FormKind::Room.fields(&[]);
        assert_eq!(fields[0].input.input_type(), Some("text"));
        assert_eq!(fields[0].input.placeholder(), Some("Kelas A101"));
        assert_eq!(fields[1].input.input_type(), Some("number"));
        assert_eq!(fields[1].input.placeholder(), Some("40"));
        assert_eq!(fields[2].input.input_type(), None);
        assert_eq!(FieldInput::Date.placeholder(), None);
    }

    #[test]
    fn submitting_closes_the_modal_once() {
        for kind in [FormKind::Room, FormKind::Booking, FormKind::User] {
            let mut modal = ModalState::default();
            modal.open(kind);
            assert!(modal.is_open());
            assert_eq!(modal.kind(), Some(kind));
            assert_eq!(modal.submit(), Some(kind));
            assert!(!modal.is_open());
            assert_eq!(modal.submit(), None);
        }
    }

    #[test]
    fn submitting_a_form_closes_it_and_reloads_once() {
        for kind in [FormKind::Room, FormKind::Booking, FormKind::User] {
            let reloads = Cell::new(0);
            let mut modal = ModalState::default();
            modal.open(kind);
            let submitted = submit_form(&mut modal, || reloads.set(reloads.get() + 1));
            assert_eq!(submitted, Some(kind));
            assert!(!modal.is_open());
            assert_eq!(reloads.get(), 1);

            assert_eq!(submit_form(&mut modal, || reloads.set(reloads.get() + 1)), None);
            assert_eq!(reloads.get(), 1);
        }
    }

    #[test]
    fn opening_another_form_replaces_the_current_one() {
        let mut modal = ModalState::default();
        modal.open(FormKind::Room);
        modal.open(FormKind::User);
        assert_eq!(modal.kind(), Some(FormKind::User));
        modal.close();
        assert_eq!(modal.kind(), None);
    }
}
