use super::{lenient_bool, lenient_id, lenient_integer, lenient_text, RecordId};
use serde::{Deserialize, Serialize};

/// Categories offered when adding a room.
pub const ROOM_TYPES: [&str; 3] = ["Kelas", "Lab Komputer", "Lab Teknik"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub capacity: Option<i64>,
    #[serde(default, rename = "type", deserialize_with = "lenient_text")]
    pub room_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_active: Option<bool>,
}
