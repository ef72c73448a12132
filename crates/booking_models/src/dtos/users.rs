use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Dosen,
    Mahasiswa,
    Staff,
}

impl UserRole {
    pub fn all() -> [Self; 3] {
        [Self::Dosen, Self::Mahasiswa, Self::Staff]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dosen => "dosen",
            Self::Mahasiswa => "mahasiswa",
            Self::Staff => "staff",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
