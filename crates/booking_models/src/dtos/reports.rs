use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Excel,
}

impl ReportFormat {
    pub fn all() -> [Self; 2] {
        [Self::Pdf, Self::Excel]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Excel => "Excel",
        }
    }
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReportQueryParams {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    pub format: ReportFormat,
}

impl MonthlyReportQueryParams {
    pub fn new(year: i32, month: u32, format: ReportFormat) -> Self {
        Self {
            year,
            month,
            format,
        }
    }

    pub fn pairs(&self) -> [(&'static str, String); 3] {
        [
            ("year", self.year.to_string()),
            ("month", self.month.to_string()),
            ("format", self.format.to_string()),
        ]
    }
}
