use serde::{Deserialize, Serialize};

/// The four summary values shown at the top of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub total_rooms: usize,
    pub total_bookings: usize,
    pub peak_hour: String,
    pub utilization: u64,
}

impl DashboardKpis {
    pub fn new(total_rooms: usize, total_bookings: usize, peak_hour: &str) -> Self {
        Self {
            total_rooms,
            total_bookings,
            peak_hour: peak_hour.to_string(),
            utilization: utilization(total_rooms, total_bookings),
        }
    }

    pub fn utilization_label(&self) -> String {
        format!("{}%", self.utilization)
    }
}

/// Bookings per room scaled by ten and rounded, zero when there are no rooms.
pub fn utilization(rooms: usize, bookings: usize) -> u64 {
    if rooms == 0 {
        return 0;
    }
    ((bookings as f64 / rooms as f64) * 10.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::{utilization, DashboardKpis};

    #[test]
    fn kpis_for_empty_collections() {
        let kpis = DashboardKpis::new(0, 0, "10:00-11:00");
        assert_eq!(kpis.total_rooms, 0);
        assert_eq!(kpis.total_bookings, 0);
        assert_eq!(kpis.peak_hour, "10:00-11:00");
        assert_eq!(kpis.utilization_label(), "0%");
    }

    #[test]
    fn utilization_scales_ratio_by_ten() {
        assert_eq!(utilization(5, 10), 20);
        assert_eq!(DashboardKpis::new(5, 10, "").utilization_label(), "20%");
    }

    #[test]
    fn utilization_rounds_half_up() {
        assert_eq!(utilization(4, 1), 3);
        assert_eq!(utilization(3, 1), 3);
        assert_eq!(utilization(3, 2), 7);
    }

    #[test]
    fn utilization_is_zero_without_rooms() {
        assert_eq!(utilization(0, 12), 0);
    }
}
