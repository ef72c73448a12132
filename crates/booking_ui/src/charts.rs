use booking_models::dtos::Room;
use leptos::*;
use rand::Rng;

/// Bars randomized on update, one per room.
pub const MAX_ROOM_BARS: usize = 4;
/// Upper bound (exclusive) of a randomized bar.
pub const ROOM_BAR_LIMIT: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(name: &'static str, labels: &[&str], values: &[f64]) -> Self {
        Self {
            name,
            labels: labels.iter().map(|x| x.to_string()).collect(),
            values: values.to_vec(),
        }
    }

    pub fn room_usage_seed() -> Self {
        Self::new(
            "Jumlah Booking",
            &["Kelas A", "Kelas B", "Lab Komputer", "Lab Teknik"],
            &[12.0, 19.0, 8.0, 5.0],
        )
    }

    pub fn daily_trend_seed() -> Self {
        Self::new(
            "Booking/Hari",
            &["Sen", "Sel", "Rab", "Kam", "Jum", "Sab"],
            &[8.0, 12.0, 15.0, 10.0, 18.0, 9.0],
        )
    }

    /// Labelled points, x starting at one. Labels without a value are not plotted.
    pub fn points(&self) -> Vec<ChartPoint> {
        self.labels
            .iter()
            .zip(self.values.iter())
            .enumerate()
            .map(|(i, (label, value))| ChartPoint {
                x: (i + 1) as f64,
                label: label.clone(),
                value: *value,
            })
            .collect()
    }

    /// Replaces the values with placeholder data for the first rooms. Returns
    /// false and leaves the series untouched when there are no rooms.
    pub fn randomize<R: Rng>(&mut self, rooms: usize, rng: &mut R) -> bool {
        if rooms == 0 {
            return false;
        }
        self.values = (0..rooms.min(MAX_ROOM_BARS))
            .map(|_| rng.gen_range(0..ROOM_BAR_LIMIT) as f64)
            .collect();
        true
    }
}

/// The two chart datasets owned by the dashboard.
#[derive(Copy, Clone)]
pub struct DashboardCharts {
    pub room_usage: RwSignal<ChartSeries>,
    pub daily_trend: RwSignal<ChartSeries>,
}

impl DashboardCharts {
    pub fn new() -> Self {
        Self {
            room_usage: create_rw_signal(ChartSeries::room_usage_seed()),
            daily_trend: create_rw_signal(ChartSeries::daily_trend_seed()),
        }
    }
}

/// Only the room usage chart follows the data, the daily trend keeps its seed.
pub fn update_charts(charts: &DashboardCharts, rooms: &[Room]) {
    let mut rng = rand::thread_rng();
    charts.room_usage.update(|series| {
        series.randomize(rooms.len(), &mut rng);
    });
}

#[cfg(test)]
mod tests {
    use super::{ChartSeries, MAX_ROOM_BARS};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn seeds_match_the_initial_charts() {
        let usage = ChartSeries::room_usage_seed();
        assert_eq!(usage.labels, vec!["Kelas A", "Kelas B", "Lab Komputer", "Lab Teknik"]);
        assert_eq!(usage.values, vec![12.0, 19.0, 8.0, 5.0]);

        let trend = ChartSeries::daily_trend_seed();
        assert_eq!(trend.labels.len(), 6);
        assert_eq!(trend.values, vec![8.0, 12.0, 15.0, 10.0, 18.0, 9.0]);
    }

    #[test]
    fn randomize_without_rooms_keeps_the_seed() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut series = ChartSeries::room_usage_seed();
        assert!(!series.randomize(0, &mut rng));
        assert_eq!(series, ChartSeries::room_usage_seed());
    }

    #[test]
    fn randomize_caps_bars_and_values() {
        let mut rng = StdRng::seed_from_u64(7);
        for rooms in [1, 3, 4, 10] {
            let mut series = ChartSeries::room_usage_seed();
            assert!(series.randomize(rooms, &mut rng));
            assert_eq!(series.values.len(), rooms.min(MAX_ROOM_BARS));
            assert!(series.values.iter().all(|x| (0.0..20.0).contains(x) && x.fract() == 0.0));
            assert_eq!(series.labels, ChartSeries::room_usage_seed().labels);
        }
    }

    #[test]
    fn points_pair_labels_with_values() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut series = ChartSeries::room_usage_seed();
        series.randomize(2, &mut rng);
        let points = series.points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x, 1.0);
        assert_eq!(points[0].label, "Kelas A");
        assert_eq!(points[1].x, 2.0);
        assert_eq!(points[1].label, "Kelas B");
    }
}
