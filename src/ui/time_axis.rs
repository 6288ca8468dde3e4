use chrono::NaiveDate;

/// Maps dates to horizontal pixels for the timeline and Gantt views.
#[derive(Debug, Clone)]
pub struct TimeAxis {
    /// The leftmost visible date.
    pub start: NaiveDate,
    /// The rightmost visible date.
    pub end: NaiveDate,
    /// Pixels per day (controls zoom level).
    pub pixels_per_day: f32,
}

impl TimeAxis {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            pixels_per_day: 18.0,
        }
    }

    /// Axis framing the given bounds with a week of lead-in and a month of
    /// tail room, or centered on today when there is nothing to show.
    pub fn around(bounds: Option<(NaiveDate, NaiveDate)>) -> Self {
        let today = chrono::Local::now().date_naive();
        let (min, max) = bounds.unwrap_or((today, today));
        Self::new(min - chrono::Duration::days(7), max + chrono::Duration::days(30))
    }

    /// Convert a date to an x-pixel offset from the axis start.
    pub fn date_to_x(&self, date: NaiveDate) -> f32 {
        let days = (date - self.start).num_days() as f32;
        days * self.pixels_per_day
    }

    /// Total width in pixels for the visible range.
    pub fn total_width(&self) -> f32 {
        self.date_to_x(self.end)
    }

    pub fn zoom_in(&mut self) {
        self.pixels_per_day = (self.pixels_per_day * 1.2).min(80.0);
    }

    pub fn zoom_out(&mut self) {
        self.pixels_per_day = (self.pixels_per_day / 1.2).max(2.0);
    }
}
