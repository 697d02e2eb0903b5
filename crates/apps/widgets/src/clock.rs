//! Wall-clock snapshots and Gregorian calendar arithmetic shared by the clock surfaces.

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Column headers for a Sunday-first month grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Local wall-clock reading with a 1-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockSnapshot {
    /// Reads the browser clock; natively this is always the Unix epoch.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0,
            }
        }
    }

    /// `HH:MM:SS`, or `hh:MM:SS AM/PM` when `use_24_hour` is false.
    pub fn time_text(&self, use_24_hour: bool) -> String {
        if use_24_hour {
            return format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second);
        }
        let mut hour = self.hour % 12;
        if hour == 0 {
            hour = 12;
        }
        let suffix = if self.hour >= 12 { "PM" } else { "AM" };
        format!(
            "{:02}:{:02}:{:02} {}",
            hour, self.minute, self.second, suffix
        )
    }

    /// ISO `YYYY-MM-DD`.
    pub fn date_text(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// e.g. `Monday, January 15, 2024`.
    pub fn long_date_text(&self) -> String {
        format!(
            "{}, {} {}, {}",
            WEEKDAY_NAMES[weekday(self.year, self.month, self.day) as usize],
            month_name(self.month),
            self.day,
            self.year
        )
    }
}

/// English month name for a 1-based month; out-of-range months wrap.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.max(1) as usize - 1) % 12]
}

pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Day of week for a Gregorian date, `0` = Sunday.
pub fn weekday(year: u32, month: u32, day: u32) -> u32 {
    const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let month = month.clamp(1, 12);
    let year = if month < 3 { year.saturating_sub(1) } else { year };
    (year + year / 4 - year / 100 + year / 400 + OFFSETS[month as usize - 1] + day) % 7
}

/// Sunday-first month grid: leading `None` cells pad the first week.
pub fn month_grid(year: u32, month: u32) -> Vec<Option<u32>> {
    let leading = weekday(year, month, 1) as usize;
    std::iter::repeat(None)
        .take(leading)
        .chain((1..=days_in_month(year, month)).map(Some))
        .collect()
}

/// Steps a `(year, month)` pair by one month in either direction.
pub fn shift_month(year: u32, month: u32, forward: bool) -> (u32, u32) {
    match (forward, month) {
        (true, 12) => (year + 1, 1),
        (true, _) => (year, month + 1),
        (false, 1) => (year.saturating_sub(1), 12),
        (false, _) => (year, month - 1),
    }
}
