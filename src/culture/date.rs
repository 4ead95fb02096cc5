/// Culture specific names and patterns used when parsing dates and times.
///
/// Patterns use the custom format specifiers understood by
/// [`atomic::date_time`](crate::atomic::date_time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormat {
    /// Replaces `/` in patterns.
    pub date_separator: &'static str,
    /// Replaces `:` in patterns.
    pub time_separator: &'static str,
    /// Designator for hours before noon.
    pub am_designator: &'static str,
    /// Designator for hours after noon.
    pub pm_designator: &'static str,
    /// Full month names, January first.
    pub month_names: [&'static str; 12],
    /// Abbreviated month names, January first.
    pub abbreviated_month_names: [&'static str; 12],
    /// Full day names, Sunday first.
    pub day_names: [&'static str; 7],
    /// Abbreviated day names, Sunday first.
    pub abbreviated_day_names: [&'static str; 7],
    /// The `d` standard format.
    pub short_date_pattern: &'static str,
    /// The `D` standard format.
    pub long_date_pattern: &'static str,
    /// The `t` standard format.
    pub short_time_pattern: &'static str,
    /// The `T` standard format.
    pub long_time_pattern: &'static str,
    /// The `M` standard format.
    pub month_day_pattern: &'static str,
    /// The `Y` standard format.
    pub year_month_pattern: &'static str,
    /// Two digit years up to this value map into its century, later ones
    /// into the century before.
    pub two_digit_year_max: i32,
}

const INVARIANT_MONTHS: [&str; 12] = [
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

const INVARIANT_ABBREVIATED_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const INVARIANT_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const INVARIANT_ABBREVIATED_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl DateTimeFormat {
    pub(crate) const INVARIANT: Self = Self {
        date_separator: "/",
        time_separator: ":",
        am_designator: "AM",
        pm_designator: "PM",
        month_names: INVARIANT_MONTHS,
        abbreviated_month_names: INVARIANT_ABBREVIATED_MONTHS,
        day_names: INVARIANT_DAYS,
        abbreviated_day_names: INVARIANT_ABBREVIATED_DAYS,
        short_date_pattern: "MM/dd/yyyy",
        long_date_pattern: "dddd, dd MMMM yyyy",
        short_time_pattern: "HH:mm",
        long_time_pattern: "HH:mm:ss",
        month_day_pattern: "MMMM dd",
        year_month_pattern: "yyyy MMMM",
        two_digit_year_max: 2049,
    };

    /// The `F` standard format: the long date and long time patterns.
    pub fn full_date_time_pattern(&self) -> String {
        format!("{} {}", self.long_date_pattern, self.long_time_pattern)
    }
}

impl Default for DateTimeFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}
