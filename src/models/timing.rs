/// The daily confirmation window, hours as floats (13.5 = 13:30).
///
/// Stored as a singleton row. A window with end < start is a
/// misconfiguration: every non-admin confirmation simply fails the
/// inclusive check. Windows crossing midnight are not supported.
#[derive(Debug, Clone, Copy)]
pub struct LunchTiming {
    pub start_time: f64,
    pub end_time: f64,
}
