/// ANSI color helper utilities for terminal output.
use crate::models::record_state::RecordState;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// State coloring: draft grey, requested yellow, confirmed green,
/// cancelled red.
pub fn colorize_state(state: RecordState) -> String {
    let color = match state {
        RecordState::Draft => GREY,
        RecordState::Requested => YELLOW,
        RecordState::Confirmed => GREEN,
        RecordState::Cancelled => RED,
    };
    format!("{color}{}{RESET}", state.label())
}
