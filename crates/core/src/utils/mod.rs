pub mod month_utils;

pub use month_utils::{
    current_month_start, month_start, parse_date, parse_month, MonthWindow, DATE_FORMAT,
    MONTH_FORMAT,
};
