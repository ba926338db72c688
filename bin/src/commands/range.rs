//! Range command implementation.

use quoteline_lib::DateRange;

/// Print the half-open date range `year` resolves to.
pub(crate) fn show_range(year: i32) {
    match DateRange::for_year(year) {
        Some(range) => println!("{year}: {range} ({} days)", range.total_days()),
        None => println!("{year}: no data"),
    }
}
