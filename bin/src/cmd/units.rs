//! Units command implementation.

use fred_api::Units;

/// Print every units code with its description.
pub(crate) fn list_units() {
    println!("{:<6} Description", "Code");
    println!("{}", "-".repeat(52));
    for units in Units::ALL {
        println!("{:<6} {}", units.as_str(), units.description());
    }
}
