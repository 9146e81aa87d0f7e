//! Maps lookup errors to the status messages shown to the user.

mod weather;
