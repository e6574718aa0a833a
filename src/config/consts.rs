// src/config/consts.rs

// Row lookup
pub const ROW_SELECTOR: &str = "tr[data-id]";
pub const ROW_ID_ATTR: &str = "data-id";

// Name lookup, relative to a row
pub const NAME_SELECTOR: &str = ".column-name";

// Stand-in when a row has no name element
pub const MISSING_NAME: &str = "N/A";
