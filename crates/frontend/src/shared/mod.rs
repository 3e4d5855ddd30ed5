pub mod api_utils;
pub mod date_utils;
pub mod dialog;
pub mod icons;
pub mod number_format;
pub mod session;
pub mod theme;
pub mod transition;
