pub mod avatar;
pub mod bottom_nav;
pub mod icon;
pub mod navbar;
pub mod toast;
