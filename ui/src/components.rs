pub mod icons;
pub mod layout;
pub mod logo;
pub mod toaster;
