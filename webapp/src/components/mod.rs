pub mod icons;
pub mod photo_modal;
