pub mod button;
pub mod config_error;
pub mod container;
pub mod form_section;
pub mod hero_section;
pub mod landing_page;
