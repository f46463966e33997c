pub mod use_in_view;
pub mod use_section_visibility;

pub use use_in_view::{use_in_view, IntersectionViewportObserver};
pub use use_section_visibility::use_section_visibility;
