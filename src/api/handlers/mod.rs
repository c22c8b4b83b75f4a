pub mod form;
pub mod health;
pub mod predict;

pub use form::form_page;
pub use health::health_check;
pub use predict::predict;
