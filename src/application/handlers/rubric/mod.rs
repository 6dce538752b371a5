//! Rubric administration handlers.

mod rubric_admin;

pub use rubric_admin::RubricAdminHandler;
