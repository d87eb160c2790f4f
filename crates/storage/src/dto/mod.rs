pub mod athlete;
pub mod common;
pub mod meet;
pub mod result;
