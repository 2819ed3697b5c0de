pub mod observability;
pub mod youtube;
