// Domain layer module exports
// Entities and repository contracts, independent of infrastructure concerns

pub mod category;
pub mod question;
pub mod repositories;
