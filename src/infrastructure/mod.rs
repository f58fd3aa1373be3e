// Infrastructure layer module exports
// Concrete adapters for the domain's repository contracts

pub mod repositories;
