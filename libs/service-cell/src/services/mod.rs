pub mod availability;
pub mod catalog;

#[cfg(test)]
mod availability_proptest;

pub use availability::AvailabilityService;
pub use catalog::CatalogService;
