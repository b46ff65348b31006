pub mod gateway;

pub use gateway::PaymentGateway;
