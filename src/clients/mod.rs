pub mod shipstation_client;

pub use shipstation_client::ShipstationClient;
