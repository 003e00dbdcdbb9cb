// Domain layer: source records, read models, pipeline models and ports.

pub mod data;
pub mod model;
pub mod ports;
pub mod read_models;
pub mod salesforce;
