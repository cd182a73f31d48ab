pub mod configuration;
pub mod domains;
pub mod mailing_list_client;
pub mod routes;
pub mod startups;
pub mod submitter;
pub mod telemetry;
pub mod utils;
