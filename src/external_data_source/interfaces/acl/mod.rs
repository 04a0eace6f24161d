pub mod external_data_source;
pub mod interaction_system_facade;
pub mod otp_connector_facade;
