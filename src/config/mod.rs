//! Configuration module for the employee backend.
//!
//! All configuration is loaded from environment variables once at startup.

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection URI (required)
    pub mongo_uri: String,
    /// Database holding the employee collection
    pub db_name: String,
    /// Collection with one document per employee
    pub collection_name: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Panics when `EMPLOYEE_MONGO_URI` is missing or `EMPLOYEE_BIND_ADDR`
    /// does not parse; the process cannot serve without them.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mongo_uri = env::var("EMPLOYEE_MONGO_URI").expect("EMPLOYEE_MONGO_URI must be set");

        let db_name = env::var("EMPLOYEE_DB_NAME").unwrap_or_else(|_| "employees_db".to_string());

        let collection_name =
            env::var("EMPLOYEE_COLLECTION").unwrap_or_else(|_| "employees".to_string());

        let bind_addr = env::var("EMPLOYEE_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:4444".to_string())
            .parse()
            .expect("Invalid EMPLOYEE_BIND_ADDR format");

        let log_level = env::var("EMPLOYEE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            mongo_uri,
            db_name,
            collection_name,
            bind_addr,
            log_level,
        }
    }
}
