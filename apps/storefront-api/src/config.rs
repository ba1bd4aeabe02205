//! Configuration for the Storefront API

use core_config::{app_info, mongodb::MongoConfig, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// WhatsApp number orders are handed off to, international format
    /// without '+'
    pub whatsapp_number: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        let whatsapp_number = core_config::env_or_default("CHECKOUT_WHATSAPP_NUMBER", "2348000000000");

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            whatsapp_number,
        })
    }
}
