use serde::Deserialize;

use crate::access::{RouteRule, RouteTable};
use crate::errors::AppResult;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    pub payment: PaymentConfig,
    pub routes: Vec<RouteRule>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    pub pickup_price_rupees: u32,
    pub currency: String,
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn route_table(&self) -> RouteTable {
        RouteTable::new(self.routes.clone())
    }
}
