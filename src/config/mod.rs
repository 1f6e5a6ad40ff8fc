use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

use crate::core::{BillingError, Result};
use crate::modules::billing::models::TaxConfig;

/// Venue-level billing defaults
///
/// Loaded once by the calling shell and turned into an explicit `TaxConfig`
/// per invocation; the calculator itself never reads ambient state.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Default GST rate in percent
    pub gst_rate_percent: Decimal,

    /// Report GST as equal CGST/SGST halves
    pub split_gst: bool,

    /// Default flat service charge added post-tax
    pub service_charge: Decimal,
}

impl BillingConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = BillingConfig {
            gst_rate_percent: env::var("GST_RATE_PERCENT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| BillingError::Configuration("Invalid GST_RATE_PERCENT".to_string()))?,
            split_gst: env::var("SPLIT_GST")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| BillingError::Configuration("Invalid SPLIT_GST".to_string()))?,
            service_charge: env::var("SERVICE_CHARGE")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .map_err(|_| BillingError::Configuration("Invalid SERVICE_CHARGE".to_string()))?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.gst_rate_percent < Decimal::ZERO {
            return Err(BillingError::Configuration(
                "GST rate must be non-negative".to_string(),
            ));
        }

        if self.service_charge < Decimal::ZERO {
            return Err(BillingError::Configuration(
                "Service charge must be non-negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Explicit tax configuration carrying these defaults
    pub fn tax_config(&self) -> Result<TaxConfig> {
        TaxConfig::new(self.gst_rate_percent, self.split_gst)
    }
}
