use crate::config::catalog_file::CATALOG_EXTENSIONS;
use crate::core::faults::DEFAULT_FAILURE_ONE_IN;
use crate::core::ranking::DEFAULT_TOP_K;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path,
    validate_positive_number, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "event-digest")]
#[command(about = "Ranks events for a customer and prints a recommendation digest")]
pub struct CliConfig {
    /// Catalog file (.toml or .csv); the built-in sample is used when omitted
    #[arg(long)]
    pub catalog: Option<String>,

    /// Override the customer's name
    #[arg(long)]
    pub customer_name: Option<String>,

    /// Override the customer's city
    #[arg(long)]
    pub customer_city: Option<String>,

    /// How many events the nearest passes keep
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    /// The failsafe pass fails one distance lookup in this many
    #[arg(long, default_value_t = DEFAULT_FAILURE_ONE_IN)]
    pub failure_one_in: u32,

    /// Seed for the failsafe pass; taken from the clock when omitted
    #[arg(long)]
    pub fault_seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the digest to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            customer_name: None,
            customer_city: None,
            top_k: DEFAULT_TOP_K,
            failure_one_in: DEFAULT_FAILURE_ONE_IN,
            fault_seed: None,
            format: OutputFormat::Text,
            output: None,
            verbose: false,
            log_json: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    fn customer_city(&self) -> Option<&str> {
        self.customer_city.as_deref()
    }

    fn top_k(&self) -> usize {
        self.top_k
    }

    fn failure_one_in(&self) -> u32 {
        self.failure_one_in
    }

    fn fault_seed(&self) -> Option<u64> {
        self.fault_seed
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("top_k", self.top_k, 1)?;
        validate_positive_number("failure_one_in", self.failure_one_in as usize, 1)?;

        if let Some(catalog) = &self.catalog {
            validate_path("catalog", catalog)?;
            validate_file_extensions("catalog", std::slice::from_ref(catalog), &CATALOG_EXTENSIONS)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        if let Some(name) = &self.customer_name {
            validate_non_empty_string("customer_name", name)?;
        }
        if let Some(city) = &self.customer_city {
            validate_non_empty_string("customer_city", city)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["event-digest"]);
        assert_eq!(config.top_k, 5);
        assert_eq!(config.failure_one_in, 4);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.catalog_path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_overrides() {
        let config = CliConfig::parse_from([
            "event-digest",
            "--catalog",
            "events.csv",
            "--customer-city",
            "Boston",
            "--top-k",
            "3",
            "--format",
            "json",
            "--fault-seed",
            "42",
        ]);
        assert_eq!(config.catalog_path(), Some("events.csv"));
        assert_eq!(config.customer_city(), Some("Boston"));
        assert_eq!(config.top_k(), 3);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.fault_seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = CliConfig {
            top_k: 0,
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            failure_one_in: 0,
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            catalog: Some("events.json".to_string()),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            customer_city: Some(" ".to_string()),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
