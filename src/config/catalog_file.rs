use crate::core::{Catalog, Customer, Event};
use crate::utils::error::{DigestError, Result};
use crate::utils::validation::{validate_file_extensions, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CATALOG_EXTENSIONS: [&str; 2] = ["toml", "csv"];

/// On-disk catalog: an optional customer plus the events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub customer: Option<Customer>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct CsvEventRow {
    name: String,
    city: String,
    price: Option<u32>,
}

impl CatalogFile {
    /// 從檔案載入型錄，依副檔名決定格式
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display = path.to_string_lossy().to_string();
        validate_file_extensions("catalog", &[display], &CATALOG_EXTENSIONS)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => {
                let reader = csv::Reader::from_path(path)?;
                Self::from_csv_reader(reader)
            }
            _ => {
                let content = std::fs::read_to_string(path)?;
                Self::from_toml_str(&content)
            }
        }
    }

    /// 從 TOML 字串解析型錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(csv::Reader::from_reader(content.as_bytes()))
    }

    fn from_csv_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut events = Vec::new();
        for row in reader.deserialize() {
            let row: CsvEventRow = row?;
            events.push(Event {
                name: row.name,
                city: row.city,
                price: row.price,
            });
        }
        Ok(Self {
            customer: None,
            events,
        })
    }

    /// 替換環境變數 (例如 ${CUSTOMER_CITY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DigestError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Turns the file into a catalog, falling back to `default_customer`
    /// when the file names none.
    pub fn into_catalog(self, default_customer: Customer) -> Catalog {
        Catalog {
            customer: self.customer.unwrap_or(default_customer),
            events: self.events,
        }
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("customer.name", &self.customer.name)?;
        validate_non_empty_string("customer.city", &self.customer.city)?;

        for (i, event) in self.events.iter().enumerate() {
            if event.name.trim().is_empty() {
                return Err(DigestError::ValidationError {
                    message: format!("event #{} in {} has an empty name", i + 1, event.city),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    const TOML_CATALOG: &str = r#"
[customer]
name = "Ms. Real"
city = "Boston"

[[events]]
name = "Metallica"
city = "Boston"
price = 9

[[events]]
name = "LadyGaGa"
city = "Chicago"
"#;

    #[test]
    fn test_parse_toml_catalog() {
        let file = CatalogFile::from_toml_str(TOML_CATALOG).unwrap();
        let customer = file.customer.clone().unwrap();

        assert_eq!(customer.city, "Boston");
        assert_eq!(file.events.len(), 2);
        assert_eq!(file.events[0].price, Some(9));
        assert_eq!(file.events[1].price, None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EVENT_DIGEST_TEST_CITY", "Washington");

        let content = r#"
[[events]]
name = "LadyGaGa"
city = "${EVENT_DIGEST_TEST_CITY}"

[[events]]
name = "Metallica"
city = "${EVENT_DIGEST_TEST_UNSET}"
"#;
        let file = CatalogFile::from_toml_str(content).unwrap();
        assert_eq!(file.events[0].city, "Washington");
        assert_eq!(file.events[1].city, "${EVENT_DIGEST_TEST_UNSET}");

        std::env::remove_var("EVENT_DIGEST_TEST_CITY");
    }

    #[test]
    fn test_parse_csv_catalog() {
        let content = "name,city,price\nMetallica,Boston,9\nLadyGaGa,Chicago,\n";
        let file = CatalogFile::from_csv_str(content).unwrap();

        assert!(file.customer.is_none());
        assert_eq!(file.events[0], Event::new("Metallica", "Boston").with_price(9));
        assert_eq!(file.events[1], Event::new("LadyGaGa", "Chicago"));
    }

    #[test]
    fn test_catalog_from_toml_file() {
        let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
        temp_file.write_all(TOML_CATALOG.as_bytes()).unwrap();

        let catalog = CatalogFile::from_file(temp_file.path())
            .unwrap()
            .into_catalog(Catalog::sample().customer);
        assert_eq!(catalog.customer.name, "Ms. Real");
        assert_eq!(catalog.events.len(), 2);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let err = CatalogFile::from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, DigestError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = CatalogFile::from_toml_str("[[events]]\nname = ").unwrap_err();
        assert!(matches!(err, DigestError::TomlError(_)));
    }

    #[test]
    fn test_catalog_validation() {
        assert!(Catalog::sample().validate().is_ok());

        let mut catalog = Catalog::sample();
        catalog.events[3].name = "  ".to_string();
        assert!(matches!(
            catalog.validate(),
            Err(DigestError::ValidationError { .. })
        ));

        let mut catalog = Catalog::sample();
        catalog.customer.city.clear();
        assert!(catalog.validate().is_err());
    }
}
