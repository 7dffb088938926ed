use crate::core::rating::DEFAULT_RATING_FORMAT;
use crate::core::registry::BackendOptions;
use crate::domain::model::ServiceKind;
use crate::utils::error::{Result, ToonError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service: Option<ServiceSection>,
    pub backends: Option<HashMap<String, BackendSection>>,
    pub display: Option<DisplaySection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSection {
    /// Service used when a request names none, or names one that cannot be built.
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendSection {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Template with a single `{}` placeholder for the value, e.g. `"평점 : {}"`.
    pub rating_format: Option<String>,
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ToonError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ToonError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MIRROR_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ToonError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Configured default service; Naver when unset.
    pub fn default_service(&self) -> Result<ServiceKind> {
        match self.service.as_ref().and_then(|s| s.default.as_deref()) {
            Some(name) => name.parse(),
            None => Ok(ServiceKind::default()),
        }
    }

    pub fn backend_options(&self) -> Result<Vec<(ServiceKind, BackendOptions)>> {
        let Some(backends) = &self.backends else {
            return Ok(Vec::new());
        };

        backends
            .iter()
            .map(|(name, section)| -> Result<(ServiceKind, BackendOptions)> {
                let kind: ServiceKind = name.parse()?;
                Ok((
                    kind,
                    BackendOptions {
                        base_url: section.base_url.clone(),
                    },
                ))
            })
            .collect()
    }

    pub fn rating_format(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.rating_format.as_deref())
            .unwrap_or(DEFAULT_RATING_FORMAT)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(name) = self.service.as_ref().and_then(|s| s.default.as_deref()) {
            name.parse::<ServiceKind>()
                .map_err(|_| ToonError::InvalidConfigValueError {
                    field: "service.default".to_string(),
                    value: name.to_string(),
                    reason: "Not a known service".to_string(),
                })?;
        }

        if let Some(backends) = &self.backends {
            for (name, section) in backends {
                name.parse::<ServiceKind>()
                    .map_err(|_| ToonError::InvalidConfigValueError {
                        field: "backends".to_string(),
                        value: name.clone(),
                        reason: "Not a known service".to_string(),
                    })?;
                if let Some(base_url) = &section.base_url {
                    validate_url(&format!("backends.{}.base_url", name), base_url)?;
                }
            }
        }

        if let Some(format) = self.display.as_ref().and_then(|d| d.rating_format.as_deref()) {
            validate_non_empty_string("display.rating_format", format)?;
            if format.matches("{}").count() != 1 {
                return Err(ToonError::InvalidConfigValueError {
                    field: "display.rating_format".to_string(),
                    value: format.to_string(),
                    reason: "Must contain exactly one {} placeholder".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
