use crate::adapters::prompt::DEFAULT_MAX_ATTEMPTS;
use crate::core::transforms::{PrefixUppercase, TrimMode, DEFAULT_PREFIX};
use crate::utils::error::{FileTransformError, Result};
use crate::utils::validation::{
    validate_no_line_breaks, validate_path, validate_positive_number, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformerConfig {
    pub transform: TransformSection,
    pub prompt: PromptSection,
    pub monitoring: MonitoringSection,
    pub report: Option<ReportSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSection {
    pub prefix: String,
    pub trim: TrimMode,
    pub uppercase: bool,
}

impl Default for TransformSection {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            trim: TrimMode::default(),
            uppercase: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSection {
    pub max_attempts: usize,
}

impl Default for PromptSection {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringSection {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub path: String,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TransformerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| FileTransformError::from_io(path.as_ref(), e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FileTransformError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PREFIX})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn line_transform(&self) -> PrefixUppercase {
        PrefixUppercase::new(self.transform.prefix.clone())
            .with_trim(self.transform.trim)
            .with_uppercase(self.transform.uppercase)
    }

    pub fn max_attempts(&self) -> usize {
        self.prompt.max_attempts
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.enabled
    }

    pub fn report_path(&self) -> Option<&str> {
        self.report.as_ref().map(|r| r.path.as_str())
    }
}

impl Validate for TransformerConfig {
    fn validate(&self) -> Result<()> {
        validate_no_line_breaks("transform.prefix", &self.transform.prefix)?;
        validate_positive_number("prompt.max_attempts", self.prompt.max_attempts, 1)?;
        if let Some(report) = &self.report {
            validate_path("report.path", &report.path)?;
        }
        Ok(())
    }
}
