use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Length bounds for a name field, in characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthRule {
    pub min: usize,
    pub max: usize,
}

/// Accepted range for the date of birth. A missing `to` means "today".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRule {
    pub from: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

/// Accepted age range, inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeRule {
    pub min: u16,
    pub max: u16,
}

/// Accepted salary range. A missing `max` means unbounded above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRule {
    pub min: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
}

/// One complete named rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    pub first_name: LengthRule,
    pub last_name: LengthRule,
    pub date_of_birth: DateRule,
    pub age: AgeRule,
    pub salary: SalaryRule,
    /// Allowed gender markers, compared case-insensitively. An empty list
    /// accepts any ASCII letter.
    pub gender: Vec<char>,
}

impl RuleSet {
    /// The built-in default rule set.
    pub fn default_rules() -> Self {
        RuleSet {
            first_name: LengthRule { min: 2, max: 60 },
            last_name: LengthRule { min: 2, max: 60 },
            date_of_birth: DateRule {
                from: NaiveDate::from_ymd_opt(1950, 1, 1).expect("valid date"),
                to: None,
            },
            age: AgeRule { min: 0, max: 120 },
            salary: SalaryRule {
                min: Decimal::ZERO,
                max: Some(Decimal::new(1_000_000, 0)),
            },
            gender: vec!['M', 'F', 'W', 'N'],
        }
    }

    /// The built-in relaxed "custom" rule set.
    pub fn custom_rules() -> Self {
        RuleSet {
            first_name: LengthRule { min: 2, max: 100 },
            last_name: LengthRule { min: 2, max: 100 },
            date_of_birth: DateRule {
                from: NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid date"),
                to: None,
            },
            age: AgeRule { min: 0, max: 150 },
            salary: SalaryRule {
                min: Decimal::ZERO,
                max: None,
            },
            gender: Vec::new(),
        }
    }
}

/// Validation configuration: the two named rule sets.
///
/// An explicit struct passed to the validator constructor; there is no
/// process-wide rules state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub default: RuleSet,
    pub custom: RuleSet,
}

impl ValidationConfig {
    /// Load config from a specific path, falling back to the built-in rule
    /// sets when the file does not exist.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ValidationConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.filecab/validation-rules.toml)
    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        Ok(PathBuf::from(home)
            .join(".filecab")
            .join("validation-rules.toml"))
    }

    /// Look up a rule set by name.
    pub fn rule_set(&self, name: &str) -> Option<&RuleSet> {
        match name {
            "default" => Some(&self.default),
            "custom" => Some(&self.custom),
            _ => None,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            default: RuleSet::default_rules(),
            custom: RuleSet::custom_rules(),
        }
    }
}
