use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

// textplots panics below these sizes
const MIN_WIDTH: u32 = 32;
const MIN_HEIGHT: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Replaces the generated title when set.
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub log_scale: bool,
    pub significant_digits: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 120,
            height: 40,
            title: None,
            x_label: "# of Unique Heroes".to_string(),
            y_label: "Probability".to_string(),
            log_scale: false,
            significant_digits: 6,
        }
    }
}

impl ChartConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let config: ChartConfig = serde_json::from_str(&json)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid chart configuration in {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_WIDTH {
            bail!("width {} is below the minimum of {}", self.width, MIN_WIDTH);
        }
        if self.height < MIN_HEIGHT {
            bail!("height {} is below the minimum of {}", self.height, MIN_HEIGHT);
        }
        if !(1..=17).contains(&self.significant_digits) {
            bail!(
                "significant_digits must be between 1 and 17, got {}",
                self.significant_digits
            );
        }
        Ok(())
    }

    pub fn title_for(&self, summons: u32, heroes: u32) -> String {
        let mut title = match &self.title {
            Some(title) => title.clone(),
            None => format!(
                "Unique Hero Distribution: {} summons, {} available heroes",
                summons, heroes
            ),
        };
        if self.log_scale {
            title.push_str(" (log scale)");
        }
        title
    }

    pub fn y_axis_label(&self) -> String {
        if self.log_scale {
            format!("log10({})", self.y_label)
        } else {
            self.y_label.clone()
        }
    }
}
