use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};

use crate::{
  NavigationOptions,
  NavigationPhrases,
  Orientation
};

/// Serialized configuration of the navigation control.
///
/// Keys use the camelCase spelling of the component props. Unknown keys
/// are rejected so a typo never silently falls back to a default.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
  pub orientation:      Orientation,
  #[serde(rename = "isRTL")]
  pub is_rtl:           bool,
  #[serde(rename = "isYearsEnabled")]
  pub is_years_enabled: bool,
  pub phrases:          NavigationPhrases
}

impl NavigationConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let config = toml::from_str::<Self>(raw)
      .context(
        "failed parsing navigation config \
         TOML"
      )?;
    tracing::debug!(
      orientation = %config.orientation,
      is_rtl = config.is_rtl,
      is_years_enabled = config.is_years_enabled,
      "parsed navigation config"
    );
    Ok(config)
  }

  #[tracing::instrument(skip(raw))]
  pub fn from_json_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let config =
      serde_json::from_str::<Self>(raw)
        .context(
          "failed parsing navigation \
           config JSON"
        )?;
    tracing::debug!(
      orientation = %config.orientation,
      is_rtl = config.is_rtl,
      is_years_enabled = config.is_years_enabled,
      "parsed navigation config"
    );
    Ok(config)
  }

  /// Layout inputs for this config given which custom icons are present.
  pub fn options(
    &self,
    has_custom_prev: bool,
    has_custom_next: bool
  ) -> NavigationOptions {
    NavigationOptions {
      orientation: self.orientation,
      is_rtl: self.is_rtl,
      is_years_enabled: self
        .is_years_enabled,
      has_custom_prev,
      has_custom_next
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_toml_yields_defaults() {
    let config =
      NavigationConfig::from_toml_str("")
        .expect("empty config");
    assert_eq!(
      config,
      NavigationConfig::default()
    );
    assert_eq!(
      config.orientation,
      Orientation::Horizontal
    );
    assert!(!config.is_rtl);
    assert!(!config.is_years_enabled);
  }

  #[test]
  fn toml_reads_camel_case_keys() {
    let config =
      NavigationConfig::from_toml_str(
        r#"
orientation = "verticalScrollable"
isRTL = true
isYearsEnabled = true

[phrases]
jumpToNextYear = "Next year"
"#
      )
      .expect("valid config");

    assert_eq!(
      config.orientation,
      Orientation::VerticalScrollable
    );
    assert!(config.is_rtl);
    assert!(config.is_years_enabled);
    assert_eq!(
      config.phrases.jump_to_next_year,
      "Next year"
    );
  }

  #[test]
  fn unknown_keys_are_rejected() {
    let error =
      NavigationConfig::from_toml_str(
        "isRtl = true\n"
      )
      .expect_err("misspelled key");
    assert!(
      format!("{error:#}")
        .contains("navigation config")
    );
  }

  #[test]
  fn mistyped_values_are_rejected() {
    assert!(
      NavigationConfig::from_json_str(
        r#"{"isYearsEnabled":"yes"}"#
      )
      .is_err()
    );
    assert!(
      NavigationConfig::from_json_str(
        r#"{"orientation":"diagonal"}"#
      )
      .is_err()
    );
  }

  #[test]
  fn json_accepts_kebab_orientation() {
    let config =
      NavigationConfig::from_json_str(
        r#"{"orientation":"vertical-scrollable","isRTL":false}"#
      )
      .expect("valid config");
    assert_eq!(
      config.orientation,
      Orientation::VerticalScrollable
    );
  }

  #[test]
  fn options_carry_custom_icon_flags() {
    let config = NavigationConfig {
      is_rtl: true,
      ..NavigationConfig::default()
    };
    let options =
      config.options(true, false);
    assert!(options.is_rtl);
    assert!(options.has_custom_prev);
    assert!(!options.has_custom_next);
  }
}
