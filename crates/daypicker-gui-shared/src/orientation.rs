use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};

/// Layout mode of the navigation control.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
  #[default]
  Horizontal,
  Vertical,
  #[serde(alias = "vertical-scrollable")]
  VerticalScrollable
}

impl Orientation {
  pub fn all() -> [Self; 3] {
    [
      Self::Horizontal,
      Self::Vertical,
      Self::VerticalScrollable
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Horizontal => "horizontal",
      | Self::Vertical => "vertical",
      | Self::VerticalScrollable => {
        "verticalScrollable"
      }
    }
  }

  /// Anything other than horizontal stacks the months vertically.
  pub fn is_vertical(self) -> bool {
    self != Self::Horizontal
  }

  pub fn is_vertical_scrollable(
    self
  ) -> bool {
    self == Self::VerticalScrollable
  }
}

impl fmt::Display for Orientation {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

impl FromStr for Orientation {
  type Err = anyhow::Error;

  fn from_str(
    value: &str
  ) -> Result<Self, Self::Err> {
    match value.trim() {
      | "horizontal" => {
        Ok(Self::Horizontal)
      }
      | "vertical" => Ok(Self::Vertical),
      | "verticalScrollable"
      | "vertical-scrollable" => {
        Ok(Self::VerticalScrollable)
      }
      | other => {
        Err(anyhow!(
          "unknown orientation `{other}`; \
           expected horizontal, vertical \
           or verticalScrollable"
        ))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keys_parse_back_to_the_same_orientation(
  ) {
    for orientation in Orientation::all()
    {
      let parsed: Orientation = orientation
        .as_key()
        .parse()
        .expect("known key");
      assert_eq!(parsed, orientation);
    }
  }

  #[test]
  fn kebab_spelling_is_accepted() {
    let parsed: Orientation =
      "vertical-scrollable"
        .parse()
        .expect("kebab key");
    assert_eq!(
      parsed,
      Orientation::VerticalScrollable
    );
  }

  #[test]
  fn unknown_orientation_is_rejected() {
    let error = "diagonal"
      .parse::<Orientation>()
      .expect_err("must reject");
    assert!(
      error
        .to_string()
        .contains("diagonal")
    );
  }

  #[test]
  fn only_horizontal_is_not_vertical() {
    assert!(
      !Orientation::Horizontal
        .is_vertical()
    );
    assert!(
      Orientation::Vertical.is_vertical()
    );
    assert!(
      Orientation::VerticalScrollable
        .is_vertical()
    );
    assert!(
      !Orientation::Vertical
        .is_vertical_scrollable()
    );
  }
}
