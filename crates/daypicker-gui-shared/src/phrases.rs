use serde::{
  Deserialize,
  Serialize
};

use crate::NavAction;

/// Accessible labels for the navigation buttons.
///
/// Missing keys in a serialized form fall back to the English defaults.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(
  default,
  deny_unknown_fields,
  rename_all = "camelCase"
)]
pub struct NavigationPhrases {
  pub jump_to_prev_month: String,
  pub jump_to_next_month: String,
  pub jump_to_prev_year:  String,
  pub jump_to_next_year:  String
}

impl Default for NavigationPhrases {
  fn default() -> Self {
    Self {
      jump_to_prev_month:
        "Move backward to switch to the \
         previous month."
          .to_string(),
      jump_to_next_month:
        "Move forward to switch to the \
         next month."
          .to_string(),
      jump_to_prev_year:
        "Move backward to switch to the \
         previous year."
          .to_string(),
      jump_to_next_year:
        "Move forward to switch to the \
         next year."
          .to_string()
    }
  }
}

impl NavigationPhrases {
  pub fn label_for(
    &self,
    action: NavAction
  ) -> &str {
    match action {
      | NavAction::PrevMonth => {
        &self.jump_to_prev_month
      }
      | NavAction::NextMonth => {
        &self.jump_to_next_month
      }
      | NavAction::PrevYear => {
        &self.jump_to_prev_year
      }
      | NavAction::NextYear => {
        &self.jump_to_next_year
      }
    }
  }
}
