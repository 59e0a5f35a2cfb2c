//! DOM-free model of the day picker navigation control.
//!
//! Everything the Yew component renders is derived here from plain
//! values, so class names, icons and button order can be checked
//! without a browser.

mod config;
mod layout;
mod orientation;
mod phrases;

pub use config::NavigationConfig;
pub use layout::{
  NavAction,
  NavButton,
  NavDirection,
  NavIcon,
  NavStep,
  NavigationLayout,
  NavigationOptions
};
pub use orientation::Orientation;
pub use phrases::NavigationPhrases;
