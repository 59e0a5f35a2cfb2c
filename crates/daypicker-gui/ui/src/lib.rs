//! Yew rendition of the day picker navigation control.

mod components;

pub use components::{
  ArrowLeftIcon,
  ArrowRightIcon,
  ChevronDownIcon,
  ChevronUpIcon,
  DayPickerNavigation,
  DayPickerNavigationProps,
  NavIconGraphic,
  NavIconProps
};
pub use daypicker_gui_shared::{
  NavAction,
  NavIcon,
  NavigationConfig,
  NavigationPhrases,
  Orientation
};
