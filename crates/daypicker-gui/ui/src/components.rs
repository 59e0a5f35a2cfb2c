mod day_picker_navigation;
mod icons;

pub use day_picker_navigation::{
  DayPickerNavigation,
  DayPickerNavigationProps
};
pub use icons::{
  ArrowLeftIcon,
  ArrowRightIcon,
  ChevronDownIcon,
  ChevronUpIcon,
  NavIconGraphic,
  NavIconProps
};
