use crate::Orientation;

const BLOCK: &str = "DayPickerNavigation";

/// Which way a button moves the calendar.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum NavDirection {
  Prev,
  Next
}

/// How far a button moves the calendar.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum NavStep {
  Month,
  Year
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum NavAction {
  PrevMonth,
  NextMonth,
  PrevYear,
  NextYear
}

impl NavAction {
  pub fn all() -> [Self; 4] {
    [
      Self::PrevMonth,
      Self::NextMonth,
      Self::PrevYear,
      Self::NextYear
    ]
  }

  pub fn direction(self) -> NavDirection {
    match self {
      | Self::PrevMonth | Self::PrevYear => {
        NavDirection::Prev
      }
      | Self::NextMonth | Self::NextYear => {
        NavDirection::Next
      }
    }
  }

  pub fn step(self) -> NavStep {
    match self {
      | Self::PrevMonth | Self::NextMonth => {
        NavStep::Month
      }
      | Self::PrevYear | Self::NextYear => {
        NavStep::Year
      }
    }
  }
}

/// Built-in icon drawn when the caller supplies none.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum NavIcon {
  ArrowLeft,
  ArrowRight,
  ChevronUp,
  ChevronDown
}

impl NavIcon {
  pub fn slug(self) -> &'static str {
    match self {
      | Self::ArrowLeft => "arrow-left",
      | Self::ArrowRight => "arrow-right",
      | Self::ChevronUp => "chevron-up",
      | Self::ChevronDown => "chevron-down"
    }
  }

  pub fn default_for(
    direction: NavDirection,
    orientation: Orientation,
    is_rtl: bool
  ) -> Self {
    let mirrored =
      is_rtl && !orientation.is_vertical();
    match (
      direction,
      orientation.is_vertical(),
      mirrored
    ) {
      | (NavDirection::Prev, true, _) => {
        Self::ChevronUp
      }
      | (NavDirection::Next, true, _) => {
        Self::ChevronDown
      }
      | (NavDirection::Prev, false, false)
      | (NavDirection::Next, false, true) => {
        Self::ArrowLeft
      }
      | (NavDirection::Prev, false, true)
      | (NavDirection::Next, false, false) => {
        Self::ArrowRight
      }
    }
  }
}

/// Plain inputs the layout is derived from.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq,
)]
pub struct NavigationOptions {
  pub orientation:      Orientation,
  pub is_rtl:           bool,
  pub is_years_enabled: bool,
  pub has_custom_prev:  bool,
  pub has_custom_next:  bool
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
  pub action:  NavAction,
  /// `None` when the caller's custom icon is rendered instead.
  pub icon:    Option<NavIcon>,
  pub classes: Vec<&'static str>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationLayout {
  pub container_classes: Vec<&'static str>,
  pub buttons:           Vec<NavButton>
}

impl NavigationLayout {
  pub fn derive(
    options: &NavigationOptions
  ) -> Self {
    let orientation = options.orientation;
    let is_vertical =
      orientation.is_vertical();
    let is_vertical_scrollable =
      orientation.is_vertical_scrollable();

    let mut container_classes = vec![BLOCK];
    if !is_vertical {
      container_classes.push(
        "DayPickerNavigation--horizontal"
      );
    }
    if is_vertical {
      container_classes.push(
        "DayPickerNavigation--vertical"
      );
    }
    if is_vertical_scrollable {
      container_classes.push(
        "DayPickerNavigation--vertical-scrollable"
      );
    }
    if options.is_years_enabled {
      container_classes.push(
        "DayPickerNavigation--horizontal-with-years"
      );
    }

    let with_years = options
      .is_years_enabled
      && !is_vertical_scrollable;
    let actions: &[NavAction] =
      if with_years {
        &[
          NavAction::PrevMonth,
          NavAction::NextMonth,
          NavAction::PrevYear,
          NavAction::NextYear
        ]
      } else {
        &[
          NavAction::PrevMonth,
          NavAction::NextMonth
        ]
      };

    let buttons = actions
      .iter()
      .map(|action| {
        button_for(*action, options)
      })
      .collect();

    Self {
      container_classes,
      buttons
    }
  }

  pub fn has_year_buttons(&self) -> bool {
    self.buttons.iter().any(|button| {
      button.action.step()
        == NavStep::Year
    })
  }

  pub fn button(
    &self,
    action: NavAction
  ) -> Option<&NavButton> {
    self
      .buttons
      .iter()
      .find(|button| button.action == action)
  }
}

fn button_for(
  action: NavAction,
  options: &NavigationOptions
) -> NavButton {
  let direction = action.direction();
  let has_custom = match direction {
    | NavDirection::Prev => {
      options.has_custom_prev
    }
    | NavDirection::Next => {
      options.has_custom_next
    }
  };

  let icon = (!has_custom).then(|| {
    NavIcon::default_for(
      direction,
      options.orientation,
      options.is_rtl
    )
  });

  let (base, default_class, rtl_class) =
    match direction {
      | NavDirection::Prev => {
        (
          "DayPickerNavigation__prev",
          "DayPickerNavigation__prev--default",
          "DayPickerNavigation__prev--rtl"
        )
      }
      | NavDirection::Next => {
        (
          "DayPickerNavigation__next",
          "DayPickerNavigation__next--default",
          "DayPickerNavigation__next--rtl"
        )
      }
    };
  let step_class = match action {
    | NavAction::PrevMonth => {
      "DayPickerNavigation__prev--month"
    }
    | NavAction::NextMonth => {
      "DayPickerNavigation__next--month"
    }
    | NavAction::PrevYear => {
      "DayPickerNavigation__prev--year"
    }
    | NavAction::NextYear => {
      "DayPickerNavigation__next--year"
    }
  };

  let mut classes = vec![base];
  if icon.is_some() {
    classes.push(default_class);
  }
  if options.is_rtl {
    classes.push(rtl_class);
  }
  classes.push(step_class);

  NavButton {
    action,
    icon,
    classes
  }
}
