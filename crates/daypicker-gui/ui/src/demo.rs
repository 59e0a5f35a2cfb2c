use chrono::{
  Datelike,
  Months,
  NaiveDate,
  Utc
};
use daypicker_gui_ui::{
  DayPickerNavigation,
  NavAction,
  NavigationConfig
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_state
};

const NAVIGATION_CONFIG_TOML: &str =
  include_str!("../assets/navigation.toml");

fn load_navigation_config()
-> NavigationConfig {
  match NavigationConfig::from_toml_str(
    NAVIGATION_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        orientation = %config.orientation,
        is_rtl = config.is_rtl,
        is_years_enabled = config.is_years_enabled,
        "loaded navigation config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(error = %format!("{error:#}"), "failed loading navigation config; using defaults");
      NavigationConfig::default()
    }
  }
}

fn first_of_month(
  date: NaiveDate
) -> NaiveDate {
  date.with_day(1).unwrap_or(date)
}

/// Moves the focused month as a parent of the navigation control would.
fn shift_focus(
  focus: NaiveDate,
  action: NavAction
) -> NaiveDate {
  let shifted = match action {
    | NavAction::PrevMonth => {
      focus
        .checked_sub_months(Months::new(1))
    }
    | NavAction::NextMonth => {
      focus
        .checked_add_months(Months::new(1))
    }
    | NavAction::PrevYear => {
      focus
        .checked_sub_months(Months::new(12))
    }
    | NavAction::NextYear => {
      focus
        .checked_add_months(Months::new(12))
    }
  };
  shifted.unwrap_or(focus)
}

#[function_component(DemoApp)]
pub fn demo_app() -> Html {
  let config =
    use_state(load_navigation_config);
  let focus = use_state(|| {
    first_of_month(
      Utc::now().date_naive()
    )
  });

  let on_action = |action: NavAction| {
    let focus = focus.clone();
    Callback::from(move |_: MouseEvent| {
      let next = shift_focus(*focus, action);
      tracing::debug!(
        ?action,
        from = %*focus,
        to = %next,
        "moving focused month"
      );
      focus.set(next);
    })
  };

  html! {
      <div class="demo" dir={if config.is_rtl { "rtl" } else { "ltr" }}>
          <div class="demo-month">{ focus.format("%B %Y").to_string() }</div>
          <DayPickerNavigation
              orientation={config.orientation}
              is_rtl={config.is_rtl}
              is_years_enabled={config.is_years_enabled}
              phrases={config.phrases.clone()}
              on_prev_month_click={on_action(NavAction::PrevMonth)}
              on_next_month_click={on_action(NavAction::NextMonth)}
              on_prev_year_click={on_action(NavAction::PrevYear)}
              on_next_year_click={on_action(NavAction::NextYear)}
          />
      </div>
  }
}
