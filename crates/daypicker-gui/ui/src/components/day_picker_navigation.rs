use daypicker_gui_shared::{
  NavAction,
  NavButton,
  NavDirection,
  NavigationLayout,
  NavigationOptions,
  NavigationPhrases,
  Orientation
};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::{
  Callback,
  Classes,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::icons::NavIconGraphic;

#[derive(Properties, PartialEq)]
pub struct DayPickerNavigationProps {
  /// Replaces the built-in previous icon on both previous buttons.
  #[prop_or_default]
  pub nav_prev:            Option<Html>,
  /// Replaces the built-in next icon on both next buttons.
  #[prop_or_default]
  pub nav_next:            Option<Html>,
  #[prop_or_default]
  pub orientation:         Orientation,
  #[prop_or_default]
  pub on_prev_month_click:
    Callback<MouseEvent>,
  #[prop_or_default]
  pub on_next_month_click:
    Callback<MouseEvent>,
  #[prop_or_default]
  pub on_prev_year_click:
    Callback<MouseEvent>,
  #[prop_or_default]
  pub on_next_year_click:
    Callback<MouseEvent>,
  #[prop_or_default]
  pub phrases:             NavigationPhrases,
  #[prop_or_default]
  pub is_rtl:              bool,
  #[prop_or_default]
  pub is_years_enabled:    bool
}

impl DayPickerNavigationProps {
  pub fn options(&self) -> NavigationOptions {
    NavigationOptions {
      orientation:      self.orientation,
      is_rtl:           self.is_rtl,
      is_years_enabled: self
        .is_years_enabled,
      has_custom_prev:  self
        .nav_prev
        .is_some(),
      has_custom_next:  self
        .nav_next
        .is_some()
    }
  }

  pub fn layout(&self) -> NavigationLayout {
    NavigationLayout::derive(
      &self.options()
    )
  }

  pub fn callback_for(
    &self,
    action: NavAction
  ) -> &Callback<MouseEvent> {
    match action {
      | NavAction::PrevMonth => {
        &self.on_prev_month_click
      }
      | NavAction::NextMonth => {
        &self.on_next_month_click
      }
      | NavAction::PrevYear => {
        &self.on_prev_year_click
      }
      | NavAction::NextYear => {
        &self.on_next_year_click
      }
    }
  }

  fn custom_icon(
    &self,
    direction: NavDirection
  ) -> Option<&Html> {
    match direction {
      | NavDirection::Prev => {
        self.nav_prev.as_ref()
      }
      | NavDirection::Next => {
        self.nav_next.as_ref()
      }
    }
  }
}

fn blur_current_target(event: MouseEvent) {
  match event
    .current_target()
    .and_then(|target| {
      target.dyn_into::<HtmlElement>().ok()
    }) {
    | Some(element) => {
      let _ = element.blur();
    }
    | None => {
      tracing::debug!(
        "mouseup target is not an html \
         element; skipping blur"
      );
    }
  }
}

fn render_button(
  props: &DayPickerNavigationProps,
  button: &NavButton
) -> Html {
  let icon = match button.icon {
    | Some(icon) => {
      html! { <NavIconGraphic {icon} /> }
    }
    | None => props
      .custom_icon(
        button.action.direction()
      )
      .cloned()
      .unwrap_or_default()
  };

  html! {
      <button
          type="button"
          aria-label={props.phrases.label_for(button.action).to_string()}
          class={button.classes.iter().copied().collect::<Classes>()}
          onclick={props.callback_for(button.action).clone()}
          onmouseup={Callback::from(blur_current_target)}
      >
          { icon }
      </button>
  }
}

#[function_component(DayPickerNavigation)]
pub fn day_picker_navigation(
  props: &DayPickerNavigationProps
) -> Html {
  tracing::trace!(
    orientation = %props.orientation,
    is_rtl = props.is_rtl,
    is_years_enabled = props.is_years_enabled,
    "rendering day picker navigation"
  );

  let layout = props.layout();

  html! {
      <div class={layout.container_classes.iter().copied().collect::<Classes>()}>
          {
              for layout.buttons.iter().map(|button| {
                  render_button(props, button)
              })
          }
      </div>
  }
}

#[cfg(test)]
mod tests {
  use daypicker_gui_shared::NavIcon;
  use yew::props;

  use super::*;

  fn noop() -> Callback<MouseEvent> {
    Callback::from(|_: MouseEvent| {})
  }

  #[test]
  fn each_action_routes_to_its_own_callback(
  ) {
    let prev_month = noop();
    let next_month = noop();
    let prev_year = noop();
    let next_year = noop();
    let props = props!(
      DayPickerNavigationProps {
        on_prev_month_click: prev_month.clone(),
        on_next_month_click: next_month.clone(),
        on_prev_year_click: prev_year.clone(),
        on_next_year_click: next_year.clone(),
        is_years_enabled: true
      }
    );

    let expected = [
      (NavAction::PrevMonth, &prev_month),
      (NavAction::NextMonth, &next_month),
      (NavAction::PrevYear, &prev_year),
      (NavAction::NextYear, &next_year)
    ];
    for (action, callback) in expected {
      assert!(
        props.callback_for(action)
          == callback,
        "{action:?} routed to the wrong \
         callback"
      );
      for (other, other_callback) in expected
      {
        if other != action {
          assert!(
            props.callback_for(action)
              != other_callback,
            "{action:?} shares a callback \
             with {other:?}"
          );
        }
      }
    }
  }

  #[test]
  fn custom_icons_switch_off_default_icons(
  ) {
    let props = props!(
      DayPickerNavigationProps {
        nav_next: Some(html! { <span>{ "next" }</span> }),
        is_rtl: true
      }
    );
    let layout = props.layout();
    let prev = layout
      .button(NavAction::PrevMonth)
      .expect("prev month button");
    let next = layout
      .button(NavAction::NextMonth)
      .expect("next month button");

    assert_eq!(
      prev.icon,
      Some(NavIcon::ArrowRight)
    );
    assert_eq!(next.icon, None);
    assert!(
      props
        .custom_icon(NavDirection::Next)
        .is_some()
    );
    assert!(
      props
        .custom_icon(NavDirection::Prev)
        .is_none()
    );
  }

  #[test]
  fn defaults_match_a_plain_horizontal_control(
  ) {
    let props =
      props!(DayPickerNavigationProps {});
    assert_eq!(
      props.options(),
      NavigationOptions::default()
    );
    assert_eq!(
      props.phrases,
      NavigationPhrases::default()
    );
    assert!(!props.layout().has_year_buttons());
  }
}
