use daypicker_gui_shared::NavIcon;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

fn icon_svg(
  icon: NavIcon,
  path: &'static str
) -> Html {
  let class = classes!(
    "DayPickerNavigation__svg",
    format!(
      "DayPickerNavigation__svg--{}",
      icon.slug()
    )
  );
  html! {
      <svg
          class={class}
          viewBox="0 0 24 24"
          width="16"
          height="16"
          aria-hidden="true"
          focusable="false"
      >
          <path
              d={path}
              fill="none"
              stroke="currentColor"
              stroke-linecap="round"
              stroke-linejoin="round"
              stroke-width="2"
          />
      </svg>
  }
}

#[function_component(ArrowLeftIcon)]
pub fn arrow_left_icon() -> Html {
  icon_svg(
    NavIcon::ArrowLeft,
    "M19 12H5M11 6l-6 6 6 6"
  )
}

#[function_component(ArrowRightIcon)]
pub fn arrow_right_icon() -> Html {
  icon_svg(
    NavIcon::ArrowRight,
    "M5 12h14M13 6l6 6-6 6"
  )
}

#[function_component(ChevronUpIcon)]
pub fn chevron_up_icon() -> Html {
  icon_svg(
    NavIcon::ChevronUp,
    "M6 15l6-6 6 6"
  )
}

#[function_component(ChevronDownIcon)]
pub fn chevron_down_icon() -> Html {
  icon_svg(
    NavIcon::ChevronDown,
    "M6 9l6 6 6-6"
  )
}

#[derive(Properties, PartialEq)]
pub struct NavIconProps {
  pub icon: NavIcon
}

/// Renders the built-in graphic for `icon`.
#[function_component(NavIconGraphic)]
pub fn nav_icon_graphic(
  props: &NavIconProps
) -> Html {
  match props.icon {
    | NavIcon::ArrowLeft => {
      html! { <ArrowLeftIcon /> }
    }
    | NavIcon::ArrowRight => {
      html! { <ArrowRightIcon /> }
    }
    | NavIcon::ChevronUp => {
      html! { <ChevronUpIcon /> }
    }
    | NavIcon::ChevronDown => {
      html! { <ChevronDownIcon /> }
    }
  }
}
