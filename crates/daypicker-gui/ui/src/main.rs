#![cfg_attr(
  not(target_arch = "wasm32"),
  allow(dead_code)
)]

mod demo;

#[cfg(target_arch = "wasm32")]
fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting day picker navigation demo"
  );

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
    .expect(
      "missing #app mount element"
    );

  yew::Renderer::<demo::DemoApp>::with_root(
    mount
  )
  .render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
  eprintln!(
    "daypicker-demo runs in the browser; \
     build it for wasm32-unknown-unknown \
     (for example with `trunk serve`)"
  );
}
