mod api;
mod app;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting taskbook frontend"
  );

  app::start();
}
