use wheel_frontend::{attach_to_document, App};
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    // Pages that ship their own wheel markup only need the click handler.
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(binding) = attach_to_document(&document) {
            binding.forget();
            return;
        }
    }

    Renderer::<App>::new().render();
}
