pub mod api;
pub mod components;
pub mod config;
pub mod dom;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::wheel::WheelPage;

pub use dom::{attach_to_document, bind_spin_handler, SpinBinding};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Home => html! { <WheelPage /> },
       Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
   }
}
