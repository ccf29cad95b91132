use yew::prelude::*;
use log::info;

mod config;
mod state;
mod components {
    pub mod controls;
    pub mod form_host;
    pub mod form_modal;
    pub mod icons;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting DataStream landing page");
    yew::Renderer::<App>::new().render();
}
