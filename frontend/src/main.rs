use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod error;
mod typewriter;
mod reveal {
    pub mod binding;
    pub mod evaluator;
    pub mod hooks;
    pub mod layout;
    pub mod scroll;
    pub mod store;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod cursor;
    pub mod projects;
    pub mod services;
}
mod pages {
    pub mod home;
}

use components::cursor::GlobalCursor;
use pages::home::Home;
use reveal::scroll::ScrollProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollProvider>
                <GlobalCursor />
                <Switch<Route> render={switch} />
            </ScrollProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
