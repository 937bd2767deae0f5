use yew::prelude::*;

use crate::components::{
    about::AboutSection, contact::ContactSection, projects::ProjectsSection,
    services::ServicesSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Start at the top so the typewriter and reveals begin from a clean pass.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="home">
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }
                body {
                    margin: 0;
                    font-family: var(--font-louis, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif);
                    cursor: none;
                }
                .home {
                    position: relative;
                    min-height: 100vh;
                    background: linear-gradient(135deg, #7dd3fc 0%, #a78bfa 50%, #8b5cf6 100%);
                }
                .page-noise,
                .noise-overlay {
                    pointer-events: none;
                    background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 500 500' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.8' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
                    background-size: cover;
                }
                .page-noise {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    opacity: 0.2;
                }
                .noise-overlay {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                }
                .sections {
                    position: relative;
                    z-index: 10;
                }
                "#}
            </style>
            <div class="page-noise"></div>
            <div class="sections">
                <AboutSection />
                <ServicesSection />
                <ProjectsSection />
                <ContactSection />
            </div>
        </main>
    }
}
