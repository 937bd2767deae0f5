use yew::prelude::*;

use crate::config::site_config;
use crate::reveal::scroll::{use_scroll_state, ScrollState};
use crate::typewriter::{use_typewriter, Phase};

const HEADING: &str = "O nama";

/// The hero counts as on screen until the page is scrolled `exit_vh`
/// viewports down. Before layout it is assumed visible.
pub fn hero_in_view(scroll: &ScrollState, exit_vh: f64) -> bool {
    !scroll.is_laid_out() || (scroll.offset as f64) < exit_vh * scroll.viewport_height as f64
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let config = site_config();
    let scroll = use_scroll_state();
    let in_view = hero_in_view(&scroll, config.hero_exit_vh);
    let typed = use_typewriter(AttrValue::from(HEADING), config.type_interval_ms, in_view);

    html! {
        <section class="about-section">
            <style>
                {r#"
                .about-section {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    background: linear-gradient(180deg, #6999c0 0%, #a48de2 100%);
                }
                .about-content {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .about-title {
                    font-family: var(--font-louis, sans-serif);
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.02em;
                    margin-bottom: 2rem;
                    min-height: 1.2em;
                }
                .type-cursor {
                    display: inline-block;
                    margin-left: 0.05em;
                    animation: blink 0.8s steps(1) infinite;
                }
                @keyframes blink {
                    50% { opacity: 0; }
                }
                .about-tagline {
                    max-width: 56rem;
                    font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.9);
                }
                "#}
            </style>
            <div class="noise-overlay"></div>
            <div class="about-content">
                <h1 class="about-title">
                    { typed.text.clone() }
                    {
                        if typed.phase == Phase::Typing {
                            html! { <span class="type-cursor">{"|"}</span> }
                        } else {
                            html! {}
                        }
                    }
                </h1>
                <p class="about-tagline">
                    {"između tebe i sveta, mi smo ta nit. Pomažemo brendovima da jasno komuniciraju, strateški nastupaju i snažno se povezuju sa zajednicom."}
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_leaves_view_after_the_exit_line() {
        assert!(hero_in_view(&ScrollState::new(0, 800), 0.9));
        assert!(hero_in_view(&ScrollState::new(719, 800), 0.9));
        assert!(!hero_in_view(&ScrollState::new(720, 800), 0.9));
    }

    #[test]
    fn hero_is_visible_before_layout() {
        assert!(hero_in_view(&ScrollState::new(5000, 0), 0.9));
    }
}
