use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config::site_config;
use crate::content::SERVICES;
use crate::dom;
use crate::reveal::binding::{bind, Entrance};
use crate::reveal::evaluator::{Extent, RevealPolicy};
use crate::reveal::hooks::use_reveal;
use crate::reveal::layout::TargetId;
use crate::reveal::scroll::{use_scroll_state, ScrollState};
use crate::reveal::store::Rearm;

const SECTION_ID: &str = "services";

/// How fast each control point of the thread follows the scroll, and where
/// it stops, in viewport heights.
const THREAD_POINTS: [(f64, f64); 9] = [
    (0.05, 0.15),
    (0.1, 0.35),
    (0.15, 0.5),
    (0.2, 0.65),
    (0.25, 0.8),
    (0.3, 1.0),
    (0.35, 1.15),
    (0.375, 1.3),
    (0.4, 1.5),
];

#[derive(Clone, Debug, PartialEq)]
pub struct ThreadGeometry {
    pub height: f64,
    pub path: String,
}

/// SVG height and path of the thread hanging down the services list.
pub fn thread_geometry(scroll: &ScrollState, start_vh: f64) -> ThreadGeometry {
    let vh = scroll.viewport_height as f64;
    let grown = scroll.offset as f64 - vh * start_vh;
    if !scroll.is_laid_out() || grown <= 0.0 {
        return ThreadGeometry {
            height: 0.0,
            path: "M100 0 L100 0".to_string(),
        };
    }

    let y: Vec<f64> = THREAD_POINTS
        .iter()
        .map(|&(rate, limit)| (grown * rate).min(vh * limit))
        .collect();

    ThreadGeometry {
        height: y[8],
        path: format!(
            "M100 0 C180 {:.1} 40 {:.1} 20 {:.1} C0 {:.1} 200 {:.1} 180 {:.1} C160 {:.1} 120 {:.1} 100 {:.1}",
            y[0], y[1], y[2], y[3], y[4], y[5], y[6], y[7], y[8]
        ),
    }
}

fn scroll_to_services() {
    let element = match dom::document().map(|doc| doc.get_element_by_id(SECTION_ID)) {
        Ok(Some(element)) => element,
        Ok(None) => {
            warn!("No #{} element to scroll to", SECTION_ID);
            return;
        }
        Err(e) => {
            warn!("Cannot scroll to services: {}", e);
            return;
        }
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let config = site_config();
    let scroll = use_scroll_state();
    let ids: Vec<TargetId> = (0..SERVICES.len()).map(TargetId).collect();
    let policy = RevealPolicy::FractionalProgress {
        start: Extent::Viewports(config.services_start_vh),
        span: Extent::Viewports(config.services_span_vh),
        epsilon: config.services_epsilon,
    };
    let reveal = use_reveal(
        ids,
        policy,
        Rearm::OnScrollUp {
            slack_px: config.rearm_slack_px,
        },
    );
    let entrance = Entrance::SERVICE.with_stagger(config.services_stagger_ms);
    let thread = thread_geometry(&scroll, config.services_start_vh);
    let thread_opacity = reveal.progress().map_or(0.0, |p| (p * 4.0).min(1.0));

    let onclick = Callback::from(|_: MouseEvent| scroll_to_services());

    html! {
        <>
            <style>
                {r#"
                .thread {
                    position: fixed;
                    left: 50%;
                    top: 0;
                    z-index: 10;
                    transform: translateX(-50%);
                    pointer-events: none;
                }
                .thread svg {
                    overflow: visible;
                    transition: all 1s ease-out;
                }
                .scroll-button {
                    position: fixed;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 20;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                    font-size: 1.75rem;
                    cursor: pointer;
                    transition: background 0.3s;
                }
                .scroll-button:hover {
                    background: rgba(255, 255, 255, 0.3);
                }
                .services-section {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    background: linear-gradient(180deg, #a48de2 0%, #6999c0 100%);
                }
                .services-content {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .services-title {
                    text-align: center;
                    font-size: clamp(3.75rem, 9vw, 6rem);
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 4rem;
                }
                .service {
                    position: relative;
                    margin-bottom: 4rem;
                }
                .thread-dot {
                    position: absolute;
                    left: -1.5rem;
                    top: 2rem;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.4);
                    transform: scale(0.75);
                    transition: all 0.7s ease-out;
                }
                .thread-dot.revealed {
                    background: #fff;
                    transform: scale(1);
                    box-shadow: 0 0 20px rgba(255, 255, 255, 0.5);
                }
                .service-card {
                    border-radius: 1rem;
                    padding: 2rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: all 0.5s;
                }
                .service-card.revealed {
                    border-color: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(10px);
                }
                .service-number {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 1.125rem;
                    letter-spacing: 0.05em;
                    margin-bottom: 0.75rem;
                }
                .service-title {
                    font-size: clamp(1.875rem, 4vw, 2.25rem);
                    font-weight: 300;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .service-description {
                    font-size: 1.5rem;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.7);
                }
                "#}
            </style>
            <div class="thread" style={format!("opacity: {};", thread_opacity)}>
                <svg width="200" height={thread.height.to_string()}>
                    <defs>
                        <linearGradient id="threadGradient" x1="0%" y1="0%" x2="0%" y2="100%">
                            <stop offset="0%" stop-color="transparent" />
                            <stop offset="30%" stop-color="rgba(255,255,255,0.3)" />
                            <stop offset="100%" stop-color="rgba(255,255,255,0.6)" />
                        </linearGradient>
                    </defs>
                    <path d={thread.path} stroke="url(#threadGradient)" stroke-width="2" fill="none" />
                </svg>
            </div>

            <button class="scroll-button" aria-label="Scroll to services" {onclick}>{"⌄"}</button>

            <section id={SECTION_ID} class="services-section">
                <div class="noise-overlay"></div>
                <div class="services-content">
                    <h2 class="services-title">{"Services"}</h2>
                    {
                        SERVICES.iter().enumerate().map(|(index, service)| {
                            let id = TargetId(index);
                            let revealed = reveal.is_revealed(id);
                            let style = bind(&entrance, revealed, index).to_css();
                            html! {
                                <div key={service.title} ref={reveal.node_ref(id)} class="service" {style}>
                                    <div class={classes!("thread-dot", revealed.then(|| "revealed"))}></div>
                                    <div class={classes!("service-card", revealed.then(|| "revealed"))}>
                                        <div class="service-number">{format!("{:02}", index + 1)}</div>
                                        <h3 class="service-title">{service.title}</h3>
                                        <p class="service-description">{service.description}</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_is_flat_above_the_services() {
        let geometry = thread_geometry(&ScrollState::new(500, 800), 0.8);
        assert_eq!(geometry.height, 0.0);
        assert_eq!(geometry.path, "M100 0 L100 0");
    }

    #[test]
    fn thread_grows_with_scroll() {
        // 100px past the start line.
        let geometry = thread_geometry(&ScrollState::new(740, 800), 0.8);
        assert_eq!(geometry.height, 40.0);
        assert!(geometry.path.starts_with("M100 0 C180 5.0 40 10.0 20 15.0"));
        assert!(geometry.path.ends_with("100 40.0"));
    }

    #[test]
    fn thread_stops_at_one_and_a_half_viewports() {
        let geometry = thread_geometry(&ScrollState::new(100_000, 800), 0.8);
        assert_eq!(geometry.height, 1200.0);
        assert!(geometry.path.ends_with("C160 920.0 120 1040.0 100 1200.0"));
    }

    #[test]
    fn thread_needs_a_laid_out_viewport() {
        assert_eq!(thread_geometry(&ScrollState::new(900, 0), 0.8).height, 0.0);
    }
}
