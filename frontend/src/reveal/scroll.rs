use log::{debug, error};
use yew::prelude::*;

use crate::dom::{self, ListenerGuard};

/// Vertical scroll offset and viewport height, in whole pixels.
///
/// A `viewport_height` of zero means the page has not been laid out yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u32,
    pub viewport_height: u32,
}

fn to_pixels(raw: f64) -> u32 {
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= u32::MAX as f64 {
        u32::MAX
    } else {
        raw.round() as u32
    }
}

impl ScrollState {
    pub fn new(offset: u32, viewport_height: u32) -> Self {
        Self { offset, viewport_height }
    }

    /// Builds a snapshot from the browser's floating point values. Overscroll
    /// (negative offsets on touch devices) and NaN collapse to zero.
    pub fn from_raw(scroll_y: f64, inner_height: f64) -> Self {
        Self::new(to_pixels(scroll_y), to_pixels(inner_height))
    }

    pub fn is_laid_out(&self) -> bool {
        self.viewport_height > 0
    }

    /// Reads the current position from the window. Unavailable values read as zero.
    pub fn read() -> Self {
        match dom::window() {
            Ok(window) => {
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let inner_height = window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                Self::from_raw(scroll_y, inner_height)
            }
            Err(_) => Self::default(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// The page's only scroll/resize subscription. Every section reads the same
/// snapshot from context instead of installing its own window listeners.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let scroll = use_state_eq(ScrollState::read);

    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let guard = dom::window().and_then(|window| {
                    ListenerGuard::attach(&window, &["scroll", "resize"], move |_| {
                        scroll.set(ScrollState::read());
                    })
                });
                let guard = match guard {
                    Ok(guard) => {
                        debug!("Scroll source attached to {:?}", guard.events());
                        Some(guard)
                    }
                    Err(e) => {
                        error!("Scroll source unavailable: {}", e);
                        None
                    }
                };

                move || {
                    debug!("Scroll source detached");
                    drop(guard);
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollState> context={*scroll}>
            { for props.children.iter() }
        </ContextProvider<ScrollState>>
    }
}

/// The injected scroll snapshot. Outside a provider nothing ever scrolls.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    use_context::<ScrollState>().unwrap_or_default()
}
