use log::error;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom::{self, ListenerGuard};
use crate::error::SiteError;

const DOT_RADIUS: i32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
    pub visible: bool,
}

pub fn cursor_style(pointer: &Pointer) -> String {
    format!(
        "transform: translate3d({}px, {}px, 0); opacity: {};",
        pointer.x - DOT_RADIUS,
        pointer.y - DOT_RADIUS,
        if pointer.visible { 1 } else { 0 }
    )
}

fn attach(pointer: UseStateHandle<Pointer>) -> Result<(ListenerGuard, ListenerGuard), SiteError> {
    let window = dom::window()?;
    let document = dom::document()?;

    let moves = {
        let pointer = pointer.clone();
        ListenerGuard::attach(&window, &["mousemove"], move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                pointer.set(Pointer {
                    x: mouse.client_x(),
                    y: mouse.client_y(),
                    visible: true,
                });
            }
        })?
    };

    let presence = ListenerGuard::attach(&document, &["mouseleave", "mouseenter"], move |event| {
        // Re-entering parks the dot at the origin until the next move.
        pointer.set(Pointer {
            visible: event.type_() == "mouseenter",
            ..Pointer::default()
        });
    })?;

    Ok((moves, presence))
}

/// A dot that follows the mouse and hides when it leaves the page.
#[function_component(GlobalCursor)]
pub fn global_cursor() -> Html {
    let pointer = use_state(Pointer::default);

    {
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |_| {
                let guards = match attach(pointer) {
                    Ok(guards) => Some(guards),
                    Err(e) => {
                        error!("Cursor disabled: {}", e);
                        None
                    }
                };
                move || drop(guards)
            },
            (),
        );
    }

    html! {
        <div class="global-cursor" style={cursor_style(&pointer)}>
            <style>
                {r#"
                .global-cursor {
                    position: fixed;
                    left: 0;
                    top: 0;
                    z-index: 50;
                    pointer-events: none;
                    will-change: transform, opacity;
                    transition: opacity 0.1s ease-out;
                }
                .global-cursor .dot {
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.8);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                "#}
            </style>
            <div class="dot"></div>
        </div>
    }
}
