//! Presentation hooks the engine calls into.
//!
//! The engine never touches a presentation surface. It emits intents through
//! [`RenderAdapter`]; each host interprets them for its own backend.

/// Hooks implemented by a presentation backend.
///
/// Every hook is infallible from the engine's point of view. Backends that
/// can fail should log and carry on.
pub trait RenderAdapter {
    /// Whether the slider container is on screen.
    ///
    /// Engines mounted while invisible stay dormant until the host calls
    /// `on_visible`.
    fn is_visible(&self) -> bool {
        true
    }

    /// Width of the slider container in pixels (0 when not measurable).
    fn container_width(&self) -> f64;

    /// Width of the viewport in pixels, used for breakpoint selection.
    fn viewport_width(&self) -> f64;

    /// Lay out the buffered track. `logical_order[i]` is the canonical slide
    /// shown at buffered index `i`; clones repeat canonical indices.
    fn layout_slides(&mut self, logical_order: &[usize], slides_per_view: usize);

    /// Translate the track horizontally. A zero duration means no transition.
    fn apply_transform(&mut self, translate_px: f64, transition_ms: u32);

    /// Cross-fade: mark a canonical slide as shown or hidden.
    fn set_slide_active(&mut self, logical_index: usize, active: bool);

    /// Rebuild the pagination dots. Clicks are routed by the host to
    /// `on_dot_click(i)`.
    fn render_dots(&mut self, count: usize, active_index: usize);

    /// Move the active marker without rebuilding the dots.
    fn set_active_dot(&mut self, active_index: usize);

    /// Enable or disable the previous/next buttons.
    fn set_nav_buttons_enabled(&mut self, prev_enabled: bool, next_enabled: bool);

    /// Toggle the visual "dragging" state of the track.
    fn set_dragging(&mut self, _dragging: bool) {}
}

/// A single intent emitted by the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    LayoutSlides {
        logical_order: Vec<usize>,
        slides_per_view: usize,
    },
    Transform {
        translate_px: f64,
        transition_ms: u32,
    },
    SlideActive {
        logical_index: usize,
        active: bool,
    },
    RenderDots {
        count: usize,
        active_index: usize,
    },
    ActiveDot {
        active_index: usize,
    },
    NavButtons {
        prev_enabled: bool,
        next_enabled: bool,
    },
    Dragging(bool),
}

/// Adapter that records commands instead of drawing.
///
/// Useful for headless hosts (server-side rendering, snapshot tests) and for
/// replaying commands onto another backend later.
///
/// ## Example
///
/// ```rust
/// use slider_core::{RecordingAdapter, RenderAdapter, RenderCommand};
///
/// let mut adapter = RecordingAdapter::new(900.0, 1280.0);
/// adapter.apply_transform(-300.0, 300);
/// assert_eq!(adapter.last_translate(), Some(-300.0));
/// assert!(matches!(adapter.commands()[0], RenderCommand::Transform { .. }));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingAdapter {
    /// Reported container width
    pub container_width: f64,
    /// Reported viewport width
    pub viewport_width: f64,
    /// Reported visibility
    pub visible: bool,
    commands: Vec<RenderCommand>,
}

impl RecordingAdapter {
    /// A visible adapter with the given measurements.
    pub fn new(container_width: f64, viewport_width: f64) -> Self {
        Self {
            container_width,
            viewport_width,
            visible: true,
            commands: Vec::new(),
        }
    }

    /// Every command received so far.
    #[inline]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drain the recorded commands.
    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Translate of the most recent transform.
    pub fn last_translate(&self) -> Option<f64> {
        self.last_transform().map(|(px, _)| px)
    }

    /// `(translate_px, transition_ms)` of the most recent transform.
    pub fn last_transform(&self) -> Option<(f64, u32)> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Transform {
                translate_px,
                transition_ms,
            } => Some((*translate_px, *transition_ms)),
            _ => None,
        })
    }

    /// Dot count of the most recent rebuild.
    pub fn dot_count(&self) -> Option<usize> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::RenderDots { count, .. } => Some(*count),
            _ => None,
        })
    }

    /// Active dot after the most recent rebuild or re-index.
    pub fn active_dot(&self) -> Option<usize> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::RenderDots { active_index, .. } | RenderCommand::ActiveDot { active_index } => {
                Some(*active_index)
            }
            _ => None,
        })
    }

    /// Canonical slide most recently marked active (cross-fade).
    pub fn active_slide(&self) -> Option<usize> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::SlideActive {
                logical_index,
                active: true,
            } => Some(*logical_index),
            _ => None,
        })
    }

    /// Most recent navigation button state.
    pub fn nav_buttons(&self) -> Option<(bool, bool)> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::NavButtons {
                prev_enabled,
                next_enabled,
            } => Some((*prev_enabled, *next_enabled)),
            _ => None,
        })
    }

    /// Number of commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&RenderCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl RenderAdapter for RecordingAdapter {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn layout_slides(&mut self, logical_order: &[usize], slides_per_view: usize) {
        self.commands.push(RenderCommand::LayoutSlides {
            logical_order: logical_order.to_vec(),
            slides_per_view,
        });
    }

    fn apply_transform(&mut self, translate_px: f64, transition_ms: u32) {
        self.commands.push(RenderCommand::Transform {
            translate_px,
            transition_ms,
        });
    }

    fn set_slide_active(&mut self, logical_index: usize, active: bool) {
        self.commands.push(RenderCommand::SlideActive { logical_index, active });
    }

    fn render_dots(&mut self, count: usize, active_index: usize) {
        self.commands.push(RenderCommand::RenderDots { count, active_index });
    }

    fn set_active_dot(&mut self, active_index: usize) {
        self.commands.push(RenderCommand::ActiveDot { active_index });
    }

    fn set_nav_buttons_enabled(&mut self, prev_enabled: bool, next_enabled: bool) {
        self.commands.push(RenderCommand::NavButtons {
            prev_enabled,
            next_enabled,
        });
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.commands.push(RenderCommand::Dragging(dragging));
    }
}

/// Web-specific DOM adapter.
#[cfg(feature = "web")]
pub mod web {
    use super::RenderAdapter;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, HtmlElement};

    /// Current time in milliseconds, for feeding `SliderEngine::poll`.
    pub fn now_ms() -> u64 {
        js_sys::Date::now().max(0.0) as u64
    }

    /// Applies engine intents to the slider's DOM nodes.
    ///
    /// Expected markup: a container element holding a `.slider-wrapper`
    /// track whose children are the canonical `.slider-slide` elements.
    /// Clones are produced with `cloneNode(true)` on every layout.
    #[derive(Clone, Debug)]
    pub struct DomRenderAdapter {
        document: Document,
        container: HtmlElement,
        wrapper: HtmlElement,
        /// Canonical slides, as found at construction
        canonical: Vec<Element>,
        /// Buffered slides currently in the track
        track: Vec<HtmlElement>,
        /// Logical index of each buffered slide
        logical_order: Vec<usize>,
        pagination: Option<Element>,
        prev_button: Option<Element>,
        next_button: Option<Element>,
    }

    impl DomRenderAdapter {
        /// Bind to a container element.
        pub fn new(container: HtmlElement) -> Result<Self, JsValue> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| JsValue::from_str("No document available"))?;
            let wrapper = container
                .query_selector(".slider-wrapper")?
                .ok_or_else(|| JsValue::from_str("Missing .slider-wrapper"))?
                .dyn_into::<HtmlElement>()?;

            let slides = wrapper.query_selector_all(".slider-slide")?;
            let mut canonical = Vec::with_capacity(slides.length() as usize);
            for i in 0..slides.length() {
                if let Some(node) = slides.item(i) {
                    canonical.push(node.dyn_into::<Element>()?);
                }
            }

            let pagination = container.query_selector(".slider-pagination")?;
            let prev_button = container.query_selector(".slider-prev")?;
            let next_button = container.query_selector(".slider-next")?;

            Ok(Self {
                document,
                container,
                wrapper,
                canonical,
                track: Vec::new(),
                logical_order: Vec::new(),
                pagination,
                prev_button,
                next_button,
            })
        }

        /// Number of canonical slides found in the markup.
        pub fn slide_count(&self) -> usize {
            self.canonical.len()
        }

        fn rebuild_track(&mut self, logical_order: &[usize], slides_per_view: usize) -> Result<(), JsValue> {
            self.wrapper.set_inner_html("");
            self.track.clear();
            for &logical in logical_order {
                let Some(source) = self.canonical.get(logical) else {
                    continue;
                };
                let slide = source.clone_node_with_deep(true)?.dyn_into::<HtmlElement>()?;
                self.wrapper.append_child(&slide)?;
                self.track.push(slide);
            }
            self.logical_order = logical_order.to_vec();

            let columns = format!(
                "repeat({}, {}%)",
                self.track.len(),
                100.0 / slides_per_view.max(1) as f64
            );
            self.wrapper.style().set_property("--slider-columns", &columns)
        }

        fn write_transform(&self, translate_px: f64, transition_ms: u32) -> Result<(), JsValue> {
            let style = self.wrapper.style();
            let transition = if transition_ms == 0 {
                "none".to_string()
            } else {
                format!("transform {}ms", transition_ms)
            };
            style.set_property("transition", &transition)?;
            style.set_property("transform", &format!("translate3d({}px, 0, 0)", translate_px))
        }

        fn write_slide_active(&self, logical_index: usize, active: bool) -> Result<(), JsValue> {
            for (slide, logical) in self.track.iter().zip(&self.logical_order) {
                if *logical != logical_index {
                    continue;
                }
                slide.class_list().toggle_with_force("active", active)?;
                slide.style().set_property("opacity", if active { "1" } else { "0" })?;
            }
            Ok(())
        }

        fn write_dots(&self, count: usize, active_index: usize) -> Result<(), JsValue> {
            let Some(pagination) = &self.pagination else {
                return Ok(());
            };
            pagination.set_inner_html("");
            for i in 0..count {
                let dot = self.document.create_element("span")?;
                dot.set_class_name(if i == active_index { "icon active" } else { "icon" });
                dot.set_attribute("data-index", &i.to_string())?;
                pagination.append_child(&dot)?;
            }
            Ok(())
        }

        fn write_active_dot(&self, active_index: usize) -> Result<(), JsValue> {
            let Some(pagination) = &self.pagination else {
                return Ok(());
            };
            let dots = pagination.children();
            for i in 0..dots.length() {
                if let Some(dot) = dots.item(i) {
                    dot.class_list().toggle_with_force("active", i as usize == active_index)?;
                }
            }
            Ok(())
        }

        fn write_nav_buttons(&self, prev_enabled: bool, next_enabled: bool) -> Result<(), JsValue> {
            for (button, enabled) in [(&self.prev_button, prev_enabled), (&self.next_button, next_enabled)] {
                if let Some(button) = button {
                    if enabled {
                        button.remove_attribute("disabled")?;
                    } else {
                        button.set_attribute("disabled", "")?;
                    }
                }
            }
            Ok(())
        }
    }

    fn report(hook: &'static str, result: Result<(), JsValue>) {
        if let Err(err) = result {
            tracing::warn!(hook, error = ?err, "slider.dom_update_failed");
        }
    }

    impl RenderAdapter for DomRenderAdapter {
        fn container_width(&self) -> f64 {
            self.container.client_width().max(0) as f64
        }

        fn viewport_width(&self) -> f64 {
            web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0)
        }

        fn layout_slides(&mut self, logical_order: &[usize], slides_per_view: usize) {
            let result = self.rebuild_track(logical_order, slides_per_view);
            report("layout_slides", result);
        }

        fn apply_transform(&mut self, translate_px: f64, transition_ms: u32) {
            report("apply_transform", self.write_transform(translate_px, transition_ms));
        }

        fn set_slide_active(&mut self, logical_index: usize, active: bool) {
            report("set_slide_active", self.write_slide_active(logical_index, active));
        }

        fn render_dots(&mut self, count: usize, active_index: usize) {
            report("render_dots", self.write_dots(count, active_index));
        }

        fn set_active_dot(&mut self, active_index: usize) {
            report("set_active_dot", self.write_active_dot(active_index));
        }

        fn set_nav_buttons_enabled(&mut self, prev_enabled: bool, next_enabled: bool) {
            report("set_nav_buttons_enabled", self.write_nav_buttons(prev_enabled, next_enabled));
        }

        fn set_dragging(&mut self, dragging: bool) {
            let result = self.wrapper.class_list().toggle_with_force("dragging", dragging).map(|_| ());
            report("set_dragging", result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_queries() {
        let mut adapter = RecordingAdapter::new(600.0, 1024.0);
        adapter.render_dots(5, 0);
        adapter.apply_transform(-100.0, 300);
        adapter.set_active_dot(2);
        adapter.apply_transform(-200.0, 0);
        adapter.set_nav_buttons_enabled(true, false);

        assert_eq!(adapter.dot_count(), Some(5));
        assert_eq!(adapter.active_dot(), Some(2));
        assert_eq!(adapter.last_transform(), Some((-200.0, 0)));
        assert_eq!(adapter.nav_buttons(), Some((true, false)));
        assert_eq!(adapter.count(|c| matches!(c, RenderCommand::Transform { .. })), 2);
    }

    #[test]
    fn test_take_commands() {
        let mut adapter = RecordingAdapter::new(600.0, 1024.0);
        adapter.set_slide_active(1, true);
        assert_eq!(adapter.active_slide(), Some(1));
        assert_eq!(adapter.take_commands().len(), 1);
        assert!(adapter.commands().is_empty());
    }

    #[test]
    fn test_default_is_invisible() {
        let adapter = RecordingAdapter::default();
        assert!(!adapter.is_visible());
        assert_eq!(adapter.container_width(), 0.0);
    }
}
