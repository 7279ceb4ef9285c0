//! End-to-end slider scenarios driven through the recording adapter.

use slider_core::{
    AutoplayKind, AutoplayState, ConfigWarning, Lifecycle, RecordingAdapter, RenderCommand, SliderEngine,
    SliderOptions, SlidesPerViewConfig, SLIDE_TRANSITION_MS,
};

fn nine_slide_loop() -> SliderEngine<&'static str, RecordingAdapter> {
    let slides = vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"];
    let options = SliderOptions {
        infinite_scrolling: true,
        pagination: true,
        navigation: true,
        ..Default::default()
    };
    SliderEngine::mount(RecordingAdapter::new(300.0, 1280.0), slides, options)
}

#[test]
fn nine_slides_wrap_back_to_start() {
    let mut slider = nine_slide_loop();
    assert_eq!(slider.buffer().len(), 11);
    assert_eq!(slider.buffer().buffer_size(), 1);
    assert_eq!(slider.index(), 1);
    assert_eq!(slider.translate(), -300.0);

    let mut now = 0;
    let mut visited = Vec::new();
    for _ in 0..9 {
        slider.next();
        now += u64::from(SLIDE_TRANSITION_MS);
        slider.poll(now);
        visited.push(slider.index());
    }

    assert_eq!(visited, vec![2, 3, 4, 5, 6, 7, 8, 9, 1]);
    assert_eq!(slider.translate(), -300.0);
    assert_eq!(slider.logical_index(), 0);
    assert_eq!(slider.buffer().len(), 11);

    // The seam crossing animates onto the trailing clone before snapping back
    let commands = slider.adapter().commands();
    let tail: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            RenderCommand::Transform {
                translate_px,
                transition_ms,
            } => Some((*translate_px, *transition_ms)),
            _ => None,
        })
        .rev()
        .take(2)
        .collect();
    assert_eq!(tail, vec![(-300.0, 0), (-3000.0, SLIDE_TRANSITION_MS)]);
}

#[test]
fn clones_mirror_the_canonical_ends() {
    let slider = nine_slide_loop();
    let slides = slider.buffer().slides();
    assert_eq!(*slides[0].content(), "i");
    assert_eq!(*slides[10].content(), "a");
    assert_eq!(slider.buffer().logical_order()[1..10], [0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn responsive_breakpoints_follow_the_viewport() {
    let options = SliderOptions {
        slides_per_view: SlidesPerViewConfig::responsive(1, [1, 2, 3, 4, 5]),
        infinite_scrolling: true,
        pagination: true,
        gap_px: 10.0,
        ..Default::default()
    };
    let mut slider = SliderEngine::mount(RecordingAdapter::new(930.0, 1200.0), (0..12).collect::<Vec<u8>>(), options);
    assert_eq!(slider.slides_per_view(), 3);
    assert_eq!(slider.buffer().len(), 18);
    // slide width 310, index 3: -3*310 - (3 + 1) * 10
    assert_eq!(slider.translate(), -970.0);

    slider.go_to(5);
    for (width, expected) in [(500.0, 1), (900.0, 2), (1900.0, 4), (2400.0, 5), (4000.0, 5)] {
        slider.adapter_mut().viewport_width = width;
        slider.on_resize();
        let deadline = slider.next_deadline().unwrap_or_default();
        slider.poll(deadline);
        assert_eq!(slider.slides_per_view(), expected, "width {width}");
        assert_eq!(slider.logical_index(), 5);
        assert_eq!(slider.buffer().len(), 12 + 2 * expected);
        assert_eq!(slider.adapter().dot_count(), Some(12));
    }

    // A single slide per view with a gap is legal but reported
    assert!(slider
        .warnings()
        .iter()
        .any(|w| matches!(w, ConfigWarning::GapWithSingleSlide { .. })));
}

#[test]
fn partial_breakpoint_table_falls_back_to_scalar() {
    let options = SliderOptions {
        slides_per_view: SlidesPerViewConfig {
            tablet: Some(2),
            ..SlidesPerViewConfig::fixed(1)
        },
        ..Default::default()
    };
    let mut slider = SliderEngine::mount(RecordingAdapter::new(300.0, 900.0), vec![1, 2, 3], options);
    assert_eq!(slider.slides_per_view(), 1);
    assert!(matches!(
        slider.warnings()[0],
        ConfigWarning::PartialBreakpointTable { .. }
    ));

    slider.adapter_mut().viewport_width = 2000.0;
    slider.on_resize();
    slider.poll(100);
    assert_eq!(slider.slides_per_view(), 1);
}

#[test]
fn cross_fade_with_continuous_keeps_fade_only() {
    let options = SliderOptions {
        autoplay: AutoplayKind::Continuous,
        cross_fade: true,
        ..Default::default()
    };
    let slider = SliderEngine::mount(RecordingAdapter::new(300.0, 1280.0), vec![1, 2, 3], options);
    assert_eq!(slider.autoplay_state(), AutoplayState::Stopped);
    assert!(!slider.wants_frame());
    assert_eq!(slider.warnings(), &[ConfigWarning::CrossFadeWithContinuous]);
    assert_eq!(slider.adapter().active_slide(), Some(0));
}

#[test]
fn cross_fade_interval_cycles_active_slide() {
    let options = SliderOptions {
        autoplay: AutoplayKind::Interval,
        autoplay_delay_ms: Some(1000),
        cross_fade: true,
        ..Default::default()
    };
    let mut slider = SliderEngine::mount(RecordingAdapter::new(300.0, 1280.0), vec![1, 2, 3], options);
    let mut active = Vec::new();
    for t in 1..=4 {
        slider.poll(t * 1000);
        active.push(slider.adapter().active_slide());
    }
    assert_eq!(active, vec![Some(1), Some(2), Some(0), Some(1)]);
}

#[test]
fn cross_fade_is_ignored_with_several_slides_per_view() {
    let options = SliderOptions {
        slides_per_view: SlidesPerViewConfig::fixed(2),
        cross_fade: true,
        ..Default::default()
    };
    let mut slider = SliderEngine::mount(RecordingAdapter::new(600.0, 1280.0), vec![1, 2, 3, 4], options);
    assert_eq!(slider.warnings(), &[ConfigWarning::CrossFadeMultiView { slides_per_view: 2 }]);
    slider.next();
    assert_eq!(slider.adapter().last_translate(), Some(-300.0));
}

#[test]
fn buttons_rearm_interval_autoplay() {
    let options = SliderOptions {
        autoplay: AutoplayKind::Interval,
        autoplay_delay_ms: Some(1000),
        infinite_scrolling: true,
        ..Default::default()
    };
    let mut slider = SliderEngine::mount(RecordingAdapter::new(300.0, 1280.0), (0..5).collect::<Vec<u8>>(), options);
    slider.poll(900);
    slider.next();
    assert_eq!(slider.logical_index(), 1);

    // The pending tick was replaced, so nothing fires at the old deadline
    slider.poll(1000);
    assert_eq!(slider.logical_index(), 1);
    slider.poll(1900);
    assert_eq!(slider.logical_index(), 2);
}

#[test]
fn continuous_drag_keeps_position_where_released() {
    let options = SliderOptions {
        autoplay: AutoplayKind::Continuous,
        continuous_speed_px_per_sec: Some(100),
        infinite_scrolling: true,
        draggable: true,
        ..Default::default()
    };
    let mut slider = SliderEngine::mount(RecordingAdapter::new(300.0, 1280.0), (0..4).collect::<Vec<u8>>(), options);
    slider.on_frame(0.0);
    slider.on_frame(500.0);
    assert_eq!(slider.translate(), -350.0);

    slider.pointer_down(400.0);
    assert_eq!(slider.autoplay_state(), AutoplayState::Suspended);
    slider.pointer_move(180.0);
    slider.on_frame(516.0);
    slider.pointer_up();

    // No snap: index re-derived from the released translate
    assert_eq!(slider.translate(), -570.0);
    assert_eq!(slider.index(), 2);
    assert_eq!(slider.autoplay_state(), AutoplayState::Running);

    slider.on_frame(600.0);
    slider.on_frame(1600.0);
    assert_eq!(slider.translate(), -670.0);
}

#[test]
fn dormant_slider_ignores_time_until_visible() {
    let mut adapter = RecordingAdapter::new(300.0, 1280.0);
    adapter.visible = false;
    let options = SliderOptions {
        autoplay: AutoplayKind::Interval,
        autoplay_delay_ms: Some(500),
        ..Default::default()
    };
    let mut slider = SliderEngine::mount(adapter, vec![1, 2, 3], options);
    slider.poll(5000);
    assert_eq!(slider.lifecycle(), Lifecycle::Dormant);
    assert_eq!(slider.pending_timers(), 0);

    slider.on_visible();
    assert_eq!(slider.autoplay_state(), AutoplayState::Running);
    slider.poll(5500);
    assert_eq!(slider.logical_index(), 1);
}
