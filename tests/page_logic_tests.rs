// Host-side tests for the page behaviors that sit outside the particle canvas.

use glam::DVec2;
use portfolio_fx::core::scroll::*;
use portfolio_fx::core::tilt::*;
use portfolio_fx::core::*;

#[test]
fn typewriter_types_holds_deletes_and_advances() {
    let mut tw = Typewriter::new(["ab", "c"]);
    let steps: Vec<(String, u32)> = (0..7)
        .map(|_| {
            let s = tw.step();
            (s.text, s.delay_ms)
        })
        .collect();
    let expect = [
        ("a", 100),
        ("ab", 2000),
        ("a", 50),
        ("", 500),
        ("c", 2000),
        ("", 500),
        ("a", 100),
    ];
    for (got, (text, delay)) in steps.iter().zip(expect) {
        assert_eq!(got.0, text);
        assert_eq!(got.1, delay);
    }
}

#[test]
fn typewriter_default_phrases_start_with_web_developer() {
    let mut tw = Typewriter::default();
    assert_eq!(tw.step().text, "W");
    for _ in 0.."Web Developer".len() - 1 {
        tw.step();
    }
    assert!(tw.is_deleting());
    assert_eq!(tw.phrase_index(), 0);
}

#[test]
fn typewriter_handles_multibyte_text() {
    let mut tw = Typewriter::new(["héllo"]);
    assert_eq!(tw.step().text, "h");
    assert_eq!(tw.step().text, "hé");
}

#[test]
fn typewriter_without_phrases_stays_blank() {
    let mut tw = Typewriter::new(Vec::<String>::new());
    assert_eq!(tw.step().text, "");
}

#[test]
fn counter_reaches_target_in_expected_frames() {
    let mut c = Counter::new(125);
    for frame in 1..125 {
        assert_eq!(c.step(), frame);
        assert!(!c.is_finished());
    }
    assert_eq!(c.step(), 125);
    assert!(c.is_finished());
    assert_eq!(c.step(), 125);
}

#[test]
fn counter_shows_floor_of_progress() {
    let mut c = Counter::new(50);
    // 50 / 125 = 0.4 per frame
    assert_eq!(c.step(), 0);
    assert_eq!(c.step(), 0);
    assert_eq!(c.step(), 1);
}

#[test]
fn counter_zero_target_finishes_immediately() {
    let mut c = Counter::new(0);
    assert_eq!(c.step(), 0);
    assert!(c.is_finished());
}

#[test]
fn parse_target_is_lenient() {
    assert_eq!(parse_target("42"), Some(42));
    assert_eq!(parse_target("  7px"), Some(7));
    assert_eq!(parse_target("-3"), Some(-3));
    assert_eq!(parse_target("+15"), Some(15));
    assert_eq!(parse_target("abc"), None);
    assert_eq!(parse_target(""), None);
    assert_eq!(parse_target("-"), None);
}

#[test]
fn tilt_follows_pointer_offset_from_center() {
    let (rx, ry) = tilt_angles(DVec2::new(0.0, 0.0), DVec2::new(200.0, 100.0));
    assert_eq!((rx, ry), (-5.0, 10.0));
    assert_eq!(
        tilt_transform(rx, ry),
        "perspective(1000px) rotateX(-5deg) rotateY(10deg) scale3d(1.02, 1.02, 1.02)"
    );
    let (cx, cy) = tilt_angles(DVec2::new(100.0, 50.0), DVec2::new(200.0, 100.0));
    assert_eq!((cx, cy), (0.0, 0.0));
    assert_eq!(
        tilt_reset(),
        "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)"
    );
}

#[test]
fn scroll_progress_and_thresholds() {
    assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
    assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
    assert!(!header_scrolled(100.0));
    assert!(header_scrolled(100.5));
    assert!(!scroll_to_top_visible(500.0));
    assert!(scroll_to_top_visible(501.0));
    assert_eq!(parallax_transform(100.0), "translateY(50px)");
}

#[test]
fn active_section_uses_lead_offset() {
    let sections = [("home", 0.0), ("about", 800.0), ("work", 1600.0)];
    assert_eq!(active_section(sections, 0.0), Some("home"));
    assert_eq!(active_section(sections, 599.0), Some("home"));
    assert_eq!(active_section(sections, 600.0), Some("about"));
    assert_eq!(active_section(sections, 5000.0), Some("work"));
    assert_eq!(active_section([("late", 1000.0)], 0.0), None);

    assert_eq!(nav_href(Some("about")), "#about");
    assert_eq!(nav_href(None), "#");
}

#[test]
fn sections_without_id_never_become_active() {
    let sections = [("home", 0.0), ("", 800.0)];
    assert_eq!(active_section(sections, 5000.0), Some("home"));
    assert_eq!(active_section([("", 0.0)], 5000.0), None);
}

#[test]
fn ready_state_decides_whether_load_events_are_still_ahead() {
    let loading = ReadyState::parse("loading");
    assert!(!loading.dom_parsed());
    assert!(!loading.window_loaded());

    let interactive = ReadyState::parse("interactive");
    assert!(interactive.dom_parsed());
    assert!(!interactive.window_loaded());

    // Module fetched after `load`: nothing will fire again, so run now.
    let complete = ReadyState::parse("complete");
    assert!(complete.dom_parsed());
    assert!(complete.window_loaded());

    assert_eq!(ReadyState::parse("bogus"), ReadyState::Loading);
}

#[test]
fn anchor_links() {
    assert_eq!(anchor_target("#about"), Some("#about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("/blog"), None);
    assert_eq!(anchor_scroll_top(800.0, 80.0), 720.0);
}

#[test]
fn konami_code_triggers_on_exact_sequence() {
    let mut k = KonamiDetector::new();
    let mut hits = KONAMI_SEQUENCE.iter().map(|key| k.push(key));
    assert!(hits.by_ref().take(9).all(|hit| !hit));
    assert_eq!(hits.next(), Some(true));
    assert!(!k.push("a"));
}

#[test]
fn konami_code_ignores_earlier_noise() {
    let mut k = KonamiDetector::new();
    for key in ["x", "Enter", "ArrowUp"] {
        assert!(!k.push(key));
    }
    let last = KONAMI_SEQUENCE.iter().map(|key| k.push(key)).last();
    assert_eq!(last, Some(true));
}

#[test]
fn konami_code_rejects_wrong_key() {
    let mut k = KonamiDetector::new();
    let mut seq = KONAMI_SEQUENCE;
    seq[4] = "ArrowRight";
    assert!(seq.iter().all(|key| !k.push(key)));
}

#[test]
fn contact_form_requires_every_field() {
    let ok = validate_contact("Ada", "ada@example.com", "Hello").unwrap();
    assert_eq!(ok.name, "Ada");
    assert_eq!(ok.message, "Hello");

    let err = validate_contact("Ada", "", "Hello").unwrap_err();
    assert_eq!(err, FormError::MissingField("email"));
    assert_eq!(err.to_string(), "missing required field `email`");
    assert_eq!(
        validate_contact("", "", ""),
        Err(FormError::MissingField("name"))
    );
}

#[test]
fn floating_label_stays_raised_with_content() {
    assert!(label_stays_raised("x"));
    assert!(!label_stays_raised(""));
}

#[test]
fn cursor_dot_leads_and_outline_trails() {
    let mut c = CursorFollower::default();
    c.step(DVec2::new(100.0, 0.0));
    assert!((c.dot.x - 90.0).abs() < 1e-9);
    assert!((c.outline.x - 15.0).abs() < 1e-9);
    c.step(DVec2::new(100.0, 0.0));
    assert!((c.dot.x - 99.0).abs() < 1e-9);
    assert!(c.outline.x > 15.0 && c.outline.x < c.dot.x);
}

#[test]
fn cursor_hover_style() {
    let hover = CursorStyle::for_hover(true);
    assert_eq!(hover.dot_transform(), "translate(-50%, -50%) scale(1.5)");
    assert_eq!(hover.outline_size(), "60px");
    let idle = CursorStyle::for_hover(false);
    assert_eq!(idle.dot_transform(), "translate(-50%, -50%) scale(1)");
    assert_eq!(idle.outline_size(), "40px");
}
