/// Page behavior tuning constants.
///
/// Timings are in milliseconds, distances in CSS pixels.
// Loading screen
pub const LOADING_HIDE_DELAY_MS: i32 = 1500;

// Cursor follower easing per frame (fraction of remaining distance)
pub const CURSOR_DOT_EASE: f64 = 0.9;
pub const CURSOR_OUTLINE_EASE: f64 = 0.15;
pub const CURSOR_HOVER_DOT_SCALE: f64 = 1.5;
pub const CURSOR_HOVER_OUTLINE_PX: f64 = 60.0;
pub const CURSOR_IDLE_DOT_SCALE: f64 = 1.0;
pub const CURSOR_IDLE_OUTLINE_PX: f64 = 40.0;

// Scroll thresholds
pub const HEADER_SCROLLED_AFTER_PX: f64 = 100.0;
pub const ACTIVE_SECTION_LEAD_PX: f64 = 200.0;
pub const SCROLL_TOP_VISIBLE_AFTER_PX: f64 = 500.0;
pub const PARALLAX_SPEED: f64 = 0.5;

// Typing effect
pub const TYPING_PHRASES: [&str; 4] = [
    "Web Developer",
    "Creative Designer",
    "Problem Solver",
    "Tech Enthusiast",
];
pub const TYPING_START_DELAY_MS: u32 = 1000;
pub const TYPING_STEP_MS: u32 = 100;
pub const DELETING_STEP_MS: u32 = 50;
pub const TYPING_HOLD_MS: u32 = 2000; // pause on a finished phrase
pub const TYPING_NEXT_MS: u32 = 500; // pause before the next phrase

// Counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0;
pub const COUNTER_VISIBLE_THRESHOLD: f64 = 0.5;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_STAGGER_MS: i32 = 100;

// Tilt
pub const TILT_DIVISOR: f64 = 10.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_HOVER_SCALE: f64 = 1.02;

// Contact form
pub const FORM_MISSING_FIELDS_MSG: &str = "Please fill in all fields";
pub const FORM_THANK_YOU_MSG: &str = "Thank you for your message! I will get back to you soon.";

// Easter egg
pub const KONAMI_ANIMATION: &str = "rainbow 2s infinite";
pub const RAINBOW_KEYFRAMES: &str = "
  @keyframes rainbow {
    0% { filter: hue-rotate(0deg); }
    100% { filter: hue-rotate(360deg); }
  }
";
