//! View-state and animation primitives for the page shell.
//!
//! Every primitive here is independent: it consumes one signal (viewport
//! containment, pointer position, elapsed time, scroll position, or a
//! theme event) and owns one small piece of animation state. None of them
//! read the clock themselves; the host passes `Instant`/elapsed time into
//! update methods, which keeps every timing law unit-testable without
//! sleeping.
//!
//! - `easing` / `timing` / `spring` - shared math
//! - `reveal` / `text_reveal` - enter-on-view transitions
//! - `magnet` - pointer-proportional displacement
//! - `marquee` - self-driving auto-scroll strip
//! - `scroll` - smooth page scrolling with velocity readout
//! - `sections` - scroll position -> active navigation section
//! - `theme_watch` - transient "theme changing" pulse
//! - `parallax` - viewport-progress -> offset mapping
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use folio_core::motion::reveal::{Reveal, RevealConfig};
//!
//! let mut reveal = Reveal::new(RevealConfig::default());
//!
//! // Host feeds the containment signal, then reads the derived style.
//! let now = Instant::now();
//! reveal.set_in_view(true, now);
//! let style = reveal.style(now);
//! ```

pub mod easing;
pub mod magnet;
pub mod marquee;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod spring;
pub mod text_reveal;
pub mod theme_watch;
pub mod timing;

pub use easing::Easing;
pub use magnet::{Bounds, Magnet};
pub use marquee::{Marquee, MarqueeDirection};
pub use parallax::Parallax;
pub use reveal::{Reveal, RevealConfig, RevealDirection, RevealPhase, RevealStyle};
pub use scroll::PageScroll;
pub use sections::{SectionBounds, SectionTracker};
pub use spring::Spring;
pub use text_reveal::{GlyphStyle, TextReveal, TextRevealConfig};
pub use theme_watch::ThemePulse;
