//! Classification of window days and rendering into a mount point.
//!
//! Rendering is split in two: [`classify`] decides which days are available,
//! [`AvailabilityCalendarRenderer::build_blocks`] turns those views into
//! declarative [`VisualBlockSpec`]s, and a [`Mount`] receives the blocks. The
//! mount is the only thing a render mutates.

use serde::Serialize;
use tracing::debug;

use crate::availability::AvailabilitySet;
use crate::date::CalendarDate;
use crate::error::Result;
use crate::style::{validate_css_value, BlockStyle, CalendarTheme, DayState};
use crate::window::CalendarWindow;

/// One day of the window together with its availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDayView {
    pub date: CalendarDate,
    pub available: bool,
}

impl CalendarDayView {
    /// Visual state for this day.
    pub fn state(&self) -> DayState {
        DayState::from_available(self.available)
    }
}

/// Classify every day of `window`, in window order.
///
/// `available` is exactly `date ∈ availability`; nothing else feeds into it.
pub fn classify(window: &CalendarWindow, availability: &AvailabilitySet) -> Vec<CalendarDayView> {
    window
        .iter()
        .map(|&date| CalendarDayView {
            date,
            available: availability.contains(&date),
        })
        .collect()
}

/// Declarative description of one rendered day block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualBlockSpec {
    /// Canonical date string shown as the block's text.
    pub label: String,
    pub state: DayState,
    /// Background color resolved from the theme for `state`.
    pub background: String,
    pub style: BlockStyle,
}

impl VisualBlockSpec {
    /// The block's CSS declarations joined for an inline `style` attribute.
    pub fn inline_style(&self) -> String {
        self.style
            .declarations(&self.background)
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check the background and shared style with the theme's value rules.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Config`](crate::CalendarError::Config) for a
    /// value that could escape its declaration.
    pub fn validate(&self) -> Result<()> {
        validate_css_value("background", &self.background)?;
        self.style.validate()
    }
}

/// A container that day blocks are appended to.
///
/// Implementations own whatever the host's visual tree looks like; the
/// renderer only checks the precondition and appends in order.
pub trait Mount {
    /// Fail if the container cannot be rendered into.
    ///
    /// Called once before any block is appended, so a failing check leaves
    /// the container untouched.
    fn check(&self) -> Result<()> {
        Ok(())
    }

    /// Append `block` after all previously appended blocks.
    fn append(&mut self, block: VisualBlockSpec);
}

/// In-memory mount that records blocks in call order.
impl Mount for Vec<VisualBlockSpec> {
    fn append(&mut self, block: VisualBlockSpec) {
        self.push(block);
    }
}

/// Renders availability calendars with a fixed theme.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityCalendarRenderer {
    theme: CalendarTheme,
}

impl AvailabilityCalendarRenderer {
    /// A renderer for `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Config`](crate::CalendarError::Config) if the
    /// theme fails [`CalendarTheme::validate`].
    pub fn new(theme: CalendarTheme) -> Result<Self> {
        theme.validate()?;
        Ok(Self { theme })
    }

    /// The theme blocks are styled with.
    pub fn theme(&self) -> &CalendarTheme {
        &self.theme
    }

    /// The blocks `render` would append, without touching any mount.
    pub fn build_blocks(
        &self,
        window: &CalendarWindow,
        availability: &AvailabilitySet,
    ) -> Vec<VisualBlockSpec> {
        classify(window, availability)
            .into_iter()
            .map(|view| {
                let state = view.state();
                VisualBlockSpec {
                    label: view.date.canonical(),
                    state,
                    background: self.theme.background_for(state).to_string(),
                    style: self.theme.block.clone(),
                }
            })
            .collect()
    }

    /// Append one block per window day to `mount`, in window order.
    ///
    /// Returns the number of blocks appended. Blocks already in `mount` are
    /// kept; clear the container first to replace a previous render.
    ///
    /// # Errors
    ///
    /// Propagates [`Mount::check`] failures (typically
    /// [`CalendarError::InvalidMount`](crate::CalendarError::InvalidMount)).
    /// Nothing is appended in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use availability_calendar::{
    ///     build_window, AvailabilityCalendarRenderer, AvailabilitySet, CalendarDate, DayState,
    ///     VisualBlockSpec,
    /// };
    ///
    /// let window = build_window(CalendarDate::parse("2024-06-01").unwrap(), 30).unwrap();
    /// let availability = AvailabilitySet::from_strings(["2024-06-01", "2024-06-03"]);
    ///
    /// let mut mount: Vec<VisualBlockSpec> = Vec::new();
    /// let drawn = AvailabilityCalendarRenderer::default()
    ///     .render(&window, &availability, &mut mount)
    ///     .unwrap();
    ///
    /// assert_eq!(drawn, 30);
    /// assert_eq!(mount[0].state, DayState::Available);
    /// assert_eq!(mount[1].state, DayState::Unavailable);
    /// assert_eq!(mount[2].state, DayState::Available);
    /// ```
    pub fn render<M: Mount + ?Sized>(
        &self,
        window: &CalendarWindow,
        availability: &AvailabilitySet,
        mount: &mut M,
    ) -> Result<usize> {
        mount.check()?;

        let blocks = self.build_blocks(window, availability);
        let count = blocks.len();
        let available = blocks
            .iter()
            .filter(|b| b.state == DayState::Available)
            .count();

        for block in blocks {
            mount.append(block);
        }

        debug!(days = count, available, "rendered availability calendar");
        Ok(count)
    }
}

/// Render with the default theme.
pub fn render<M: Mount + ?Sized>(
    window: &CalendarWindow,
    availability: &AvailabilitySet,
    mount: &mut M,
) -> Result<usize> {
    AvailabilityCalendarRenderer::default().render(window, availability, mount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalendarError;
    use crate::window::build_window;

    fn june_window() -> CalendarWindow {
        build_window(CalendarDate::parse("2024-06-01").unwrap(), 30).unwrap()
    }

    struct DetachedMount {
        appended: usize,
    }

    impl Mount for DetachedMount {
        fn check(&self) -> Result<()> {
            Err(CalendarError::InvalidMount("container is detached".to_string()))
        }

        fn append(&mut self, _block: VisualBlockSpec) {
            self.appended += 1;
        }
    }

    #[test]
    fn test_classify_marks_members_only() {
        let availability = AvailabilitySet::from_strings(["2024-06-01", "2024-06-03"]);
        let views = classify(&june_window(), &availability);
        assert_eq!(views.len(), 30);
        let available: Vec<usize> = views
            .iter()
            .enumerate()
            .filter(|(_, v)| v.available)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(available, vec![0, 2]);
    }

    #[test]
    fn test_classify_ignores_dates_outside_window() {
        let availability = AvailabilitySet::from_strings(["2024-05-31", "2024-07-01"]);
        let views = classify(&june_window(), &availability);
        assert!(views.iter().all(|v| !v.available));
    }

    #[test]
    fn test_empty_availability_renders_all_unavailable() {
        let mut mount: Vec<VisualBlockSpec> = Vec::new();
        let drawn = render(&june_window(), &AvailabilitySet::new(), &mut mount).unwrap();
        assert_eq!(drawn, 30);
        assert!(mount.iter().all(|b| b.state == DayState::Unavailable));
        assert!(mount.iter().all(|b| b.background == "#f99"));
    }

    #[test]
    fn test_blocks_follow_window_order() {
        let window = june_window();
        let mut mount: Vec<VisualBlockSpec> = Vec::new();
        render(&window, &AvailabilitySet::new(), &mut mount).unwrap();
        let labels: Vec<String> = mount.iter().map(|b| b.label.clone()).collect();
        let expected: Vec<String> = window.iter().map(|d| d.to_string()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_theme_applies_colors_and_shared_style() {
        let theme = CalendarTheme {
            available_color: "#0a0".to_string(),
            ..CalendarTheme::default()
        };
        let renderer = AvailabilityCalendarRenderer::new(theme).unwrap();
        let availability = AvailabilitySet::from_strings(["2024-06-02"]);
        let blocks = renderer.build_blocks(&june_window(), &availability);
        assert_eq!(blocks[1].background, "#0a0");
        assert_eq!(blocks[0].background, "#f99");
        assert!(blocks.iter().all(|b| b.style == BlockStyle::default()));
    }

    #[test]
    fn test_renderer_rejects_theme_with_extra_declarations() {
        let theme = CalendarTheme {
            available_color: "red; position: fixed; top: 0".to_string(),
            ..CalendarTheme::default()
        };
        let err = AvailabilityCalendarRenderer::new(theme).unwrap_err();
        assert!(matches!(err, CalendarError::Config(_)));
        assert!(err.to_string().contains("available_color"));
    }

    #[test]
    fn test_inline_style_lists_background_first() {
        let availability = AvailabilitySet::from_strings(["2024-06-01"]);
        let blocks = AvailabilityCalendarRenderer::default().build_blocks(&june_window(), &availability);
        assert_eq!(
            blocks[0].inline_style(),
            "background-color: lightgreen; padding: 6px; margin: 4px; display: inline-block; border-radius: 6px; font-weight: bold;"
        );
        assert!(blocks[0].validate().is_ok());
    }

    #[test]
    fn test_invalid_mount_draws_nothing() {
        let mut mount = DetachedMount { appended: 0 };
        let err = render(&june_window(), &AvailabilitySet::new(), &mut mount).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidMount(_)));
        assert_eq!(mount.appended, 0);
    }

    #[test]
    fn test_rerender_into_uncleared_mount_accumulates() {
        let window = june_window();
        let mut mount: Vec<VisualBlockSpec> = Vec::new();
        render(&window, &AvailabilitySet::new(), &mut mount).unwrap();
        render(&window, &AvailabilitySet::new(), &mut mount).unwrap();
        assert_eq!(mount.len(), 60);
    }

    #[test]
    fn test_render_is_idempotent_for_fresh_mounts() {
        let window = june_window();
        let availability = AvailabilitySet::from_strings(["2024-06-10", "2024-06-20"]);
        let mut first: Vec<VisualBlockSpec> = Vec::new();
        let mut second: Vec<VisualBlockSpec> = Vec::new();
        render(&window, &availability, &mut first).unwrap();
        render(&window, &availability, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_window_renders_nothing() {
        let window = build_window(CalendarDate::parse("2024-06-01").unwrap(), 0).unwrap();
        let mut mount: Vec<VisualBlockSpec> = Vec::new();
        assert_eq!(render(&window, &AvailabilitySet::new(), &mut mount).unwrap(), 0);
        assert!(mount.is_empty());
    }
}
