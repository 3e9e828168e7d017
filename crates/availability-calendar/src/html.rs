//! HTML container mount.
//!
//! [`HtmlContainer`] stands in for a `<div>` in the host page. It collects
//! blocks through [`Mount`] and serializes them through askama templates as
//! an HTML fragment with inline styles, or as a standalone document for hosts
//! that embed the calendar in a fixed-height frame.

use askama::Template;

use crate::availability::AvailabilitySet;
use crate::config::CalendarConfig;
use crate::date::CalendarDate;
use crate::error::{CalendarError, Result};
use crate::render::{Mount, VisualBlockSpec};
use crate::style::validate_css_value;

/// Element id used when the host does not name its container.
pub const DEFAULT_CONTAINER_ID: &str = "calendar-container";

/// Height in pixels of the frame produced by [`HtmlContainer::to_document`].
pub const DEFAULT_DOCUMENT_HEIGHT: u32 = 350;

/// Container `<div>` with one child per block.
#[derive(Template)]
#[template(path = "calendar.html")]
struct FragmentTemplate<'a> {
    id: &'a str,
    font_family: &'a str,
    blocks: &'a [VisualBlockSpec],
}

/// Standalone page wrapping an already-rendered fragment.
#[derive(Template)]
#[template(path = "document.html")]
struct DocumentTemplate<'a> {
    height: u32,
    fragment: &'a str,
}

/// A container element identified by its `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlContainer {
    id: String,
    font_family: String,
    blocks: Vec<VisualBlockSpec>,
}

impl HtmlContainer {
    /// An empty container with the default `sans-serif` font.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            font_family: "sans-serif".to_string(),
            blocks: Vec::new(),
        }
    }

    /// Set the container's font family. Checked by [`Mount::check`].
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// The element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Appended blocks, in append order.
    pub fn blocks(&self) -> &[VisualBlockSpec] {
        &self.blocks
    }

    /// Number of appended blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Remove all children, ready for a fresh render.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// The container and its blocks as an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMount`] if the container fails
    /// [`Mount::check`], [`CalendarError::Config`] if an appended block
    /// carries an unsafe style value, and [`CalendarError::Render`] if the
    /// template fails.
    pub fn to_html(&self) -> Result<String> {
        self.check()?;
        for block in &self.blocks {
            block.validate()?;
        }

        let mut html = FragmentTemplate {
            id: &self.id,
            font_family: &self.font_family,
            blocks: &self.blocks,
        }
        .render()
        .map_err(|e| CalendarError::Render(format!("calendar fragment: {e}")))?;
        if !html.ends_with('\n') {
            html.push('\n');
        }
        Ok(html)
    }

    /// A standalone page holding the fragment in a frame `height` pixels tall.
    ///
    /// # Errors
    ///
    /// Same as [`HtmlContainer::to_html`].
    pub fn to_document(&self, height: u32) -> Result<String> {
        let fragment = self.to_html()?;
        let mut page = DocumentTemplate {
            height,
            fragment: &fragment,
        }
        .render()
        .map_err(|e| CalendarError::Render(format!("calendar document: {e}")))?;
        if !page.ends_with('\n') {
            page.push('\n');
        }
        Ok(page)
    }
}

impl Default for HtmlContainer {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID)
    }
}

impl Mount for HtmlContainer {
    fn check(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CalendarError::InvalidMount(
                "container id is empty".to_string(),
            ));
        }
        if !self
            .id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
        {
            return Err(CalendarError::InvalidMount(format!(
                "'{}' is not a valid container id",
                self.id
            )));
        }
        validate_css_value("font_family", &self.font_family)
            .map_err(|e| CalendarError::InvalidMount(e.to_string()))
    }

    fn append(&mut self, block: VisualBlockSpec) {
        self.blocks.push(block);
    }
}

/// Build the window for `today`, render `availability` into a container
/// configured by `config`, and return the filled container.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWindow`] or [`CalendarError::InvalidDate`]
/// if the window cannot be built, [`CalendarError::Config`] for an unsafe
/// theme, and [`CalendarError::InvalidMount`] if `config.container_id` is
/// unusable.
pub fn render_html_calendar(
    today: CalendarDate,
    availability: &AvailabilitySet,
    config: &CalendarConfig,
) -> Result<HtmlContainer> {
    let window = config.window_builder().build(today)?;
    let mut container = config.container();
    config.renderer()?.render(&window, availability, &mut container)?;
    Ok(container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::style::{BlockStyle, DayState};
    use crate::window::build_window;

    fn day(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn test_fragment_contains_styled_blocks() {
        let window = build_window(day("2024-06-01"), 3).unwrap();
        let availability = AvailabilitySet::from_strings(["2024-06-02"]);
        let mut container = HtmlContainer::default();
        render(&window, &availability, &mut container).unwrap();

        let html = container.to_html().unwrap();
        assert!(html.starts_with(r#"<div id="calendar-container" style="font-family: sans-serif;">"#));
        assert!(html.contains(
            r#"<div class="calendar-day calendar-day--unavailable" data-date="2024-06-01" style="background-color: #f99; padding: 6px; margin: 4px; display: inline-block; border-radius: 6px; font-weight: bold;">2024-06-01</div>"#
        ));
        assert!(html.contains(
            r#"class="calendar-day calendar-day--available" data-date="2024-06-02" style="background-color: lightgreen;"#
        ));
        assert_eq!(html.matches("class=\"calendar-day ").count(), 3);
        assert!(html.trim_end().ends_with("</div>"));
    }

    #[test]
    fn test_blocks_appear_in_window_order() {
        let window = build_window(day("2024-01-30"), 4).unwrap();
        let mut container = HtmlContainer::default();
        render(&window, &AvailabilitySet::new(), &mut container).unwrap();
        let html = container.to_html().unwrap();
        let positions: Vec<usize> = ["2024-01-30", "2024-01-31", "2024-02-01", "2024-02-02"]
            .iter()
            .map(|label| html.find(&format!(">{label}</div>")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut container = HtmlContainer::default();
        container.append(VisualBlockSpec {
            label: "<script>".to_string(),
            state: DayState::Available,
            background: "lightgreen".to_string(),
            style: BlockStyle::default(),
        });
        let html = container.to_html().unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_id_is_invalid_mount() {
        let mut container = HtmlContainer::new("  ");
        let window = build_window(day("2024-06-01"), 30).unwrap();
        let err = render(&window, &AvailabilitySet::new(), &mut container).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidMount(_)));
        assert!(container.is_empty());
    }

    #[test]
    fn test_id_with_markup_is_invalid_mount() {
        let container = HtmlContainer::new(r#"x" onload="alert(1)"#);
        assert!(matches!(container.check(), Err(CalendarError::InvalidMount(_))));
    }

    #[test]
    fn test_font_family_with_extra_declaration_is_invalid_mount() {
        let mut container = HtmlContainer::new("cal").with_font_family("x; background: url(http://evil)");
        let window = build_window(day("2024-06-01"), 30).unwrap();
        let err = render(&window, &AvailabilitySet::new(), &mut container).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidMount(_)));
        assert!(container.is_empty());
        assert!(container.to_html().is_err());
    }

    #[test]
    fn test_block_with_unsafe_background_is_not_serialized() {
        let mut container = HtmlContainer::default();
        container.append(VisualBlockSpec {
            label: "2024-06-01".to_string(),
            state: DayState::Available,
            background: "red; position: fixed; top: 0".to_string(),
            style: BlockStyle::default(),
        });
        let err = container.to_html().unwrap_err();
        assert!(matches!(err, CalendarError::Config(_)));
    }

    #[test]
    fn test_clear_then_rerender_matches_first_render() {
        let window = build_window(day("2024-06-01"), 30).unwrap();
        let availability = AvailabilitySet::from_strings(["2024-06-05"]);
        let mut container = HtmlContainer::default();

        render(&window, &availability, &mut container).unwrap();
        let first = container.to_html().unwrap();

        container.clear();
        render(&window, &availability, &mut container).unwrap();
        assert_eq!(container.to_html().unwrap(), first);
        assert_eq!(container.len(), 30);
    }

    #[test]
    fn test_document_wraps_fragment() {
        let container = HtmlContainer::new("cal");
        let doc = container.to_document(DEFAULT_DOCUMENT_HEIGHT).unwrap();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("height: 350px"));
        assert!(doc.contains(container.to_html().unwrap().trim_end()));
    }

    #[test]
    fn test_render_html_calendar_uses_config() {
        let config = CalendarConfig {
            days: 7,
            container_id: "dock-calendar".to_string(),
            ..CalendarConfig::default()
        };
        let availability = AvailabilitySet::from_strings(["2024-06-01", "not-a-date"]);
        let container = render_html_calendar(day("2024-06-01"), &availability, &config).unwrap();
        assert_eq!(container.id(), "dock-calendar");
        assert_eq!(container.len(), 7);
        assert_eq!(container.blocks()[0].state, DayState::Available);
    }

    #[test]
    fn test_render_html_calendar_rejects_oversized_window() {
        let config = CalendarConfig {
            days: 90_000_000,
            ..CalendarConfig::default()
        };
        let err = render_html_calendar(day("2024-06-01"), &AvailabilitySet::new(), &config)
            .unwrap_err();
        assert!(matches!(err, CalendarError::InvalidWindow(_)));
    }
}
