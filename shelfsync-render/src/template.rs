//! `$field` placeholder substitution.

use regex::{Captures, Regex};

use shelfsync_core::Record;

use crate::error::RenderError;

/// Glyph repeated to render a user rating.
pub const STAR_GLYPH: &str = "⭐";

/// Literal rendered for `$user_rating_stars` when no rating is present.
pub const UNRATED: &str = "unrated";

/// Field whose integer part drives the star rendering.
const RATING_FIELD: &str = "user_rating";

/// Derived placeholder rendered as repeated stars.
const STARS_PLACEHOLDER: &str = "user_rating_stars";

/// Renders records through a `$field` placeholder template.
///
/// Rendering is pure: the same template and record always produce the same
/// line. Unknown or absent fields substitute as the empty string rather than
/// erroring or leaking placeholder text.
pub struct LineRenderer {
    template: String,
    placeholder: Regex,
}

impl LineRenderer {
    /// Compile the placeholder pattern for `template`.
    pub fn new(template: impl Into<String>) -> Result<Self, RenderError> {
        Ok(LineRenderer {
            template: template.into(),
            placeholder: Regex::new(r"\$([A-Za-z_]+)")?,
        })
    }

    /// Render one record as one line.
    pub fn render_line(&self, record: &Record) -> String {
        self.placeholder
            .replace_all(&self.template, |caps: &Captures<'_>| {
                let field = &caps[1];
                if field == STARS_PLACEHOLDER {
                    return stars(record.get(RATING_FIELD));
                }
                record.get(field).unwrap_or_default().to_string()
            })
            .into_owned()
    }

    /// Render `records` in order, one line each, joined by newlines.
    pub fn render_list(&self, records: &[Record]) -> String {
        records
            .iter()
            .map(|record| self.render_line(record))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// [`STAR_GLYPH`] repeated by the integer part of the rating, [`UNRATED`]
/// when absent. A rating of `0` renders as the empty string.
fn stars(rating: Option<&str>) -> String {
    let Some(rating) = rating else {
        return UNRATED.to_string();
    };
    let count = rating
        .parse::<f64>()
        .map(|value| value.max(0.0).trunc() as usize)
        .unwrap_or(0);
    STAR_GLYPH.repeat(count)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use shelfsync_core::DEFAULT_TEMPLATE;

    fn book() -> Record {
        [
            ("title", "The Dispossessed"),
            ("url", "https://example.com/book/13651"),
            ("author", "Ursula K. Le Guin"),
            ("published_year", "1974"),
            ("average_rating", "4.25"),
            ("user_rating", "4"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn default_template_renders_fully_populated_record() {
        let renderer = LineRenderer::new(DEFAULT_TEMPLATE).expect("renderer");
        assert_eq!(
            renderer.render_line(&book()),
            "- [The Dispossessed](https://example.com/book/13651) by Ursula K. Le Guin (⭐️4.25)"
        );
    }

    #[test]
    fn every_supported_placeholder_substitutes() {
        let renderer = LineRenderer::new(
            "$title|$url|$author|$published_year|$average_rating|$user_rating|$user_rating_stars",
        )
        .expect("renderer");
        assert_eq!(
            renderer.render_line(&book()),
            "The Dispossessed|https://example.com/book/13651|Ursula K. Le Guin|1974|4.25|4|⭐⭐⭐⭐"
        );
    }

    #[test]
    fn missing_field_renders_as_empty_not_placeholder() {
        let renderer = LineRenderer::new("[$title] by $author").expect("renderer");
        let record: Record = [("title", "Anonymous Work")].into_iter().collect();
        assert_eq!(renderer.render_line(&record), "[Anonymous Work] by ");
    }

    #[test]
    fn unknown_placeholder_renders_as_empty() {
        let renderer = LineRenderer::new("$title$no_such_field!").expect("renderer");
        let record: Record = [("title", "A")].into_iter().collect();
        assert_eq!(renderer.render_line(&record), "A!");
    }

    #[test]
    fn rendering_is_pure() {
        let renderer = LineRenderer::new(DEFAULT_TEMPLATE).expect("renderer");
        let record = book();
        assert_eq!(renderer.render_line(&record), renderer.render_line(&record));
    }

    #[test]
    fn four_rating_renders_four_stars() {
        let renderer = LineRenderer::new("$user_rating_stars").expect("renderer");
        let record: Record = [("user_rating", "4")].into_iter().collect();
        assert_eq!(renderer.render_line(&record), "⭐⭐⭐⭐");
    }

    #[test]
    fn fractional_rating_uses_integer_part() {
        let renderer = LineRenderer::new("$user_rating_stars").expect("renderer");
        let record: Record = [("user_rating", "3.9")].into_iter().collect();
        assert_eq!(renderer.render_line(&record), "⭐⭐⭐");
    }

    #[test]
    fn absent_rating_renders_unrated() {
        let renderer = LineRenderer::new("$user_rating_stars").expect("renderer");
        assert_eq!(renderer.render_line(&Record::new()), "unrated");
    }

    #[test]
    fn zero_rating_renders_no_stars() {
        let renderer = LineRenderer::new("($user_rating_stars)").expect("renderer");
        let record: Record = [("user_rating", "0")].into_iter().collect();
        assert_eq!(renderer.render_line(&record), "()");
    }

    #[test]
    fn render_list_joins_lines_in_order() {
        let renderer = LineRenderer::new("- $title").expect("renderer");
        let records: Vec<Record> = vec![
            [("title", "first")].into_iter().collect(),
            [("title", "second")].into_iter().collect(),
        ];
        assert_eq!(renderer.render_list(&records), "- first\n- second");
    }

    #[test]
    fn empty_record_list_renders_empty_string() {
        let renderer = LineRenderer::new("- $title").expect("renderer");
        assert_eq!(renderer.render_list(&[]), "");
    }
}
