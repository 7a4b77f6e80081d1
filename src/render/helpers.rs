//! Template helper functions
//!
//! Helpers are pure: the display logic lives in plain functions and the
//! handlebars wrappers only bridge arguments in and text out.

use chrono::{Datelike, Local};
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};

/// Current four-digit year
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Uppercase transform
pub fn scream_it(text: &str) -> String {
    text.to_uppercase()
}

/// `{{getCurrentYear}}`
pub fn get_current_year_helper(
    _h: &Helper,
    _hb: &Handlebars,
    _ctx: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&current_year().to_string())?;
    Ok(())
}

/// `{{screamIt text}}`
pub fn scream_it_helper(
    h: &Helper,
    _hb: &Handlebars,
    _ctx: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let text = h.param(0).and_then(|p| p.value().as_str()).unwrap_or("");
    out.write(&scream_it(text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scream_it_uppercases() {
        assert_eq!(scream_it("hello"), "HELLO");
    }

    #[test]
    fn scream_it_leaves_shouting_alone() {
        assert_eq!(scream_it("ALREADY LOUD"), "ALREADY LOUD");
    }

    #[test]
    fn current_year_matches_system_clock() {
        assert_eq!(current_year(), Local::now().year());
    }
}
