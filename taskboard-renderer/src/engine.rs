//! Tera rendering engine — embedded templates and the [`Renderer`] facade.
//!
//! Two rendering operations, both deterministic string builders with no
//! side effects:
//!
//! | Operation      | Template           | Output                            |
//! |----------------|--------------------|-----------------------------------|
//! | `render_board` | `board.html.tera`  | container → row → columns → cards |
//! | `render_page`  | `page.html.tera`   | full HTML document shell          |
//!
//! The page shell includes the board template, so `render_page` output
//! always embeds `render_board` output verbatim.

use tera::Tera;

use taskboard_core::Board;

use crate::context::PageContext;
use crate::error::RenderError;
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("shared/_card.tera", include_str!("templates/_partials/card.tera")),
    ("board.html.tera", include_str!("templates/board.html.tera")),
    ("page.html.tera", include_str!("templates/page.html.tera")),
];

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TPLS.to_vec())?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer over the embedded templates.
///
/// Create once with [`Renderer::new`] and reuse; rendering never mutates
/// the engine or its input.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render only the inner board markup for an organized board.
    pub fn render_board(&self, board: &Board, theme: Theme) -> Result<String, RenderError> {
        self.render_board_with_context(&PageContext::new(board, theme))
    }

    /// Render the complete HTML document for an organized board.
    pub fn render_page(&self, board: &Board, theme: Theme) -> Result<String, RenderError> {
        self.render_page_with_context(&PageContext::new(board, theme))
    }

    /// Render the board markup from a caller-built [`PageContext`].
    pub fn render_board_with_context(&self, ctx: &PageContext) -> Result<String, RenderError> {
        Ok(self.tera.render("board.html.tera", &ctx.to_tera_context()?)?)
    }

    /// Render the document shell from a caller-built [`PageContext`].
    pub fn render_page_with_context(&self, ctx: &PageContext) -> Result<String, RenderError> {
        Ok(self.tera.render("page.html.tera", &ctx.to_tera_context()?)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::{organize, parse_document};

    fn make_board(input: &str) -> Board {
        organize(&parse_document(input).expect("parse"))
    }

    const SAMPLE: &str = "\
title: Sprint
phase: backlog | wiplimit=4
phase: doing | wiplimit=1
category: bug | color=#f2dede
person: ben
doing: fix login | person=ben | category=bug | priority=1
doing: write docs
backlog: plan next sprint
";

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded templates");
    }

    #[test]
    fn board_markup_nests_container_row_columns() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_board(&make_board(SAMPLE), Theme::default())
            .unwrap();
        let container = html.find("<div class=\"container\">").expect("container");
        let row = html.find("<div class=\"row\">").expect("row");
        let col = html.find("<div class=\"col-md-3 col-sm-4 col-lg\">").expect("col");
        assert!(container < row && row < col, "container must wrap row must wrap columns");
        assert_eq!(html.matches("col-md-3 col-sm-4 col-lg").count(), 2);
    }

    #[test]
    fn column_shows_heading_and_wip_count() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_board(&make_board(SAMPLE), Theme::default())
            .unwrap();
        assert!(html.contains("<h3 class=\"text-center\">doing</h3>"));
        assert!(html.contains("<b>2 / 1</b>"));
        assert!(html.contains("<b>1 / 4</b>"));
    }

    #[test]
    fn over_limit_column_is_marked_text_danger() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_board(&make_board(SAMPLE), Theme::default())
            .unwrap();
        // doing holds 2 > 1; backlog holds 1 of 4.
        assert!(html.contains("<p class=\"text-center text-danger\"><b>2 / 1</b></p>"));
        assert!(html.contains("<p class=\"text-center\"><b>1 / 4</b></p>"));
    }

    #[test]
    fn card_popover_lists_person_priority_category() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_board(&make_board(SAMPLE), Theme::default())
            .unwrap();
        assert!(html.contains(
            "<b>Person: </b>ben<br /><b>Priority: </b>1<br /><b>Category: </b>bug"
        ));
        assert!(html.contains(
            "<b>Person: </b>None<br /><b>Priority: </b>10<br /><b>Category: </b>None"
        ));
    }

    #[test]
    fn categorized_card_is_tinted_and_plain_card_is_not() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_board(&make_board(SAMPLE), Theme::default())
            .unwrap();
        assert!(html.contains("<div class=\"panel-body\" style=\"background:#f2dede;\">fix login</div>"));
        assert!(html.contains("<div class=\"panel-body\">write docs</div>"));
    }

    #[test]
    fn cards_appear_in_sorted_order() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_board(&make_board(SAMPLE), Theme::default())
            .unwrap();
        let first = html.find("fix login").expect("priority-1 card");
        let second = html.find("write docs").expect("default-priority card");
        assert!(first < second);
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let renderer = Renderer::new().unwrap();
        let board = make_board(SAMPLE);
        let ctx = PageContext::new(&board, Theme::default());
        let once = renderer.render_page_with_context(&ctx).unwrap();
        let twice = renderer.render_page_with_context(&ctx).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn page_shell_wraps_board_and_links_theme() {
        let renderer = Renderer::new().unwrap();
        let board = make_board(SAMPLE);
        let page = renderer.render_page(&board, Theme::default()).unwrap();
        let inner = renderer.render_board(&board, Theme::default()).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Sprint</title>"));
        assert!(page.contains("bootstrap/3.3.5/css/bootstrap.min.css"));
        assert!(page.contains("jquery/1.11.2/jquery.min.js"));
        assert!(page.contains("data-toggle=popover"));
        assert!(page.contains(inner.trim_end()), "shell must embed the board markup");
    }

    #[test]
    fn empty_board_still_renders() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_board(&make_board("title: empty\n"), Theme::default())
            .unwrap();
        assert!(html.contains("<div class=\"row\">"));
        assert!(!html.contains("col-md-3"));
    }
}
