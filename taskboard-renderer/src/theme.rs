//! Page theme — read-only configuration data for the document shell.
//!
//! These are plain values handed to the shell template, never global mutable
//! state. The defaults pin the Bootstrap 3.3.5 / jQuery 1.11.2 CDN builds
//! the board markup's CSS classes are written against.

use serde::{Deserialize, Serialize};

const BOOTSTRAP_CSS: &str =
    "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.5/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.5/js/bootstrap.min.js";
const JQUERY_JS: &str =
    "https://ajax.googleapis.com/ajax/libs/jquery/1.11.2/jquery.min.js";
const STYLES_CSS: &str =
    "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.5/css/bootstrap-theme.min.css";

/// Activates Bootstrap popovers for the card detail overlays.
const POPOVER_SCRIPT: &str = r#"
  $(function(){
      $("[data-toggle=popover]").popover();
  });
"#;

/// Stylesheet/script URLs and the inline script the page shell links in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub fonts_css: String,
    pub bootstrap_css: String,
    pub styles_css: String,
    pub jquery_js: String,
    pub bootstrap_js: String,
    pub popover_script: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            fonts_css: String::new(),
            bootstrap_css: BOOTSTRAP_CSS.to_owned(),
            styles_css: STYLES_CSS.to_owned(),
            jquery_js: JQUERY_JS.to_owned(),
            bootstrap_js: BOOTSTRAP_JS.to_owned(),
            popover_script: POPOVER_SCRIPT.to_owned(),
        }
    }
}
