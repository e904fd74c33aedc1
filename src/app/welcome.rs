//! Welcome page rendering module
//!
//! Reads the project README, converts it from markdown to HTML, and embeds
//! it in a static page shell referencing one of two stylesheet sets.

use pulldown_cmark::{html, Options, Parser};

use super::{App, Theme};
use crate::logger;

/// Assets referenced by the welcome shell, one set per theme
struct AssetSet {
    stylesheets: [&'static str; 2],
    script: &'static str,
}

const LIGHT_ASSETS: AssetSet = AssetSet {
    stylesheets: ["/welcome.css", "/highlight.css"],
    script: "/highlight.js",
};

const DARK_ASSETS: AssetSet = AssetSet {
    stylesheets: ["/welcome-dark.css", "/highlight-dark.css"],
    script: "/highlight.js",
};

/// Render the welcome page for the bootstrapped application.
///
/// A missing or unreadable README degrades to a short built-in notice;
/// the page shell is produced either way.
pub async fn render(app: &App) -> String {
    let readme_path = app.file(&app.manifest().site.readme);
    let content = match tokio::fs::read_to_string(&readme_path).await {
        Ok(markdown) => markdown_to_html(&markdown),
        Err(e) => {
            logger::log_warning(&format!(
                "Failed to read {}: {e}",
                readme_path.display()
            ));
            format!(
                "<h1>Welcome</h1>\n<p>Add a {} to your project root to fill this page.</p>",
                app.manifest().site.readme
            )
        }
    };

    page_shell(
        &app.manifest().site.name,
        app.manifest().site.theme,
        &content,
    )
}

/// Convert markdown to HTML with the extensions the welcome page uses
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Embed rendered content in the welcome shell
fn page_shell(site_name: &str, theme: Theme, content: &str) -> String {
    let assets = match theme {
        Theme::Light => &LIGHT_ASSETS,
        Theme::Dark => &DARK_ASSETS,
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Welcome to {site_name}</title>
    <link rel="icon" type="image/svg+xml" href="/favicon.svg">
    <link href="{base}" rel="stylesheet">
    <link href="{highlight}" rel="stylesheet">
    <script src="{script}" defer></script>
</head>
<body>
{content}
</body>
</html>
"#,
        base = assets.stylesheets[0],
        highlight = assets.stylesheets[1],
        script = assets.script,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::MANIFEST_FILE;
    use std::fs;

    #[test]
    fn markdown_renders_headings_and_tables() {
        let html = markdown_to_html("# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn shell_references_the_selected_stylesheet_set() {
        let light = page_shell("demo", Theme::Light, "<p>x</p>");
        assert!(light.contains("/welcome.css"));
        assert!(light.contains("/highlight.css"));
        assert!(light.contains("<title>Welcome to demo</title>"));

        let dark = page_shell("demo", Theme::Dark, "<p>x</p>");
        assert!(dark.contains("/welcome-dark.css"));
        assert!(dark.contains("/highlight-dark.css"));
        assert!(dark.contains("/highlight.js"));
    }

    #[tokio::test]
    async fn render_embeds_the_readme() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "[site]\nname = \"demo\"\n").unwrap();
        fs::write(dir.path().join("README.md"), "# Hello\n\nSome *prose*.\n").unwrap();

        let app = App::bootstrap(dir.path()).unwrap();
        let page = render(&app).await;
        assert!(page.contains("<h1>Hello</h1>"));
        assert!(page.contains("<em>prose</em>"));
    }

    #[tokio::test]
    async fn render_survives_a_missing_readme() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "").unwrap();

        let app = App::bootstrap(dir.path()).unwrap();
        let page = render(&app).await;
        assert!(page.contains("<title>Welcome to your project</title>"));
        assert!(page.contains("README.md"));
    }
}
