//! Whitepaper rendering: Markdown to a standalone, styled HTML page.

use std::path::{Path, PathBuf};

use comrak::options::Options;
use thiserror::Error;

/// File name written into the generated directory.
pub const OUTPUT_FILE_NAME: &str = "DevRel-Whitepaper-2024.html";

const STYLESHEET: &str = "\
body { font-family: 'Roboto Mono', monospace; line-height: 1.6; max-width: 800px; margin: 0 auto; padding: 20px; background: #003366; color: #fff; }
h1 { font-size: 2em; color: #FF3333; }
h2 { font-size: 1.5em; color: #00FFFF; margin-top: 1.5em; }
h3 { font-size: 1.25em; color: #00FFFF; }
a { color: #00FFFF; }
pre { background: rgba(255,255,255,0.05); padding: 1em; border: 1px solid rgba(255,255,255,0.15); overflow-x: auto; }
code { font-family: 'Roboto Mono', monospace; font-size: 0.9em; }
blockquote { border-left: 3px solid #FF3333; padding-left: 1em; color: rgba(255,255,255,0.7); }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid rgba(255,255,255,0.2); padding: 0.5em; }
";

#[derive(Debug, Error)]
pub enum WhitepaperError {
    #[error("failed to read whitepaper source {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write whitepaper to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// GitHub-flavoured Markdown with single newlines rendered as line breaks.
fn markdown_options() -> Options<'static> {
    let mut options = Options::default();
    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.table = true;
    ext.autolink = true;
    ext.tasklist = true;

    let render = &mut options.render;
    render.hardbreaks = true;
    // The source is a checked-in document, so raw HTML passes through.
    render.r#unsafe = true;
    options
}

/// Renders `markdown` into a complete HTML document with the embedded
/// stylesheet.
#[must_use]
pub fn render_whitepaper(markdown: &str) -> String {
    let body = comrak::markdown_to_html(markdown, &markdown_options());
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>DevRel Whitepaper</title>\n<style>\n{STYLESHEET}</style>\n</head>\n\
         <body>{body}</body>\n</html>"
    )
}

/// Reads `source`, renders it and writes [`OUTPUT_FILE_NAME`] into
/// `output_dir` (created if missing). Returns the written path.
///
/// # Errors
///
/// Returns [`WhitepaperError::Read`] if the source cannot be read and
/// [`WhitepaperError::Write`] if the output cannot be written.
pub async fn write_whitepaper(source: &Path, output_dir: &Path) -> Result<PathBuf, WhitepaperError> {
    let markdown = tokio::fs::read_to_string(source)
        .await
        .map_err(|e| WhitepaperError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;

    let html = render_whitepaper(&markdown);
    let output = output_dir.join(OUTPUT_FILE_NAME);
    let write_err = |e: std::io::Error| WhitepaperError::Write {
        path: output.clone(),
        source: e,
    };

    tokio::fs::create_dir_all(output_dir).await.map_err(write_err)?;
    tokio::fs::write(&output, html).await.map_err(write_err)?;

    tracing::info!(path = %output.display(), "whitepaper rendered");
    Ok(output)
}
