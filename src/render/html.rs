//! HTML rendering of a [`TagCloud`].

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cloud::TagCloud;
use crate::config::CloudConfig;
use crate::error::{Result, TagCloudError};

/// Replaces the HTML-significant characters `& < > " '` with entities.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Writes `cloud` as a complete HTML document and flushes `writer`.
pub fn write_html<W: Write>(cloud: &TagCloud, cfg: &CloudConfig, mut writer: W) -> Result<()> {
    write_document(cloud, cfg, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|err| TagCloudError::io(err, None))
}

/// Renders `cloud` into an in-memory HTML string.
pub fn to_html(cloud: &TagCloud, cfg: &CloudConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_html(cloud, cfg, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| TagCloudError::Serialization(err.to_string()))
}

/// Creates (or truncates) `path` and writes the HTML document into it.
pub fn save_html<P: AsRef<Path>>(cloud: &TagCloud, cfg: &CloudConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|err| TagCloudError::io(err, Some(path.to_path_buf())))?;
    write_html(cloud, cfg, BufWriter::new(file)).map_err(|err| match err {
        TagCloudError::Io { source, path: None } => {
            TagCloudError::io(source, Some(path.to_path_buf()))
        }
        other => other,
    })
}

fn write_document<W: Write>(cloud: &TagCloud, cfg: &CloudConfig, out: &mut W) -> std::io::Result<()> {
    let text = |raw: &str| -> String {
        if cfg.escape_words {
            escape_html(raw).into_owned()
        } else {
            raw.to_owned()
        }
    };
    let heading = format!("Top {} words in {}", cloud.requested, text(&cloud.source_name));

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{heading}</title>")?;
    if let Some(href) = &cfg.stylesheet {
        writeln!(
            out,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            escape_html(href)
        )?;
    }
    if cfg.inline_styles {
        write_styles(cfg, out)?;
    }
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{heading}</h2>")?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "<p class=\"cbox\">")?;
    for entry in &cloud.entries {
        writeln!(
            out,
            "<span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>",
            entry.font_size,
            entry.count,
            text(&entry.word)
        )?;
    }
    writeln!(out, "</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

fn write_styles<W: Write>(cfg: &CloudConfig, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "<style type=\"text/css\">")?;
    writeln!(
        out,
        ".cdiv {{ margin: 0 auto; width: 80%; text-align: center; }}"
    )?;
    writeln!(
        out,
        ".cbox {{ line-height: 1.6; padding: 1em; border: 1px solid #ccc; }}"
    )?;
    for size in cfg.min_font_size..=cfg.max_font_size {
        writeln!(out, ".f{size} {{ font-size: {size}px; }}")?;
    }
    writeln!(out, "</style>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::RenderEntry;
    use std::fs;
    use tempfile::tempdir;

    fn cloud(entries: &[(&str, usize, u32)]) -> TagCloud {
        TagCloud {
            source_name: "data.txt".into(),
            requested: entries.len(),
            entries: entries
                .iter()
                .map(|&(word, count, font_size)| RenderEntry {
                    word: word.into(),
                    count,
                    font_size,
                })
                .collect(),
        }
    }

    #[test]
    fn escape_only_allocates_when_needed() {
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
        assert_eq!(escape_html("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&#39;");
    }

    #[test]
    fn renders_spans_with_size_class_and_count() {
        let html = to_html(&cloud(&[("ant", 2, 11), ("bee", 9, 48)]), &CloudConfig::default())
            .unwrap();
        assert!(html.starts_with("<html>\n<head>\n<title>Top 2 words in data.txt</title>\n"));
        assert!(html.contains("<h2>Top 2 words in data.txt</h2>"));
        assert!(html.contains(
            "<span style=\"cursor:default\" class=\"f11\" title=\"count: 2\">ant</span>\n\
             <span style=\"cursor:default\" class=\"f48\" title=\"count: 9\">bee</span>\n"
        ));
        assert!(html.contains("tagcloud.css\" rel=\"stylesheet\""));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn empty_cloud_keeps_container() {
        let html = to_html(&cloud(&[]), &CloudConfig::default()).unwrap();
        assert!(html.contains("<div class=\"cdiv\">\n<p class=\"cbox\">\n</p>\n</div>"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn escaping_can_be_disabled() {
        let entries = [("<b>", 1, 11)];
        let escaped = to_html(&cloud(&entries), &CloudConfig::default()).unwrap();
        assert!(escaped.contains(">&lt;b&gt;</span>"));

        let cfg = CloudConfig::builder().escape_words(false).build().unwrap();
        let verbatim = to_html(&cloud(&entries), &cfg).unwrap();
        assert!(verbatim.contains("><b></span>"));
    }

    #[test]
    fn inline_styles_cover_the_size_range() {
        let cfg = CloudConfig::builder()
            .stylesheet(None)
            .inline_styles(true)
            .font_sizes(10, 12)
            .build()
            .unwrap();
        let html = to_html(&cloud(&[("ant", 1, 10)]), &cfg).unwrap();
        assert!(!html.contains("<link"));
        for size in 10..=12 {
            assert!(html.contains(&format!(".f{size} {{ font-size: {size}px; }}")));
        }
        assert!(!html.contains(".f13"));
    }

    #[test]
    fn save_html_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cloud.html");
        let cloud = cloud(&[("ant", 1, 11)]);
        save_html(&cloud, &CloudConfig::default(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_html(&cloud, &CloudConfig::default()).unwrap());

        let err = save_html(&cloud, &CloudConfig::default(), dir.path().join("no/such/dir.html"))
            .unwrap_err();
        assert!(matches!(err, TagCloudError::Io { path: Some(_), .. }));
    }
}
