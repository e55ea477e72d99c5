//! Player page emission
//!
//! Renders the HTML document served for a valid playback token. The page
//! is a full-viewport iframe pointed at the resolved embed URL, plus a
//! small script that hides the loading badge once the iframe loads,
//! disables the context menu, and reloads on common devtools shortcuts.
//!
//! The context-menu and keyboard interception are best-effort UX
//! deterrents only. They are trivially bypassable and are NOT a security
//! boundary; the only access control is the token expiry enforced
//! server-side.

/// Escape a URL for interpolation into a double-quoted JS string literal.
///
/// `<` is emitted as a unicode escape so the payload can never form a
/// closing `</script>` tag.
fn escape_js(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '<' => out.push_str("\\u003C"),
            c => out.push(c),
        }
    }
    out
}

/// Render the player page for a resolved embed URL.
pub fn render_player_page(stream_url: &str) -> String {
    let stream_url = escape_js(stream_url);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Movie Player</title>
  <style>
    html, body {{ margin: 0; background: #000; height: 100%; overflow: hidden; }}
    iframe {{ width: 100vw; height: 100vh; border: none; display: block; }}
    #loader {{ position: fixed; top: 10px; right: 10px; background: rgba(255,255,255,0.1); color: white; padding: 6px 10px; border-radius: 10px; font-family: sans-serif; backdrop-filter: blur(5px); }}
  </style>
</head>
<body>
  <div id="loader">Loading...</div>
  <div id="player"></div>
  <script>
    document.addEventListener('contextmenu', e => e.preventDefault());
    document.onkeydown = e => {{
      if (e.keyCode == 123 || (e.ctrlKey && e.shiftKey && ['I','J','C'].includes(e.key.toUpperCase())) || (e.ctrlKey && e.key.toLowerCase() === 'u')) {{
        location.reload(); return false;
      }}
    }};
    const iframe = document.createElement('iframe');
    iframe.src = "{stream_url}";
    iframe.allowFullscreen = true;
    iframe.sandbox = "allow-scripts allow-same-origin";
    iframe.onload = () => document.getElementById("loader").style.display = "none";
    document.getElementById("player").appendChild(iframe);
  </script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_stream_url() {
        let page = render_player_page("https://vidzee.wtf/movie/42");
        assert!(page.contains(r#"iframe.src = "https://vidzee.wtf/movie/42";"#));
    }

    #[test]
    fn test_page_structure() {
        let page = render_player_page("https://example.com/embed/1");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<div id="loader">Loading...</div>"#));
        assert!(page.contains(r#"<div id="player"></div>"#));
        assert!(page.contains("allow-scripts allow-same-origin"));
        assert!(page.contains("contextmenu"));
    }

    #[test]
    fn test_escape_js() {
        assert_eq!(escape_js(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape_js(r"a\b"), r"a\\b");
        assert_eq!(escape_js("a<b"), "a\\u003Cb");
        assert_eq!(escape_js("https://x/y?a=1&b=2"), "https://x/y?a=1&b=2");
    }

    #[test]
    fn test_hostile_media_id_cannot_break_out() {
        let url = r#"https://vidzee.wtf/movie/42"</script><script>alert(1)"#;
        let page = render_player_page(url);
        assert!(!page.contains("</script><script>alert"));
    }
}
