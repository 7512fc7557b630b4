//! Index page rendering.

use diceware_core::PasswordRequest;

/// Everything the index page shows.
pub struct IndexPage<'a> {
    /// Generated passphrase, empty when generation failed.
    pub password: &'a str,
    /// The request the passphrase was generated for.
    pub request: &'a PasswordRequest,
    /// Words in the simple list.
    pub simple_word_count: usize,
    /// Words in the complex list, zero when not loaded.
    pub extended_word_count: usize,
    /// Whether the extended checkbox is offered.
    pub extended_enabled: bool,
    /// Build identifier shown in the footer.
    pub build: &'a str,
}

impl IndexPage<'_> {
    /// Whether generation failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.password.is_empty()
    }

    /// Passphrase length in bytes, the unit the length bounds use.
    #[must_use]
    pub const fn password_length(&self) -> usize {
        self.password.len()
    }

    /// Render the page as HTML.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Diceware passphrase generator</title>
    <link rel="icon" href="/favicon.ico" type="image/svg+xml">
    <link rel="stylesheet" href="/static/styles.css">
</head>
<body>
    <main>
        <h1>Diceware passphrase generator</h1>
        {result}
        <form method="post" action="/">
            <label>Words
                <input type="number" name="n" min="1" value="{n}">
            </label>
            <label>Separator
                <input type="text" name="s" value="{s}">
            </label>
            <label>Minimum length
                <input type="number" name="l" min="0" value="{l}">
            </label>
            <label>Maximum length
                <input type="number" name="u" min="0" value="{u}">
            </label>
            {extended}
            <button type="submit">Generate</button>
        </form>
        <footer>
            <p>{words}</p>
            <p>Build <code>{build}</code></p>
        </footer>
    </main>
</body>
</html>"#,
            result = self.result_block(),
            n = self.request.word_count,
            s = escape(&self.request.separator),
            l = self.request.min_len,
            u = self.request.max_len,
            extended = self.extended_block(),
            words = self.word_counts(),
            build = escape(self.build),
        )
    }

    fn result_block(&self) -> String {
        if self.failed() {
            return r#"<div class="password failed">Could not generate a passphrase with these settings. Try fewer words or a wider length range.</div>"#
                .to_string();
        }
        format!(
            r#"<div class="password">{}</div>
        <p class="meta">Length: {}</p>"#,
            escape(self.password),
            self.password_length()
        )
    }

    fn extended_block(&self) -> String {
        if !self.extended_enabled {
            return String::new();
        }
        let checked = if self.request.use_extended {
            " checked"
        } else {
            ""
        };
        format!(
            r#"<label class="checkbox">
                <input type="checkbox" name="e"{checked}> Use extended word list
            </label>"#
        )
    }

    fn word_counts(&self) -> String {
        if self.extended_enabled {
            format!(
                "{} simple words, {} extended words",
                self.simple_word_count, self.extended_word_count
            )
        } else {
            format!("{} words", self.simple_word_count)
        }
    }
}

/// Escape text for use in HTML content and attribute values.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
