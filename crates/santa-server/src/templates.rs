use rust_embed::Embed;

#[derive(Embed)]
#[folder = "templates/"]
struct Templates;

/// Literal placeholder substitution; `replace` covers every occurrence.
/// Names come from the operator's config, not from visitors, but they are
/// escaped anyway before landing in HTML.
pub fn render_reveal(self_name: &str, target_name: &str) -> String {
    match template("reveal.html") {
        Some(html) => html
            .replace("{{self}}", &escape_html(self_name))
            .replace("{{target}}", &escape_html(target_name)),
        None => format!("{self_name} → {target_name}"),
    }
}

pub fn render_error(message: &str) -> String {
    match template("error.html") {
        Some(html) => html.replace("{{error_message}}", &escape_html(message)),
        None => message.to_string(),
    }
}

fn template(name: &str) -> Option<String> {
    <Templates as Embed>::get(name).map(|f| String::from_utf8_lossy(&f.data).into_owned())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
