use crate::common::environment::DeploymentMode;

const TEMPLATE: &str = include_str!("../../templates/index.html");
const PLACEHOLDER: &str = "{{ environment }}";

// Substitution simple, sans moteur de template
pub fn render_dashboard(mode: &DeploymentMode) -> String {
    TEMPLATE.replace(PLACEHOLDER, &escape_html(mode.as_str()))
}

// Seul le mode est interpolé; on échappe ce qui casserait le HTML
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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
