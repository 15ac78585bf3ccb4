//! HTML rendering of the search page

use std::fmt::{self, Display, Write};

use crate::models::{Hotel, Route};

use super::state::SearchView;

const TITLE: &str = "Подорожі з AI";
const SUBTITLE: &str = "Нехай штучний інтелект спланує ваші пригоди";
const FORM_HEADING: &str = "Опишіть свою ідеальну подорож";
const PLACEHOLDER: &str = "Наприклад: Хочу на море з дітьми, бюджет до 500€";
const SUBMIT_LABEL: &str = "🔍 Знайти варіанти";
const LOADING_LABEL: &str = "⏳ Пошук найкращих варіантів...";
const ERROR_HEADING: &str = "Не вдалося знайти варіанти";
const AMENITIES_LABEL: &str = "Зручності:";
const FROM_CENTER: &str = "від центру";

const STYLE: &str = r#"
body{margin:0;min-height:100vh;display:flex;flex-direction:column;background:#f9fafb;font-family:system-ui,sans-serif;color:#1f2937}
header{background:linear-gradient(to right,#2563eb,#4f46e5);color:#fff;padding:1.5rem;text-align:center;box-shadow:0 2px 6px rgba(0,0,0,.15)}
header h1{margin:0;font-size:1.875rem;letter-spacing:.025em}
header p{margin:.25rem 0 0;font-size:.875rem;opacity:.8}
main{flex-grow:1;width:100%;max-width:48rem;margin:0 auto;padding:2rem 1rem;box-sizing:border-box}
.panel,.card{background:#fff;padding:1.5rem;border-radius:.75rem;box-shadow:0 2px 6px rgba(0,0,0,.1)}
form{display:flex;flex-direction:column;gap:1rem}
input{padding:.75rem;border:1px solid #d1d5db;border-radius:.5rem;font-size:1rem}
button{background:#2563eb;color:#fff;padding:.75rem;border:0;border-radius:.5rem;font-weight:600;font-size:1rem;cursor:pointer}
button:hover{background:#1d4ed8}
#loading{margin-top:2rem;text-align:center;color:#2563eb;font-weight:500}
#error{margin-top:2rem;padding:1rem;border-radius:.75rem;background:#fef2f2;color:#b91c1c}
#results{margin-top:2.5rem;display:flex;flex-direction:column;gap:1.5rem}
.card h3{margin:0 0 .5rem;font-size:1.25rem}
.card ul{list-style:none;margin:0;padding:0;display:flex;flex-direction:column;gap:.75rem}
.card li{background:#f9fafb;padding:.75rem;border:1px solid #e5e7eb;border-radius:.375rem}
.hotel-name{font-weight:600}
.hotel-meta{display:flex;justify-content:space-between;font-size:.875rem;color:#4b5563;margin-top:.25rem}
.amenities{font-size:.875rem;color:#4b5563;margin:.75rem 0 0}
footer{background:#f3f4f6;text-align:center;padding:1rem;font-size:.875rem;color:#4b5563;border-top:1px solid #e5e7eb}
"#;

// Shows the indicator and drops stale output while the form submission is in flight
const SCRIPT: &str = r#"
document.getElementById('search-form').addEventListener('submit', function () {
  document.getElementById('loading').hidden = false;
  ['results', 'error'].forEach(function (id) {
    var node = document.getElementById(id);
    if (node) { node.remove(); }
  });
});
"#;

/// Text with HTML special characters escaped
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// The whole page for one view state
pub struct Page<'a> {
    pub view: &'a SearchView,
    pub year: i32,
}

impl Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"uk\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(
            f,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )?;
        writeln!(f, "<title>{TITLE}</title>")?;
        writeln!(f, "<style>{STYLE}</style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;

        writeln!(f, "<header>")?;
        writeln!(f, "<h1>{TITLE}</h1>")?;
        writeln!(f, "<p>{SUBTITLE}</p>")?;
        writeln!(f, "</header>")?;

        writeln!(f, "<main>")?;
        self.write_form(f)?;
        self.write_status(f)?;
        self.write_results(f)?;
        writeln!(f, "</main>")?;

        writeln!(
            f,
            "<footer>&copy; {} {TITLE} — створено з ❤️</footer>",
            self.year
        )?;
        writeln!(f, "<script>{SCRIPT}</script>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

impl Page<'_> {
    fn write_form(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<div class=\"panel\">")?;
        writeln!(f, "<h2>{FORM_HEADING}</h2>")?;
        writeln!(f, "<form id=\"search-form\" method=\"post\" action=\"/\">")?;
        writeln!(
            f,
            "<input type=\"text\" name=\"prompt\" placeholder=\"{}\" value=\"{}\">",
            Escaped(PLACEHOLDER),
            Escaped(self.view.prompt())
        )?;
        writeln!(f, "<button type=\"submit\">{SUBMIT_LABEL}</button>")?;
        writeln!(f, "</form>")?;
        writeln!(f, "</div>")
    }

    fn write_status(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hidden = if self.view.is_loading() { "" } else { " hidden" };
        writeln!(
            f,
            "<div id=\"loading\" role=\"status\"{hidden}>{LOADING_LABEL}</div>"
        )?;

        if let Some(message) = self.view.error() {
            writeln!(f, "<div id=\"error\" role=\"alert\">")?;
            writeln!(f, "<strong>{ERROR_HEADING}</strong>")?;
            writeln!(f, "<p>{}</p>", Escaped(message))?;
            writeln!(f, "</div>")?;
        }
        Ok(())
    }

    fn write_results(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = self.view.results();
        if results.is_empty() {
            return Ok(());
        }

        writeln!(f, "<div id=\"results\">")?;
        for route in results {
            write_card(f, route)?;
        }
        writeln!(f, "</div>")
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, route: &Route) -> fmt::Result {
    writeln!(f, "<div class=\"card\">")?;
    writeln!(f, "<h3>{}</h3>", Escaped(&route.description))?;
    writeln!(f, "<ul>")?;
    for hotel in &route.data {
        write_hotel(f, hotel)?;
    }
    writeln!(f, "</ul>")?;
    writeln!(
        f,
        "<p class=\"amenities\"><span>{AMENITIES_LABEL}</span> {}</p>",
        Escaped(&route.format_amenities())
    )?;
    writeln!(f, "</div>")
}

fn write_hotel(f: &mut fmt::Formatter<'_>, hotel: &Hotel) -> fmt::Result {
    writeln!(f, "<li>")?;
    writeln!(f, "<div class=\"hotel-name\">{}</div>", Escaped(&hotel.name))?;
    writeln!(f, "<div class=\"hotel-meta\">")?;
    writeln!(f, "<span>{}</span>", Escaped(&hotel.format_rating()))?;
    writeln!(
        f,
        "<span>{} {FROM_CENTER}</span>",
        Escaped(&hotel.distance.to_string())
    )?;
    writeln!(f, "</div>")?;
    writeln!(f, "</li>")
}

/// Render the page for `view`, stamping `year` in the footer
#[must_use]
pub fn render_page(view: &SearchView, year: i32) -> String {
    Page { view, year }.to_string()
}
