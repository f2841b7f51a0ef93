//! HTML rendering of the converter page and the reference table.
//!
//! Everything the page depends on is passed in: the colours through
//! [`ThemeConfig`], the rest through [`Page`]. Nothing here reads global
//! state besides the static unit catalog.

use std::fmt::{self, Display, Formatter};

use rocket::FromFormField;

use crate::catalog::{Category, UNIT_CATALOG};
use crate::conversion::ConversionResult;
use crate::theme::{Theme, ThemeConfig};

/// The two views offered in the sidebar.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, FromFormField)]
pub enum Mode {
    #[default]
    #[field(value = "converter")]
    Converter,
    #[field(value = "table")]
    Table,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Converter, Mode::Table];

    fn label(self) -> &'static str {
        match self {
            Mode::Converter => "Unit Converter",
            Mode::Table => "Units & Conversions Table",
        }
    }

    fn form_value(self) -> &'static str {
        match self {
            Mode::Converter => "converter",
            Mode::Table => "table",
        }
    }
}

/// The state of the form being displayed.
#[derive(Debug, Default)]
pub struct Page<'a> {
    pub mode: Mode,
    pub category: Category,
    pub value: &'a str,
    pub from_unit: Option<&'a str>,
    pub to_unit: Option<&'a str>,
    pub result: Option<ConversionResult>,
    pub author: &'a str,
}

pub fn render(theme: &ThemeConfig, page: &Page<'_>) -> String {
    PageView { theme, page }.to_string()
}

/// A page paired with the colours it is drawn with.
struct PageView<'a> {
    theme: &'a ThemeConfig,
    page: &'a Page<'a>,
}

impl Display for PageView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Unit Converter</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🔢</text></svg>">
    <style>{}</style>
</head>
<body>
"#,
            self.theme.stylesheet()
        )?;

        self.sidebar(f)?;

        f.write_str("<main>\n")?;
        f.write_str("    <h1>Unit Converter 🔢</h1>\n")?;
        f.write_str("    <p>Easily convert units with accuracy! 🎯</p>\n")?;

        match self.page.mode {
            Mode::Converter => self.converter(f)?,
            Mode::Table => table(f)?,
        }

        write!(
            f,
            r#"    <hr>
    <footer>
        Developed by <b class="author">{}</b> 🚀 | Powered by <b>Rocket</b>
    </footer>
</main>
</body>
</html>
"#,
            escape(self.page.author)
        )
    }
}

fn link(theme: Theme, mode: Mode, category: Category) -> String {
    format!(
        "/?theme={}&amp;mode={}&amp;category={}",
        theme.form_value(),
        mode.form_value(),
        category.form_value()
    )
}

fn options(f: &mut Formatter<'_>, units: &[&str], selected: Option<&str>) -> fmt::Result {
    for (index, unit) in units.iter().enumerate() {
        let is_selected = match selected {
            Some(selected) => selected == *unit,
            None => index == 0,
        };
        writeln!(
            f,
            r#"                <option value="{unit}"{}>{unit}</option>"#,
            if is_selected { " selected" } else { "" },
        )?;
    }
    Ok(())
}

fn table(f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str("    <h3>📏 Common Units & Conversions</h3>\n")?;
    for category in Category::ALL {
        writeln!(f, "    <details>\n        <summary> {}</summary>", category.label())?;
        for row in category.reference() {
            writeln!(f, "        <p>🔹 {}</p>", row)?;
        }
        f.write_str("    </details>\n")?;
    }
    Ok(())
}

impl PageView<'_> {
    fn sidebar(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let current = self.theme.theme;
        let page = self.page;

        f.write_str("<aside>\n    <h2>⚙️ Settings</h2>\n    <p>🎨 Select Theme:</p>\n    <ul>\n")?;
        for theme in Theme::ALL {
            let marker = if theme == current { "◉" } else { "○" };
            writeln!(
                f,
                r#"        <li><a href="{}">{} {}</a></li>"#,
                link(theme, page.mode, page.category),
                marker,
                theme.config().label
            )?;
        }
        f.write_str("    </ul>\n    <p>🔍 Select Options:</p>\n    <ul>\n")?;
        for mode in Mode::ALL {
            let marker = if mode == page.mode { "◉" } else { "○" };
            writeln!(
                f,
                r#"        <li><a href="{}">{} {}</a></li>"#,
                link(current, mode, page.category),
                marker,
                mode.label()
            )?;
        }
        f.write_str("    </ul>\n</aside>\n")
    }

    fn converter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let page = self.page;

        write!(
            f,
            r#"    <h3>Unit Converter</h3>
    <form id="category" method="get" action="/">
        <input type="hidden" name="theme" value="{theme}">
        <input type="hidden" name="mode" value="converter">
    </form>
    <form id="convert" method="post" action="/convert">
        <input type="hidden" name="theme" value="{theme}">
        <input type="hidden" name="category" value="{category}">
    </form>
    <div class="columns">
        <div>
            <label for="value">🔢 Enter Value:</label>
            <input form="convert" id="value" name="value" type="text" placeholder="e.g., 10" value="{value}">
        </div>
        <div>
            <label for="category-select">📂 Select Unit Type:</label>
            <select form="category" id="category-select" name="category" onchange="this.form.submit()">
"#,
            theme = self.theme.theme.form_value(),
            category = page.category.form_value(),
            value = escape(page.value),
        )?;

        for entry in UNIT_CATALOG.iter() {
            writeln!(
                f,
                r#"                <option value="{}"{}>{}</option>"#,
                entry.category.form_value(),
                if entry.category == page.category { " selected" } else { "" },
                entry.label
            )?;
        }

        f.write_str(
            r#"            </select>
            <noscript><button form="category" type="submit">Select</button></noscript>
        </div>
        <div>
            <label for="from-unit">🔄 From Unit:</label>
            <select form="convert" id="from-unit" name="from_unit">
"#,
        )?;
        options(f, page.category.units(), page.from_unit)?;
        f.write_str(
            r#"            </select>
            <label for="to-unit">➡️ To Unit:</label>
            <select form="convert" id="to-unit" name="to_unit">
"#,
        )?;
        options(f, page.category.units(), page.to_unit)?;
        f.write_str(
            r#"            </select>
        </div>
    </div>
    <p><button form="convert" type="submit">Convert Now</button></p>
"#,
        )?;

        match &page.result {
            Some(result @ ConversionResult::Success { .. }) => writeln!(
                f,
                r#"    <div class="success">✅ {}</div>"#,
                escape(result.message())
            ),
            Some(result @ ConversionResult::Error { .. }) => {
                writeln!(f, r#"    <div class="error">{}</div>"#, escape(result.message()))
            }
            None => Ok(()),
        }
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
