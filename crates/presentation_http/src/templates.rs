//! HTML templates
//!
//! Templates are compiled into the binary, so the server has no runtime
//! file dependencies.

use tera::Tera;

/// Build the template registry
///
/// # Errors
///
/// Returns an error if a template fails to parse.
pub fn build() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("weather.html", include_str!("../templates/weather.html")),
        ("tomorrow.html", include_str!("../templates/tomorrow.html")),
    ])?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_parse() {
        let tera = build().expect("templates should parse");
        let names: Vec<&str> = tera.get_template_names().collect();
        assert!(names.contains(&"index.html"));
        assert!(names.contains(&"weather.html"));
        assert!(names.contains(&"tomorrow.html"));
    }

    #[test]
    fn index_renders_without_context() {
        let tera = build().expect("templates should parse");
        let html = tera
            .render("index.html", &tera::Context::new())
            .expect("index should render");
        assert!(html.contains("form"));
    }
}
