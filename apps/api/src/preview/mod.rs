//! Server-side HTML preview.
//!
//! Pure function from document + theme to a markup fragment the editor UI
//! drops into the page (and hands to its PDF pipeline). Unlike the LaTeX
//! export, empty sections are omitted entirely, and education descriptions
//! ARE rendered. Both asymmetries are deliberate and covered by tests.

pub mod handlers;

use crate::models::resume::ResumeDocument;
use crate::models::theme::ThemeConfig;

/// Escapes user text for HTML interpolation.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn section_header(title: &str, accent: &str) -> String {
    format!("<h2 class=\"section-header\" style=\"color:{accent}\">{title}</h2>\n")
}

/// Renders the full preview fragment. Deterministic, no side effects.
pub fn render(doc: &ResumeDocument, theme: &ThemeConfig) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<div class=\"resume-page\">\n");

    // Header band
    let full_name = if doc.personal.full_name.is_empty() {
        "Your Name".to_string()
    } else {
        escape_html(&doc.personal.full_name)
    };
    html.push_str(&format!(
        "<header class=\"resume-header\" style=\"background-color:{};color:{}\">\n",
        theme.primary_color, theme.header_text_color
    ));
    html.push_str(&format!("<h1>{full_name}</h1>\n"));
    html.push_str(&format!(
        "<div class=\"contact-line\"><span>{}</span><span>&bull;</span><span>{}</span><span>&bull;</span><span>{}</span></div>\n",
        escape_html(&doc.personal.location),
        escape_html(&doc.personal.phone),
        escape_html(&doc.personal.email),
    ));
    html.push_str("</header>\n<div class=\"resume-body\">\n");

    if !doc.personal.summary.is_empty() {
        html.push_str("<section class=\"summary\">\n");
        html.push_str(&section_header("Summary", theme.accent_color));
        html.push_str(&format!("<p>{}</p>\n", escape_html(&doc.personal.summary)));
        html.push_str("</section>\n");
    }

    if !doc.experience.is_empty() {
        html.push_str("<section class=\"experience\">\n");
        html.push_str(&section_header("Experience", theme.accent_color));
        for exp in &doc.experience {
            html.push_str("<article class=\"entry\">\n");
            html.push_str(&format!(
                "<div class=\"entry-head\"><h3>{}</h3><span class=\"dates\">{} - {}</span></div>\n",
                escape_html(&exp.role),
                escape_html(&exp.start_date),
                escape_html(&exp.end_date),
            ));
            let mut byline = escape_html(&exp.company);
            if !exp.location.is_empty() {
                byline.push_str(" &bull; ");
                byline.push_str(&escape_html(&exp.location));
            }
            html.push_str(&format!("<div class=\"entry-byline\">{byline}</div>\n"));
            html.push_str("<ul>\n");
            for point in exp.description.iter().filter(|p| !p.trim().is_empty()) {
                html.push_str(&format!("<li>{}</li>\n", escape_html(point)));
            }
            html.push_str("</ul>\n</article>\n");
        }
        html.push_str("</section>\n");
    }

    if !doc.skills.is_empty() {
        html.push_str("<section class=\"skills\">\n");
        html.push_str(&section_header("Skills", theme.accent_color));
        html.push_str("<ul class=\"skill-grid\">\n");
        for skill in &doc.skills {
            html.push_str(&format!("<li>{}</li>\n", escape_html(skill)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    if !doc.education.is_empty() {
        html.push_str("<section class=\"education\">\n");
        html.push_str(&section_header("Education", theme.accent_color));
        for edu in &doc.education {
            html.push_str("<article class=\"entry\">\n");
            html.push_str(&format!(
                "<div class=\"entry-head\"><h3>{}</h3><span class=\"dates\">{}</span></div>\n",
                escape_html(&edu.school),
                escape_html(&edu.graduation_date),
            ));
            let mut byline = escape_html(&edu.degree);
            if !edu.field.is_empty() {
                byline.push_str(" in ");
                byline.push_str(&escape_html(&edu.field));
            }
            byline.push_str(" &bull; ");
            byline.push_str(&escape_html(&edu.location));
            html.push_str(&format!("<div class=\"entry-byline\">{byline}</div>\n"));
            // Shown here, absent from the LaTeX export.
            if !edu.description.is_empty() {
                html.push_str("<ul>\n");
                for point in &edu.description {
                    html.push_str(&format!("<li>{}</li>\n", escape_html(point)));
                }
                html.push_str("</ul>\n");
            }
            html.push_str("</article>\n");
        }
        html.push_str("</section>\n");
    }

    if !doc.languages.is_empty() {
        html.push_str("<section class=\"languages\">\n");
        html.push_str(&section_header("Languages", theme.accent_color));
        for lang in &doc.languages {
            html.push_str(&format!(
                "<div class=\"language\"><span class=\"name\">{}</span><span class=\"level\">{}</span>\n",
                escape_html(&lang.name),
                escape_html(&lang.level),
            ));
            html.push_str(&format!(
                "<div class=\"bar\"><div class=\"fill\" style=\"width:{}%;background-color:{}\"></div></div></div>\n",
                lang.percentage, theme.primary_color,
            ));
        }
        html.push_str("</section>\n");
    }

    if !doc.hobbies.is_empty() {
        html.push_str("<section class=\"hobbies\">\n");
        html.push_str(&section_header("Hobbies and Interests", theme.accent_color));
        html.push_str(&format!("<p>{}</p>\n", escape_html(&doc.hobbies)));
        html.push_str("</section>\n");
    }

    html.push_str("</div>\n<footer>Created via ResumeAI Pro</footer>\n</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::theme_by_name;

    fn classic() -> &'static ThemeConfig {
        theme_by_name("classic").unwrap()
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        // The opposite policy from the LaTeX export, on purpose.
        let doc = ResumeDocument::default();
        let html = render(&doc, classic());
        assert!(!html.contains("Summary"));
        assert!(!html.contains("Hobbies"));
        assert!(!html.contains("Experience"));
        assert!(!html.contains("Languages"));
    }

    #[test]
    fn test_populated_sections_are_shown() {
        let doc = ResumeDocument::sample();
        let html = render(&doc, classic());
        assert!(html.contains("Summary"));
        assert!(html.contains("Experience"));
        assert!(html.contains("Skills"));
        assert!(html.contains("Education"));
        assert!(html.contains("Languages"));
        assert!(html.contains("Hobbies and Interests"));
    }

    #[test]
    fn test_education_description_is_rendered() {
        let doc = ResumeDocument::sample();
        let html = render(&doc, classic());
        assert!(html.contains("Developed strong problem-solving"));
    }

    #[test]
    fn test_user_text_is_html_escaped() {
        let mut doc = ResumeDocument::default();
        doc.personal.full_name = "A <script> & Co".to_string();
        let html = render(&doc, classic());
        assert!(html.contains("A &lt;script&gt; &amp; Co"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_name_gets_placeholder() {
        let doc = ResumeDocument::default();
        let html = render(&doc, classic());
        assert!(html.contains("Your Name"));
    }

    #[test]
    fn test_theme_colors_applied() {
        let doc = ResumeDocument::sample();
        let modern = theme_by_name("modern").unwrap();
        let html = render(&doc, modern);
        assert!(html.contains("background-color:#1e293b"));
        assert!(html.contains("color:#3b82f6"));
    }

    #[test]
    fn test_language_bar_width_is_percentage() {
        let doc = ResumeDocument::sample();
        let html = render(&doc, classic());
        assert!(html.contains("width:95%"));
        assert!(html.contains("width:100%"));
    }

    #[test]
    fn test_blank_experience_bullets_filtered() {
        let mut doc = ResumeDocument::sample();
        let mut exp = doc.experience.remove(0);
        exp.description = vec!["".to_string(), "Did X".to_string()];
        doc.experience = vec![exp];
        let html = render(&doc, classic());

        // Inspect the experience section only; other sections render their
        // own <li> items.
        let start = html.find("<section class=\"experience\">").unwrap();
        let section = &html[start..];
        let section = &section[..section.find("</section>").unwrap()];
        assert_eq!(section.matches("<li>").count(), 1);
        assert!(section.contains("<li>Did X</li>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = ResumeDocument::sample();
        assert_eq!(render(&doc, classic()), render(&doc, classic()));
    }
}
