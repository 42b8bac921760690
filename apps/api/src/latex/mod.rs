//! LaTeX source generation.
//!
//! `generate` is a total, deterministic, side-effect-free mapping from a
//! document to an article-class LaTeX file suitable for Overleaf. The
//! structural skeleton is fixed; only escaped free text is interpolated.
//!
//! Emptiness policy differs from the HTML preview on purpose: Summary and
//! Hobbies sections are always emitted here (header present, body possibly
//! empty), while the preview hides empty sections. Education descriptions
//! are never emitted here even though the preview shows them.

pub mod handlers;

use crate::models::resume::ResumeDocument;

/// Escapes free text for interpolation into the template. Single scan over
/// the input: `& % $ # _ { }` get a backslash, then `~` and `^` become
/// their text commands. Because each source character is visited once, a
/// backslash inserted by one substitution is never re-escaped by another.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(ch),
        }
    }
    out
}

/// Fixed preamble: package set, margins, and the resume macros. Reproduced
/// verbatim so the output compiles unchanged in a standard toolchain.
const PREAMBLE: &str = r"\documentclass[letterpaper,11pt]{article}

\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{verbatim}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}
\input{glyphtounicode}

\pagestyle{fancy}
\fancyhf{} % clear all header and footer fields
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

% Adjust margins
\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{-0.5in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.5in}
\addtolength{\textheight}{1.0in}

\urlstyle{same}

\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

% Sections formatting
\titleformat{\section}{
  \vspace{-4pt}\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \vspace{-5pt}]

% Ensure that generate pdf is machine readable/ATS parsable
\pdfgentounicode=1

%-------------------------
% Custom commands
\newcommand{\resumeItem}[1]{
  \item\small{
    {#1 \vspace{-2pt}}
  }
}

\newcommand{\resumeSubheading}[4]{
  \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
      \textit{\small#3} & \textit{\small #4} \\
    \end{tabular*}\vspace{-7pt}
}

\newcommand{\resumeSubItem}[1]{\resumeItem{#1}\vspace{-4pt}}

\renewcommand\labelitemii{$\vcenter{\hbox{\tiny$\bullet$}}$}

\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0.15in, label={}]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}

%-------------------------------------------
%%%%%%  RESUME STARTS HERE  %%%%%%%%%%%%%%%%%%%%%%%%%%%%


\begin{document}

%----------HEADING----------
\begin{center}
    \textbf{\Huge \scshape ";

/// Generates the complete LaTeX source for a document.
pub fn generate(doc: &ResumeDocument) -> String {
    let personal = &doc.personal;
    let mut latex = String::with_capacity(4096);

    latex.push_str(PREAMBLE);
    latex.push_str(&escape(&personal.full_name));
    latex.push_str("} \\\\ \\vspace{1pt}\n    \\small ");
    latex.push_str(&escape(&personal.phone));
    latex.push_str(" $|$ \\href{mailto:");
    // The mailto target is interpolated raw; only the visible text is escaped.
    latex.push_str(&personal.email);
    latex.push_str("}{\\underline{");
    latex.push_str(&escape(&personal.email));
    latex.push_str("}} $|$ \n    \\href{https://google.com/maps}{\\underline{");
    latex.push_str(&escape(&personal.location));
    latex.push_str("}}\n\\end{center}\n");

    // Summary: the section is emitted even when the text is empty.
    latex.push_str("\n%-----------SUMMARY-----------\n\\section{Summary}\n\\small{\n ");
    latex.push_str(&escape(&personal.summary));
    latex.push_str("\n}\n");

    latex.push_str(
        "\n%-----------EXPERIENCE-----------\n\\section{Experience}\n  \\resumeSubHeadingListStart",
    );
    for exp in &doc.experience {
        latex.push_str("\n    \\resumeSubheading{\n      ");
        latex.push_str(&escape(&exp.role));
        latex.push_str("}{");
        latex.push_str(&escape(&exp.start_date));
        latex.push_str(" -- ");
        latex.push_str(&escape(&exp.end_date));
        latex.push_str("}{\n      ");
        latex.push_str(&escape(&exp.company));
        latex.push_str("}{");
        latex.push_str(&escape(&exp.location));
        latex.push_str("}\n      \\resumeItemListStart");
        // Blank and whitespace-only lines are dropped; an entry with no
        // surviving lines still emits the empty item list.
        for point in &exp.description {
            if !point.trim().is_empty() {
                latex.push_str("\n        \\resumeItem{");
                latex.push_str(&escape(point));
                latex.push('}');
            }
        }
        latex.push_str("\n      \\resumeItemListEnd");
    }
    latex.push_str("\n  \\resumeSubHeadingListEnd\n");

    latex.push_str(
        "\n%-----------PROJECTS-----------\n% (You can add projects section here if needed)\n",
    );

    latex.push_str(
        "\n%-----------EDUCATION-----------\n\\section{Education}\n  \\resumeSubHeadingListStart",
    );
    for edu in &doc.education {
        // The entry's description is deliberately not emitted.
        latex.push_str("\n    \\resumeSubheading{\n      ");
        latex.push_str(&escape(&edu.school));
        latex.push_str("}{");
        latex.push_str(&escape(&edu.graduation_date));
        latex.push_str("}{\n      ");
        latex.push_str(&escape(&edu.degree));
        latex.push_str(" in ");
        latex.push_str(&escape(&edu.field));
        latex.push_str("}{");
        latex.push_str(&escape(&edu.location));
        latex.push('}');
    }
    latex.push_str("\n  \\resumeSubHeadingListEnd\n");

    let languages = doc
        .languages
        .iter()
        .map(|l| format!("{} ({})", l.name, l.level))
        .collect::<Vec<_>>()
        .join(", ");
    latex.push_str("\n%-----------TECHNICAL SKILLS-----------\n\\section{Technical Skills}\n \\begin{itemize}[leftmargin=0.15in, label={}]\n    \\small{\\item{\n     \\textbf{Skills}{: ");
    latex.push_str(&escape(&doc.skills.join(", ")));
    latex.push_str("} \\\\\n     \\textbf{Languages}{: ");
    latex.push_str(&escape(&languages));
    latex.push_str("}\n    }}\n \\end{itemize}\n");

    // Hobbies: same always-emit policy as Summary.
    latex.push_str("\n%-----------HOBBIES-----------\n\\section{Hobbies}\n\\small{\n ");
    latex.push_str(&escape(&doc.hobbies));
    latex.push_str("\n}\n");

    latex.push_str("\n%-------------------------------------------\n\\end{document}\n");
    latex
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Experience, Language, Personal};
    use uuid::Uuid;

    fn make_experience(role: &str, company: &str, location: &str) -> Experience {
        Experience {
            id: Uuid::new_v4(),
            role: role.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            start_date: "01/2020".to_string(),
            end_date: "Current".to_string(),
            description: vec!["Did X".to_string()],
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let doc = ResumeDocument::sample();
        assert_eq!(generate(&doc), generate(&doc));
    }

    #[test]
    fn test_generate_total_on_empty_document() {
        let doc = ResumeDocument::default();
        let out = generate(&doc);
        assert!(out.starts_with("\\documentclass[letterpaper,11pt]{article}"));
        assert!(out.ends_with("\\end{document}\n"));
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("A & B"), "A \\& B");
        assert_eq!(escape("100%"), "100\\%");
        assert_eq!(escape("$5"), "\\$5");
        assert_eq!(escape("#1"), "\\#1");
        assert_eq!(escape("snake_case"), "snake\\_case");
        assert_eq!(escape("{x}"), "\\{x\\}");
        assert_eq!(escape("a~b"), "a\\textasciitilde{}b");
        assert_eq!(escape("a^b"), "a\\textasciicircum{}b");
    }

    #[test]
    fn test_escape_leaves_other_characters_alone() {
        let plain = "Engineer at Acme, 2020 -- now. ünïcode ok";
        assert_eq!(escape(plain), plain);
    }

    #[test]
    fn test_escape_does_not_double_escape_inserted_backslashes() {
        // '_' inserts a backslash; a neighbouring '{' must not touch it.
        assert_eq!(escape("_{"), "\\_\\{");
        assert_eq!(escape("&%"), "\\&\\%");
    }

    #[test]
    fn test_blank_description_lines_are_dropped() {
        let mut doc = ResumeDocument::default();
        let mut exp = make_experience("Engineer", "Acme", "Remote");
        exp.description = vec!["".to_string(), "  ".to_string(), "Did X".to_string()];
        doc.experience = vec![exp];

        let out = generate(&doc);
        // Match the emitted bullet lines, not the \resumeItem use inside
        // the preamble's \resumeSubItem definition.
        assert_eq!(out.matches("\n        \\resumeItem{").count(), 1);
        assert!(out.contains("\\resumeItem{Did X}"));
    }

    #[test]
    fn test_empty_description_still_emits_item_list() {
        let mut doc = ResumeDocument::default();
        let mut exp = make_experience("Engineer", "Acme", "Remote");
        exp.description = vec!["".to_string()];
        doc.experience = vec![exp];

        let out = generate(&doc);
        assert!(out.contains("\\resumeItemListStart\n      \\resumeItemListEnd"));
    }

    #[test]
    fn test_experience_scenario() {
        let mut doc = ResumeDocument::default();
        doc.experience = vec![make_experience("Engineer", "Acme & Co", "Remote")];

        let out = generate(&doc);
        assert!(out.contains("Engineer}"));
        assert!(out.contains("Acme \\& Co"));
        assert!(out.contains("01/2020 -- Current"));
    }

    #[test]
    fn test_education_description_is_never_emitted() {
        let mut doc = ResumeDocument::default();
        doc.education = vec![Education {
            id: Uuid::new_v4(),
            school: "State University".to_string(),
            location: "Springfield".to_string(),
            degree: "BSc".to_string(),
            field: "Physics".to_string(),
            graduation_date: "2019".to_string(),
            description: vec!["Dean's list every semester".to_string()],
        }];

        let out = generate(&doc);
        assert!(out.contains("State University"));
        assert!(out.contains("BSc in Physics"));
        assert!(!out.contains("Dean's list"));
    }

    #[test]
    fn test_summary_and_hobbies_sections_always_present() {
        let doc = ResumeDocument::default();
        let out = generate(&doc);
        assert!(out.contains("\\section{Summary}"));
        assert!(out.contains("\\section{Hobbies}"));
    }

    #[test]
    fn test_empty_skills_and_languages_keep_labels() {
        let doc = ResumeDocument::default();
        let out = generate(&doc);
        assert!(out.contains("\\textbf{Skills}{: }"));
        assert!(out.contains("\\textbf{Languages}{: }"));
    }

    #[test]
    fn test_skills_and_languages_joined() {
        let mut doc = ResumeDocument::default();
        doc.skills = vec!["Rust".to_string(), "SQL".to_string()];
        doc.languages = vec![
            Language {
                id: Uuid::new_v4(),
                name: "English".to_string(),
                level: "C2".to_string(),
                percentage: 95,
            },
            Language {
                id: Uuid::new_v4(),
                name: "Hindi".to_string(),
                level: "C1".to_string(),
                percentage: 90,
            },
        ];

        let out = generate(&doc);
        assert!(out.contains("\\textbf{Skills}{: Rust, SQL}"));
        assert!(out.contains("\\textbf{Languages}{: English (C2), Hindi (C1)}"));
    }

    #[test]
    fn test_heading_block() {
        let mut doc = ResumeDocument::default();
        doc.personal = Personal {
            full_name: "Ada Lovelace".to_string(),
            location: "London".to_string(),
            phone: "+44 1".to_string(),
            email: "ada@example.com".to_string(),
            summary: String::new(),
        };

        let out = generate(&doc);
        assert!(out.contains("\\textbf{\\Huge \\scshape Ada Lovelace}"));
        assert!(out.contains("\\href{mailto:ada@example.com}{\\underline{ada@example.com}}"));
        assert!(out.contains("\\href{https://google.com/maps}{\\underline{London}}"));
    }

    #[test]
    fn test_entries_render_in_insertion_order() {
        let mut doc = ResumeDocument::default();
        doc.experience = vec![
            make_experience("First", "A", "X"),
            make_experience("Second", "B", "Y"),
        ];

        let out = generate(&doc);
        let first = out.find("First").unwrap();
        let second = out.find("Second").unwrap();
        assert!(first < second);
    }
}
