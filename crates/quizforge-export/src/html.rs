//! HTML form generator.
//!
//! Produces a self-contained HTML assessment form with all CSS/JS inlined.
//! The form is static: the submit handler shows a confirmation and sends
//! nothing anywhere.

use anyhow::Result;
use std::path::Path;

use quizforge_core::assessment::Assessment;
use quizforge_core::model::{Question, QuestionType};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate the HTML form document for an assessment.
pub fn generate_html_form(assessment: &Assessment) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{}</title>\n",
        html_escape(&assessment.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&assessment.title)));
    html.push_str(&format!(
        "<p class=\"meta\">Duration: {} minutes | Questions: {}</p>\n",
        assessment.duration_minutes, assessment.total_questions
    ));
    html.push_str("</header>\n");

    // Instructions
    html.push_str("<section class=\"instructions\">\n<h3>Instructions</h3>\n<ul>\n");
    for instruction in &assessment.instructions {
        html.push_str(&format!("<li>{}</li>\n", html_escape(instruction)));
    }
    html.push_str("</ul>\n</section>\n");

    // Questions
    html.push_str("<form id=\"assessmentForm\">\n");
    for (i, question) in assessment.questions.iter().enumerate() {
        html.push_str(&question_block(question, i + 1));
    }
    html.push_str("<button type=\"submit\">Submit Assessment</button>\n");
    html.push_str("</form>\n");

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Render one question as a form block. `position` is 1-based and names
/// the input group (`q1`, `q2`, ...).
fn question_block(question: &Question, position: usize) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"question\">\n");
    html.push_str(&format!("<h3>Question {position}</h3>\n"));
    html.push_str(&format!(
        "<p><strong>{}</strong></p>\n",
        html_escape(&question.prompt)
    ));

    match question.question_type {
        QuestionType::MultipleChoice => {
            html.push_str("<div class=\"options\">\n");
            for (j, option) in question.options.iter().flatten().enumerate() {
                let escaped = html_escape(option);
                html.push_str(&format!(
                    "<div class=\"option\">\n\
                     <input type=\"radio\" name=\"q{position}\" value=\"{escaped}\" id=\"q{position}_{j}\">\n\
                     <label for=\"q{position}_{j}\">{escaped}</label>\n\
                     </div>\n",
                ));
            }
            html.push_str("</div>\n");
        }
        QuestionType::TrueFalse => {
            html.push_str(&format!(
                "<div class=\"options\">\n\
                 <div class=\"option\">\n\
                 <input type=\"radio\" name=\"q{position}\" value=\"true\" id=\"q{position}_true\">\n\
                 <label for=\"q{position}_true\">True</label>\n\
                 </div>\n\
                 <div class=\"option\">\n\
                 <input type=\"radio\" name=\"q{position}\" value=\"false\" id=\"q{position}_false\">\n\
                 <label for=\"q{position}_false\">False</label>\n\
                 </div>\n\
                 </div>\n",
            ));
        }
        QuestionType::ShortAnswer => {
            html.push_str(&format!(
                "<textarea name=\"q{position}\" rows=\"3\" placeholder=\"Enter your answer here...\"></textarea>\n",
            ));
        }
        // Long-form answers get a taller text area.
        QuestionType::Essay | QuestionType::Scenario => {
            html.push_str(&format!(
                "<textarea name=\"q{position}\" rows=\"10\" placeholder=\"Enter your answer here...\"></textarea>\n",
            ));
        }
    }

    html.push_str("</div>\n");
    html
}

/// Write the HTML form to a file.
pub fn write_html_form(assessment: &Assessment, path: &Path) -> Result<()> {
    let html = generate_html_form(assessment);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
header { background: #0078d4; color: white; padding: 20px; border-radius: 5px; }
.meta { margin: 0; }
.instructions { background: #f8f9fa; padding: 15px; border-radius: 5px; margin: 20px 0; }
.question { margin: 20px 0; padding: 15px; border: 1px solid #ddd; border-radius: 5px; }
.options { margin: 10px 0; }
.option { margin: 5px 0; }
input[type=radio] { margin-right: 10px; }
textarea { width: 100%; box-sizing: border-box; }
button { background: #0078d4; color: white; border: none; padding: 10px 20px; border-radius: 5px; cursor: pointer; }
"#;

const JS: &str = r#"
document.getElementById('assessmentForm').addEventListener('submit', function(e) {
  e.preventDefault();
  alert('Assessment submitted successfully!');
});
"#;
