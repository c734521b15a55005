// ============================================================
// Layer 1b — HTML Pages
// ============================================================
// Plain server-side rendering with format!. Every value that
// came from the user (or from an artifact) goes through
// `escape` before it is written into the page.

use std::fmt::Write as _;

use crate::application::{FieldInput, FieldSpec, FormPredictor};
use crate::data::form::FormFields;
use crate::domain::prediction::Prediction;

/// What to show under the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Blank,
    Predicted(Prediction),
    Error(String),
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c    => out.push(c),
        }
    }
    out
}

fn layout(site: &str, heading: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{heading} | {site}</title>
</head>
<body>
<nav>
  <a href="/">Home</a> |
  <a href="/about">About</a> |
  <a href="/methodology">Methodology</a> |
  <a href="/contact">Contact</a>
</nav>
<main>
<h1>{heading}</h1>
{body}
</main>
</body>
</html>
"#,
        site    = escape(site),
        heading = escape(heading),
    )
}

fn render_field(out: &mut String, field: &FieldSpec, value: Option<&str>) {
    let _ = writeln!(out, r#"<p><label for="{0}">{1}</label>"#, field.name, escape(field.label));
    match &field.input {
        FieldInput::Select(choices) => {
            let _ = writeln!(out, r#"<select id="{0}" name="{0}">"#, field.name);
            for choice in choices {
                let selected = if value == Some(choice.as_str()) { " selected" } else { "" };
                let c = escape(choice);
                let _ = writeln!(out, r#"  <option value="{c}"{selected}>{c}</option>"#);
            }
            out.push_str("</select></p>\n");
        }
        FieldInput::Number { step } => {
            let _ = writeln!(
                out,
                r#"<input id="{0}" name="{0}" type="number" step="{1}" value="{2}"></p>"#,
                field.name,
                step,
                escape(value.unwrap_or_default()),
            );
        }
    }
}

/// The prediction form, pre-filled with `values`, plus the outcome.
pub fn form_page(app: &dyn FormPredictor, values: &FormFields, outcome: &Outcome) -> String {
    let mut body = String::from("<form method=\"post\" action=\"/predict\">\n");
    for field in app.fields() {
        render_field(&mut body, &field, field.value_in(values));
    }
    body.push_str("<p><button type=\"submit\">Predict</button></p>\n</form>\n");

    match outcome {
        Outcome::Blank => {}
        Outcome::Predicted(p) => {
            let _ = writeln!(body, r#"<p class="prediction">{}</p>"#, escape(p.message));
            if let Some(prob) = p.probability {
                let _ = writeln!(
                    body,
                    r#"<p class="probability">Estimated probability: {:.1}%</p>"#,
                    prob * 100.0
                );
            }
        }
        Outcome::Error(msg) => {
            let _ = writeln!(body, r#"<p class="error">{}</p>"#, escape(msg));
        }
    }

    layout(app.title(), app.title(), &body)
}

pub fn about_page(app: &dyn FormPredictor) -> String {
    let body = format!(
        "<p>{} estimates a binary outcome from a handful of answers you enter \
         in a form. The estimate comes from a model trained elsewhere; this \
         site only encodes your answers and asks the model.</p>\n\
         <p>It is not a diagnosis. Talk to a clinician about any concern.</p>\n",
        escape(app.title())
    );
    layout(app.title(), "About", &body)
}

pub fn contact_page(app: &dyn FormPredictor) -> String {
    let body = "<p>Questions about this tool or its model can be raised with the \
                team that maintains the training pipeline.</p>\n";
    layout(app.title(), "Contact", body)
}

/// Lists the exact feature order and encoders the model was loaded with.
pub fn methodology_page(app: &dyn FormPredictor) -> String {
    let summary = app.summary();
    let mut body = format!(
        "<p>Model type: <code>{}</code>. Answers are encoded into the \
         following feature vector, in this order:</p>\n<ol>\n",
        escape(summary.estimator)
    );
    for name in summary.features {
        let _ = writeln!(body, "  <li><code>{}</code></li>", escape(name));
    }
    body.push_str("</ol>\n");

    for (field, classes) in &summary.encoders {
        let _ = writeln!(
            body,
            "<p><code>{}</code> codes: {}</p>",
            escape(field),
            classes
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{} = {i}", escape(c)))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    layout(app.title(), "Methodology", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_select_marks_current_value() {
        let mut out = String::new();
        let field = FieldSpec::select("gender", "Gender", ["Female", "Male"]);
        render_field(&mut out, &field, Some("Male"));
        assert!(out.contains(r#"<option value="Male" selected>"#));
        assert!(out.contains(r#"<option value="Female">"#));
    }

    #[test]
    fn test_select_echoes_value_posted_under_alias() {
        let mut out = String::new();
        let field = FieldSpec::select("residence_type", "Residence type", ["Rural", "Urban"])
            .with_aliases(&["residence_type", "Residence_type"]);
        let form = FormFields::from_pairs([("Residence_type", "Rural")]);
        render_field(&mut out, &field, field.value_in(&form));
        assert!(out.contains(r#"<option value="Rural" selected>"#));
        assert!(out.contains(r#"<option value="Urban">"#));
    }

    #[test]
    fn test_number_echoes_escaped_value() {
        let mut out = String::new();
        let field = FieldSpec::number("age", "Age", "1");
        render_field(&mut out, &field, Some("<b>"));
        assert!(out.contains(r#"value="&lt;b&gt;""#));
    }
}
