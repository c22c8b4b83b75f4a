//! Input form page.
//!
//! The page is generated from [`FIELD_SPECS`], so the rendered widget
//! bounds can never drift from the server-side validation. Submission state
//! lives entirely in the page: it shows the form, posts one prediction, and
//! renders the result or a generic failure notice.

use axum::response::Html;

use crate::features::{FieldSection, FIELD_SPECS};

/// Input form page handler
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Input form page", body = String, content_type = "text/html")
    )
)]
pub async fn form_page() -> Html<String> {
    Html(render_form_page())
}

fn render_fields(section: FieldSection, out: &mut String) {
    for spec in FIELD_SPECS.iter().filter(|s| s.section == section) {
        out.push_str(&format!(
            "<label>{label}\
             <input type=\"number\" name=\"{key}\" min=\"{min}\" max=\"{max}\" \
             step=\"{step}\" value=\"{default}\" required></label>\n",
            label = spec.label,
            key = spec.key,
            min = spec.min,
            max = spec.max,
            step = spec.step,
            default = spec.default,
        ));
    }
}

/// Render the single-screen prediction page.
pub fn render_form_page() -> String {
    let mut page = String::with_capacity(8 * 1024);

    page.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Pitting Potential Predictor</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px auto; max-width: 640px; }
        h2 { margin-top: 24px; font-size: 1.1em; }
        label { display: flex; justify-content: space-between; margin: 6px 0; }
        input[type=number] { width: 10em; }
        button { margin-top: 16px; padding: 8px 16px; }
        .value { color: #1976d2; }
        .band { padding: 0.5em 1em; color: white; border-radius: 8px; margin-top: 1em; }
    </style>
</head>
<body>
    <h1>Data-Driven Pitting Corrosion Prediction</h1>
    <p>Enter alloy composition and test conditions to estimate pitting potential (mV SCE).
    This tool is designed for metallurgical engineers and corrosion scientists.</p>
    <form id="predict-form">
"#,
    );

    page.push_str("        <h2>Alloy Composition (wt.%)</h2>\n");
    render_fields(FieldSection::AlloyComposition, &mut page);

    page.push_str("        <h2>Test Environment</h2>\n");
    render_fields(FieldSection::TestEnvironment, &mut page);

    page.push_str(
        r#"        <button type="submit">Predict Pitting Potential</button>
    </form>
    <div id="result"></div>
    <script>
        const form = document.getElementById('predict-form');
        const result = document.getElementById('result');
        form.addEventListener('submit', async (event) => {
            event.preventDefault();
            const payload = {};
            for (const input of form.querySelectorAll('input[type=number]')) {
                payload[input.name] = parseFloat(input.value);
            }
            try {
                const response = await fetch('/api/v1/predict', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(payload),
                });
                if (!response.ok) throw new Error('prediction failed');
                const data = await response.json();
                result.innerHTML =
                    '<h3>Predicted Pitting Potential: <span class="value">' +
                    data.display + '</span></h3>' +
                    '<div class="band" style="background:' + data.risk.color + '"><b>' +
                    data.risk.label + ':</b> ' + data.risk.description + '</div>';
            } catch (err) {
                result.innerHTML =
                    '<div class="band" style="background:#616161">' +
                    'Prediction failed for this submission.</div>';
            }
        });
    </script>
</body>
</html>
"#,
    );

    page
}
