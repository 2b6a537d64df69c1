use html_escape::encode_safe;
use indoc::indoc;

use crate::render::RenderedOutput;

pub const PAGE_TITLE: &str = "Live Agent Step-by-Step";

const HEAD: &str = indoc! {r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Live Agent Step-by-Step</title>
    <style>
    body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 60rem; padding: 0 1rem; }
    form { display: flex; gap: .5rem; margin-bottom: 1.5rem; }
    input[type=text] { flex: 1; padding: .5rem; font-size: 1rem; }
    button { padding: .5rem 1.25rem; font-size: 1rem; }
    button:disabled { opacity: .5; cursor: wait; }
    pre { background: #f4f4f5; padding: .75rem; overflow-x: auto; white-space: pre-wrap; }
    .step { border-top: 1px solid #e4e4e7; padding-top: .5rem; }
    .label { margin: .5rem 0 .25rem; }
    .info { background: #e0f2fe; color: #075985; padding: .75rem; border-radius: .25rem; }
    .final-answer { background: #dcfce7; color: #166534; padding: .75rem; border-radius: .25rem; margin-top: 1rem; }
    .error { background: #fee2e2; color: #991b1b; padding: .75rem; border-radius: .25rem; }
    .spinner { display: inline-block; width: 1em; height: 1em; border: 2px solid currentColor; border-right-color: transparent; border-radius: 50%; animation: spin .75s linear infinite; vertical-align: middle; }
    @keyframes spin { to { transform: rotate(360deg); } }
    </style>
    </head>
    <body>
    <h1>🧠 LLM Agent Step-by-Step Reasoning</h1>
"#};

const BUSY_INDICATOR: &str = indoc! {r#"
    <div id="busy" class="info" hidden>Agent is working. This may take a few seconds... <span class="spinner"></span> Thinking...</div>
"#};

// Disables the button on the first submit so a second run cannot start from this page.
const SCRIPT: &str = indoc! {r#"
    <script>
    document.getElementById("ask-form").addEventListener("submit", function (event) {
      var button = document.getElementById("submit");
      if (button.disabled) { event.preventDefault(); return; }
      button.disabled = true;
      document.getElementById("busy").hidden = false;
      var trace = document.getElementById("trace");
      if (trace) { trace.remove(); }
    });
    </script>
    </body>
    </html>
"#};

/// Renders the whole page: the question form and, after a submission, the trace.
pub fn render_page(question: &str, trace: Option<&RenderedOutput>) -> String {
    let mut html = String::from(HEAD);

    html.push_str(&format!(
        concat!(
            "<form id=\"ask-form\" method=\"post\" action=\"/\">\n",
            "<input type=\"text\" name=\"question\" aria-label=\"Ask a question\" ",
            "placeholder=\"Ask a question\" value=\"{}\" autofocus>\n",
            "<button type=\"submit\" id=\"submit\">Submit</button>\n",
            "</form>\n",
        ),
        encode_safe(question)
    ));
    html.push_str(BUSY_INDICATOR);

    if let Some(trace) = trace {
        html.push_str(&format!(
            "<div id=\"trace\" data-question=\"{}\">\n",
            encode_safe(question)
        ));
        html.push_str(&trace.to_html());
        html.push_str("</div>\n");
    }

    html.push_str(SCRIPT);
    html
}
