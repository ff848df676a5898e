//! Server-side rendering of the prediction page

use crate::domain::{Animation, ControlKind, Feature, HealthMetrics, PredictionOutcome};

use super::content::*;

/// Everything one render pass shows
#[derive(Debug, Clone, Default)]
pub struct PageView {
    /// Current values of the input controls
    pub metrics: HealthMetrics,
    /// Result of the "Predict" action, if it was pressed
    pub outcome: Option<PredictionOutcome>,
    pub animation: Option<Animation>,
}

impl PageView {
    pub fn new(metrics: HealthMetrics, animation: Option<Animation>) -> Self {
        Self {
            metrics,
            outcome: None,
            animation,
        }
    }

    pub fn with_outcome(mut self, outcome: PredictionOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }
}

/// Escape text for HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Serialize an animation for a `<script type="application/json">` block.
///
/// `</` may only appear inside JSON strings, where `<\/` decodes to the same text.
pub fn embed_json(animation: &Animation) -> String {
    animation.document().to_string().replace("</", "<\\/")
}

fn render_control(feature: Feature, metrics: &HealthMetrics) -> String {
    let control = feature.control();
    let name = feature.name();
    let value = control.format(metrics.value(feature));
    let bounds = format!(
        r#"min="{}" max="{}" step="{}" value="{}""#,
        control.format(control.min),
        control.format(control.max),
        control.step,
        value
    );

    let input = match control.kind {
        ControlKind::Slider => format!(
            r#"<input type="range" id="{name}" name="{name}" {bounds} oninput="this.nextElementSibling.value = this.value"><output for="{name}">{value}</output>"#
        ),
        ControlKind::Number => {
            format!(r#"<input type="number" id="{name}" name="{name}" {bounds} required>"#)
        }
    };

    format!(
        r#"<div class="control"><label for="{name}">{label}</label>{input}</div>"#,
        label = escape_html(feature.label()),
    )
}

fn render_outcome(outcome: &PredictionOutcome) -> String {
    let class = if outcome.is_success() {
        "prediction-result"
    } else {
        "prediction-error"
    };

    format!(
        r#"<div class="{class}" role="status">{}</div>"#,
        escape_html(&outcome.message())
    )
}

fn render_animation(animation: Option<&Animation>) -> String {
    let mut html = format!(
        r#"<div id="lottie" style="height: {ANIMATION_HEIGHT_PX}px"></div>"#
    );

    if let Some(animation) = animation {
        html.push_str(&format!(
            r#"<script type="application/json" id="lottie-data">{}</script>"#,
            embed_json(animation)
        ));
        html.push_str(&format!(r#"<script src="{LOTTIE_PLAYER_URL}"></script>"#));
        html.push_str(
            r#"<script>lottie.loadAnimation({container: document.getElementById("lottie"), renderer: "svg", loop: true, autoplay: true, animationData: JSON.parse(document.getElementById("lottie-data").textContent)});</script>"#,
        );
    }

    html
}

/// Render the full page
pub fn render_page(view: &PageView) -> String {
    let controls: String = Feature::ALL
        .iter()
        .map(|feature| render_control(*feature, &view.metrics))
        .collect();
    let outcome = view.outcome.as_ref().map(render_outcome).unwrap_or_default();
    let animation = render_animation(view.animation.as_ref());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{icon}</text></svg>">
<style>{style}</style>
<style>{hide}</style>
</head>
<body>
<aside class="sidebar">
<h2>{sidebar_heading}</h2>
<div class="info">{sidebar_info}</div>
</aside>
<div class="content">
<div class="main">
<div class="columns">
<section>
<h1>{heading}</h1>
<p>{intro}</p>
<h3>{inputs_heading}</h3>
<form method="post" action="/predict">
{controls}
<div class="stButton"><button type="submit">{predict}</button></div>
</form>
{outcome}
</section>
<section>
{animation}
</section>
</div>
</div>
<hr>
<div class="app-footer">{footer}</div>
</div>
</body>
</html>
"#,
        title = escape_html(PAGE_TITLE),
        icon = PAGE_ICON,
        style = STYLE_SHEET,
        hide = HIDE_DEFAULT_CHROME,
        sidebar_heading = SIDEBAR_HEADING,
        sidebar_info = escape_html(SIDEBAR_INFO),
        heading = HEADING,
        intro = INTRO,
        inputs_heading = INPUTS_HEADING,
        predict = PREDICT_LABEL,
        footer = escape_html(FOOTER),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"x" & 'y'</b>"#),
            "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_default_page_has_seven_controls() {
        let html = render_page(&PageView::default());

        assert_eq!(html.matches(r#"<div class="control">"#).count(), 7);
        assert_eq!(html.matches(r#"type="range""#).count(), 1);
        assert_eq!(html.matches(r#"type="number""#).count(), 6);
        assert!(html.contains(r#"name="age" min="0" max="100" step="1" value="25""#));
        assert!(html.contains(r#"name="bmi" min="0.0" max="50.0" step="0.1" value="25.0""#));
        assert!(html.contains(
            r#"name="diabetes_pedigree_function" min="0.00" max="2.50" step="0.01" value="0.50""#
        ));
    }

    #[test]
    fn test_controls_render_in_vector_order() {
        let html = render_page(&PageView::default());
        let positions: Vec<usize> = Feature::ALL
            .iter()
            .map(|f| html.find(&format!(r#"name="{}""#, f.name())).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_static_content_always_present() {
        let html = render_page(&PageView::default());

        assert!(html.contains("<title>Diabetes Prediction</title>"));
        assert!(html.contains("<h2>About</h2>"));
        assert!(html.contains("informational purposes only"));
        assert!(html.contains("Developed by Hagar Sherif | © 2024"));
        assert!(html.contains("#MainMenu {visibility: hidden;}"));
        assert!(html.contains("footer {visibility: hidden;}"));
    }

    #[test]
    fn test_no_result_before_predict() {
        let html = render_page(&PageView::default());

        assert!(!html.contains(r#"class="prediction-result""#));
        assert!(!html.contains(r#"class="prediction-error""#));
        assert!(html.contains(".prediction-result {"));
    }

    #[test]
    fn test_score_outcome_rendered() {
        let view = PageView::default().with_outcome(PredictionOutcome::Score { value: 0.42 });
        let html = render_page(&view);

        assert!(html.contains(
            r#"<div class="prediction-result" role="status">The predicted likelihood of diabetes is: 0.42</div>"#
        ));
    }

    #[test]
    fn test_failure_outcome_is_escaped() {
        let view = PageView::default().with_outcome(PredictionOutcome::Failed {
            message: "Unable to compute a prediction: <script>".to_string(),
        });
        let html = render_page(&view);

        assert!(html.contains(r#"class="prediction-error""#));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("prediction: <script>"));
    }

    #[test]
    fn test_missing_animation_renders_blank_area() {
        let html = render_page(&PageView::default());

        assert!(html.contains(r#"<div id="lottie" style="height: 300px"></div>"#));
        assert!(!html.contains("lottie-data"));
        assert!(!html.contains(LOTTIE_PLAYER_URL));
    }

    #[test]
    fn test_animation_embedded_unchanged() {
        let document = json!({"v": "5.5.2", "nm": "doctor", "layers": [{"ty": 4, "nm": "a</script>b"}]});
        let view = PageView::new(HealthMetrics::default(), Some(Animation::new(document.clone())));
        let html = render_page(&view);

        assert!(html.contains(LOTTIE_PLAYER_URL));
        assert!(!html.contains("a</script>b"));

        let start = html.find(r#"id="lottie-data">"#).unwrap() + r#"id="lottie-data">"#.len();
        let end = start + html[start..].find("</script>").unwrap();
        let embedded: serde_json::Value = serde_json::from_str(&html[start..end]).unwrap();
        assert_eq!(embedded, document);
    }

    #[test]
    fn test_submitted_values_are_kept() {
        let metrics = HealthMetrics {
            age: 47,
            bmi: 28.4,
            ..HealthMetrics::default()
        };
        let html = render_page(&PageView::new(metrics, None));

        assert!(html.contains(r#"value="47" oninput"#));
        assert!(html.contains("<output for=\"age\">47</output>"));
        assert!(html.contains(r#"value="28.4""#));
    }
}
