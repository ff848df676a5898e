//! Static page content: metadata, style sheet, sidebar and footer

pub const PAGE_TITLE: &str = "Diabetes Prediction";
pub const PAGE_ICON: &str = "🩺";

pub const HEADING: &str = "Diabetes Prediction App";
pub const INTRO: &str =
    "This app predicts the likelihood of diabetes based on various health metrics.";
pub const INPUTS_HEADING: &str = "Input Features";
pub const PREDICT_LABEL: &str = "Predict";

pub const SIDEBAR_HEADING: &str = "About";
pub const SIDEBAR_INFO: &str = "This Diabetes Prediction App uses machine learning to estimate \
the likelihood of diabetes based on various health metrics. It's important to note that this \
tool is for informational purposes only and should not be considered as a substitute for \
professional medical advice.";

pub const FOOTER: &str = "Developed by Hagar Sherif | © 2024";

/// Script that plays the embedded animation descriptor
pub const LOTTIE_PLAYER_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/lottie-web/5.12.2/lottie.min.js";

pub const ANIMATION_HEIGHT_PX: u32 = 300;

pub const STYLE_SHEET: &str = r#"
body {
    margin: 0;
    font-family: "Source Sans Pro", sans-serif;
    color: #31333f;
    display: flex;
    min-height: 100vh;
}
.sidebar {
    width: 18rem;
    background-color: #f0f2f6;
    padding: 2rem 1.5rem;
}
.sidebar .info {
    background-color: rgba(28, 131, 225, 0.1);
    color: #004280;
    padding: 1rem;
    border-radius: 0.5rem;
}
.content {
    flex: 1;
    padding: 2rem 3rem;
}
.main {
    background-color: #f0f2f6;
    padding: 2rem;
    border-radius: 10px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.columns {
    display: grid;
    grid-template-columns: 2fr 1fr;
    gap: 2rem;
}
.control {
    display: flex;
    flex-direction: column;
    margin-bottom: 1rem;
}
.control label {
    font-size: 0.9rem;
    margin-bottom: 0.25rem;
}
.stButton>button {
    background-color: #4CAF50;
    color: white;
    font-weight: bold;
    border: none;
    padding: 0.5rem 1rem;
    border-radius: 5px;
    transition: all 0.3s ease;
}
.stButton>button:hover {
    background-color: #45a049;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.2);
}
.prediction-result {
    font-size: 1.5rem;
    font-weight: bold;
    color: #2c3e50;
    margin-top: 1rem;
}
.prediction-error {
    font-size: 1rem;
    color: #b00020;
    background-color: rgba(255, 43, 43, 0.09);
    padding: 0.75rem 1rem;
    border-radius: 0.5rem;
    margin-top: 1rem;
}
"#;

/// Hides the hamburger menu and the default footer element
pub const HIDE_DEFAULT_CHROME: &str = r#"
#MainMenu {visibility: hidden;}
footer {visibility: hidden;}
"#;
