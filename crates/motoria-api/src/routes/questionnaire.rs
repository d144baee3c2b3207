use axum::Json;

use motoria_scoring::questionnaire::{TestModule, test_modules};

/// The static questionnaire definition the test frontend renders.
pub async fn get_questionnaire() -> Json<&'static [TestModule]> {
    Json(test_modules())
}
