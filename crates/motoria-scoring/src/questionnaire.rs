//! The questionnaire definition served to the test frontend.
//!
//! Option ids reference entries of the answer catalog; `Height` and `Weight`
//! questions take free numeric input and carry no options.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a question is answered on the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum QuestionKind {
    /// Exactly one option.
    CircleChoice,
    /// Any number of options.
    MultipleChoice,
    /// Free numeric input, centimetres.
    Height,
    /// Free numeric input, kilograms.
    Weight,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub answer_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub text: String,
    pub kind: QuestionKind,
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestModule {
    pub module_id: i64,
    pub title: String,
    pub questions: Vec<Question>,
}

fn option(answer_id: i64, text: &str) -> AnswerOption {
    AnswerOption {
        answer_id,
        text: text.to_string(),
    }
}

static MODULES: LazyLock<Vec<TestModule>> = LazyLock::new(|| {
    vec![
        TestModule {
            module_id: 1,
            title: "Complaints".to_string(),
            questions: vec![Question {
                text: "Which of the following do you experience?".to_string(),
                kind: QuestionKind::MultipleChoice,
                options: vec![
                    option(1, "Trembling hands at rest"),
                    option(2, "Stiffness in the hands"),
                    option(3, "Weak grip"),
                    option(4, "Numbness or tingling in the fingers"),
                    option(5, "None of the above"),
                ],
            }],
        },
        TestModule {
            module_id: 2,
            title: "Everyday fine motor tasks".to_string(),
            questions: vec![
                Question {
                    text: "How often do buttons or zips give you trouble?".to_string(),
                    kind: QuestionKind::CircleChoice,
                    options: vec![
                        option(6, "Never"),
                        option(7, "Occasionally"),
                        option(8, "Often"),
                        option(9, "Almost always"),
                    ],
                },
                Question {
                    text: "Has your handwriting changed over the last year?".to_string(),
                    kind: QuestionKind::CircleChoice,
                    options: vec![
                        option(10, "No change"),
                        option(11, "Slightly less tidy"),
                        option(12, "Noticeably harder to read"),
                        option(13, "Much smaller and cramped"),
                    ],
                },
            ],
        },
        TestModule {
            module_id: 3,
            title: "Eating and utensils".to_string(),
            questions: vec![Question {
                text: "How difficult is it to use cutlery?".to_string(),
                kind: QuestionKind::CircleChoice,
                options: vec![
                    option(14, "Not difficult"),
                    option(15, "Slightly difficult"),
                    option(16, "Quite difficult"),
                    option(17, "Very difficult"),
                ],
            }],
        },
        TestModule {
            module_id: 4,
            title: "Measurements".to_string(),
            questions: vec![
                Question {
                    text: "What is your height?".to_string(),
                    kind: QuestionKind::Height,
                    options: vec![],
                },
                Question {
                    text: "What is your weight?".to_string(),
                    kind: QuestionKind::Weight,
                    options: vec![],
                },
            ],
        },
    ]
});

/// The full questionnaire, module by module.
pub fn test_modules() -> &'static [TestModule] {
    &MODULES
}
