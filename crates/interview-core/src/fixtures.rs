//! Sample records the mock backend starts with.

use chrono::{DateTime, TimeZone, Utc};
use interview_types::{
    evaluation::{Answers, Evaluation},
    interview::Interview,
};

pub fn sample_interviews() -> Vec<Interview> {
    vec![
        Interview {
            id: "1".to_string(),
            candidate_name: "張小明".to_string(),
            questions: vec![
                "Tell me about yourself and your background.".to_string(),
                "What are your greatest strengths and weaknesses?".to_string(),
                "Why are you interested in this position?".to_string(),
            ],
            created_at: at(2025, 5, 30, 10, 30),
        },
        Interview {
            id: "2".to_string(),
            candidate_name: "李美華".to_string(),
            questions: vec![
                "Describe a challenging project you worked on.".to_string(),
                "How do you handle stress and pressure?".to_string(),
                "Where do you see yourself in 5 years?".to_string(),
            ],
            created_at: at(2025, 5, 29, 14, 20),
        },
    ]
}

pub fn sample_evaluations() -> Vec<Evaluation> {
    vec![
        Evaluation {
            id: "1".to_string(),
            interview_id: "1".to_string(),
            answers: Answers::from_ordered([
                "I am a software engineer with five years of frontend experience, mostly React \
                 and TypeScript, on projects ranging from e-commerce to enterprise tools.",
                "I learn quickly and pay attention to detail. I sometimes polish code longer \
                 than needed and am working on balancing quality with delivery.",
                "The role matches my goal of building AI-driven products with a strong team.",
            ]),
            score: 0.85,
            feedback: "Excellent performance! Your answers were well structured and showed a solid \
                       grasp of software development. Adding concrete project examples would make \
                       them even stronger."
                .to_string(),
            created_at: at(2025, 5, 30, 11, 45),
        },
        Evaluation {
            id: "2".to_string(),
            interview_id: "2".to_string(),
            answers: Answers::from_ordered([
                "I built an e-commerce platform that integrated several payment providers under a \
                 tight deadline and heavy traffic.",
                "I break work into small pieces, prioritise, and ask the team for help early.",
                "I want to grow with modern technologies and contribute to a strong team.",
            ]),
            score: 0.78,
            feedback: "Good interview performance with clear, honest answers. Prepare more detailed \
                       stories about your impact in previous roles."
                .to_string(),
            created_at: at(2025, 5, 28, 14, 20),
        },
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}
