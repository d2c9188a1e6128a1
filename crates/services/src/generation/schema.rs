use serde_json::{Value, json};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

fn question() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "question": string(),
            "options": string_array(),
            "correctAnswer": string(),
        },
        "required": ["question", "options", "correctAnswer"],
    })
}

fn lesson() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "id": string(),
            "title": string(),
            "blocks": {
                "type": "OBJECT",
                "properties": {
                    "keyIdea": string(),
                    "appliedExample": string(),
                    "activity": string(),
                    "quickTest": { "type": "ARRAY", "items": question() },
                },
                "required": ["keyIdea", "appliedExample", "activity", "quickTest"],
            },
        },
        "required": ["id", "title", "blocks"],
    })
}

fn unit() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "id": string(),
            "title": string(),
            "summary": string(),
            "lessons": { "type": "ARRAY", "items": lesson() },
        },
        "required": ["id", "title", "summary", "lessons"],
    })
}

/// Response schema handed to the generator (Gemini's OpenAPI subset). It
/// mirrors `course_core::model::Course` field for field.
#[must_use]
pub fn course_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": string(),
            "description": string(),
            "level": string(),
            "targetProfile": string(),
            "duration": string(),
            "learningObjectives": string_array(),
            "units": { "type": "ARRAY", "items": unit() },
            "finalAssessment": { "type": "ARRAY", "items": question() },
            "finalProjects": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": string(),
                        "description": string(),
                    },
                    "required": ["title", "description"],
                },
            },
            "sources": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": string(),
                        "url": string(),
                        "type": string(),
                    },
                    "required": ["title", "url", "type"],
                },
            },
        },
        "required": [
            "title",
            "description",
            "level",
            "targetProfile",
            "duration",
            "learningObjectives",
            "units",
            "finalAssessment",
            "finalProjects",
            "sources",
        ],
    })
}
