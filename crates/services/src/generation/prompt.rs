use course_core::model::{CourseRequest, Language};

fn language_directive(language: Language) -> &'static str {
    match language {
        Language::Spanish => "Write every piece of the course in Spanish from Spain (español de España).",
        Language::English => "Write every piece of the course in English.",
    }
}

/// Builds the instruction sent to the generator. Every request field is
/// embedded verbatim.
#[must_use]
pub fn build_prompt(request: &CourseRequest) -> String {
    let language = request.language;
    let level = request.level.label(language);
    let format = request.format.label(language);
    let directive = language_directive(language);

    format!(
        r#"Act as a senior teacher and instructional designer who is an expert in {topic}.
Your mission is to design a complete course for a learner with the profile "{profile}", level "{level}", whose goal is "{objective}".
The available time is "{time}" and the preferred format is "{format}".

Adapt the depth of the content to the stated level. Use a didactic, warm and human tone.
Avoid huge paragraphs; use short, clear sentences.
If the topic is complex, use intuitive analogies but keep the rigor.
Do not mention that you are an AI or a model. Speak like a real teacher.
{directive}

The course must include:
1. An engaging title and description.
2. 5-7 learning objectives.
3. 6 to 8 units (learning paths).
4. Each unit with a creative title and 3 to 5 lessons.
5. Each lesson with the blocks: Key Idea (4-8 sentences), Applied Example, Practical Activity and Quick Test (3 questions).
6. A final assessment of 8 to 10 questions.
7. Two integrative final project proposals.
8. A list of real sources and references.

Every lesson id must be unique across the whole course. The correct answer of each question must be copied exactly from its options.

IMPORTANT: Use the Google Search tool so that facts, examples and sources are accurate and current.
"#,
        topic = request.topic,
        profile = request.profile,
        objective = request.objective,
        time = request.time,
    )
}
