// Prompt text for match feedback. The system role lives in llm_client::prompts.

use crate::llm_client::prompts::RESUME_COACH_SYSTEM;
use crate::llm_client::ChatMessage;

/// Coaching prompt embedding the (already truncated) resume and summarized JD.
pub fn build_match_prompt(resume: &str, job_description: &str) -> String {
    format!(
        r#"
You are a resume coach helping users improve their resume.
Compare the resume content below with the job description and provide the following:
1. A match score out of 10.
2. Keywords missing in the resume.
3. Suggestions to improve the resume's alignment with the JD.

Resume:
{resume}

Job Description:
{job_description}
"#
    )
}

/// The [system, user] message pair sent for one analysis.
pub fn build_match_messages(resume: &str, job_description: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(RESUME_COACH_SYSTEM),
        ChatMessage::user(build_match_prompt(resume, job_description)),
    ]
}
