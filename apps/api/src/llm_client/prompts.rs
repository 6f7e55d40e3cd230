// Cross-cutting system prompts. Feature-specific templates live next to the
// feature (see analysis::prompts).

/// System role for every match-feedback completion.
pub const RESUME_COACH_SYSTEM: &str = "You are a resume optimization assistant.";
