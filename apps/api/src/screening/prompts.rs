// Completion prompts for the screening pipeline.
// The job description or resume text is sent verbatim as the user message.

/// System prompt for job description parsing.
pub const JD_PARSE_SYSTEM: &str = r#"You are a strict parser.

Extract required skills and minimum experience from the job description.

Rules:
- Return ONLY valid JSON.
- Do NOT explain anything.
- Do NOT add extra text.

Format:
{
  "required_skills": [],
  "minimum_experience_years": number
}
"#;

/// System prompt for single-resume parsing.
pub const RESUME_PARSE_SYSTEM: &str = r#"You are a strict resume parser.

Your task:
Extract structured data from ONE resume only.

Rules:
- Return ONLY valid JSON.
- Do NOT explain anything.
- Do NOT add extra text.
- Do NOT combine multiple resumes.
- If multiple education entries exist, return the highest degree only.
- If multiple numbers appear, select total professional experience only.

Format:
{
  "skills": [],
  "experience_years": number,
  "education": ""
}
"#;
