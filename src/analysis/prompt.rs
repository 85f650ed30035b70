// src/analysis/prompt.rs
//! Instruction string for the match-analysis task: exact target JSON shape
//! with a concrete example, a ban on non-JSON prose, and the scoring rubric
//! weights so the model's number is anchored to a reproducible rationale.

pub fn build_analysis_prompt(job_description: &str, resume_text: &str) -> String {
    format!(
        r#"You are an expert ATS (Applicant Tracking System) specialist and resume analyzer.
Your task is to perform a comprehensive analysis comparing a resume against a job description.

CRITICAL: Return ONLY valid JSON. No markdown, no explanations, no additional text.

JOB DESCRIPTION:
"""
{job}
"""

RESUME CONTENT:
"""
{resume}
"""

ANALYSIS INSTRUCTIONS:
1. Carefully read both the job description and resume
2. Extract key requirements, skills, and qualifications from the job description
3. Identify matching elements in the resume
4. Calculate a realistic match score (0-100) based on:
   - Keyword overlap (30%)
   - Experience relevance (30%)
   - Skills alignment (25%)
   - Education/qualifications (15%)
5. Provide specific, actionable recommendations

Return this EXACT JSON structure:
{{
  "matchScore": 85,
  "overallRating": "Good Match",
  "strengths": [
    "Strong technical skills alignment with job requirements",
    "Relevant work experience in similar role"
  ],
  "weaknesses": [
    "Missing specific certification mentioned in job description",
    "Could highlight more quantifiable achievements"
  ],
  "keywordMatch": {{
    "matched": ["JavaScript", "React", "Agile"],
    "total": 3
  }},
  "missingKeywords": ["Docker", "Kubernetes"],
  "recommendations": [
    "Add experience with containerization technologies",
    "Highlight specific achievements with metrics and numbers"
  ],
  "sections": {{
    "experience": {{ "score": 85, "feedback": "Strong relevant experience" }},
    "skills": {{ "score": 75, "feedback": "Good technical skills match" }},
    "education": {{ "score": 90, "feedback": "Educational background aligns well" }},
    "summary": {{ "score": 70, "feedback": "Professional summary could be more targeted" }}
  }}
}}"#,
        job = job_description.trim(),
        resume = resume_text.trim(),
    )
}
