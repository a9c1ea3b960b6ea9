use crate::models::FormSubmission;

/// Normalizes whitespace and casing without changing whether the submission
/// passes validation. A company that is blank after trimming is dropped.
pub fn sanitize(submission: &FormSubmission) -> FormSubmission {
    FormSubmission {
        name: submission.name.trim().to_string(),
        email: submission.email.trim().to_lowercase(),
        company: submission
            .company
            .as_deref()
            .map(str::trim)
            .filter(|company| !company.is_empty())
            .map(str::to_string),
        message: submission.message.trim().to_string(),
    }
}
