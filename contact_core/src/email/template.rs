//! HTML body for the notification email sent on every contact submission

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::Display;

use crate::models::FormSubmission;

/// Static parts of the email that come from configuration.
#[derive(Debug, Clone)]
pub struct EmailTemplate {
    pub site_name: String,
    pub timezone: Tz,
    pub timezone_label: String,
}

impl EmailTemplate {
    pub fn new(site_name: impl Into<String>, timezone: Tz, timezone_label: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            timezone,
            timezone_label: timezone_label.into(),
        }
    }

    /// Renders the submission stamped with the current time.
    pub fn format(&self, submission: &FormSubmission) -> String {
        self.render(submission, Utc::now())
    }

    pub fn render(&self, submission: &FormSubmission, received_at: DateTime<Utc>) -> String {
        let received = format_received_at(&received_at.with_timezone(&self.timezone));

        let company = submission
            .company
            .as_deref()
            .map(|company| {
                format!(
                    r#"
              <div class="field">
                <div class="label">Company:</div>
                <div class="value">{}</div>
              </div>
"#,
                    escape_html(company)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <style>
      body {{ font-family: system-ui, sans-serif; line-height: 1.6; color: #333; }}
      .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
      .header {{ background: #1E3A5F; color: white; padding: 20px; border-radius: 8px 8px 0 0; }}
      .content {{ background: #f8f9fa; padding: 30px; border-radius: 0 0 8px 8px; }}
      .field {{ margin-bottom: 20px; }}
      .label {{ font-weight: bold; color: #1E3A5F; }}
      .value {{ margin-top: 5px; }}
      .footer {{ margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; font-size: 14px; color: #666; }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <h1 style="margin: 0;">New Contact Form Submission</h1>
        <p style="margin: 5px 0 0 0; opacity: 0.9;">{site}</p>
      </div>
      <div class="content">
        <div class="field">
          <div class="label">Name:</div>
          <div class="value">{name}</div>
        </div>

        <div class="field">
          <div class="label">Email:</div>
          <div class="value">{email}</div>
        </div>
{company}
        <div class="field">
          <div class="label">Message:</div>
          <div class="value" style="white-space: pre-wrap;">{message}</div>
        </div>

        <div class="footer">
          Received: {received} {label}
        </div>
      </div>
    </div>
  </body>
</html>
"#,
            site = escape_html(&self.site_name),
            name = escape_html(&submission.name),
            email = escape_html(&submission.email),
            company = company,
            message = escape_html(&submission.message),
            received = received,
            label = self.timezone_label,
        )
    }
}

/// US locale style timestamp, e.g. `3/14/2025, 9:05:07 AM`.
pub fn format_received_at<T>(at: &DateTime<T>) -> String
where
    T: TimeZone,
    T::Offset: Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> EmailTemplate {
        EmailTemplate::new("RBK Strategies Website", chrono_tz::America::New_York, "ET")
    }

    fn submission() -> FormSubmission {
        FormSubmission::new(
            "Ada Lovelace",
            "ada@example.com",
            Some("Analytical Engines".to_string()),
            "Hello,\nI would like a quote.",
        )
    }

    #[test]
    fn test_escape_html_all_special_characters() {
        assert_eq!(
            escape_html(r#"&<>"'"#),
            "&amp;&lt;&gt;&quot;&#039;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_render_contains_fields() {
        let html = template().render(&submission(), Utc::now());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("New Contact Form Submission"));
        assert!(html.contains("RBK Strategies Website"));
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("Company:"));
        assert!(html.contains("Analytical Engines"));
        assert!(html.contains("white-space: pre-wrap;\">Hello,\nI would like a quote.</div>"));
    }

    #[test]
    fn test_render_omits_absent_company() {
        let mut without_company = submission();
        without_company.company = None;

        let html = template().render(&without_company, Utc::now());

        assert!(!html.contains("Company:"));
        assert!(html.contains("Name:"));
        assert!(html.contains("Message:"));
    }

    #[test]
    fn test_render_escapes_every_user_field() {
        let hostile = FormSubmission::new(
            "<b>Mallory</b>",
            "m\"al@evil.com",
            Some("O'Reilly & Sons".to_string()),
            "<script>alert('x')</script>",
        );

        let html = template().render(&hostile, Utc::now());

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>Mallory"));
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;Mallory&lt;/b&gt;"));
        assert!(html.contains("m&quot;al@evil.com"));
        assert!(html.contains("O&#039;Reilly &amp; Sons"));
    }

    #[test]
    fn test_footer_uses_configured_time_zone() {
        // 14:05:07 UTC is 10:05:07 EDT in July
        let at = Utc.with_ymd_and_hms(2025, 7, 4, 14, 5, 7).unwrap();
        let html = template().render(&submission(), at);
        assert!(html.contains("Received: 7/4/2025, 10:05:07 AM ET"));

        // and 9:05:07 EST in January
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 14, 5, 7).unwrap();
        let html = template().render(&submission(), at);
        assert!(html.contains("Received: 1/15/2025, 9:05:07 AM ET"));
    }

    #[test]
    fn test_format_received_at_afternoon() {
        let at = chrono_tz::America::New_York
            .with_ymd_and_hms(2025, 12, 31, 23, 59, 1)
            .unwrap();
        assert_eq!(format_received_at(&at), "12/31/2025, 11:59:01 PM");
    }
}
