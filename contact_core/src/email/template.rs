//! HTML notification rendering

use chrono::{DateTime, Utc};

use crate::models::contact::ContactSubmission;

pub fn subject(submission: &ContactSubmission) -> String {
    format!("New Contact Form: {} - {}", submission.name, submission.service)
}

/// Escapes the five HTML-significant characters in user-supplied text.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn message_html(message: &str) -> String {
    escape_html(message).replace('\n', "<br>")
}

fn field(label: &str, value: &str) -> String {
    format!(
        r#"
        <div class="field">
          <div class="label">{label}</div>
          <div class="value">{value}</div>
        </div>"#
    )
}

pub fn render_html(submission: &ContactSubmission, received_at: DateTime<Utc>) -> String {
    let name = escape_html(&submission.name);
    let email = escape_html(&submission.email);

    let mut fields = String::new();
    fields.push_str(&field("👤 Name:", &name));
    fields.push_str(&field(
        "📧 Email:",
        &format!(r#"<a href="mailto:{email}">{email}</a>"#),
    ));
    if let Some(company) = &submission.company {
        fields.push_str(&field("🏢 Company:", &escape_html(company)));
    }
    fields.push_str(&field(
        "🎯 Service Interest:",
        &escape_html(&submission.service_display()),
    ));
    fields.push_str(&field("💬 Message:", &message_html(&submission.message)));

    let received = received_at.format("%Y-%m-%d %H:%M:%S UTC");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; border-radius: 8px 8px 0 0; }}
    .content {{ background: #f9fafb; padding: 30px; border-radius: 0 0 8px 8px; }}
    .field {{ margin-bottom: 20px; }}
    .label {{ font-weight: bold; color: #667eea; margin-bottom: 5px; }}
    .value {{ background: white; padding: 12px; border-radius: 4px; border-left: 3px solid #667eea; }}
    .footer {{ text-align: center; margin-top: 20px; color: #666; font-size: 12px; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h2>🚀 New Contact Form Submission</h2>
    </div>
    <div class="content">{fields}
      <div class="footer">
        <p>Received at: {received}</p>
        <p>Reply directly to this email to contact {name}</p>
      </div>
    </div>
  </div>
</body>
</html>
"#
    )
}
