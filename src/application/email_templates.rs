use std::str::FromStr;

use base64::Engine;

const SUBJECT: &str = "You're on the list";
const CONFIRMED_LINE: &str = "Your spot on the waitlist is confirmed.";
const FOLLOW_UP_LINE: &str = "We'll be in touch when it's time.";

/// Which confirmation layout to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateStyle {
    /// Centered layout with logo, divider, signature and footer.
    #[default]
    Branded,
    /// Bare paragraphs, no styling or images.
    Plain,
}

impl TemplateStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateStyle::Branded => "branded",
            TemplateStyle::Plain => "plain",
        }
    }
}

impl FromStr for TemplateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "branded" => Ok(TemplateStyle::Branded),
            "plain" => Ok(TemplateStyle::Plain),
            other => Err(format!(
                "unknown template style '{other}' (expected 'branded' or 'plain')"
            )),
        }
    }
}

/// Where the branded layout gets its logo from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogoSource {
    #[default]
    None,
    /// Hosted image URL.
    Url(String),
    /// `data:` URI embedded in the message body.
    Inline(String),
}

impl LogoSource {
    /// Embeds raw PNG bytes as a base64 `data:` URI.
    pub fn inline_png(bytes: &[u8]) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        LogoSource::Inline(format!("data:image/png;base64,{encoded}"))
    }

    fn src(&self) -> Option<&str> {
        match self {
            LogoSource::None => None,
            LogoSource::Url(url) => Some(url),
            LogoSource::Inline(uri) => Some(uri),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Confirmation email parameters, fixed at startup.
#[derive(Debug, Clone)]
pub struct ConfirmationTemplate {
    pub style: TemplateStyle,
    pub brand: String,
    pub signature: String,
    pub logo: LogoSource,
}

impl ConfirmationTemplate {
    pub fn new(style: TemplateStyle, brand: impl Into<String>, logo: LogoSource) -> Self {
        let brand = brand.into();
        Self {
            style,
            signature: format!("Admin @ {brand}"),
            brand,
            logo,
        }
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }

    pub fn render(&self, year: i32) -> RenderedEmail {
        let html = match self.style {
            TemplateStyle::Branded => self.branded_html(year),
            TemplateStyle::Plain => self.plain_html(year),
        };

        RenderedEmail {
            subject: SUBJECT.to_string(),
            html,
            text: self.text(year),
        }
    }

    fn text(&self, year: i32) -> String {
        format!(
            "{CONFIRMED_LINE}\n\n{FOLLOW_UP_LINE}\n\n---\n\n{signature}\n\n\u{a9} {year} {brand}",
            signature = self.signature,
            brand = self.brand,
        )
    }

    fn plain_html(&self, year: i32) -> String {
        format!(
            r#"<p>{CONFIRMED_LINE}</p>
<p>{FOLLOW_UP_LINE}</p>
<p>{signature}</p>
<p>&copy; {year} {brand}</p>
"#,
            signature = escape_html(&self.signature),
            brand = escape_html(&self.brand),
        )
    }

    fn branded_html(&self, year: i32) -> String {
        let brand = escape_html(&self.brand);
        let logo = self
            .logo
            .src()
            .map(|src| {
                format!(
                    r#"<div style="margin-bottom:24px;"><img src="{src}" alt="{brand}" width="80" style="display:block;margin:0 auto;"></div>"#,
                    src = escape_html(src),
                )
            })
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
  </head>
  <body style="background:#ffffff;color:#000000;margin:0;padding:0;font-family:-apple-system,BlinkMacSystemFont,'Helvetica Neue',Arial,sans-serif;font-weight:300;">
    <div style="max-width:500px;margin:0 auto;padding:60px 20px;">
      <div style="text-align:center;margin-bottom:48px;">{logo}</div>
      <div style="text-align:center;line-height:1.8;color:#333333;font-size:16px;">
        <p style="margin:0 0 16px 0;">{CONFIRMED_LINE}</p>
        <p style="margin:0 0 16px 0;">{FOLLOW_UP_LINE}</p>
      </div>
      <div style="width:40px;height:1px;background:#e0e0e0;margin:40px auto;"></div>
      <div style="text-align:center;font-size:14px;color:#666666;margin-top:48px;font-style:italic;">
        <p>{signature}</p>
      </div>
      <div style="text-align:center;font-size:11px;color:#999999;margin-top:32px;letter-spacing:0.05em;">
        <p>&copy; {year} {brand}</p>
      </div>
    </div>
  </body>
</html>
"#,
            signature = escape_html(&self.signature),
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
