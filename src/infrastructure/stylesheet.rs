//! Stylesheet boundary: semantic styles to concrete class tokens

use std::sync::Arc;

use crate::domain::{Breakpoint, Style};

/// Default Bootstrap stylesheet.
pub const BOOTSTRAP_CDN: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// External stylesheet providing utility classes.
pub trait StyleSheet: Send + Sync {
    /// URL of the stylesheet document.
    fn href(&self) -> &str;

    /// Class tokens realizing `style`.
    fn classes(&self, style: Style) -> Vec<String>;
}

impl<T: StyleSheet + ?Sized> StyleSheet for Arc<T> {
    fn href(&self) -> &str {
        (**self).href()
    }

    fn classes(&self, style: Style) -> Vec<String> {
        (**self).classes(style)
    }
}

/// Bootstrap 5 class infix for a breakpoint tier.
fn tier_infix(breakpoint: Breakpoint) -> &'static str {
    match breakpoint.px() {
        576 => "sm",
        768 => "md",
        992 => "lg",
        1200 => "xl",
        _ => "xxl",
    }
}

#[derive(Debug, Clone)]
pub struct BootstrapStyleSheet {
    href: String,
}

impl BootstrapStyleSheet {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

impl StyleSheet for BootstrapStyleSheet {
    fn href(&self) -> &str {
        &self.href
    }

    fn classes(&self, style: Style) -> Vec<String> {
        let tokens: &[&str] = match style {
            Style::Container => &["container"],
            Style::ResponsiveRow => &["row", "flex-row", "align-items-center", "min-vh-100"],
            Style::Column(breakpoint) => {
                return vec![
                    "flex-column".to_string(),
                    "col-12".to_string(),
                    format!("col-{}-6", tier_infix(breakpoint)),
                ]
            }
            Style::Centered => &["d-flex", "justify-content-center"],
            Style::CallToAction => &["btn", "btn-outline-secondary", "btn-lg"],
            Style::LeadingIcon => &["me-2"],
            Style::Accessory => &["position-fixed", "top-0", "end-0", "m-3"],
            Style::AccessoryButton => &["btn", "btn-outline-dark"],
            Style::Portrait => &["img-fluid"],
        };
        tokens.iter().map(|t| t.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(576, "col-sm-6")]
    #[case(768, "col-md-6")]
    #[case(992, "col-lg-6")]
    #[case(1200, "col-xl-6")]
    #[case(1400, "col-xxl-6")]
    fn given_tier_breakpoint_when_mapping_column_then_uses_tier_infix(
        #[case] px: u32,
        #[case] expected: &str,
    ) {
        let sheet = BootstrapStyleSheet::new(BOOTSTRAP_CDN);
        let classes = sheet.classes(Style::Column(Breakpoint::new(px).unwrap()));
        assert!(classes.contains(&"col-12".to_string()));
        assert!(classes.contains(&expected.to_string()));
    }

    #[test]
    fn given_call_to_action_when_mapping_then_is_outlined_large_button() {
        let sheet = BootstrapStyleSheet::new(BOOTSTRAP_CDN);
        assert_eq!(
            sheet.classes(Style::CallToAction),
            vec!["btn", "btn-outline-secondary", "btn-lg"]
        );
    }
}
