//! Page content loaded from TOML.

use std::collections::HashSet;

use serde::Deserialize;

use crate::contact::ContactChannels;
use crate::effects::{DEFAULT_DELETE_PAUSE_MS, TypingScript};
use crate::error::ConfigError;

/// Everything the page renders, in one document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub profile: Profile,
    pub contact: ContactChannels,
    #[serde(default)]
    pub taglines: Vec<Tagline>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub carousel: CarouselSettings,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub summary: String,
}

/// One hero tagline and how long it stays on screen once typed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Tagline {
    pub text: String,
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u32,
}

fn default_hold_ms() -> u32 {
    2000
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    pub summary: String,
    /// Logo shown before the card is revealed.
    pub logo: String,
    /// Dashboard screenshot revealed on first click and expanded on later clicks.
    pub dashboard: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

/// Carousel behaviour. No auto-advance unless `autoplay_ms` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CarouselSettings {
    pub autoplay_ms: Option<u32>,
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants deep links and rendering rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let number = &self.contact.whatsapp;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidWhatsapp(number.clone()));
        }

        let email = &self.contact.email;
        if !email.contains('@') || email.contains(['?', '&', '#', '%', ' ']) {
            return Err(ConfigError::InvalidEmail(email.clone()));
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.name.as_str()) {
                return Err(ConfigError::DuplicateProject(project.name.clone()));
            }
        }

        if self.carousel.autoplay_ms == Some(0) {
            return Err(ConfigError::ZeroAutoplay);
        }

        Ok(())
    }

    /// Typing operations for the hero tagline.
    pub fn typing_script(&self) -> TypingScript {
        TypingScript::from_taglines(&self.taglines, DEFAULT_DELETE_PAUSE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [profile]
        name = "Sam Rivera"
        role = "Automation Engineer"

        [contact]
        owner = "Sam"
        whatsapp = "15555550123"
        email = "hello@example.com"
    "#;

    #[test]
    fn test_minimal_config() {
        let config = SiteConfig::from_toml(MINIMAL).unwrap();
        assert_eq!(config.profile.name, "Sam Rivera");
        assert!(config.projects.is_empty());
        assert!(config.testimonials.is_empty());
        assert_eq!(config.carousel.autoplay_ms, None);
        assert!(config.typing_script().is_empty());
        assert!(config.contact.subject_template.contains("{project}"));
    }

    #[test]
    fn test_sections_and_defaults() {
        let source = format!(
            "{MINIMAL}\n{}",
            r#"
            [[taglines]]
            text = "I build things."

            [[taglines]]
            text = "I automate things."
            hold_ms = 2500

            [[projects]]
            name = "Alpha"
            summary = "First"
            logo = "img/alpha.svg"
            dashboard = "img/alpha.png"

            [[testimonials]]
            quote = "Great work."
            author = "Pat"

            [carousel]
            autoplay_ms = 5000
            "#
        );
        let config = SiteConfig::from_toml(&source).unwrap();
        assert_eq!(config.taglines[0].hold_ms, 2000);
        assert_eq!(config.taglines[1].hold_ms, 2500);
        assert_eq!(config.projects[0].tags, Vec::<String>::new());
        assert_eq!(config.testimonials[0].role, "");
        assert_eq!(config.carousel.autoplay_ms, Some(5000));
        assert_eq!(config.typing_script().steps.len(), 3);
    }

    #[test]
    fn test_parse_error() {
        let err = SiteConfig::from_toml("[profile]\nname = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_whatsapp_number() {
        let source = MINIMAL.replace("15555550123", "+1 555 0123");
        assert!(matches!(
            SiteConfig::from_toml(&source),
            Err(ConfigError::InvalidWhatsapp(_))
        ));
    }

    #[test]
    fn test_rejects_bad_email() {
        let source = MINIMAL.replace("hello@example.com", "hello.example.com");
        assert!(matches!(
            SiteConfig::from_toml(&source),
            Err(ConfigError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_rejects_email_that_breaks_mailto() {
        for email in ["hello#x@example.com", "hello%@example.com", "a?b@example.com"] {
            let source = MINIMAL.replace("hello@example.com", email);
            assert!(
                matches!(
                    SiteConfig::from_toml(&source),
                    Err(ConfigError::InvalidEmail(ref e)) if e == email
                ),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_duplicate_projects() {
        let project = r#"
            [[projects]]
            name = "Alpha"
            summary = ""
            logo = "a.svg"
            dashboard = "a.png"
        "#;
        let source = format!("{MINIMAL}{project}{project}");
        assert_eq!(
            SiteConfig::from_toml(&source).unwrap_err().to_string(),
            "duplicate project name: Alpha"
        );
    }

    #[test]
    fn test_rejects_zero_autoplay() {
        let source = format!("{MINIMAL}\n[carousel]\nautoplay_ms = 0\n");
        assert!(matches!(
            SiteConfig::from_toml(&source),
            Err(ConfigError::ZeroAutoplay)
        ));
    }
}
