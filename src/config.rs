use std::time::Duration;

/// Identity and fixed settings of the site.
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub owner_name: &'static str,
    pub logo_path: &'static str,
    pub logo_alt: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub email: &'static str,
    /// IANA id of the owner's home timezone.
    pub reference_timezone: &'static str,
    /// Used whenever a timezone cannot be resolved or parsed.
    pub fallback_timezone: &'static str,
    pub clock_tick: Duration,
}

impl SiteConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn build_year(&self) -> &'static str {
        env!("BUILD_YEAR")
    }
}

pub const SITE: SiteConfig = SiteConfig {
    owner_name: "Alan Cifuentes",
    logo_path: "/logo.png",
    logo_alt: "Alan Cifuentes - Web Developer",
    github_url: "https://github.com/SoulAlan",
    linkedin_url: "https://linkedin.com/in/alancifuentessiliezar",
    email: "a.fernando_cifuentes@yahoo.com",
    reference_timezone: "America/Guatemala",
    fallback_timezone: "UTC",
    clock_tick: Duration::from_secs(1),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_is_not_rewritten() {
        assert_eq!(SITE.mailto(), "mailto:a.fernando_cifuentes@yahoo.com");
    }

    #[test]
    fn test_build_year_is_numeric() {
        let year = SITE.build_year();
        assert_eq!(year.len(), 4);
        assert!(year.parse::<i32>().is_ok());
    }
}
