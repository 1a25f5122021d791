//! Display strings for both page languages.
//!
//! Every bundle is a [`ContentBundle`] value, so a key missing from one
//! language is a compile error rather than an empty spot on the page.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// Badge text on the language toggle.
    pub fn badge(self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    pub fn content(self) -> &'static ContentBundle {
        match self {
            Language::Es => &ES,
            Language::En => &EN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    pub title: &'static str,
    pub about: &'static str,
    pub about_text1: &'static str,
    pub about_text2: &'static str,
    pub about_text3: &'static str,
    pub skills: &'static str,
    pub experience: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
    pub contact_text: &'static str,
    pub contact_button: &'static str,
    pub view_code: &'static str,
    pub connect: &'static str,
    pub live_feeds: &'static str,
    pub my_hour: &'static str,
    pub your_hour: &'static str,
    pub our_hour: &'static str,
    pub full_stack: &'static str,
    pub infrastructure: &'static str,
    pub project_management: &'static str,
    pub technical_leadership: &'static str,
    pub footer: &'static str,
    pub project_titles: ProjectTitles,
    pub project_descriptions: ProjectDescriptions,
    pub experience_entries: [ExperienceEntry; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTitles {
    pub business_management: &'static str,
    pub quotation_platform: &'static str,
    pub digital_signatures: &'static str,
    pub react_apps: &'static str,
    pub interactive_portfolio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptions {
    pub business_management: &'static str,
    pub quotation_platform: &'static str,
    pub digital_signatures: &'static str,
    pub react_apps: &'static str,
    pub interactive_portfolio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub highlights: [&'static str; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKey {
    BusinessManagement,
    QuotationPlatform,
    DigitalSignatures,
    ReactApps,
    InteractivePortfolio,
}

impl ProjectTitles {
    pub fn get(&self, key: ProjectKey) -> &'static str {
        match key {
            ProjectKey::BusinessManagement => self.business_management,
            ProjectKey::QuotationPlatform => self.quotation_platform,
            ProjectKey::DigitalSignatures => self.digital_signatures,
            ProjectKey::ReactApps => self.react_apps,
            ProjectKey::InteractivePortfolio => self.interactive_portfolio,
        }
    }
}

impl ProjectDescriptions {
    pub fn get(&self, key: ProjectKey) -> &'static str {
        match key {
            ProjectKey::BusinessManagement => self.business_management,
            ProjectKey::QuotationPlatform => self.quotation_platform,
            ProjectKey::DigitalSignatures => self.digital_signatures,
            ProjectKey::ReactApps => self.react_apps,
            ProjectKey::InteractivePortfolio => self.interactive_portfolio,
        }
    }
}

impl ContentBundle {
    /// The about-section highlight labels, in display order.
    pub fn highlights(&self) -> [&'static str; 4] {
        [
            self.full_stack,
            self.infrastructure,
            self.project_management,
            self.technical_leadership,
        ]
    }

    fn to_value(&self) -> Value {
        // a struct of string slices always serializes
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Dotted-path access into a bundle, e.g. `"projectTitles.reactApps"`.
///
/// Returns `None` for unknown paths and for paths that end on a group
/// rather than a string. There is no fallback to the other language.
pub fn lookup(language: Language, path: &str) -> Option<String> {
    let pointer = format!("/{}", path.replace('.', "/"));
    language
        .content()
        .to_value()
        .pointer(&pointer)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub key: ProjectKey,
    pub tech: &'static [&'static str],
}

impl Project {
    pub fn title(&self, language: Language) -> &'static str {
        language.content().project_titles.get(self.key)
    }

    pub fn description(&self, language: Language) -> &'static str {
        language.content().project_descriptions.get(self.key)
    }
}

pub const PROJECTS: [Project; 5] = [
    Project {
        key: ProjectKey::BusinessManagement,
        tech: &["PHP", "JavaScript", "CSS", "API Integration"],
    },
    Project {
        key: ProjectKey::QuotationPlatform,
        tech: &["PHP", "JavaScript", "SAP API", "PDF Generation"],
    },
    Project {
        key: ProjectKey::DigitalSignatures,
        tech: &["JavaScript", "PHP", "CSS", "API Integration"],
    },
    Project {
        key: ProjectKey::ReactApps,
        tech: &["React", "JavaScript", "CSS"],
    },
    Project {
        key: ProjectKey::InteractivePortfolio,
        tech: &["Next.js", "React", "Tailwind CSS", "APIs", "Real-time Data"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        category: "Frontend",
        items: &["React", "Next.js", "JavaScript", "CSS", "HTML", "Tailwind CSS"],
    },
    SkillGroup {
        category: "Backend",
        items: &["PHP", "Node.js", "API Integration", "SAP APIs", "Database Design"],
    },
    SkillGroup {
        category: "Infrastructure",
        items: &["AWS", "Linode", "VPS", "SSH", "Domain Management", "Server Deployment"],
    },
    SkillGroup {
        category: "Project Management",
        items: &[
            "Team Leadership",
            "Project Planning",
            "Infrastructure Projects",
            "Agile Methodologies",
        ],
    },
];

static ES: ContentBundle = ContentBundle {
    title: "Desarrollador Full Stack & Technology Project Manager con más de 8 años transformando ideas en soluciones digitales robustas",
    about: "Sobre Mí",
    about_text1: "Soy un desarrollador full stack apasionado con más de 8 años de experiencia en el desarrollo de soluciones web complejas y gestión de proyectos tecnológicos. Mi experiencia abarca desde la infraestructura de redes hasta el desarrollo de aplicaciones web modernas.",
    about_text2: "Como Project Manager, he liderado equipos en proyectos de infraestructura física de redes y comunicaciones, mientras que como desarrollador, he creado sistemas de administración, plataformas de cotización y herramientas de automatización empresarial.",
    about_text3: "Actualmente combino mis roles de PM y desarrollador, creando estructuras para proyectos web y aplicaciones mientras guío equipos hacia el éxito.",
    skills: "Habilidades Técnicas",
    experience: "Experiencia Profesional",
    projects: "Proyectos Destacados",
    contact: "¿Listo para colaborar?",
    contact_text: "Estoy disponible para nuevos proyectos y oportunidades. Si tienes una idea interesante o necesitas un desarrollador experimentado, ¡hablemos!",
    contact_button: "Contacto",
    view_code: "Ver mi código",
    connect: "Conectar",
    live_feeds: "🚀 APIs en Vivo",
    my_hour: "My hour",
    your_hour: "Your local hour",
    our_hour: "Our local hour",
    full_stack: "Desarrollo Full Stack",
    infrastructure: "Infraestructura & DevOps",
    project_management: "Gestión de Proyectos",
    technical_leadership: "Liderazgo Técnico",
    footer: "Desarrollado con Rust, Leptos y Tailwind CSS.",
    project_titles: ProjectTitles {
        business_management: "Sistema de Gestión Empresarial",
        quotation_platform: "Plataforma de Cotizaciones",
        digital_signatures: "Sistema de Firmas Digitales",
        react_apps: "Aplicaciones React",
        interactive_portfolio: "Portafolio Interactivo",
    },
    project_descriptions: ProjectDescriptions {
        business_management: "Desarrollo de sistema completo de administración con integración a APIs externas, generación de reportes y gestión de usuarios.",
        quotation_platform: "Sistema conectado a APIs de SAP para obtener productos, costos y generar cotizaciones en PDF de forma automatizada.",
        digital_signatures: "Herramienta que obtiene datos de colaboradores vía API y genera firmas personalizadas para integración con Outlook.",
        react_apps: "Desarrollo y modificación de aplicaciones para gestión de espacios, ordenamiento de parqueos y reservas de oficina.",
        interactive_portfolio: "Desarrollo de este portafolio con integración de APIs en tiempo real, modo oscuro/claro y efectos avanzados de UI/UX.",
    },
    experience_entries: [
        ExperienceEntry {
            title: "Technology Project Manager & Full Stack Developer",
            period: "8+ años de experiencia",
            description: "Liderazgo de proyectos de infraestructura física de redes y comunicaciones, desarrollo de sistemas web complejos y gestión de equipos de desarrollo.",
            highlights: [
                "Gestión de proyectos tecnológicos",
                "Desarrollo de sistemas de administración",
                "Integración con APIs externas",
                "Optimización de infraestructura",
            ],
        },
        ExperienceEntry {
            title: "Desarrollador Web Full Stack",
            period: "Experiencia continua",
            description: "Desarrollo y mantenimiento de aplicaciones web, rediseño de sitios, implementación de filtros dinámicos y mejoras de rendimiento.",
            highlights: [
                "Rediseño de interfaces web",
                "Integración con APIs",
                "Sistemas de cotización",
                "Optimización de rendimiento",
            ],
        },
        ExperienceEntry {
            title: "Especialista en Integración de Sistemas",
            period: "Proyectos diversos",
            description: "Conexión con sistemas empresariales como SAP, desarrollo de herramientas internas y automatización de procesos.",
            highlights: [
                "Integración SAP",
                "Generación automática de documentos",
                "Sistemas de firma digital",
                "Automatización de procesos",
            ],
        },
    ],
};

static EN: ContentBundle = ContentBundle {
    title: "Full Stack Developer & Technology Project Manager with 8+ years transforming ideas into robust digital solutions",
    about: "About Me",
    about_text1: "I am a passionate full stack developer with over 8 years of experience in developing complex web solutions and managing technology projects. My experience ranges from network infrastructure to modern web application development.",
    about_text2: "As a Project Manager, I have led teams on physical network and communications infrastructure projects, while as a developer, I have created management systems, quotation platforms, and business automation tools.",
    about_text3: "I currently combine my PM and developer roles, creating structures for web projects and applications while guiding teams to success.",
    skills: "Technical Skills",
    experience: "Professional Experience",
    projects: "Featured Projects",
    contact: "Ready to collaborate?",
    contact_text: "I'm available for new projects and opportunities. If you have an interesting idea or need an experienced developer, let's talk!",
    contact_button: "Contact",
    view_code: "View my code",
    connect: "Connect",
    live_feeds: "🚀 Live APIs",
    my_hour: "My hour",
    your_hour: "Your local hour",
    our_hour: "Our local hour",
    full_stack: "Full Stack Development",
    infrastructure: "Infrastructure & DevOps",
    project_management: "Project Management",
    technical_leadership: "Technical Leadership",
    footer: "Built with Rust, Leptos and Tailwind CSS.",
    project_titles: ProjectTitles {
        business_management: "Business Management System",
        quotation_platform: "Quotation Platform",
        digital_signatures: "Digital Signatures System",
        react_apps: "React Applications",
        interactive_portfolio: "Interactive Portfolio",
    },
    project_descriptions: ProjectDescriptions {
        business_management: "Development of complete administration system with external API integration, report generation and user management.",
        quotation_platform: "System connected to SAP APIs to obtain products, costs and generate automated PDF quotations.",
        digital_signatures: "Tool that obtains employee data via API and generates personalized signatures for Outlook integration.",
        react_apps: "Development and modification of applications for space management, parking ordering and office reservations.",
        interactive_portfolio: "Development of this portfolio with real-time API integration, dark/light mode and advanced UI/UX effects.",
    },
    experience_entries: [
        ExperienceEntry {
            title: "Technology Project Manager & Full Stack Developer",
            period: "8+ years of experience",
            description: "Leading physical network and communications infrastructure projects, building complex web systems and managing development teams.",
            highlights: [
                "Technology project management",
                "Administration systems development",
                "External API integration",
                "Infrastructure optimization",
            ],
        },
        ExperienceEntry {
            title: "Full Stack Web Developer",
            period: "Ongoing experience",
            description: "Building and maintaining web applications, redesigning sites, implementing dynamic filters and improving performance.",
            highlights: [
                "Web interface redesign",
                "API integration",
                "Quotation systems",
                "Performance optimization",
            ],
        },
        ExperienceEntry {
            title: "Systems Integration Specialist",
            period: "Various projects",
            description: "Connecting enterprise systems such as SAP, building internal tools and automating processes.",
            highlights: [
                "SAP integration",
                "Automated document generation",
                "Digital signature systems",
                "Process automation",
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    // Collect every leaf path of a serialized bundle, e.g. "projectTitles.reactApps"
    fn leaf_paths(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_paths(v, &path, out);
                }
            }
            Value::Array(items) => {
                for (i, v) in items.iter().enumerate() {
                    leaf_paths(v, &format!("{prefix}.{i}"), out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    fn paths_for(language: Language) -> Vec<String> {
        let mut out = Vec::new();
        leaf_paths(&language.content().to_value(), "", &mut out);
        out.sort();
        out
    }

    #[test]
    fn test_bundle_shapes_match() {
        let es = paths_for(Language::Es);
        let en = paths_for(Language::En);
        assert!(!es.is_empty());
        assert_eq!(es, en);
    }

    #[test]
    fn test_no_empty_strings() {
        for language in Language::ALL {
            for path in paths_for(language) {
                let text = lookup(language, &path)
                    .unwrap_or_else(|| panic!("{path} should resolve for {language:?}"));
                assert!(!text.is_empty(), "{path} is empty for {language:?}");
            }
        }
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for language in Language::ALL {
            assert_eq!(language.toggle().toggle(), language);
            assert_ne!(language.toggle(), language);
        }
    }

    #[test]
    fn test_default_language_is_spanish() {
        assert_eq!(Language::default(), Language::Es);
        assert_eq!(Language::default().code(), "es");
    }

    #[test]
    fn test_lookup_paths() {
        assert_eq!(
            lookup(Language::Es, "title").as_deref(),
            Some(ES.title)
        );
        assert_eq!(
            lookup(Language::En, "projectTitles.reactApps").as_deref(),
            Some("React Applications")
        );
        assert_eq!(lookup(Language::En, "aboutText2").as_deref(), Some(EN.about_text2));
        // groups and unknown keys are not text
        assert_eq!(lookup(Language::En, "projectTitles"), None);
        assert_eq!(lookup(Language::Es, "doesNotExist"), None);
        assert_eq!(lookup(Language::Es, ""), None);
    }

    #[test]
    fn test_projects_follow_language() {
        let portfolio = PROJECTS[4];
        assert_eq!(portfolio.title(Language::Es), "Portafolio Interactivo");
        assert_eq!(portfolio.title(Language::En), "Interactive Portfolio");
        assert_ne!(
            portfolio.description(Language::Es),
            portfolio.description(Language::En)
        );
        assert_eq!(
            portfolio.tech,
            ["Next.js", "React", "Tailwind CSS", "APIs", "Real-time Data"]
        );
    }

    #[test]
    fn test_language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let parsed: Language = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(parsed, Language::Es);
    }
}
