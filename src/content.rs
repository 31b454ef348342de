//! Static page content. Nothing in here is mutated at runtime.

pub const OWNER_NAME: &str = "Ujjawal Kantt";
pub const EMAIL: &str = "kanttujjawal06@gmail.com";
pub const LOCATION: &str = "India";
pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1hLCZ4dnMtB9CY07H1nRlMvfC-vvCnUOb/view?usp=drive_link";
pub const PROFILE_IMAGE: &str = "/profile.svg";
pub const FAVICON: &str = "/favicon.svg";

pub const HERO_TAGLINE: &str = "Developer passionate about creating efficient and user-friendly applications that enhance user experience and support business success.";

/// Phrases cycled by the hero typewriter.
pub const HERO_PHRASES: &[&str] = &[OWNER_NAME, "a Developer", "a Learner", "a Problem Solver"];

/// Code lines cycled along the bottom of the page.
pub const BACKGROUND_SNIPPETS: &[&str] = &[
    r#"const life = ["eat", "sleep", "code", "repeat"]"#,
    "while (true) { learnNewTechnologies(); }",
    "if (coffee.isEmpty()) { refill(); }",
    "function createAwesomeStuff() { /* TODO: Implement awesomeness */ }",
];

pub const FEATURED_TECH: &[&str] = &["React", "Node.js", "TypeScript", "GraphQL", "AWS"];

pub const BIO: &[&str] = &[
    "Hello! I'm Ujjawal Kantt, a passionate software developer studying Computer Science Engineering at SRMIST Chennai. I enjoy solving problems on LeetCode and have a strong interest in Data Structures and Algorithms. Over time, I've developed a love for building scalable applications and exploring AI technologies.",
    "I specialize in JavaScript ecosystems, with expertise in React for frontend development and Node.js for backend services. My approach to development is rooted in clean code principles, a focus on problem-solving through Data Structures and Algorithms, and a constant eagerness to learn and adapt to new technologies. I also enjoy tackling challenges on LeetCode to sharpen my skills.",
    "When I'm not coding, you can find me exploring new technologies, reading about AI advancements, or practicing competitive programming. I believe in the power of technology to solve real-world problems and am always excited to take on new challenges that push the boundaries of what's possible in software development.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    LinkedIn,
    Twitter,
    Code,
    Server,
    Database,
    Smartphone,
    Globe,
    Zap,
    Award,
    FileText,
    Mail,
    MapPin,
    Calendar,
    Send,
    ExternalLink,
    ChevronDown,
}

impl Icon {
    /// Icon-font class for brand marks, `None` for glyph icons.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::GitHub => Some("devicon-github-original"),
            Self::LinkedIn => Some("devicon-linkedin-plain"),
            Self::Twitter => Some("devicon-twitter-original"),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::GitHub | Self::LinkedIn | Self::Twitter => "",
            Self::Code => "</>",
            Self::Server => "🖥️",
            Self::Database => "🗄️",
            Self::Smartphone => "📱",
            Self::Globe => "🌐",
            Self::Zap => "⚡",
            Self::Award => "🏅",
            Self::FileText => "📄",
            Self::Mail => "📧",
            Self::MapPin => "📍",
            Self::Calendar => "📅",
            Self::Send => "✉️",
            Self::ExternalLink => "↗",
            Self::ChevronDown => "⌄",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub github_link: &'static str,
    pub live_link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub Profile",
        href: "https://github.com/Ujjawal-Kantt",
        icon: Icon::GitHub,
    },
    SocialLink {
        label: "LinkedIn Profile",
        href: "https://www.linkedin.com/in/ujjawal-kantt-069aba269/",
        icon: Icon::LinkedIn,
    },
    SocialLink {
        label: "X Profile",
        href: "https://x.com/ujjawalkantt",
        icon: Icon::Twitter,
    },
];

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Frontend",
        icon: Icon::Code,
        description: "Expertise in React, Vue.js, and modern CSS frameworks",
    },
    Skill {
        name: "Backend",
        icon: Icon::Server,
        description: "Proficient in Node.js, Express, and RESTful API design",
    },
    Skill {
        name: "Database",
        icon: Icon::Database,
        description: "Experience with SQL and NoSQL databases like MongoDB",
    },
    Skill {
        name: "Mobile",
        icon: Icon::Smartphone,
        description: "Skilled in React Native for cross-platform mobile development",
    },
    Skill {
        name: "DevOps",
        icon: Icon::Globe,
        description: "Familiar with CI/CD pipelines and cloud platforms like AWS",
    },
    Skill {
        name: "Performance",
        icon: Icon::Zap,
        description: "Focused on optimizing web applications for speed and efficiency",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "LeetCode",
        description: "300+ problems solved",
        icon: Icon::Code,
    },
    Achievement {
        title: "HackerRank",
        description: "5-star problem-solving badge",
        icon: Icon::Award,
    },
    Achievement {
        title: "GitHub",
        description: "500+ contributions in the last year",
        icon: Icon::GitHub,
    },
    Achievement {
        title: "Certifications",
        description: "AWS Certified Developer",
        icon: Icon::FileText,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Audit Safe",
        description: "A web application that visually analyzes security audit reports and provides insightful summaries and suggestions for improving security measures.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTymUJmIm_8DXxxHNR2PvAcsS_ig-Y9fKnmnA&s",
        github_link: "https://github.com/Ujjawal-Kantt/Audit-Safe",
        live_link: "https://audit-safe.vercel.app/",
    },
    Project {
        title: "Matdaan",
        description: "An e-voting platform that enables secure and efficient online voting, ensuring transparency and accessibility in the electoral process.",
        image: "https://play-lh.googleusercontent.com/0rf4ONHGjraar5CqiRA9sFDBeI5C_7o7C8ESMOMlfnbcscAj6n3HKg-Jci3QJEkww8b1",
        github_link: "https://github.com/Ujjawal-Kantt/Matdaan",
        live_link: "https://matdaan.vercel.app/",
    },
    Project {
        title: "Cropify",
        description: "A farmer helper application that predicts plant diseases and offers guidance to improve agricultural production and crop management.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSxbWfmWwWmavhttJy8zDlwxoJc4HtgUf-I2g&s",
        github_link: "https://github.com/Ujjawal-Kantt/Cropify",
        live_link: "https://github.com/Ujjawal-Kantt/Cropify",
    },
    Project {
        title: "Your Hr",
        description: "An intuitive human resources management platform designed to streamline employee onboarding, performance tracking, and communication within organizations.",
        image: "https://img.freepik.com/free-vector/human-resources-hr-typographic-header-idea-recruitment-job-management-hr-manager-interviewing-job-candidate-flat-vector-illustration_613284-1240.jpg?size=338&ext=jpg",
        github_link: "https://github.com/Ujjawal-Kantt/Your_HR",
        live_link: "https://your-hr-drab.vercel.app/",
    },
    Project {
        title: "Project 3",
        description: "A high-performance backend system using Go and PostgreSQL.",
        image: "https://via.placeholder.com/400x200",
        github_link: "#",
        live_link: "#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lists() {
        assert_eq!(PROJECTS.len(), 5);
        assert_eq!(SKILLS.len(), 6);
        assert_eq!(ACHIEVEMENTS.len(), 4);
        assert_eq!(HERO_PHRASES[0], OWNER_NAME);
    }

    #[test]
    fn test_brand_icons_use_font_classes() {
        for link in SOCIAL_LINKS {
            assert!(link.icon.class().is_some(), "{} should be a brand icon", link.label);
        }
        for skill in SKILLS {
            assert!(skill.icon.class().is_none());
            assert!(!skill.icon.glyph().is_empty());
        }
    }

    #[test]
    fn test_local_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in [PROFILE_IMAGE, FAVICON] {
            let path = public.join(asset.trim_start_matches('/'));
            assert!(path.is_file(), "missing {}", path.display());
        }
    }
}
