use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Personal {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub phone: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    Email,
}

impl SocialIcon {
    /// Icon font class.
    pub fn class(self) -> &'static str {
        match self {
            SocialIcon::GitHub => "devicon-github-plain",
            SocialIcon::LinkedIn => "devicon-linkedin-plain",
            SocialIcon::Email => "extra-email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
    pub icon: SocialIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillCategory {
    Platforms,
    Product,
    Development,
    Design,
    Business,
}

impl SkillCategory {
    pub fn all() -> [SkillCategory; 5] {
        [
            SkillCategory::Platforms,
            SkillCategory::Product,
            SkillCategory::Development,
            SkillCategory::Design,
            SkillCategory::Business,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Platforms => "Vibe Coding & AI Platforms",
            SkillCategory::Product => "Product Development",
            SkillCategory::Development => "Code",
            SkillCategory::Design => "Design & Product",
            SkillCategory::Business => "Business & Soft Skills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    /// 0-100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Mobile,
    Web,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Mobile => "📱 Mobile",
            ProjectCategory::Web => "🌐 Web",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub category: ProjectCategory,
    pub technologies: &'static [&'static str],
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    /// `YYYY-MM`
    pub start: &'static str,
    pub end: Option<&'static str>,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

impl Experience {
    /// `Jan 2025 - Present`, `Dec 2022 - Apr 2023`.
    pub fn period(&self) -> String {
        let end = self.end.map_or_else(|| "Present".to_string(), month_label);
        format!("{} - {end}", month_label(self.start))
    }
}

fn month_label(month: &str) -> String {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|_| month.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub credential_url: Option<&'static str>,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Cv {
    pub personal: Personal,
    pub social: &'static [SocialLink],
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
    pub experience: &'static [Experience],
    pub certificates: &'static [Certificate],
}

impl Cv {
    /// Non-empty categories in display order, each with its skills in data order.
    pub fn skill_groups(&self) -> Vec<(SkillCategory, Vec<Skill>)> {
        SkillCategory::all()
            .into_iter()
            .map(|category| {
                let skills = self
                    .skills
                    .iter()
                    .filter(|skill| skill.category == category)
                    .copied()
                    .collect::<Vec<_>>();
                (category, skills)
            })
            .filter(|(_, skills)| !skills.is_empty())
            .collect()
    }

    /// Featured projects first; order within each group is kept.
    pub fn projects_by_prominence(&self) -> Vec<Project> {
        let mut projects = self.projects.to_vec();
        projects.sort_by_key(|project| !project.featured);
        projects
    }

    pub fn certificate(&self, id: &str) -> Option<Certificate> {
        self.certificates.iter().find(|cert| cert.id == id).copied()
    }
}

pub const CV: Cv = Cv {
    personal: PERSONAL,
    social: SOCIAL,
    skills: SKILLS,
    projects: PROJECTS,
    experience: EXPERIENCE,
    certificates: CERTIFICATES,
};

const PERSONAL: Personal = Personal {
    name: "Onur Hüseyin Koçak",
    title: "Vibe Coding Specialist & AI-Assisted Developer | React Native Enthusiast",
    tagline: "From Zero to Launch in Days: Building AI-Powered Apps that Solve Real Problems",
    bio: "I turn ideas into real, revenue-generating applications, fast. Expert in vibe coding and AI-assisted development platforms, I've built and shipped multiple mobile & web apps from concept to deployment. With a unique blend of sales psychology, product thinking, and rapid development skills, I create apps that users love and businesses need. Currently expanding my React and React Native expertise to complement my vibe coding superpowers.",
    email: "onurhuseyinkocak1@gmail.com",
    location: "Alanya, Antalya, Turkey",
    phone: Some("+90 544 713 15 50"),
};

const SOCIAL: &[SocialLink] = &[
    SocialLink {
        platform: "GitHub",
        url: "https://github.com/onurhuseyinkocak",
        icon: SocialIcon::GitHub,
    },
    SocialLink {
        platform: "LinkedIn",
        url: "https://www.linkedin.com/in/onur-hüseyin-koçak",
        icon: SocialIcon::LinkedIn,
    },
    SocialLink {
        platform: "Email",
        url: "mailto:onurhuseyinkocak1@gmail.com",
        icon: SocialIcon::Email,
    },
];

const fn skill(name: &'static str, category: SkillCategory, level: u8) -> Skill {
    Skill {
        name,
        category,
        level,
    }
}

const SKILLS: &[Skill] = &[
    skill("Vibe Coding & Rapid Prototyping", SkillCategory::Platforms, 98),
    skill("AI-Assisted Development", SkillCategory::Platforms, 95),
    skill("Loveable AI Platform", SkillCategory::Platforms, 92),
    skill("FlutterFlow", SkillCategory::Platforms, 90),
    skill("Antigravity", SkillCategory::Platforms, 90),
    skill("Replit Agent", SkillCategory::Platforms, 88),
    skill("Bolt.new (StackBlitz)", SkillCategory::Platforms, 88),
    skill("Natively", SkillCategory::Platforms, 85),
    skill("0-to-1 Product Building", SkillCategory::Product, 95),
    skill("MVP Development & Launch", SkillCategory::Product, 94),
    skill("Mobile App Publishing", SkillCategory::Product, 90),
    skill("AI/ChatGPT Integration", SkillCategory::Product, 92),
    skill("React.js (Junior)", SkillCategory::Development, 55),
    skill("React Native (Junior)", SkillCategory::Development, 50),
    skill("JavaScript", SkillCategory::Development, 65),
    skill("HTML/CSS", SkillCategory::Development, 75),
    skill("TypeScript (Basic)", SkillCategory::Development, 45),
    skill("Figma & UI Design", SkillCategory::Design, 85),
    skill("User Experience (UX)", SkillCategory::Design, 82),
    skill("Product-Market Fit", SkillCategory::Design, 88),
    skill("Product Strategy", SkillCategory::Business, 92),
    skill("Sales Psychology", SkillCategory::Business, 95),
    skill("Customer Discovery", SkillCategory::Business, 90),
    skill("Rapid Execution", SkillCategory::Business, 96),
];

const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "PathFinder",
        description: "AI-powered personal development & career guidance app",
        long_description: "Full-stack personal development platform built with AI-assisted development tools, featuring AI-driven career guidance, financial mindset coaching, and mental resilience tracking. Successfully launched and published with integrated payment systems and user analytics.",
        category: ProjectCategory::Mobile,
        technologies: &["Loveable", "AI/ChatGPT Integration", "Payment Systems"],
        featured: true,
    },
    Project {
        id: "2",
        title: "SassyBFF AI",
        description: "Viral-worthy AI companion with personality",
        long_description: "Built and shipped an emotionally intelligent AI chat companion using advanced prompt engineering and vibe coding. Features real-time emotional responses, personality customization, and engaging conversation flows that keep users coming back daily.",
        category: ProjectCategory::Mobile,
        technologies: &["AI/NLP", "Vibe Coding", "Real-time Chat"],
        featured: true,
    },
    Project {
        id: "3",
        title: "Dream Mining",
        description: "Psychology-driven dream analysis platform",
        long_description: "Complete AI-assisted solution for dream journaling and pattern recognition. Combines structured data collection, AI-powered analysis, and psychological insights to help users understand their subconscious. Features cloud sync, dream cards, and trend visualization.",
        category: ProjectCategory::Mobile,
        technologies: &["FlutterFlow", "Data Visualization", "Cloud Sync"],
        featured: true,
    },
    Project {
        id: "4",
        title: "Minesminis",
        description: "AI-enhanced EdTech platform for kids",
        long_description: "Interactive English learning platform for children featuring AI chatbot teacher, gamified lessons, and multimedia content. Built entirely with AI-assisted development to deliver professional-grade educational experience with parental dashboards and progress tracking.",
        category: ProjectCategory::Web,
        technologies: &["FlutterFlow", "AI Chatbot", "Gamification"],
        featured: false,
    },
    Project {
        id: "5",
        title: "JungleTalk",
        description: "Themed language learning app for children",
        long_description: "Engaging English education app with jungle theme, designed using vibe coding to create interactive story-based learning experiences. Features voice recognition, animated characters, and progress rewards to keep young learners motivated.",
        category: ProjectCategory::Mobile,
        technologies: &["Natively", "Gamification", "Voice Recognition"],
        featured: false,
    },
    Project {
        id: "6",
        title: "Promtable",
        description: "AI prompt marketplace with monetization",
        long_description: "Built a full-featured web platform for discovering and selling AI prompts. Includes user authentication, payment processing, prompt categories, and search functionality, all created with vibe coding to validate the business idea quickly.",
        category: ProjectCategory::Web,
        technologies: &["Bolt.new", "Payment Integration", "Rapid MVP"],
        featured: false,
    },
];

const EXPERIENCE: &[Experience] = &[
    Experience {
        id: "1",
        company: "Independent Projects",
        role: "Vibe Coding Specialist & AI-Assisted Developer",
        start: "2025-01",
        end: None,
        description: "Building and shipping revenue-ready mobile & web apps using vibe coding and AI-assisted platforms",
        achievements: &[
            "Built and published 6+ complete applications from zero to production using AI-assisted development",
            "Reduced time-to-market by 10x using vibe coding - launching MVPs in days, not months",
            "Integrated AI/ChatGPT, payment systems, and cloud databases with modern development platforms",
            "Validated multiple business ideas through rapid prototyping and user feedback loops",
        ],
    },
    Experience {
        id: "2",
        company: "Sadullahoğlu Alanya Arçelik",
        role: "Sales Specialist",
        start: "2023-04",
        end: None,
        description: "Managing customer relationships and in-store sales operations",
        achievements: &[
            "Providing product consulting based on customer needs",
            "Applying sales strategies to improve customer satisfaction and conversion",
            "Managing customer relationships effectively",
        ],
    },
    Experience {
        id: "3",
        company: "Pozitera Perakende Geliştirme Hizmetleri",
        role: "Sales Responsible",
        start: "2022-12",
        end: Some("2023-04"),
        description: "Managing sales operations and retail performance in Antalya",
        achievements: &[
            "Supporting store development and customer engagement strategies",
            "Managing retail performance metrics",
            "Improving customer satisfaction levels",
        ],
    },
    Experience {
        id: "4",
        company: "Vatan Bilgisayar",
        role: "Sales Consultant",
        start: "2022-03",
        end: Some("2022-12"),
        description: "Advising customers on technology products",
        achievements: &[
            "Supporting sales targets and customer satisfaction",
            "Providing expert consultation on technology products",
            "Building strong customer relationships",
        ],
    },
    Experience {
        id: "5",
        company: "Decathlon Turkey",
        role: "Sports Leader",
        start: "2017-09",
        end: Some("2020-11"),
        description: "Leading department operations and customer experience",
        achievements: &[
            "Managing product presentation and sales performance",
            "Leading team operations effectively",
            "Enhancing customer experience in sports department",
        ],
    },
    Experience {
        id: "6",
        company: "Budak Turizm",
        role: "Operational Specialist",
        start: "2019-09",
        end: Some("2020-01"),
        description: "Supporting operational planning and coordination in Antalya",
        achievements: &[
            "Assisting with daily operational processes",
            "Supporting operational planning initiatives",
            "Improving operational efficiency",
        ],
    },
];

const CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: "1",
        title: "Google UX Design Professional Certificate",
        issuer: "Google / Coursera",
        date: "June 2024",
        credential_url: Some("https://coursera.org/share/32a3b220aaeb8b984646a5296d79a171"),
        image: "/certificates/google-ux-design.jpg",
    },
    Certificate {
        id: "2",
        title: "Associate Degree in Computer Programming",
        issuer: "Anadolu University - Open Education Faculty",
        date: "January 2025",
        credential_url: None,
        image: "/certificates/anadolu-diploma.jpg",
    },
    Certificate {
        id: "3",
        title: "Mobile Frontend Software Expertise Training",
        issuer: "Siliconmade Academy / ICCW Certified",
        date: "March 2025",
        credential_url: Some("https://iccw.us/iccw/admin/view-certificate/59440/21"),
        image: "/certificates/mobile-frontend-iccw.jpg",
    },
    Certificate {
        id: "4",
        title: "Mobile Frontend Training Certificate",
        issuer: "Siliconmade Academy",
        date: "March 2025",
        credential_url: None,
        image: "/certificates/mobile-frontend-siliconmade.jpg",
    },
    Certificate {
        id: "5",
        title: "Fundamentals of Programming Training",
        issuer: "Siliconmade Academy",
        date: "October 2024",
        credential_url: None,
        image: "/certificates/fundamentals-programming.jpg",
    },
    Certificate {
        id: "6",
        title: "İş Bankası ProSchool IT Class",
        issuer: "TopTalent Business School / Türkiye İş Bankası",
        date: "December 2022",
        credential_url: Some(
            "https://toptalent.co/businessschool/verify/73612CCE2D-73612BE302-73435EA50D/",
        ),
        image: "/certificates/toptalent-it-class.jpg",
    },
    Certificate {
        id: "7",
        title: "English Proficiency Test - Advanced CEFR C1",
        issuer: "TopTalent Business School",
        date: "July 2022",
        credential_url: Some(
            "https://toptalent.co/businessschool/verify/735B36ED89-735B36C48A-73435EA50D/",
        ),
        image: "/certificates/toptalent-english-c1.jpg",
    },
    Certificate {
        id: "8",
        title: "Mobile Frontend Software Expertise Certificate - 184 Hours",
        issuer: "Mudanya University - MUDUSEM",
        date: "March 2025",
        credential_url: None,
        image: "/certificates/mudanya-mobile-frontend.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_groups_follow_category_order() {
        let groups = CV.skill_groups();
        let categories = groups.iter().map(|(c, _)| *c).collect::<Vec<_>>();
        assert_eq!(categories, SkillCategory::all().to_vec());

        let (_, platforms) = &groups[0];
        assert_eq!(platforms.len(), 8);
        assert_eq!(platforms[0].name, "Vibe Coding & Rapid Prototyping");
        assert_eq!(
            groups.iter().map(|(_, s)| s.len()).sum::<usize>(),
            CV.skills.len()
        );
    }

    #[test]
    fn test_empty_category_is_skipped() {
        const ONLY_CODE: &[Skill] = &[skill("Rust", SkillCategory::Development, 40)];
        let cv = Cv {
            skills: ONLY_CODE,
            ..CV
        };
        let groups = cv.skill_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, SkillCategory::Development);
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(CV.skills.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_featured_projects_come_first() {
        const MIXED: &[Project] = &[PROJECTS[3], PROJECTS[0], PROJECTS[4], PROJECTS[1]];
        let cv = Cv {
            projects: MIXED,
            ..CV
        };
        let ids = cv
            .projects_by_prominence()
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2", "4", "5"]);
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(EXPERIENCE[0].period(), "Jan 2025 - Present");
        assert_eq!(EXPERIENCE[2].period(), "Dec 2022 - Apr 2023");
        let odd = Experience {
            start: "spring 2019",
            end: Some("2019-13"),
            ..EXPERIENCE[5]
        };
        assert_eq!(odd.period(), "spring 2019 - 2019-13");
    }

    #[test]
    fn test_certificate_lookup() {
        let cert = CV.certificate("3").unwrap();
        assert_eq!(cert.title, "Mobile Frontend Software Expertise Training");
        assert!(cert.credential_url.is_some());
        assert!(CV.certificate("2").unwrap().credential_url.is_none());
        assert!(CV.certificate("99").is_none());
    }

    #[test]
    fn test_certificate_ids_unique() {
        let mut ids = CV.certificates.iter().map(|c| c.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CV.certificates.len());
    }
}
