//! Static page copy. Nothing here is mutated after load.

use crate::components::navigation::Destination;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
        }
    }

    /// Style class for the level badge, `level-` plus the lowercased label.
    pub fn badge_class(self) -> &'static str {
        match self {
            Level::Beginner => "level-beginner",
            Level::Intermediate => "level-intermediate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    pub title: &'static str,
    pub duration: &'static str,
    pub level: Level,
    pub project_count: u32,
    pub topics: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub to: Destination,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavItem],
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "⚡",
        title: "Project-Based Learning",
        description: "Learn by building real-world applications from day one",
    },
    Feature {
        icon: "🛠️",
        title: "MERN + TypeScript",
        description: "Master the most demanded tech stack with type safety",
    },
    Feature {
        icon: "📱",
        title: "Web & Mobile Dev",
        description: "Build responsive web apps and cross-platform mobile applications",
    },
    Feature {
        icon: "🎯",
        title: "1:1 Mentorship",
        description: "Get personalized guidance from industry experts",
    },
    Feature {
        icon: "💼",
        title: "Career Support",
        description: "Portfolio building, interview prep, and job placement",
    },
    Feature {
        icon: "🔄",
        title: "Latest Technologies",
        description: "Always updated with the newest tools and best practices",
    },
];

pub const COURSES: [Course; 3] = [
    Course {
        title: "MERN Stack Fundamentals",
        duration: "8 weeks",
        level: Level::Beginner,
        project_count: 5,
        topics: &["React + TypeScript", "Node.js Basics", "MongoDB CRUD", "Express API"],
    },
    Course {
        title: "Advanced Full-Stack",
        duration: "12 weeks",
        level: Level::Intermediate,
        project_count: 8,
        topics: &["Advanced React Patterns", "Microservices", "Authentication", "Deployment"],
    },
    Course {
        title: "Mobile Development",
        duration: "6 weeks",
        level: Level::Intermediate,
        project_count: 4,
        topics: &["React Native", "Mobile UI/UX", "API Integration", "App Store Deployment"],
    },
];

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "2,000+", label: "Students" },
    Stat { value: "50+", label: "Real Projects" },
    Stat { value: "98%", label: "Job Success" },
];

pub const HEADER_LINKS: &[NavItem] = &[
    NavItem { label: "Courses", to: Destination::Section("courses") },
    NavItem { label: "Features", to: Destination::Section("features") },
    NavItem { label: "Success Stories", to: Destination::Section("testimonials") },
    NavItem { label: "Login", to: Destination::Route(Route::Login) },
];

pub const SOCIAL_LINKS: &[NavItem] = &[
    NavItem { label: "Twitter", to: Destination::Page("twitter") },
    NavItem { label: "LinkedIn", to: Destination::Page("linkedin") },
    NavItem { label: "GitHub", to: Destination::Page("github") },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Courses",
        links: &[
            NavItem { label: "MERN Fundamentals", to: Destination::Page("mern-fundamentals") },
            NavItem { label: "Advanced Full-Stack", to: Destination::Page("advanced-fullstack") },
            NavItem { label: "Mobile Development", to: Destination::Page("mobile-development") },
            NavItem { label: "TypeScript Mastery", to: Destination::Page("typescript-mastery") },
            NavItem { label: "All Courses", to: Destination::Section("courses") },
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: &[
            NavItem { label: "Blog", to: Destination::Page("blog") },
            NavItem { label: "Documentation", to: Destination::Page("documentation") },
            NavItem { label: "Community", to: Destination::Page("community") },
            NavItem { label: "Career Support", to: Destination::Page("career-support") },
            NavItem { label: "FAQ", to: Destination::Page("faq") },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            NavItem { label: "About Us", to: Destination::Page("about") },
            NavItem { label: "Contact", to: Destination::Page("contact") },
            NavItem { label: "Login", to: Destination::Route(Route::Login) },
            NavItem { label: "Register", to: Destination::Route(Route::Register) },
        ],
    },
];
