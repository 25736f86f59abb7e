//! Static site content. Everything the page renders lives here as in-memory
//! literals; there is no data store behind it.

pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub greeting: &'static str,
    pub tagline_lead: &'static str,
    pub tagline_accent: &'static str,
    pub tagline_rest: &'static str,
    pub subtitle: &'static str,
    pub nav_items: &'static [&'static str],
}

pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
}

pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub year: &'static str,
    pub status: &'static str,
}

/// One entry in a form selector: the submitted value and its display label.
/// The relay treats submitted values as opaque text; these lists are the only
/// place the option sets are defined.
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub static PROFILE: Profile = Profile {
    first_name: "JOE",
    last_name: "DADA",
    greeting: "Hello, I'm",
    tagline_lead: "I build ",
    tagline_accent: "exceptional",
    tagline_rest: " digital experiences with modern technology",
    subtitle: "Full-stack developer specializing in modern web applications and user experiences",
    nav_items: &["Work", "About", "Contact"],
};

pub static SKILLS: &[Skill] = &[
    Skill { name: "Frontend", percentage: 95 },
    Skill { name: "Backend", percentage: 90 },
    Skill { name: "Mobile", percentage: 85 },
    Skill { name: "Cloud", percentage: 88 },
    Skill { name: "DevOps", percentage: 82 },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Example Project 1",
        subtitle: "Web Application",
        description: "A modern web application showcasing responsive design, user authentication, and real-time features",
        tech: &["React", "Node.js", "PostgreSQL", "Socket.io"],
        year: "2024",
        status: "Live",
    },
    Project {
        title: "Example Project 2",
        subtitle: "E-commerce Platform",
        description: "Full-featured online store with payment processing, inventory management, and admin dashboard",
        tech: &["Next.js", "Stripe", "MongoDB", "Tailwind CSS"],
        year: "2024",
        status: "Beta",
    },
    Project {
        title: "Example Project 3",
        subtitle: "Mobile App",
        description: "Cross-platform mobile application with offline capabilities and push notifications",
        tech: &["React Native", "Firebase", "Redux", "TypeScript"],
        year: "2023",
        status: "Live",
    },
];

pub static PROJECT_TYPES: &[SelectOption] = &[
    SelectOption { value: "website", label: "Website Development" },
    SelectOption { value: "webapp", label: "Web Application" },
    SelectOption { value: "mobile", label: "Mobile App" },
    SelectOption { value: "ecommerce", label: "E-commerce" },
    SelectOption { value: "other", label: "Other" },
];

pub static BUDGET_RANGES: &[SelectOption] = &[
    SelectOption { value: "under-5k", label: "Under $5,000" },
    SelectOption { value: "5k-10k", label: "$5,000 - $10,000" },
    SelectOption { value: "10k-25k", label: "$10,000 - $25,000" },
    SelectOption { value: "25k-50k", label: "$25,000 - $50,000" },
    SelectOption { value: "50k-plus", label: "$50,000+" },
];

pub static TIMELINES: &[SelectOption] = &[
    SelectOption { value: "asap", label: "ASAP" },
    SelectOption { value: "1-month", label: "Within 1 month" },
    SelectOption { value: "2-3-months", label: "2-3 months" },
    SelectOption { value: "3-6-months", label: "3-6 months" },
    SelectOption { value: "6-months-plus", label: "6+ months" },
];
