//! Everything the page says. Pure data; no lifecycle beyond the bundle.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Aws,
    Docker,
    Linux,
    Git,
    GitHub,
    Jenkins,
    LinkedIn,
    Download,
}

impl Icon {
    /// Font Awesome class list for the glyph.
    pub fn class(self) -> &'static str {
        match self {
            Self::Aws => "fab fa-aws",
            Self::Docker => "fab fa-docker",
            Self::Linux => "fab fa-linux",
            Self::Git => "fab fa-git-alt",
            Self::GitHub => "fab fa-github",
            Self::Jenkins => "fab fa-jenkins",
            Self::LinkedIn => "fab fa-linkedin",
            Self::Download => "fas fa-download",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Skills,
    Projects,
    Contact,
    Footer,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Footer => "footer",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
            Self::Footer => "Footer",
        }
    }
}

pub const NAV_SECTIONS: [Section; 4] = [
    Section::Skills,
    Section::Projects,
    Section::Contact,
    Section::Footer,
];

pub struct Owner {
    pub name: &'static str,
    pub brand: &'static str,
    pub brand_accent: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub photo: &'static str,
    pub resume: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub copyright_year: u16,
}

impl Owner {
    pub fn copyright(&self) -> String {
        format!("© {} {}. All rights reserved.", self.copyright_year, self.name)
    }
}

pub const OWNER: Owner = Owner {
    name: "Rajesh Chakali",
    brand: "Rajesh",
    brand_accent: "Dev",
    tagline: "DevOps & Cloud Engineer",
    summary: "I build, containerize, and deploy applications using Docker, AWS, and CI/CD pipelines.",
    photo: "/profile.jpg",
    resume: "/resume.pdf",
    email: "rajeshchakali01@gmail.com",
    phone: "+91 9618794302",
    copyright_year: 2026,
};

pub const HEADLINES: [&str; 3] = [
    "DevOps Engineer",
    "AWS Cloud Enthusiast",
    "Docker & CI/CD Learner",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub icon: Icon,
    pub name: &'static str,
}

pub const SKILLS: [Skill; 6] = [
    Skill { icon: Icon::Aws, name: "AWS" },
    Skill { icon: Icon::Docker, name: "Docker" },
    Skill { icon: Icon::Linux, name: "Linux" },
    Skill { icon: Icon::Git, name: "Git" },
    Skill { icon: Icon::GitHub, name: "GitHub" },
    Skill { icon: Icon::Jenkins, name: "Jenkins" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub code_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Code,
    LiveDemo,
}

impl ActionKind {
    /// Class list for the rendered link; one modifier per kind.
    pub fn class(self) -> &'static str {
        match self {
            Self::Code => "project-action project-action--code",
            Self::LiveDemo => "project-action project-action--live",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectAction {
    pub kind: ActionKind,
    pub href: &'static str,
    pub label: &'static str,
    pub icon: Option<Icon>,
}

impl Project {
    /// Buttons under the card. An absent or empty URL yields no button.
    pub fn actions(&self) -> Vec<ProjectAction> {
        let present = |url: Option<&'static str>| url.filter(|href| !href.is_empty());

        let code = present(self.code_url).map(|href| ProjectAction {
            kind: ActionKind::Code,
            href,
            label: "Code",
            icon: Some(Icon::GitHub),
        });
        let live = present(self.live_url).map(|href| ProjectAction {
            kind: ActionKind::LiveDemo,
            href,
            label: "Live Demo",
            icon: None,
        });

        code.into_iter().chain(live).collect()
    }
}

const GITHUB_PROFILE: &str = "https://github.com/Rajesh-C01";
const LINKEDIN_PROFILE: &str = "https://linkedin.com/in/rajesh-chakali";

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Dockerized Portfolio",
        description: "React portfolio deployed on AWS EC2.",
        code_url: Some(GITHUB_PROFILE),
        live_url: Some("#"),
    },
    Project {
        title: "CI/CD Pipeline",
        description: "Automated deployment using GitHub Actions.",
        code_url: Some(GITHUB_PROFILE),
        live_url: Some("#"),
    },
    Project {
        title: "AWS EC2 Server",
        description: "Configured and deployed web server on EC2.",
        code_url: Some(GITHUB_PROFILE),
        live_url: Some("#"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: &'static str,
    pub label: &'static str,
}

pub const SOCIALS: [SocialLink; 2] = [
    SocialLink {
        icon: Icon::GitHub,
        href: GITHUB_PROFILE,
        label: "GitHub",
    },
    SocialLink {
        icon: Icon::LinkedIn,
        href: LINKEDIN_PROFILE,
        label: "LinkedIn",
    },
];
