// Portfolio content shown inside the tunnel overlays.

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Mobile,
    Backend,
    DevOps,
    Design,
}

impl SkillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Mobile => "mobile",
            SkillCategory::Backend => "backend",
            SkillCategory::DevOps => "devops",
            SkillCategory::Design => "design",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8, // 0..=100
    pub category: SkillCategory,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Plateforme Arcade",
        description: "Plateforme de jeux en ligne arcade multijoueur avec classements, matchmaking et expérience temps réel.",
        stack: &["Next.js", "TypeScript", "Socket.io", "Node.js", "Redis"],
    },
    Project {
        title: "SaaS Gestion Client",
        description: "Solution SaaS complète de gestion client : CRM, facturation, suivi de projets et tableaux de bord analytiques.",
        stack: &["React", "Node.js", "PostgreSQL", "Stripe", "Tailwind"],
    },
    Project {
        title: "Sites Vitrines Pro",
        description: "Sites vitrines sur-mesure avec système de prise de contact intégré et module de paiement en ligne.",
        stack: &["Next.js", "TypeScript", "Tailwind", "Stripe", "EmailJS"],
    },
    Project {
        title: "Chat Bot en Ligne",
        description: "Chatbot intelligent avec traitement du langage naturel, intégré sur sites web et messageries.",
        stack: &["React", "Node.js", "OpenAI", "WebSocket", "MongoDB"],
    },
    Project {
        title: "Tracker Données Live",
        description: "Dashboard de suivi de données en temps réel avec graphiques interactifs et alertes personnalisables.",
        stack: &["Next.js", "D3.js", "WebSocket", "Node.js", "PostgreSQL"],
    },
    Project {
        title: "Savana",
        description: "Application mobile de réseau social : partage de contenu, messagerie, notifications push et fil d'actualité.",
        stack: &["React Native", "Expo", "Firebase", "TypeScript", "Node.js"],
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React / Next.js", level: 95, category: SkillCategory::Frontend },
    Skill { name: "TypeScript", level: 90, category: SkillCategory::Frontend },
    Skill { name: "React Native", level: 85, category: SkillCategory::Mobile },
    Skill { name: "Node.js", level: 88, category: SkillCategory::Backend },
    Skill { name: "PostgreSQL", level: 80, category: SkillCategory::Backend },
    Skill { name: "Docker", level: 75, category: SkillCategory::DevOps },
    Skill { name: "Three.js", level: 70, category: SkillCategory::Frontend },
    Skill { name: "Tailwind CSS", level: 95, category: SkillCategory::Frontend },
    Skill { name: "Git", level: 90, category: SkillCategory::DevOps },
    Skill { name: "Figma", level: 75, category: SkillCategory::Design },
    Skill { name: "MongoDB", level: 78, category: SkillCategory::Backend },
    Skill { name: "Firebase", level: 80, category: SkillCategory::Backend },
];
