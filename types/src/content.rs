//! Static content tables rendered by the sections.
//!
//! Each table is addressed by position; that position is the stable index
//! the reveal tracker and the project selector use.

use serde::{Deserialize, Serialize};

/// Ninja rank used to grade projects and certifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Genin,
    Chunin,
    Jonin,
    Hokage,
}

impl Difficulty {
    /// Badge background class.
    pub fn badge_class(self) -> &'static str {
        match self {
            Difficulty::Genin => "bg-green-500",
            Difficulty::Chunin => "bg-blue-500",
            Difficulty::Jonin => "bg-purple-500",
            Difficulty::Hokage => "bg-gradient-to-r from-primary to-accent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Genin => "Genin",
            Difficulty::Chunin => "Chunin",
            Difficulty::Jonin => "Jonin",
            Difficulty::Hokage => "Hokage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: String,
    pub rank: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub jutsu_type: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    /// Repository URL, or `None` when the source is private.
    pub github: Option<String>,
    pub demo: Option<String>,
    pub icon: String,
    pub difficulty: Difficulty,
}

/// A tech-stack entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub category: String,
    /// Skill level, 0-100.
    pub proficiency: u8,
    pub icon: String,
    pub description: String,
    pub color: String,
}

impl Weapon {
    /// Proficiency as a bar fill fraction in `[0, 1]`.
    pub fn proficiency_fraction(&self) -> f32 {
        f32::from(self.proficiency.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub description: String,
    pub skills: Vec<String>,
    pub icon: String,
    pub link: Option<String>,
    pub difficulty: Difficulty,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

/// All content rendered by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub owner: String,
    pub hero_titles: Vec<String>,
    pub timeline: Vec<TimelineEvent>,
    pub projects: Vec<Project>,
    pub weapons: Vec<Weapon>,
    pub certifications: Vec<Certification>,
    pub contacts: Vec<ContactLink>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn event(year: &str, rank: &str, title: &str, location: &str, description: &str, icon: &str) -> TimelineEvent {
    TimelineEvent {
        year: year.into(),
        rank: rank.into(),
        title: title.into(),
        location: location.into(),
        description: description.into(),
        icon: icon.into(),
    }
}

fn weapon(name: &str, category: &str, proficiency: u8, icon: &str, description: &str, color: &str) -> Weapon {
    Weapon {
        name: name.into(),
        category: category.into(),
        proficiency,
        icon: icon.into(),
        description: description.into(),
        color: color.into(),
    }
}

fn certification(
    title: &str,
    issuer: &str,
    description: &str,
    skills: &[&str],
    icon: &str,
    difficulty: Difficulty,
    year: &str,
) -> Certification {
    Certification {
        title: title.into(),
        issuer: issuer.into(),
        description: description.into(),
        skills: strings(skills),
        icon: icon.into(),
        link: None,
        difficulty,
        year: year.into(),
    }
}

fn contact(label: &str, url: &str, icon: &str) -> ContactLink {
    ContactLink {
        label: label.into(),
        url: url.into(),
        icon: icon.into(),
    }
}

impl Default for Content {
    fn default() -> Self {
        Self {
            owner: "Ayush Mishra".into(),
            hero_titles: strings(&[
                "Developer Shinobi",
                "Code Ninja",
                "Data Sage",
                "Full Stack Hokage",
            ]),
            timeline: vec![
                event("2018", "Academy Student", "Started the Journey", "Kendriya Vidyalaya",
                    "Began learning the fundamentals of programming and discovered the path of a developer ninja.", "🥷"),
                event("2020", "Genin", "First Programming Missions", "Self-taught Journey",
                    "Mastered Python basics and completed first coding challenges. The ninja way was becoming clear.", "🐍"),
                event("2021", "Chunin", "Advanced Training", "PSIT Kanpur",
                    "Entered Computer Science program. Learned data structures, algorithms, and web development jutsu.", "⚡"),
                event("2022", "Special Jonin", "Machine Learning Sage", "Advanced Projects",
                    "Specialized in ML and AI. Created Autism Spectrum Disorder prediction system using TensorFlow.", "🧠"),
                event("2023", "Jonin", "Full Stack Mastery", "Professional Projects",
                    "Achieved mastery in React, Python, and database technologies. Built comprehensive web applications.", "🔥"),
                event("2024", "Hokage Candidate", "Cybersecurity Expert", "Current Mission",
                    "Developing Network Intrusion Detection Systems and preparing for leadership in tech.", "🛡️"),
            ],
            projects: vec![
                Project {
                    title: "Autism Spectrum Disorder Prediction".into(),
                    jutsu_type: "Medical Healing Jutsu".into(),
                    description: "Machine learning system using TensorFlow and React to predict autism spectrum disorders for early detection and intervention.".into(),
                    technologies: strings(&["Python", "TensorFlow", "React", "Scikit-learn", "Pandas", "NumPy"]),
                    features: strings(&[
                        "Machine Learning Model with 95% accuracy",
                        "Interactive React frontend",
                        "Real-time prediction system",
                        "Data visualization dashboard",
                        "Responsive design",
                    ]),
                    github: Some("https://github.com/ayush8312/Autism_Spectrum_Disorder_Prediction".into()),
                    demo: None,
                    icon: "🧠".into(),
                    difficulty: Difficulty::Hokage,
                },
                Project {
                    title: "Data Hiding using Steganography".into(),
                    jutsu_type: "Shadow Clone Jutsu".into(),
                    description: "Steganography tool built with Python and Tkinter for hiding data within images.".into(),
                    technologies: strings(&["Python", "Tkinter", "PIL", "NumPy", "Cryptography"]),
                    features: strings(&[
                        "LSB steganography algorithm",
                        "Image-based data hiding",
                        "User-friendly GUI interface",
                        "Multiple file format support",
                        "Encryption capabilities",
                    ]),
                    github: Some("https://github.com/ayush8312/Steganography".into()),
                    demo: None,
                    icon: "🥷".into(),
                    difficulty: Difficulty::Jonin,
                },
                Project {
                    title: "Network Intrusion Detection System".into(),
                    jutsu_type: "Barrier Defense Jutsu".into(),
                    description: "Cybersecurity system using SVM and Pandas for real-time network threat detection.".into(),
                    technologies: strings(&["Python", "SVM", "Pandas", "Scikit-learn", "NetworkX", "Matplotlib"]),
                    features: strings(&[
                        "Real-time threat detection",
                        "Machine learning classification",
                        "Network traffic analysis",
                        "Automated alert system",
                        "Performance analytics",
                    ]),
                    github: None,
                    demo: None,
                    icon: "🛡️".into(),
                    difficulty: Difficulty::Jonin,
                },
            ],
            weapons: vec![
                weapon("Python", "Primary Weapon", 95, "🐍", "The serpent's wisdom for data manipulation and AI", "text-blue-500"),
                weapon("JavaScript", "Dual Blades", 88, "⚡", "Lightning-fast frontend and backend mastery", "text-yellow-500"),
                weapon("React", "Shield Technique", 90, "⚛️", "Protective barrier for dynamic user interfaces", "text-cyan-500"),
                weapon("Node.js", "Shadow Clone", 75, "🟢", "Server-side multiplication technique", "text-green-500"),
                weapon("TensorFlow", "Mind Reading", 85, "🧠", "Artificial intelligence and machine learning jutsu", "text-orange-500"),
                weapon("SQL", "Data Sealing", 82, "🗃️", "Ancient scrolls of data manipulation", "text-purple-500"),
                weapon("PowerBI", "Visual Illusion", 80, "📊", "Transform data into powerful visual stories", "text-indigo-500"),
                weapon("Git", "Time Travel", 85, "🌀", "Master of version control and timeline management", "text-red-500"),
            ],
            certifications: vec![
                certification("Cybersecurity Fundamentals", "LinkedIn Learning",
                    "Training in network security, threat detection, and incident response.",
                    &["Network Security", "Threat Analysis", "Incident Response", "Vulnerability Assessment"],
                    "🛡️", Difficulty::Jonin, "2024"),
                certification("Java Programming", "HackerRank",
                    "Proficiency in Java development, object-oriented programming, and algorithmic problem solving.",
                    &["Java", "OOP", "Data Structures", "Algorithms"],
                    "☕", Difficulty::Chunin, "2023"),
                certification("Python Mastery", "HackerRank",
                    "Python programming with a focus on data manipulation and automation.",
                    &["Python", "Data Analysis", "Automation", "Scripting"],
                    "🐍", Difficulty::Jonin, "2023"),
                certification("HTML Fundamentals", "Simplilearn",
                    "HTML markup, semantic web development, and modern web standards.",
                    &["HTML5", "Web Standards", "Semantic Markup", "Accessibility"],
                    "🌐", Difficulty::Genin, "2022"),
                certification("JavaScript Essentials", "Infosys Springboard",
                    "JavaScript training covering ES6+, DOM manipulation, and modern development practices.",
                    &["JavaScript", "ES6+", "DOM", "Event Handling"],
                    "⚡", Difficulty::Chunin, "2023"),
            ],
            contacts: vec![
                contact("Email", "mailto:31860csaiml@gmail.com", "📜"),
                contact("LinkedIn", "https://www.linkedin.com/in/ayush-mishra-4a9a8a185/", "🔗"),
                contact("GitHub", "https://github.com/ayush8312", "🐙"),
                contact("Portfolio", "https://ayush8312.github.io/Ayush-Mishra-Portfolio/", "🏯"),
            ],
        }
    }
}
