//! Built-in curriculum templates, skill table and reference metadata.

use std::collections::BTreeMap;

use super::{Catalog, Reference, SkillConfig, SkillLevel, Specialization, TemplateEntry};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn template(
    foundations: &[&str],
    core: &[&str],
    advanced: &[&str],
    projects: &[&str],
) -> TemplateEntry {
    TemplateEntry {
        foundations: strings(foundations),
        core: strings(core),
        advanced: strings(advanced),
        projects: strings(projects),
    }
}

fn reference(source_url: &str, description: &str, key_areas: &[&str]) -> Reference {
    Reference {
        description: description.to_string(),
        source_url: source_url.to_string(),
        key_areas: strings(key_areas),
    }
}

fn templates() -> BTreeMap<Specialization, TemplateEntry> {
    BTreeMap::from([
        (
            Specialization::MachineLearning,
            template(
                &[
                    "Mathematics for ML (Linear Algebra, Statistics)",
                    "Python Programming Fundamentals",
                    "Data Analysis with Pandas & NumPy",
                    "Data Visualization with Matplotlib/Seaborn",
                ],
                &[
                    "Supervised Learning Algorithms",
                    "Unsupervised Learning Techniques",
                    "Model Evaluation & Validation",
                    "Feature Engineering",
                ],
                &[
                    "Deep Learning with TensorFlow/PyTorch",
                    "Neural Networks & CNNs",
                    "Natural Language Processing",
                    "Computer Vision",
                ],
                &[
                    "Predictive Analytics Project",
                    "Image Classification Model",
                    "NLP Sentiment Analysis",
                    "Recommendation System",
                ],
            ),
        ),
        (
            Specialization::DataScience,
            template(
                &[
                    "Statistics & Probability",
                    "Python/R Programming",
                    "SQL Database Management",
                    "Data Wrangling & Cleaning",
                ],
                &[
                    "Exploratory Data Analysis",
                    "Statistical Modeling",
                    "Data Visualization",
                    "Business Intelligence",
                ],
                &[
                    "Machine Learning for Data Science",
                    "Big Data Technologies (Spark, Hadoop)",
                    "Cloud Platforms (AWS, GCP)",
                    "Data Pipeline Development",
                ],
                &[
                    "End-to-End Data Analysis",
                    "Predictive Modeling Project",
                    "Dashboard Creation",
                    "Data Pipeline Automation",
                ],
            ),
        ),
        (
            Specialization::CyberSecurity,
            template(
                &[
                    "Network Security Fundamentals",
                    "Operating System Security",
                    "Cryptography Basics",
                    "Security Policies & Procedures",
                ],
                &[
                    "Penetration Testing",
                    "Vulnerability Assessment",
                    "Incident Response",
                    "Security Monitoring",
                ],
                &[
                    "Advanced Persistent Threats",
                    "Digital Forensics",
                    "Security Architecture",
                    "Compliance & Risk Management",
                ],
                &[
                    "Security Audit Project",
                    "Penetration Testing Lab",
                    "Incident Response Simulation",
                    "Security Tool Development",
                ],
            ),
        ),
        (
            Specialization::WebDevelopment,
            template(
                &[
                    "HTML5 & CSS3",
                    "JavaScript Fundamentals",
                    "Responsive Design",
                    "Version Control (Git)",
                ],
                &[
                    "Frontend Frameworks (React/Vue)",
                    "Backend Development (Node.js/Python)",
                    "Database Design & Management",
                    "API Development",
                ],
                &[
                    "Full-Stack Development",
                    "Cloud Deployment (AWS/Vercel)",
                    "Performance Optimization",
                    "Security Best Practices",
                ],
                &[
                    "Portfolio Website",
                    "E-commerce Application",
                    "Social Media Platform",
                    "Real-time Chat Application",
                ],
            ),
        ),
        (
            Specialization::CloudComputing,
            template(
                &[
                    "Cloud Computing Concepts",
                    "Linux System Administration",
                    "Networking Fundamentals",
                    "Virtualization Technologies",
                ],
                &[
                    "AWS/Azure/GCP Services",
                    "Containerization (Docker)",
                    "Infrastructure as Code",
                    "Cloud Security",
                ],
                &[
                    "Kubernetes Orchestration",
                    "Serverless Architecture",
                    "DevOps & CI/CD",
                    "Cloud Cost Optimization",
                ],
                &[
                    "Multi-tier Application Deployment",
                    "Containerized Microservices",
                    "Automated Infrastructure",
                    "Cloud Migration Project",
                ],
            ),
        ),
        (
            Specialization::MobileDevelopment,
            template(
                &[
                    "Mobile App Development Concepts",
                    "Platform-Specific Languages (Swift/Kotlin)",
                    "Cross-Platform Frameworks (React Native/Flutter)",
                    "Mobile UI/UX Design Principles",
                ],
                &[
                    "Native iOS Development (Swift)",
                    "Native Android Development (Kotlin)",
                    "Cross-Platform Development",
                    "Mobile App Architecture",
                ],
                &[
                    "Advanced Mobile Features (Push Notifications, GPS)",
                    "Mobile App Testing & Debugging",
                    "App Store Optimization",
                    "Mobile Security & Performance",
                ],
                &[
                    "Personal Portfolio App",
                    "E-commerce Mobile App",
                    "Social Media App",
                    "Real-time Chat Application",
                ],
            ),
        ),
    ])
}

fn skill_levels() -> BTreeMap<SkillLevel, SkillConfig> {
    BTreeMap::from([
        (SkillLevel::Beginner, SkillConfig::BEGINNER),
        (
            SkillLevel::Intermediate,
            SkillConfig {
                weeks: 12,
                difficulty: 2,
                topics: 8,
            },
        ),
        (
            SkillLevel::Advanced,
            SkillConfig {
                weeks: 16,
                difficulty: 3,
                topics: 12,
            },
        ),
        (
            SkillLevel::Expert,
            SkillConfig {
                weeks: 20,
                difficulty: 4,
                topics: 15,
            },
        ),
    ])
}

fn references() -> BTreeMap<Specialization, Reference> {
    BTreeMap::from([
        (
            Specialization::MachineLearning,
            reference(
                "https://roadmap.sh/ai-data-scientist",
                "AI & Data Scientist Roadmap",
                &[
                    "Mathematics & Statistics",
                    "Programming (Python/R)",
                    "Data Analysis & Visualization",
                    "Machine Learning Algorithms",
                    "Deep Learning",
                    "MLOps & Deployment",
                ],
            ),
        ),
        (
            Specialization::DataScience,
            reference(
                "https://roadmap.sh/data-scientist",
                "Data Scientist Roadmap",
                &[
                    "Statistics & Mathematics",
                    "Programming Languages",
                    "Data Wrangling",
                    "Data Visualization",
                    "Machine Learning",
                    "Big Data Technologies",
                ],
            ),
        ),
        (
            Specialization::CyberSecurity,
            reference(
                "https://roadmap.sh/cyber-security",
                "Cyber Security Roadmap",
                &[
                    "Network Security",
                    "Operating System Security",
                    "Cryptography",
                    "Penetration Testing",
                    "Incident Response",
                    "Security Architecture",
                ],
            ),
        ),
        (
            Specialization::WebDevelopment,
            reference(
                "https://roadmap.sh/frontend",
                "Frontend Developer Roadmap",
                &[
                    "HTML & CSS",
                    "JavaScript",
                    "Frontend Frameworks",
                    "Build Tools",
                    "Testing",
                    "Performance Optimization",
                ],
            ),
        ),
        (
            Specialization::CloudComputing,
            reference(
                "https://roadmap.sh/aws",
                "AWS Cloud Practitioner Roadmap",
                &[
                    "Cloud Fundamentals",
                    "AWS Core Services",
                    "Security & Compliance",
                    "Networking",
                    "Storage & Databases",
                    "DevOps & Automation",
                ],
            ),
        ),
        (
            Specialization::MobileDevelopment,
            reference(
                "https://roadmap.sh/android",
                "Android Developer Roadmap",
                &[
                    "Mobile App Fundamentals",
                    "Platform-Specific Development",
                    "Cross-Platform Frameworks",
                    "UI/UX Design",
                    "App Testing & Debugging",
                    "App Store Optimization",
                ],
            ),
        ),
    ])
}

pub(super) fn catalog() -> Catalog {
    Catalog {
        templates: templates(),
        skill_levels: skill_levels(),
        references: references(),
    }
}
