// src/services/portfolio.rs
//! The static profile document served at `/api/portfolio`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Portfolio {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub skills: Skills,
    pub services: &'static [Service],
    pub projects: &'static [Project],
    pub contact: Contact,
}

#[derive(Debug, Serialize)]
pub struct Skills {
    pub frontend: &'static [&'static str],
    pub backend: &'static [&'static str],
    pub tools: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: &'static str,
    pub whatsapp: &'static str,
    pub whatsapp_link: &'static str,
    pub facebook: &'static str,
    pub instagram: &'static str,
}

pub static PORTFOLIO: Portfolio = Portfolio {
    name: "Arun Regmi",
    title: "Web Developer",
    description: "Crafting fast, modern, accessible web experiences and useful online tools.",
    skills: Skills {
        frontend: &["HTML/CSS", "JavaScript", "React/Vue"],
        backend: &["Firebase", "Node.js", "Express"],
        tools: &["GitHub", "Cloudflare", "UI/UX", "Performance", "SEO"],
    },
    services: &[
        Service {
            name: "Web Development",
            description: "Custom websites and web apps focused on speed, accessibility, and UX.",
            icon: "fa-code",
        },
        Service {
            name: "Firebase Systems",
            description: "Realtime databases, auth, storage, and scalable cloud functions.",
            icon: "fa-fire",
        },
        Service {
            name: "GitHub Hosting",
            description: "CI/CD, Pages, Actions, and modern deployment pipelines.",
            icon: "fa-github",
        },
        Service {
            name: "UI/UX Design",
            description: "Clean, intuitive interfaces with user-first design principles.",
            icon: "fa-palette",
        },
        Service {
            name: "Domain & DNS",
            description: "Cloudflare optimization, SSL, routing, and DNS best practices.",
            icon: "fa-globe",
        },
        Service {
            name: "Online Tools",
            description: "Custom tool development tailored to specific workflows.",
            icon: "fa-tools",
        },
    ],
    projects: &[
        Project {
            name: "Online Tools Suite",
            description: "17+ tools including converters and generators with smooth UX and animations.",
            technologies: &["HTML/CSS", "JavaScript", "PDF.js"],
            link: "tools.html",
        },
        Project {
            name: "E-commerce Platform",
            description: "Full-featured e-commerce with payments, inventory, and admin dashboard.",
            technologies: &["Firebase", "JavaScript", "Payments"],
            link: "#",
        },
        Project {
            name: "AI Content Generator",
            description: "Multi-template content generation with customization and export.",
            technologies: &["AI API", "React", "Node"],
            link: "#",
        },
    ],
    contact: Contact {
        email: "kcaarun10@gmail.com",
        whatsapp: "+977 98-10975653",
        whatsapp_link: "https://wa.link/0mmt5c",
        facebook: "https://www.facebook.com/aruna.regmi.262052",
        instagram: "https://www.instagram.com/arunregmi.com.np/",
    },
};
