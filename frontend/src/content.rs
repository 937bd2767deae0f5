pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Branding",
        description: "Gradimo identitet koji se pamti. Od logotipa i palete boja do verbalnog identiteta, stvaramo brend koji komunicira suštinu.",
    },
    Service {
        title: "Strategy",
        description: "Bez jasno definisane strategije, digitalni nastup je samo šum. Analiziramo tržište, definišemo ciljeve i pravimo jasan plan kuda tvoj brend želi da ide i zašto. Postavljamo temelje za rast koji ima jasno definisan pravac.",
    },
    Service {
        title: "Social Media",
        description: "Stvaramo zajednicu. Kreiramo strategiju i sadržaj koji angažuje, informiše i povezuje. Vaš nastup na mrežama biće jedinstven, dinamičan i u skladu sa vrednostima brenda.",
    },
    Service {
        title: "Paid Ads",
        description: "Investicija u pažnju, isporučena precizno i efikasno. Kampanje koje donose realne rezultate. Optimizujemo budžet i plasiramo oglase tamo gde je vaša publika, na Meta i Google platformama.",
    },
    Service {
        title: "Content Creation",
        description: "Proizvodimo visokokvalitetan sadržaj koji privlači, edukuje i konvertuje vašu publiku.",
    },
    Service {
        title: "Web Development & Maintenance",
        description: "Pravimo moderne, brze i funkcionalne sajtove koji predstavljaju svaki brend na pravi način. Svaki projekat gradimo uz tehničku preciznost i estetski balans. Nakon lansiranja, tu smo i za redovno održavanje.",
    },
];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Termalna rivijera",
        description: "Novi sajt banje sa rezervacijama, galerijom i sezonskim ponudama.",
        image: "/projects/Web/termalna-rivijera/1.png",
        category: "Web",
        technologies: &["Next.js", "Tailwind", "Headless CMS", "Analytics"],
        live_url: Some("#"),
    },
    Project {
        title: "Brand Identity System",
        description: "Kompletan vizuelni identitet za tech startup, uključujući logo, tipografiju i brand guidelines.",
        image: "/projects/Branding/2.svg",
        category: "Branding",
        technologies: &["Figma", "Adobe Creative Suite", "Brand Strategy"],
        live_url: None,
    },
    Project {
        title: "Social Media Kampanja",
        description: "Serija objava i priča koja je udvostručila angažman lokalnog brenda za tri meseca.",
        image: "/projects/Social/1.svg",
        category: "Social Media",
        technologies: &["Meta Ads", "Canva", "Copywriting"],
        live_url: Some("#"),
    },
    Project {
        title: "Ambalaža i etikete",
        description: "Redizajn linije proizvoda: od palete boja do etiketa spremnih za štampu.",
        image: "/projects/Branding/5.svg",
        category: "Branding",
        technologies: &["Illustrator", "Print"],
        live_url: None,
    },
    Project {
        title: "Produktna fotografija",
        description: "Foto i video sadržaj za online prodavnicu i društvene mreže.",
        image: "/projects/Social/2.svg",
        category: "Photo & Video",
        technologies: &["Photo", "Video", "Lightroom", "Premiere"],
        live_url: None,
    },
    Project {
        title: "Mobile App Design",
        description: "UX/UI dizajn za fitness aplikaciju sa fokusom na korisničko iskustvo i engagement.",
        image: "/projects/Social/3.svg",
        category: "Web",
        technologies: &["Figma", "Prototyping", "User Research"],
        live_url: Some("#"),
    },
];

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Distinct categories in the order they first appear.
pub fn categories(projects: &[Project]) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for project in projects {
        if !project.category.is_empty() && !seen.contains(&project.category) {
            seen.push(project.category);
        }
    }
    seen
}

/// Indices into `projects` matching `category`, or all of them for `None`.
pub fn filter_projects(projects: &[Project], category: Option<&str>) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, p)| category.map_or(true, |c| p.category == c))
        .map(|(i, _)| i)
        .collect()
}

/// The first `limit` tags and how many were left out.
pub fn visible_tags(technologies: &'static [&'static str], limit: usize) -> (&'static [&'static str], usize) {
    let shown = technologies.len().min(limit);
    (&technologies[..shown], technologies.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_keep_first_seen_order() {
        assert_eq!(
            categories(PROJECTS),
            vec!["Web", "Branding", "Social Media", "Photo & Video"]
        );
    }

    #[test]
    fn filtering_returns_stable_indices() {
        assert_eq!(filter_projects(PROJECTS, Some("Branding")), vec![1, 3]);
        assert_eq!(filter_projects(PROJECTS, None).len(), PROJECTS.len());
        assert!(filter_projects(PROJECTS, Some("Print")).is_empty());
    }

    #[test]
    fn tags_overflow_into_a_count() {
        assert_eq!(visible_tags(PROJECTS[0].technologies, 3), (&PROJECTS[0].technologies[..3], 1));
        assert_eq!(visible_tags(&["Illustrator"], 3), (&["Illustrator"][..], 0));
    }

    #[test]
    fn there_are_six_services() {
        assert_eq!(SERVICES.len(), 6);
    }
}
