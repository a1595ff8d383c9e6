pub const ALL: &str = "all";

pub struct Filter {
    pub id: &'static str,
    pub name: &'static str,
}

pub const FILTERS: &[Filter] = &[
    Filter { id: ALL, name: "All Projects" },
    Filter { id: "restaurant", name: "Restaurants" },
    Filter { id: "retail", name: "Retail" },
    Filter { id: "healthcare", name: "Healthcare" },
    Filter { id: "services", name: "Professional Services" },
    Filter { id: "fitness", name: "Fitness" },
];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub industry: &'static str,
    pub delivery_time: &'static str,
    pub rating: u8,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub testimonial: &'static str,
    pub client: &'static str,
    pub live_url: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Bella Vista Restaurant",
        category: "restaurant",
        industry: "Italian Restaurant",
        delivery_time: "6 days",
        rating: 5,
        icon: "🍝",
        features: &["Online Menu", "Reservation System", "Order Online"],
        testimonial: "Orders increased by 200% in the first month!",
        client: "Maria Rossi",
        live_url: "https://bellavista-demo.netlify.app",
    },
    Project {
        id: 2,
        title: "FitCore Gym",
        category: "fitness",
        industry: "Fitness Studio",
        delivery_time: "5 days",
        rating: 5,
        icon: "💪",
        features: &["Class Schedules", "Membership Portal", "Trainer Profiles"],
        testimonial: "Professional, fast, and exactly what we needed.",
        client: "Jake Thompson",
        live_url: "https://fitcore-gym-demo.netlify.app",
    },
    Project {
        id: 3,
        title: "StyleHub Boutique",
        category: "retail",
        industry: "Fashion Retail",
        delivery_time: "7 days",
        rating: 5,
        icon: "👗",
        features: &["E-commerce", "Inventory Management", "Payment Processing"],
        testimonial: "Sales doubled within two weeks of launch!",
        client: "Sophie Chen",
        live_url: "https://stylehub-boutique-demo.netlify.app",
    },
    Project {
        id: 4,
        title: "Dr. Smith Dental",
        category: "healthcare",
        industry: "Dental Practice",
        delivery_time: "6 days",
        rating: 5,
        icon: "🦷",
        features: &["Appointment Booking", "Patient Portal", "Service Info"],
        testimonial: "Patient inquiries increased by 150%.",
        client: "Dr. Michael Smith",
        live_url: "https://drsmith-dental-demo.netlify.app",
    },
    Project {
        id: 5,
        title: "Johnson & Associates",
        category: "services",
        industry: "Legal Services",
        delivery_time: "5 days",
        rating: 5,
        icon: "⚖️",
        features: &["Practice Areas", "Consultation Booking", "Case Studies"],
        testimonial: "Exactly what our firm needed. Very professional.",
        client: "Sarah Johnson",
        live_url: "https://johnson-law-demo.netlify.app",
    },
    Project {
        id: 6,
        title: "Green Thumb Garden Center",
        category: "retail",
        industry: "Garden Center",
        delivery_time: "7 days",
        rating: 5,
        icon: "🌱",
        features: &["Product Catalog", "Care Guides", "Online Store"],
        testimonial: "Beautiful design that showcases our plants perfectly.",
        client: "Tom Wilson",
        live_url: "https://greenthumb-garden-demo.netlify.app",
    },
];

pub fn filter(category: &str) -> impl Iterator<Item = &'static Project> + '_ {
    PROJECTS
        .iter()
        .filter(move |p| category == ALL || p.category == category)
}

pub fn find(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_every_project() {
        assert_eq!(filter(ALL).count(), PROJECTS.len());
    }

    #[test]
    fn category_narrows_the_grid() {
        let retail: Vec<u32> = filter("retail").map(|p| p.id).collect();
        assert_eq!(retail, vec![3, 6]);
        assert_eq!(filter("bakery").count(), 0);
    }

    #[test]
    fn every_project_belongs_to_a_filter() {
        for project in PROJECTS {
            assert!(FILTERS.iter().any(|f| f.id == project.category), "{}", project.title);
        }
        assert_eq!(find(4).map(|p| p.client), Some("Dr. Michael Smith"));
    }
}
