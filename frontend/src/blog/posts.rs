use chrono::NaiveDate;

pub const ALL_CATEGORIES: &str = "All";
pub const CATEGORIES: &[&str] = &[ALL_CATEGORIES, "AI & Technology", "Design", "Development"];

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub author: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
}

impl BlogPost {
    /// "October 20, 2025"; the raw string if it does not parse.
    pub fn display_date(&self) -> String {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d")
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|_| self.date.to_string())
    }

    fn matches(&self, category: &str, needle: &str) -> bool {
        let in_category = category == ALL_CATEGORIES || self.category == category;
        let contains = |text: &str| text.to_lowercase().contains(needle);
        in_category
            && (contains(self.title) || contains(self.excerpt) || self.tags.iter().any(|t| contains(t)))
    }
}

pub fn find(id: u32) -> Option<&'static BlogPost> {
    POSTS.iter().find(|p| p.id == id)
}

/// Posts in `category` whose title, excerpt or a tag contains `search`,
/// case-insensitively.
pub fn filter(category: &str, search: &str) -> Vec<&'static BlogPost> {
    let needle = search.trim().to_lowercase();
    POSTS.iter().filter(|p| p.matches(category, &needle)).collect()
}

pub static POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "The Future of AI in Web Development",
        excerpt: "Explore how artificial intelligence is revolutionizing the way we build websites and applications in 2025.",
        content: r#"Artificial Intelligence is transforming the web development landscape at an unprecedented pace. From automated code generation to intelligent design systems, AI tools are becoming essential for modern developers.

## Key AI Technologies in Web Development

### 1. Automated Code Generation
AI-powered tools are helping developers write code faster and more efficiently. These tools can generate entire functions, components, and even complete applications based on natural language descriptions.

### 2. Intelligent Design Systems
AI is enabling the creation of design systems that can automatically generate layouts, color schemes, and typography based on brand guidelines and user preferences.

### 3. Performance Optimization
Machine learning algorithms can analyze website performance and automatically optimize loading times, bundle sizes, and resource allocation.

## The Impact on Development Workflows

Traditional development workflows are being enhanced with AI capabilities:
- **Code Review**: AI can identify bugs and security vulnerabilities
- **Testing**: Automated test generation and execution
- **Documentation**: AI-generated documentation that stays up-to-date

As we move forward, the integration of AI in web development will only deepen, making it crucial for developers to adapt and embrace these new technologies."#,
        author: "Dustin Arnold",
        date: "2025-10-20",
        read_time: "8 min read",
        category: "AI & Technology",
        tags: &["AI", "Web Development", "Future Tech"],
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&q=80",
    },
    BlogPost {
        id: 2,
        title: "Responsive Design Best Practices for 2025",
        excerpt: "Learn the latest techniques and strategies for creating websites that work beautifully across all devices.",
        content: r#"Responsive design has evolved significantly since its inception. Today's websites must work seamlessly across an ever-growing variety of devices and screen sizes.

## Modern Responsive Design Principles

### Container Queries
The introduction of container queries allows components to respond to their container's size rather than just the viewport size, enabling more modular and flexible designs.

### Fluid Typography
Using clamp() and other CSS functions to create typography that scales smoothly between minimum and maximum sizes.

### Mobile-First Approach
Starting with mobile designs and progressively enhancing for larger screens remains the best practice for modern web development.

## Testing Strategies

- Use real devices when possible
- Test on slow networks
- Consider accessibility across all breakpoints
- Validate touch interactions on mobile

Responsive design is no longer just about making things fit on small screens. It is about creating optimal experiences for every context."#,
        author: "Dustin Arnold",
        date: "2025-10-13",
        read_time: "6 min read",
        category: "Design",
        tags: &["Responsive Design", "CSS", "Mobile"],
        image: "https://images.unsplash.com/photo-1559028006-448665bd7c7f?w=800&q=80",
    },
    BlogPost {
        id: 4,
        title: "The Complete Guide to Modern CSS",
        excerpt: "Master the latest CSS features including Grid, Flexbox, Custom Properties, and more.",
        content: r#"CSS has evolved tremendously in recent years. Modern CSS provides powerful tools for creating sophisticated layouts and interactions.

## Modern CSS Features

### CSS Grid
The most powerful layout system in CSS:
```css
.grid-container {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: 2rem;
}
```

### Custom Properties (CSS Variables)
Enable dynamic theming and reduce code duplication:
```css
:root {
  --primary-color: #3b82f6;
  --spacing-unit: 1rem;
}
```

## Best Practices

1. **Progressive Enhancement**: Start with basic layouts and enhance with modern features
2. **Fallbacks**: Provide fallbacks for older browsers
3. **Performance**: Use efficient selectors and minimize repaints
4. **Maintainability**: Organize CSS with methodologies like BEM or CSS Modules

The future of CSS is bright, with new features constantly being added to make web development more powerful and enjoyable."#,
        author: "Dustin Arnold",
        date: "2025-09-29",
        read_time: "12 min read",
        category: "Design",
        tags: &["CSS", "Layout", "Modern Web"],
        image: "https://images.unsplash.com/photo-1523437113738-bbd3cc89fb19?w=800&q=80",
    },
    BlogPost {
        id: 8,
        title: "Website Security Best Practices for Small Businesses",
        excerpt: "Protect your website and customer data with these essential security measures.",
        content: r#"Website security is critical for protecting your business and customers. Here's what every small business needs to know.

## Essential Security Measures

### SSL Certificates
HTTPS is now a standard requirement. SSL certificates encrypt data between your server and users, protecting sensitive information.

### Regular Updates
Keep your CMS, plugins, and themes updated. Outdated software is the #1 vulnerability attackers exploit.

### Strong Authentication
- Use strong, unique passwords
- Implement two-factor authentication
- Limit login attempts to prevent brute force attacks

## Backup Strategy

### Regular Backups
Schedule automated daily backups of your website and database.

### Test Restores
Regularly test your backup restoration process to ensure it works when needed.

Remember: security is not a one-time setup. It is an ongoing commitment to protecting your business and customers."#,
        author: "Dustin Arnold",
        date: "2025-09-01",
        read_time: "10 min read",
        category: "Development",
        tags: &["Security", "Web Development", "Best Practices"],
        image: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=800&q=80",
    },
    BlogPost {
        id: 9,
        title: "Color Psychology in Web Design",
        excerpt: "How the colors on your website influence trust, emotion, and conversions.",
        content: r#"Color is one of the first things visitors notice, and it shapes how they feel about your business before they read a single word.

## What Colors Communicate

### Blue
Trust, stability and professionalism. A natural fit for healthcare, finance and professional services.

### Green
Growth, health and calm. Popular with garden centers, wellness brands and anything eco-friendly.

### Red and Orange
Energy, urgency and appetite. Restaurants and sales promotions use them to drive action.

## Applying Color With Intent

- Pick one primary brand color and use it consistently
- Reserve your strongest accent for calls to action
- Check contrast ratios so text stays readable
- Test dark mode variants alongside light ones

The right palette makes your site feel like your business, and that familiarity is what turns visitors into customers."#,
        author: "Dustin Arnold",
        date: "2025-08-25",
        read_time: "7 min read",
        category: "Design",
        tags: &["Color Theory", "Design", "Branding"],
        image: "https://images.unsplash.com/photo-1541701494587-cb58502866ab?w=800&q=80",
    },
    BlogPost {
        id: 12,
        title: "Content Strategy for Small Business Websites",
        excerpt: "Create content that attracts, engages, and converts your target audience.",
        content: r#"Great design means nothing without great content. Here's how to develop a content strategy that works for small businesses.

## Understanding Your Audience

### Create Buyer Personas
Define your ideal customers:
- Demographics
- Pain points
- Goals and challenges
- Where they look for information

### Map the Customer Journey
Create content for each stage:
- Awareness: Educational blog posts, guides
- Consideration: Comparison articles, case studies
- Decision: Product pages, testimonials, demos

## Content Types That Work

### Case Studies
Show real results from real customers to build trust and credibility.

### FAQs
Address common questions to:
- Reduce support burden
- Build trust
- Improve conversions

Great content takes time and effort, but it's one of the most valuable investments you can make in your online presence."#,
        author: "Dustin Arnold",
        date: "2025-08-04",
        read_time: "10 min read",
        category: "AI & Technology",
        tags: &["Content Strategy", "Marketing", "SEO"],
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&q=80",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_with_empty_search_lists_everything() {
        assert_eq!(filter(ALL_CATEGORIES, "").len(), POSTS.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let design = filter("Design", "");
        assert!(!design.is_empty());
        assert!(design.iter().all(|p| p.category == "Design"));
    }

    #[test]
    fn search_matches_tags_case_insensitively() {
        let hits = filter(ALL_CATEGORIES, "  seo ");
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![12]);
    }

    #[test]
    fn search_and_category_combine() {
        assert!(filter("Development", "color").is_empty());
        assert_eq!(filter("Design", "color")[0].id, 9);
    }

    #[test]
    fn ids_are_unique_and_findable() {
        for post in POSTS {
            assert_eq!(find(post.id).map(|p| p.title), Some(post.title));
        }
        assert!(find(999).is_none());
    }

    #[test]
    fn dates_render_long_form() {
        assert_eq!(find(1).map(BlogPost::display_date).as_deref(), Some("October 20, 2025"));
        assert_eq!(find(12).map(BlogPost::display_date).as_deref(), Some("August 4, 2025"));
    }
}
