pub mod markup;
pub mod posts;

pub struct ShareLink {
    pub network: &'static str,
    pub href: String,
}

/// Prefilled share URLs for a post at `url`.
pub fn share_links(url: &str, title: &str) -> Vec<ShareLink> {
    let url = urlencoding::encode(url);
    let title = urlencoding::encode(title);
    vec![
        ShareLink {
            network: "X",
            href: format!("https://twitter.com/intent/tweet?url={}&text={}", url, title),
        },
        ShareLink {
            network: "LinkedIn",
            href: format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url),
        },
        ShareLink {
            network: "Facebook",
            href: format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
        },
        ShareLink {
            network: "Email",
            href: format!("mailto:?subject={}&body={}", title, url),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_links_encode_url_and_title() {
        let links = share_links("https://site.test/blog/4", "CSS & Grid");
        assert_eq!(links.len(), 4);
        assert_eq!(
            links[0].href,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fsite.test%2Fblog%2F4&text=CSS%20%26%20Grid"
        );
        assert!(links[3].href.starts_with("mailto:?subject=CSS%20%26%20Grid&body="));
    }
}
