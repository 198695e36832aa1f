//! Structured, per-language site content.
//!
//! Flat display strings live in the Fluent assets (`crate::i18n`); the
//! collections below are typed and defined once per language (`en`, `pl`),
//! so a field missing from one language is a compile error rather than a
//! runtime surprise. The accessor is total: every supported language maps
//! to a fully-populated tree.

use crate::core::nav::Language;

mod en;
mod pl;

/// A family quote shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    /// Relationship line under the author; may be empty.
    pub context: &'static str,
}

/// A titled compliance/safety line (trust panel, quality grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustIndicator {
    pub title: &'static str,
    pub description: &'static str,
}

/// An entry of the about-page values list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Short service blurb for the home-page grid and footer shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSummary {
    /// Stable identifier, shared across languages.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Long-form service description for the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailedService {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub who_it_is_for: &'static str,
    pub how_we_provide: &'static str,
    pub reassurance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Ordered group of question/answer pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqSection {
    pub title: &'static str,
    pub items: &'static [FaqItem],
}

/// One section of an article body; the bullet list may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBlock {
    pub heading: &'static str,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    /// Stable per-language identifier used for article navigation.
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Exact-match key against the language's category list.
    pub category: &'static str,
    pub read_time: &'static str,
    pub date: &'static str,
    pub intro: &'static str,
    pub blocks: &'static [ContentBlock],
}

/// The complete structured tree for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteContent {
    pub testimonials: &'static [Testimonial],
    pub compliance: &'static [TrustIndicator],
    pub values: &'static [ValueItem],
    pub quality_safety: &'static [TrustIndicator],
    pub areas: &'static [&'static str],
    pub care_options: &'static [&'static str],
    pub service_summaries: &'static [ServiceSummary],
    pub detailed_services: &'static [DetailedService],
    pub faq_sections: &'static [FaqSection],
    pub blog_categories: &'static [&'static str],
    pub blog_posts: &'static [BlogPost],
}

impl SiteContent {
    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|post| post.slug == slug)
    }

    /// Exact-match category filter; `None` means "show all".
    pub fn posts_in_category(&self, category: Option<&str>) -> Vec<&BlogPost> {
        match category {
            None => self.blog_posts.iter().collect(),
            Some(wanted) => self
                .blog_posts
                .iter()
                .filter(|post| post.category == wanted)
                .collect(),
        }
    }
}

/// Total lookup: both supported languages resolve to a complete tree. A
/// language missing here would be a configuration error, and the compiler
/// enforces the match is exhaustive.
pub fn for_language(lang: Language) -> &'static SiteContent {
    match lang {
        Language::En => &en::CONTENT,
        Language::Pl => &pl::CONTENT,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    const LANGUAGES: [Language; 2] = [Language::En, Language::Pl];

    fn ids(services: &[ServiceSummary]) -> BTreeSet<&'static str> {
        services.iter().map(|s| s.id).collect()
    }

    #[test]
    fn every_language_resolves_to_a_populated_tree() {
        for lang in LANGUAGES {
            let content = for_language(lang);
            assert!(!content.testimonials.is_empty());
            assert!(!content.compliance.is_empty());
            assert!(!content.values.is_empty());
            assert!(!content.quality_safety.is_empty());
            assert!(!content.areas.is_empty());
            assert!(!content.care_options.is_empty());
            assert!(!content.service_summaries.is_empty());
            assert!(!content.detailed_services.is_empty());
            assert!(!content.faq_sections.is_empty());
            assert!(!content.blog_categories.is_empty());
            assert!(!content.blog_posts.is_empty());
        }
    }

    #[test]
    fn service_ids_match_across_languages() {
        let en = for_language(Language::En);
        let pl = for_language(Language::Pl);
        assert_eq!(ids(en.service_summaries), ids(pl.service_summaries));

        let en_detailed: BTreeSet<_> = en.detailed_services.iter().map(|s| s.id).collect();
        let pl_detailed: BTreeSet<_> = pl.detailed_services.iter().map(|s| s.id).collect();
        assert_eq!(en_detailed, pl_detailed);
    }

    #[test]
    fn detailed_services_are_a_subset_of_the_summaries() {
        for lang in LANGUAGES {
            let content = for_language(lang);
            let summary_ids = ids(content.service_summaries);
            for service in content.detailed_services {
                assert!(
                    summary_ids.contains(service.id),
                    "detailed service `{}` has no summary",
                    service.id
                );
            }
        }
    }

    #[test]
    fn parallel_collections_have_matching_shapes() {
        let en = for_language(Language::En);
        let pl = for_language(Language::Pl);
        assert_eq!(en.testimonials.len(), pl.testimonials.len());
        assert_eq!(en.compliance.len(), pl.compliance.len());
        assert_eq!(en.values.len(), pl.values.len());
        assert_eq!(en.quality_safety.len(), pl.quality_safety.len());
        assert_eq!(en.areas.len(), pl.areas.len());
        assert_eq!(en.care_options.len(), pl.care_options.len());
        assert_eq!(en.faq_sections.len(), pl.faq_sections.len());
        assert_eq!(en.blog_categories.len(), pl.blog_categories.len());
        assert_eq!(en.blog_posts.len(), pl.blog_posts.len());
    }

    #[test]
    fn faq_sections_are_never_empty() {
        for lang in LANGUAGES {
            for section in for_language(lang).faq_sections {
                assert!(
                    !section.items.is_empty(),
                    "empty FAQ section `{}`",
                    section.title
                );
            }
        }
    }

    #[test]
    fn post_slugs_are_unique_within_a_language() {
        for lang in LANGUAGES {
            let content = for_language(lang);
            let slugs: BTreeSet<_> = content.blog_posts.iter().map(|p| p.slug).collect();
            assert_eq!(slugs.len(), content.blog_posts.len());
        }
    }

    #[test]
    fn every_post_category_is_listed_for_its_language() {
        for lang in LANGUAGES {
            let content = for_language(lang);
            for post in content.blog_posts {
                assert!(
                    content.blog_categories.contains(&post.category),
                    "post `{}` uses unlisted category `{}`",
                    post.slug,
                    post.category
                );
            }
        }
    }

    #[test]
    fn post_lookup_resolves_only_known_slugs() {
        let en = for_language(Language::En);
        let known = en.blog_posts[0].slug;
        assert!(en.post_by_slug(known).is_some());
        assert!(en.post_by_slug("no-such-article").is_none());
    }

    // Slugs are per-language; an English slug must miss in the Polish
    // collection so the article view falls back to the blog listing after
    // a language switch.
    #[test]
    fn slugs_do_not_leak_across_languages() {
        let en = for_language(Language::En);
        let pl = for_language(Language::Pl);
        for post in en.blog_posts {
            assert!(pl.post_by_slug(post.slug).is_none());
        }
    }

    #[test]
    fn category_filter_returns_exact_matches_only() {
        for lang in LANGUAGES {
            let content = for_language(lang);
            let category = content.blog_posts[0].category;

            let filtered = content.posts_in_category(Some(category));
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|post| post.category == category));

            let expected = content
                .blog_posts
                .iter()
                .filter(|post| post.category == category)
                .count();
            assert_eq!(filtered.len(), expected);
        }
    }

    #[test]
    fn clearing_the_filter_restores_the_full_list() {
        for lang in LANGUAGES {
            let content = for_language(lang);
            assert_eq!(
                content.posts_in_category(None).len(),
                content.blog_posts.len()
            );
        }
    }

    #[test]
    fn unknown_category_filters_everything_out() {
        let en = for_language(Language::En);
        assert!(en.posts_in_category(Some("Not A Category")).is_empty());
    }
}
