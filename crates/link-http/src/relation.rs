//! Lookup of parsed links by relation type.

use std::collections::HashMap;

use micro_link::Link;

/// Links keyed by the value of their `rel` parameter.
///
/// Links without a `rel` parameter are left out. When several links share a
/// relation, the one that appears last in the header wins. The `rel` value is
/// used as written, it is neither lowercased nor split on whitespace.
#[derive(Debug, Clone, Default)]
pub struct RelationMap<'a> {
    inner: HashMap<&'a str, &'a Link>,
}

impl<'a> RelationMap<'a> {
    pub fn from_links(links: &'a [Link]) -> Self {
        links.iter().collect()
    }

    /// Returns the link with the given relation.
    pub fn get(&self, rel: &str) -> Option<&'a Link> {
        self.inner.get(rel).copied()
    }

    /// Returns the target URI of the link with the given relation.
    pub fn uri(&self, rel: &str) -> Option<&'a str> {
        self.get(rel).map(Link::uri)
    }

    pub fn contains(&self, rel: &str) -> bool {
        self.inner.contains_key(rel)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over `(rel, link)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Link)> + '_ {
        self.inner.iter().map(|(rel, link)| (*rel, *link))
    }
}

impl<'a> FromIterator<&'a Link> for RelationMap<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Link>>(links: I) -> Self {
        let inner = links.into_iter().filter_map(|link| link.rel().map(|rel| (rel, link))).collect();
        Self { inner }
    }
}

/// Extension methods for a list of parsed links.
pub trait LinksExt {
    /// Builds a [`RelationMap`] over these links.
    fn by_rel(&self) -> RelationMap<'_>;
}

impl LinksExt for [Link] {
    fn by_rel(&self) -> RelationMap<'_> {
        RelationMap::from_links(self)
    }
}

#[cfg(test)]
mod tests {
    use micro_link::Param;

    use super::*;

    fn link(uri: &str, params: &[(&str, Param)]) -> Link {
        Link::new(uri, params.iter().map(|(name, param)| ((*name).to_string(), param.clone())).collect())
    }

    #[test]
    fn lookup_by_rel() {
        let links = vec![
            link("some uri", &[("rel", Param::with_charset("some relation", "doesn't matter", "this either"))]),
            link("another uri", &[("rel", Param::new("another relation"))]),
        ];

        let relations = links.by_rel();

        assert_eq!(relations.len(), 2);
        assert_eq!(relations.uri("some relation"), Some("some uri"));
        assert_eq!(relations.uri("another relation"), Some("another uri"));
        assert_eq!(relations.get("another relation"), Some(&links[1]));
        assert!(relations.uri("missing").is_none());
    }

    #[test]
    fn links_without_rel_are_skipped() {
        let links = vec![link("/styles.css", &[("type", Param::new("text/css"))]), link("/next", &[("rel", Param::new("next"))])];

        let relations = RelationMap::from_links(&links);

        assert_eq!(relations.len(), 1);
        assert!(relations.contains("next"));
        assert!(!relations.contains(""));
    }

    #[test]
    fn later_link_wins() {
        let links = micro_link::parse(r#"</first>; rel="next", </second>; rel="next""#);

        let relations = links.by_rel();

        assert_eq!(relations.len(), 1);
        assert_eq!(relations.uri("next"), Some("/second"));
    }

    #[test]
    fn from_parsed_header() {
        let links = micro_link::parse(
            r#"<https://api.example.com/items?page=2>; rel="next", <https://api.example.com/items?page=9>; rel="last""#,
        );

        let relations: RelationMap<'_> = links.iter().collect();
        let mut rels: Vec<_> = relations.iter().map(|(rel, _)| rel).collect();
        rels.sort_unstable();

        assert_eq!(rels, ["last", "next"]);
        assert_eq!(relations.uri("last"), Some("https://api.example.com/items?page=9"));
    }

    #[test]
    fn empty() {
        let relations = RelationMap::default();
        assert!(relations.is_empty());
        assert!(relations.get("next").is_none());
    }
}
