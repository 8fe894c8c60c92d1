// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Pagination cursor extracted from the `Link` response header.
///
/// GitHub paginates list endpoints with headers shaped like
/// `<https://api.github.com/user/1/events?page=2>; rel="next", <...>;
/// rel="last"`. Only the relation names and their URLs are kept; the cursor
/// has no meaning beyond the page it was read from.
use indexmap::IndexMap;

/// Relation used to continue pagination.
pub const NEXT_RELATION: &str = "next";

/// Mapping from relation name to absolute URL.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct LinkRelations
{
    relations: IndexMap<String, String,>,
}

impl LinkRelations
{
    /// Returns the URL registered for `relation`.
    pub fn get(&self, relation: &str,) -> Option<&str,>
    {
        self.relations.get(relation,).map(String::as_str,)
    }

    /// Returns the URL of the following page, if any.
    ///
    /// Its absence is what ends a pagination run.
    pub fn next(&self,) -> Option<&str,>
    {
        self.get(NEXT_RELATION,)
    }

    /// Number of relations parsed from the header.
    pub fn len(&self,) -> usize
    {
        self.relations.len()
    }

    /// Whether the header carried no usable relation.
    pub fn is_empty(&self,) -> bool
    {
        self.relations.is_empty()
    }

    /// Iterates relations in header order.
    pub fn iter(&self,) -> impl Iterator<Item = (&str, &str,),>
    {
        self.relations.iter().map(|(rel, url,)| (rel.as_str(), url.as_str(),),)
    }
}

/// Parses a `Link` header value into its relations.
///
/// Entries without a bracketed URL or without a `rel` parameter are skipped.
/// A `rel` listing several space-separated names registers the URL under each
/// of them. When a relation repeats, the last entry wins.
///
/// # Example
///
/// ```
/// use gh_activity::parse_link_header;
///
/// let links = parse_link_header(
///     r#"<https://api.github.com/user/1/events?page=2>; rel="next", <https://api.github.com/user/1/events?page=10>; rel="last""#,
/// );
/// assert_eq!(links.next(), Some("https://api.github.com/user/1/events?page=2"));
/// assert_eq!(links.get("last"), Some("https://api.github.com/user/1/events?page=10"));
/// ```
pub fn parse_link_header(header: &str,) -> LinkRelations
{
    let mut links = LinkRelations::default();

    for entry in header.split(',',) {
        let mut url = None;
        let mut rel = None;

        for segment in entry.split(';',) {
            let segment = segment.trim();
            if let Some(inner,) = segment.strip_prefix('<',).and_then(|s| s.strip_suffix('>',),) {
                url = Some(inner.trim(),);
            } else if let Some((name, value,),) = segment.split_once('=',)
                && name.trim().eq_ignore_ascii_case("rel",)
            {
                rel = Some(value.trim().trim_matches('"',),);
            }
        }

        let (Some(url,), Some(rel,),) = (url, rel,) else {
            continue;
        };
        if url.is_empty() {
            continue;
        }

        for name in rel.split_whitespace() {
            links.relations.insert(name.to_owned(), url.to_owned(),);
        }
    }

    links
}
