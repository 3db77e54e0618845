//! Source filtering utilities

use crate::config::Source;

/// Filter sources by specific names
pub fn filter_by_names(sources: &[Source], names: &[String]) -> Vec<Source> {
    if names.is_empty() {
        return sources.to_vec();
    }

    sources
        .iter()
        .filter(|source| names.contains(&source.name))
        .cloned()
        .collect()
}

/// Filter sources by names, required tags (AND) and excluded tags (OR)
pub fn filter_sources(
    sources: &[Source],
    include_tags: &[String],
    exclude_tags: &[String],
    names: Option<&[String]>,
) -> Vec<Source> {
    let base = match names {
        Some(names) => filter_by_names(sources, names),
        None => sources.to_vec(),
    };

    base.into_iter()
        .filter(|source| {
            let included =
                include_tags.is_empty() || include_tags.iter().all(|tag| source.has_tag(tag));
            let excluded = exclude_tags.iter().any(|tag| source.has_tag(tag));
            included && !excluded
        })
        .collect()
}
