//! Sample contacts for a fresh store, so there is something to search.

use crate::core::contact::Contact;

const SAMPLE: &[(&str, &str, &str, bool)] = &[
    ("Ada", "Quill", "@adaquill", true),
    ("Bram", "Okafor", "@bramo", false),
    ("Celia", "Marsh", "@celiamarsh", false),
    ("Dmitri", "Vale", "@dvale", false),
    ("Esme", "Thornton", "@esme_t", true),
    ("Farid", "Nakamura", "@faridn", false),
    ("Greta", "Lindqvist", "@gretal", false),
    ("Hugo", "Ashby", "@hugoashby", false),
    ("Ines", "Carvalho", "@inesc", false),
    ("Jonah", "Whitlock", "@jwhitlock", false),
    ("Kira", "Anand", "@kiraanand", false),
    ("Lorenzo", "Bellweather", "@lorenzob", false),
];

/// Sample contacts with stable ids (`seed-0`, `seed-1`, ...).
pub fn sample_contacts(now_millis: i64) -> Vec<Contact> {
    SAMPLE
        .iter()
        .enumerate()
        .map(|(i, (first, last, twitter, favorite))| Contact {
            id: format!("seed-{i}"),
            first: Some(first.to_string()),
            last: Some(last.to_string()),
            twitter: Some(twitter.to_string()),
            favorite: *favorite,
            created_at: now_millis + i as i64,
            ..Default::default()
        })
        .collect()
}
